#[allow(unused_imports)]
pub mod command_extensions {
    pub use std::process::Command;
    pub use super::{CommandExt, CommandOutputExt};
}

/// `Err` carries the code a failed merge reports in `MergeStatus::Failed`
pub type CommandExit = Result<(), u8>;

/// Reduce a finished child process to the code recorded for its group
pub trait CommandOutputExt {
    /// Zero is `Ok`, anything else is the code the run may exit with
    ///
    /// Killed by a signal or a code that does not fit into a byte both become 1
    fn to_exitcode(&self) -> CommandExit;
}

impl CommandOutputExt for std::process::ExitStatus {
    fn to_exitcode(&self) -> CommandExit {
        let code = self.code()
            .and_then(|x| u8::try_from(x).ok())
            .unwrap_or(1);

        match code {
            0 => Ok(()),
            x => Err(x),
        }
    }
}

pub trait CommandExt {
    /// Command line in readable and copy-able format, used for logging
    fn escaped_cmd(&self) -> String;
}

impl CommandExt for std::process::Command {
    fn escaped_cmd(&self) -> String {
        let mut line = format!("{:?}", self.get_program());
        for arg in self.get_args() {
            line.push(' ');
            line.push_str(&format!("{:?}", arg));
        }

        line
    }
}
