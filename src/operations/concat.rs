use std::{ffi::OsString, fs, path::{Path, PathBuf}};
use anyhow::{Context, Result};
use regex::Regex;
use crate::util::extensions::command_extensions::*;
use super::group::FileGroup;

/// Environment variable to override the program used for merging
pub const FFMPEG_ENV: &str = "AUTOJOIN_FFMPEG";

pub fn manifest_name(number: usize) -> String {
    format!("file-list-{}.meta", number)
}

pub fn output_name(number: usize) -> String {
    format!("video-output-{}.mts", number)
}

/// Raw bytes of the path so names in legacy encodings are written exactly as on disk
#[cfg(unix)]
fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

/// Contents of the concat demuxer list, one `file '<path>'` line per file
pub fn manifest_contents(dir: &Path, files: &[OsString]) -> Vec<u8> {
    let mut list: Vec<u8> = vec![];
    for file in files {
        list.extend_from_slice(b"file '");
        for byte in path_bytes(&dir.join(file)) {
            // quotes cannot be escaped inside quotes, close the quote and escape it outside
            if byte == b'\'' {
                list.extend_from_slice(br"'\''");
            } else {
                list.push(byte);
            }
        }
        list.extend_from_slice(b"'\n");
    }

    list
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeStatus {
    Merged,

    /// Merge command ran but failed, signals are reported as code 1
    Failed { code: u8 },

    /// Merge command never ran
    NotStarted { reason: String },
}

/// Result of merging a single group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutcome {
    pub number: usize,
    pub output: PathBuf,
    pub status: MergeStatus,
}

impl GroupOutcome {
    pub fn is_merged(&self) -> bool {
        self.status == MergeStatus::Merged
    }
}

/// Runs the concat command for groups, manifests and outputs are placed in `work_dir`
#[derive(Debug, Clone)]
pub struct Merger {
    pub program: OsString,
    pub work_dir: PathBuf,
}

impl Merger {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "ffmpeg".into(),
            work_dir: work_dir.into(),
        }
    }

    /// Same as `new` but the program can be overriden with `AUTOJOIN_FFMPEG`
    pub fn from_env(work_dir: impl Into<PathBuf>) -> Self {
        let merger = Self::new(work_dir);
        match std::env::var_os(FFMPEG_ENV) {
            Some(x) if !x.is_empty() => merger.with_program(x),
            _ => merger,
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, manifest: &str, output: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(&self.work_dir);
        cmd.args([
            // print only errors
            "-loglevel", "error",

            "-f", "concat",

            // paths in the list are absolute
            "-safe", "0",

            // use following file for the concat list
            "-i", manifest,

            // no re-encoding
            "-c", "copy",

            output,
        ]);

        cmd
    }

    /// Write manifest for the group and wait for the merge command to finish
    ///
    /// Failures are reported in the outcome instead of returned so the remaining groups can still
    /// be merged
    pub fn merge_group(&self, source_dir: &Path, group: &FileGroup) -> GroupOutcome {
        let manifest = manifest_name(group.number);
        let output = output_name(group.number);

        let status = self.write_and_run(source_dir, group, &manifest, &output);
        match &status {
            MergeStatus::Merged => log::info!("Group {} merged into {}", group.number, output),
            MergeStatus::Failed { code } => log::error!("Merging group {} failed with code {}", group.number, code),
            MergeStatus::NotStarted { reason } => log::error!("Could not merge group {}: {}", group.number, reason),
        }

        GroupOutcome {
            number: group.number,
            output: self.work_dir.join(output),
            status,
        }
    }

    fn write_and_run(&self, source_dir: &Path, group: &FileGroup, manifest: &str, output: &str) -> MergeStatus {
        let manifest_path = self.work_dir.join(manifest);
        if let Err(err) = fs::write(&manifest_path, manifest_contents(source_dir, &group.files)) {
            return MergeStatus::NotStarted {
                reason: format!("Error while writing to {:?}: {}", manifest_path, err),
            };
        }

        let mut cmd = self.command(manifest, output);
        log::debug!("Running {}", cmd.escaped_cmd());

        match cmd.status() {
            Ok(status) => match status.to_exitcode() {
                Ok(_) => MergeStatus::Merged,
                Err(code) => MergeStatus::Failed { code },
            },
            Err(err) => MergeStatus::NotStarted {
                reason: format!("Error executing {:?}: {}", self.program, err),
            },
        }
    }
}

/// Delete all `file-list-<N>.meta` files in `work_dir`, returns how many were deleted
///
/// Files that cannot be deleted are only logged
pub fn delete_manifests(work_dir: &Path) -> Result<usize> {
    let re = Regex::new(r"^file-list-[0-9]+\.meta$")
        .expect("Error building manifest name regex");

    let mut deleted = 0;
    for entry in fs::read_dir(work_dir).with_context(|| format!("Error while listing {:?}", work_dir))? {
        let entry = entry.with_context(|| format!("Error while listing {:?}", work_dir))?;

        let name = entry.file_name();
        if !re.is_match(&name.to_string_lossy()) {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(_) => deleted += 1,
            Err(err) => log::warn!("Could not delete manifest {:?}: {}", entry.path(), err),
        }
    }

    log::debug!("Deleted {} manifest files", deleted);

    Ok(deleted)
}
