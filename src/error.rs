use std::path::PathBuf;
use thiserror::Error;

/// Preconditions that abort the run before anything is merged
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AutojoinError {
    #[error("You did not provide a valid folder")]
    InvalidFolder(PathBuf),

    #[error("No MTS files found at '{}'", .0.display())]
    NoVideoFiles(PathBuf),
}
