use std::path::PathBuf;
use clap::Parser;

/// Merge camcorder MTS segments of a folder into bigger files using ffmpeg
///
/// Manifests and `video-output-<N>.mts` files are written to the current directory
#[derive(Parser, Debug)]
#[command(name = "mts-autojoin", author, version, about)]
pub struct Cli {
    /// Folder with the MTS/TS files (defaults to `/`)
    pub path: Option<PathBuf>,
}
