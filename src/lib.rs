mod error;
mod util;
mod operations;
mod runner;

pub use error::AutojoinError;

pub use operations::scan::{scan_video_files, VideoFile, SEGMENT_EXTENSIONS};
pub use operations::threshold::{select_threshold, DEFAULT_THRESHOLD, LARGE_THRESHOLD};
pub use operations::group::{group_files, FileGroup};
pub use operations::concat::{
    delete_manifests, manifest_contents, manifest_name, output_name, GroupOutcome, MergeStatus,
    Merger, FFMPEG_ENV,
};
pub use operations::folder::check_folder;
pub use runner::{RunReport, Runner};
