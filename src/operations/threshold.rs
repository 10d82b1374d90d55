use super::scan::VideoFile;

/// Threshold used for cameras that split recordings at around 2GB
pub const DEFAULT_THRESHOLD: u64 = 2_040_000_000;

/// Threshold used once a 4GB class segment shows up
pub const LARGE_THRESHOLD: u64 = 4_172_000_000;

/// Pick the grouping threshold for the whole run
///
/// A single file at or above `LARGE_THRESHOLD` anywhere in the list switches to it
pub fn select_threshold(files: &[VideoFile]) -> u64 {
    if files.iter().any(|x| x.size >= LARGE_THRESHOLD) {
        LARGE_THRESHOLD
    } else {
        DEFAULT_THRESHOLD
    }
}
