use std::{ffi::OsString, fs, path::Path};
use anyhow::{Context, Result};
use crate::AutojoinError;

/// Extensions of camcorder segment files, compared ignoring ascii case
pub const SEGMENT_EXTENSIONS: &[&str] = &["mts", "ts"];

/// Segment file found in the scanned folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// File name relative to the scanned folder, kept as the raw name on disk
    pub name: OsString,

    /// Size in bytes as reported by the filesystem
    pub size: u64,
}

impl VideoFile {
    pub fn new(name: impl Into<OsString>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

fn is_segment_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SEGMENT_EXTENSIONS.iter().any(|x| ext.eq_ignore_ascii_case(x)))
}

/// List segment files in `dir` sorted by name
///
/// Fails with `AutojoinError::NoVideoFiles` if there are none
pub fn scan_video_files(dir: &Path) -> Result<Vec<VideoFile>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Error while listing {:?}", dir))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Error while listing {:?}", dir))?;

    // read_dir order is whatever the filesystem gives, ordinal sort on the raw name
    entries.sort_by_key(|entry| entry.file_name());

    let mut files: Vec<VideoFile> = vec![];
    for entry in entries {
        let path = entry.path();
        if !is_segment_file(&path) {
            continue;
        }

        // follows symlinks, so linked segments are picked up with their real size
        let metadata = match fs::metadata(&path) {
            Ok(x) => x,
            Err(err) => {
                log::warn!("Skipping {:?}, could not read its size: {}", path, err);
                continue;
            }
        };

        if !metadata.is_file() {
            log::debug!("Skipping {:?}, not a regular file", path);
            continue;
        }

        files.push(VideoFile::new(entry.file_name(), metadata.len()));
    }

    if files.is_empty() {
        return Err(AutojoinError::NoVideoFiles(dir.to_path_buf()).into());
    }

    log::info!("Found {} segment files in {:?}", files.len(), dir);

    Ok(files)
}
