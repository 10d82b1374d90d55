use std::ffi::OsString;
use super::scan::VideoFile;

/// Consecutive segment files that end up merged into one output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    /// 1-based, contiguous across a run
    pub number: usize,

    /// File names in scan order, never empty
    pub files: Vec<OsString>,
}

/// Split files into groups
///
/// Every file is added to the current group, a file smaller than `threshold` closes it. Files at
/// or above the threshold keep the group open so they take all following files with them up to
/// and including the next small one. Group size is not summed up, only single files are compared.
pub fn group_files(files: &[VideoFile], threshold: u64) -> Vec<FileGroup> {
    let mut groups: Vec<FileGroup> = vec![];
    let mut current: Vec<OsString> = vec![];

    for file in files {
        current.push(file.name.clone());

        if file.size < threshold {
            groups.push(FileGroup {
                number: groups.len() + 1,
                files: std::mem::take(&mut current),
            });
        }
    }

    // list ended on a large file
    if !current.is_empty() {
        groups.push(FileGroup {
            number: groups.len() + 1,
            files: current,
        });
    }

    groups
}
