use std::path::Path;
use anyhow::Result;
use crate::AutojoinError;

/// Make sure `path` is an existing directory, prints where the files will be looked for
pub fn check_folder(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(AutojoinError::InvalidFolder(path.to_path_buf()).into());
    }

    println!("MTS files will be checked at '{}'", path.display());

    Ok(())
}
