pub mod extensions;

use std::path::{Component, Path, PathBuf};
use anyhow::{Context, Result};

/// Make `path` absolute against the current directory, `/` if no path was given
///
/// `.` and `..` are folded textually, symlinks are not resolved and the path does not need to exist
pub fn expand_path(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.unwrap_or(Path::new("/"));

    let absolute = std::path::absolute(path)
        .with_context(|| format!("Could not make {:?} absolute", path))?;

    Ok(fold_dots(&absolute))
}

fn fold_dots(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            // pop on root is a no-op so `/..` stays `/`
            Component::ParentDir => { folded.pop(); },
            x => folded.push(x),
        }
    }

    folded
}
