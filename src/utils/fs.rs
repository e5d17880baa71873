use crate::error::{map_io_err, PatchError, PatchResult};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Overwrite an existing file with new content.
///
/// No parent directories are created and no backup is kept.
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing file: {}", path.display());

    fs::write(path, content).map_err(map_io_err(path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

/// Find files matching a glob pattern, in path order
pub fn find_files(pattern: &str) -> PatchResult<Vec<PathBuf>> {
    debug!("Finding files matching pattern: {}", pattern);

    let mut paths = Vec::new();
    for entry in glob(pattern).map_err(|e| PatchError::pattern_error(pattern, e.msg))? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!("Skipping unreadable entry {}: {}", e.path().display(), e),
        }
    }
    paths.sort();

    debug!("Found {} files matching pattern", paths.len());
    Ok(paths)
}
