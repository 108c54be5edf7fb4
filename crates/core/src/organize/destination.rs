//! Collision-free destination naming.

use std::path::{Path, PathBuf};

use super::error::{OrganizeError, Result};

/// Highest ` (n)` suffix tried before giving up on a file name.
pub const MAX_COLLISION_SUFFIX: u32 = 100_000;

/// Returns a path inside `dest_dir` for `filename` that does not exist yet.
///
/// If `dest_dir/filename` is free it is returned as is. Otherwise ` (n)` is
/// inserted before the extension, with the lowest free `n >= 1`:
/// `IMGK5678.jpg` becomes `IMGK5678 (1).jpg`. Nothing is created on disk, so
/// two calls in a row return the same path.
pub fn unique_destination(dest_dir: &Path, filename: &str) -> Result<PathBuf> {
    unique_destination_within(dest_dir, filename, MAX_COLLISION_SUFFIX)
}

fn unique_destination_within(dest_dir: &Path, filename: &str, max_suffix: u32) -> Result<PathBuf> {
    let dest = dest_dir.join(filename);
    if !dest.exists() {
        return Ok(dest);
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    for n in 1..=max_suffix {
        let candidate = dest_dir.join(format!("{} ({}){}", stem, n, extension));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(OrganizeError::DestinationExhausted {
        dir: dest_dir.to_path_buf(),
        name: filename.to_string(),
        attempts: max_suffix,
    })
}
