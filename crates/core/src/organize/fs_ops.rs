//! File relocation primitives.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use super::error::{OrganizeError, Result};
use super::types::Action;

/// Moves or copies `source` to `destination`.
///
/// The destination's parent must already exist. Moves use a plain rename and
/// fall back to copy + delete when source and destination live on different
/// filesystems. Copies keep permissions and access/modification times.
pub fn relocate(source: &Path, destination: &Path, action: Action) -> Result<()> {
    let result = match action {
        Action::Copy => copy_with_times(source, destination),
        Action::Move => move_file(source, destination),
    };
    result.map_err(|e| {
        OrganizeError::relocate_failed(source.to_path_buf(), destination.to_path_buf(), e)
    })
}

fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    if try_rename(source, destination)? {
        return Ok(());
    }
    tracing::debug!(
        "Rename across filesystems, copying {} instead",
        source.display()
    );
    copy_with_times(source, destination)?;
    fs::remove_file(source)
}

/// Attempts a rename, returning `Ok(false)` when it would cross devices.
fn try_rename(source: &Path, destination: &Path) -> io::Result<bool> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(true),
        Err(e) => {
            // EXDEV is 18 on Linux and macOS
            if e.kind() == io::ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) {
                Ok(false)
            } else {
                Err(e)
            }
        }
    }
}

/// Copies contents and permissions, then restores the source's timestamps.
///
/// A copy whose timestamps cannot be set is removed again so no stray file is
/// left behind.
fn copy_with_times(source: &Path, destination: &Path) -> io::Result<()> {
    fs::copy(source, destination)?;
    if let Err(e) = copy_times(source, destination) {
        let _ = fs::remove_file(destination);
        return Err(e);
    }
    Ok(())
}

fn copy_times(source: &Path, destination: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_times(destination)?.set_times(times)
}

/// The copy inherits the source's permission bits, which may be read-only.
/// `futimens` only needs ownership, so a read handle is enough on unix.
#[cfg(unix)]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::options().write(true).open(path)
}
