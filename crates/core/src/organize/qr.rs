//! Flattening of nested `QR` folders into the scan root.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::destination::unique_destination;
use super::error::{OrganizeError, Result};
use super::fs_ops::relocate;
use super::types::RunOptions;
use crate::event::{Event, EventSink};
use crate::key::{is_jpeg, qr_key, trailing_key};

/// Exact (case-sensitive) name of the folders that get flattened.
pub const QR_FOLDER_NAME: &str = "QR";

/// Moves (or copies) every QR-named JPEG found in any `QR` folder below
/// `root` up to `root` itself.
///
/// Only files whose name matches the QR key pattern are touched, so an
/// unrelated `note.jpg` inside a `QR` folder stays where it is. In move mode a
/// `QR` folder left empty is removed; a failed removal is reported as a
/// warning and never aborts the pass. Copy mode and dry-run never remove
/// folders.
///
/// Returns the number of files actually relocated (0 in dry-run).
pub fn flatten_qr(root: &Path, options: &RunOptions, sink: &mut dyn EventSink) -> Result<usize> {
    let action = options.action();
    let mut relocated = 0;

    for qr_dir in find_qr_dirs(root) {
        let hint = qr_dir
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .and_then(trailing_key);

        for file in qr_files(&qr_dir)? {
            let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let dest = unique_destination(root, name)?;

            tracing::debug!(
                source = %file.display(),
                destination = %dest.display(),
                hint = hint.as_deref().unwrap_or("-"),
                "Flattening QR file"
            );
            sink.emit(Event::QrRelocated {
                action,
                source: relative_to(&file, root),
                destination: relative_to(&dest, root),
                hint: hint.clone(),
            });

            if !options.dry_run {
                relocate(&file, &dest, action)?;
                relocated += 1;
            }
        }

        if !options.dry_run && !options.copy {
            remove_if_empty(&qr_dir, root, sink);
        }
    }

    Ok(relocated)
}

/// All directories named exactly `QR` below `root`, in path order.
fn find_qr_dirs(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == QR_FOLDER_NAME)
        .map(|entry| entry.into_path())
        .collect()
}

/// Direct JPEG children of a `QR` folder whose name carries a QR key.
fn qr_files(qr_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(qr_dir).map_err(|e| OrganizeError::io(qr_dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| OrganizeError::io(qr_dir, e))?.path();
        if !path.is_file() || !is_jpeg(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping non UTF-8 file name {}", path.display());
            continue;
        };
        if qr_key(name).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn remove_if_empty(qr_dir: &Path, root: &Path, sink: &mut dyn EventSink) {
    let is_empty = match fs::read_dir(qr_dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) => {
            warn_removal(qr_dir, &e, sink);
            return;
        }
    };
    if !is_empty {
        return;
    }

    match fs::remove_dir(qr_dir) {
        Ok(()) => sink.emit(Event::QrFolderRemoved {
            path: relative_to(qr_dir, root),
        }),
        Err(e) => warn_removal(qr_dir, &e, sink),
    }
}

fn warn_removal(qr_dir: &Path, error: &std::io::Error, sink: &mut dyn EventSink) {
    tracing::warn!("Failed to remove QR folder {}: {}", qr_dir.display(), error);
    sink.emit(Event::Warning {
        message: format!("could not remove {}: {}", qr_dir.display(), error),
    });
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
