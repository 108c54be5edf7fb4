//! Sorting of a folder's photos into per-key subfolders.

use std::fs;
use std::path::{Path, PathBuf};

use super::destination::unique_destination;
use super::error::{OrganizeError, Result};
use super::fs_ops::relocate;
use super::qr::flatten_qr;
use super::types::{OrganizeSummary, RunOptions};
use crate::event::{Event, EventSink};
use crate::key::{extract_key, is_jpeg};

/// Organizes the direct JPEG children of `folder` into `folder/<key>/`.
///
/// With `extract_qr` set, QR files are first flattened out of every `QR`
/// folder in the subtree. Files without a key are counted and left in place.
/// When `folder` is itself named after a file's key, that file already sits
/// in the right place and is not moved into a redundant `key/key` folder.
///
/// Emits one event per relocation or skip, followed by a summary.
pub fn organize(
    folder: &Path,
    options: &RunOptions,
    sink: &mut dyn EventSink,
) -> Result<OrganizeSummary> {
    if !folder.is_dir() {
        return Err(OrganizeError::InvalidFolder {
            path: folder.to_path_buf(),
        });
    }

    if options.extract_qr {
        flatten_qr(folder, options, sink)?;
    }

    let action = options.action();
    let folder_name = folder.file_name().and_then(|n| n.to_str());
    let mut summary = OrganizeSummary::default();

    for path in jpeg_children(folder)? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            let lossy = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::warn!("Cannot read key from non UTF-8 file name {}", path.display());
            summary.missing_key += 1;
            sink.emit(Event::MissingKey { file_name: lossy });
            continue;
        };

        let Some(key) = extract_key(file_name) else {
            summary.missing_key += 1;
            sink.emit(Event::MissingKey {
                file_name: file_name.to_string(),
            });
            continue;
        };

        let target_dir = if folder_name == Some(key.as_str()) {
            folder.to_path_buf()
        } else {
            folder.join(&key)
        };

        if path.parent() == Some(target_dir.as_path()) {
            summary.already_placed += 1;
            continue;
        }

        if !options.dry_run {
            fs::create_dir_all(&target_dir).map_err(|e| OrganizeError::io(&target_dir, e))?;
        }
        let dest = unique_destination(&target_dir, file_name)?;

        tracing::debug!(
            source = %path.display(),
            destination = %dest.display(),
            %key,
            dry_run = options.dry_run,
            "Relocating photo"
        );
        sink.emit(Event::Relocated {
            action,
            file_name: file_name.to_string(),
            destination: display_destination(&target_dir, &dest),
        });

        if !options.dry_run {
            relocate(&path, &dest, action)?;
            summary.relocated += 1;
        }
    }

    tracing::info!(
        folder = %folder.display(),
        relocated = summary.relocated,
        already_placed = summary.already_placed,
        missing_key = summary.missing_key,
        "Organized folder"
    );
    sink.emit(Event::Summary(summary));

    Ok(summary)
}

/// Regular JPEG files directly inside `folder`, sorted by name.
fn jpeg_children(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder).map_err(|e| OrganizeError::io(folder, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| OrganizeError::io(folder, e))?.path();
        if path.is_file() && is_jpeg(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `<target dir name>/<file name>`, as shown in log lines.
fn display_destination(target_dir: &Path, dest: &Path) -> String {
    let dir = target_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}/{}", dir, file)
}
