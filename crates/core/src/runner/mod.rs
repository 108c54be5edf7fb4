//! The per-directory run loop shared by the command line and web front ends.
//!
//! Each directory yielded by the scope is processed to completion before the
//! next one starts: QR flattening first (when requested), then organizing. A
//! failing directory is reported as an [`Event::Error`] and the loop moves
//! on; nothing short of process termination stops a run.

mod types;

pub use types::{RunMode, RunReport, RunRequest};

use std::path::Path;

use crate::event::{Event, EventSink};
use crate::organize::{flatten_qr, organize, RunOptions};
use crate::scope::iter_target_dirs;

/// Runs `request`, streaming events into `sink`.
pub fn run(request: &RunRequest, sink: &mut dyn EventSink) -> RunReport {
    let mut report = RunReport::default();

    let dirs = match iter_target_dirs(&request.root, request.scope) {
        Ok(dirs) => dirs,
        Err(e) => {
            tracing::error!("Cannot enumerate {}: {}", request.root.display(), e);
            sink.emit(Event::Error {
                message: e.to_string(),
            });
            sink.emit(Event::NothingToProcess);
            return report;
        }
    };

    for dir in dirs {
        report.directories += 1;
        sink.emit(Event::DirectoryHeader { path: dir.clone() });

        let flatten = request.mode == RunMode::QrOnly || request.options.extract_qr;
        if flatten {
            report.qr_relocated += flatten_step(&dir, &request.options, sink);
        }
        if request.mode == RunMode::QrOnly {
            continue;
        }

        // QR folders were already handled above
        let options = request.options.with_extract_qr(false);
        match organize(&dir, &options, sink) {
            Ok(summary) => report.add_summary(&summary),
            Err(e) => {
                tracing::warn!("Organizing {} failed: {}", dir.display(), e);
                report.failed_directories += 1;
                sink.emit(Event::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    if report.directories == 0 {
        sink.emit(Event::NothingToProcess);
    }

    report
}

/// Flattens QR folders below `dir`; failures become warnings.
fn flatten_step(dir: &Path, options: &RunOptions, sink: &mut dyn EventSink) -> usize {
    match flatten_qr(dir, options, sink) {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("QR flattening failed in {}: {}", dir.display(), e);
            sink.emit(Event::Warning {
                message: format!("QR: {}", e),
            });
            0
        }
    }
}
