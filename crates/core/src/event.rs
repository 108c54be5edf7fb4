//! Progress events emitted by the organizer.
//!
//! Core operations never print. Each action, skip, warning and summary is
//! pushed into an [`EventSink`] as a typed [`Event`]; front ends decide
//! whether to print the lines or render them into a page.

use std::fmt;
use std::path::PathBuf;

use crate::organize::{Action, OrganizeSummary};

/// A single line of run output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start of processing for one target directory.
    DirectoryHeader { path: PathBuf },
    /// A photo is (or would be, in dry-run) moved/copied into its key folder.
    Relocated {
        action: Action,
        file_name: String,
        /// Destination relative to the organized folder, e.g. `1234/a.jpg`.
        destination: String,
    },
    /// A photo without an IMGK/IMG_ key was left in place.
    MissingKey { file_name: String },
    /// A QR file is (or would be) relocated to the scan root.
    QrRelocated {
        action: Action,
        /// Source relative to the scan root.
        source: PathBuf,
        /// Destination relative to the scan root.
        destination: PathBuf,
        /// Key hint taken from the QR folder's parent name, if any.
        hint: Option<String>,
    },
    /// An emptied QR folder was removed.
    QrFolderRemoved { path: PathBuf },
    /// Non-fatal problem, e.g. a QR folder that could not be removed.
    Warning { message: String },
    /// A directory failed; the run continues with the next one.
    Error { message: String },
    /// Per-directory totals.
    Summary(OrganizeSummary),
    /// The scope yielded no directories.
    NothingToProcess,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::DirectoryHeader { path } => {
                write!(f, "\n=== Directory: {} ===", path.display())
            }
            Event::Relocated {
                action,
                file_name,
                destination,
            } => write!(f, "[{}] {} -> {}", action.tag(), file_name, destination),
            Event::MissingKey { file_name } => {
                write!(f, "[SKIP] no IMGK/IMG_ key found -> {}", file_name)
            }
            Event::QrRelocated {
                action,
                source,
                destination,
                ..
            } => write!(
                f,
                "[QR-{}] {} -> {}",
                action.tag(),
                source.display(),
                destination.display()
            ),
            Event::QrFolderRemoved { path } => write!(f, "[QR-RMDIR] {}", path.display()),
            Event::Warning { message } => write!(f, "[WARN] {}", message),
            Event::Error { message } => write!(f, "[ERROR] {}", message),
            Event::Summary(summary) => write!(
                f,
                "\n--- Done ---\nProcessed: {}\nSkipped (already in place): {}\nNo key found: {}",
                summary.relocated, summary.already_placed, summary.missing_key
            ),
            Event::NothingToProcess => write!(f, "No directories to process."),
        }
    }
}

/// Receiver for [`Event`]s.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

/// Renders events as newline-separated text.
pub fn render(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        out.push_str(&event.to_string());
        out.push('\n');
    }
    out
}
