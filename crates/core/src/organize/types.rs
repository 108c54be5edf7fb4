//! Types for the organize module.

use serde::{Deserialize, Serialize};

/// What to do with a file once its destination is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Rename into place, removing the source.
    Move,
    /// Copy into place, keeping the source.
    Copy,
}

impl Action {
    /// Tag used in log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::Move => "MOVE",
            Action::Copy => "COPY",
        }
    }
}

/// Options shared by the organize and QR flattening passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Only report what would happen.
    pub dry_run: bool,
    /// Copy instead of move.
    pub copy: bool,
    /// Pull QR files out of nested `QR` folders before organizing.
    pub extract_qr: bool,
}

impl RunOptions {
    /// Enables dry-run mode.
    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Switches to copy mode.
    pub fn with_copy(mut self, enabled: bool) -> Self {
        self.copy = enabled;
        self
    }

    /// Enables the QR flattening pre-pass.
    pub fn with_extract_qr(mut self, enabled: bool) -> Self {
        self.extract_qr = enabled;
        self
    }

    pub fn action(&self) -> Action {
        if self.copy {
            Action::Copy
        } else {
            Action::Move
        }
    }
}

/// Totals for one organize pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeSummary {
    /// Files moved or copied (always 0 in dry-run).
    pub relocated: usize,
    /// Files already sitting in their key folder.
    pub already_placed: usize,
    /// JPEGs without an IMGK/IMG_ key.
    pub missing_key: usize,
}
