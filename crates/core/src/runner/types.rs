//! Types for the run loop.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::organize::{OrganizeSummary, RunOptions};
use crate::scope::Scope;

/// What each target directory gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Organize into key folders (optionally flattening QR folders first).
    #[default]
    Organize,
    /// Only flatten QR folders.
    QrOnly,
}

/// A complete run over one folder tree.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Root folder.
    pub root: PathBuf,
    /// Directories below the root to process.
    pub scope: Scope,
    pub mode: RunMode,
    pub options: RunOptions,
}

impl RunRequest {
    /// Creates a request organizing only `root`, moving files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scope: Scope::default(),
            mode: RunMode::default(),
            options: RunOptions::default(),
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }
}

/// Totals across every directory of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Directories yielded by the scope.
    pub directories: usize,
    /// Directories whose processing stopped with an error.
    pub failed_directories: usize,
    /// Photos moved/copied into key folders.
    pub relocated: usize,
    /// QR files moved/copied to the scan root.
    pub qr_relocated: usize,
    pub already_placed: usize,
    pub missing_key: usize,
}

impl RunReport {
    pub(crate) fn add_summary(&mut self, summary: &OrganizeSummary) {
        self.relocated += summary.relocated;
        self.already_placed += summary.already_placed;
        self.missing_key += summary.missing_key;
    }

    /// Whether every directory completed.
    pub fn is_success(&self) -> bool {
        self.failed_directories == 0
    }
}
