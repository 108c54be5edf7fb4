//! Organizer module for sorting photos into per-key folders.
//!
//! This module provides the filesystem side of photokey: picking a
//! collision-free destination, relocating files, flattening `QR` folders back
//! to the scan root, and organizing the direct JPEG children of a folder into
//! `<folder>/<key>/` subfolders.
//!
//! # Features
//!
//! - Never overwrites: colliding names get a ` (n)` suffix
//! - Move or copy, with a dry-run mode that touches nothing
//! - Idempotent: files already in their key folder are left alone
//! - Empty `QR` folders are cleaned up after a move
//!
//! # Example
//!
//! ```ignore
//! use photokey_core::{organize, Event, RunOptions};
//!
//! let mut events: Vec<Event> = Vec::new();
//! let summary = organize(Path::new("batch1"), &RunOptions::default(), &mut events)?;
//! println!("Moved {} files", summary.relocated);
//! ```

mod destination;
mod error;
mod fs_ops;
mod organizer;
mod qr;
mod types;

pub use destination::{unique_destination, MAX_COLLISION_SUFFIX};
pub use error::{OrganizeError, Result};
pub use fs_ops::relocate;
pub use organizer::organize;
pub use qr::{flatten_qr, QR_FOLDER_NAME};
pub use types::{Action, OrganizeSummary, RunOptions};
