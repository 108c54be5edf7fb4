use clap::Parser;
use std::path::PathBuf;

use photokey_core::{Config, RunMode, RunOptions, RunRequest, Scope};

#[derive(Debug, Parser)]
#[command(name = "photokey")]
#[command(about = "Sort JPG/JPEG photos into folders named after the 4 digits following IMGK or IMG_")]
#[command(version)]
pub struct Cli {
    /// Root folder to organize (defaults to the configured folder, then the current directory)
    pub folder: Option<PathBuf>,

    /// Only show what would be done, without moving or copying anything
    #[arg(long, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Really move or copy files, even when the config enables dry run
    #[arg(long, overrides_with = "dry_run")]
    pub no_dry_run: bool,

    /// Copy files instead of moving them
    #[arg(long, overrides_with = "no_copy")]
    pub copy: bool,

    /// Move files, even when the config enables copying
    #[arg(long, overrides_with = "copy")]
    pub no_copy: bool,

    /// Which folders to organize: current (root only), subdirs (first-level children), recursive (root and all descendants)
    #[arg(long)]
    pub scope: Option<Scope>,

    /// First pull QR_*.jpg files out of nested QR folders into each organized folder; empty QR folders are removed when moving
    #[arg(long, overrides_with = "no_extract_qr")]
    pub extract_qr: bool,

    /// Skip the QR pre-pass, even when the config enables it
    #[arg(long, overrides_with = "extract_qr")]
    pub no_extract_qr: bool,

    /// Only pull QR files out of QR folders, without organizing
    #[arg(long)]
    pub qr_only: bool,

    /// Configuration file (TOML)
    #[arg(short, long, env = "PHOTOKEY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Combines flags with configured defaults; a flag (or its `--no-` form)
    /// always wins.
    pub fn to_request(&self, config: &Config) -> RunRequest {
        let defaults = &config.defaults;
        let folder = self
            .folder
            .clone()
            .unwrap_or_else(|| defaults.resolved_folder());
        let options = RunOptions {
            dry_run: toggle(self.dry_run, self.no_dry_run, defaults.dry_run),
            copy: toggle(self.copy, self.no_copy, defaults.copy),
            extract_qr: toggle(self.extract_qr, self.no_extract_qr, defaults.extract_qr),
        };
        let mode = if self.qr_only {
            RunMode::QrOnly
        } else {
            RunMode::Organize
        };

        RunRequest::new(folder)
            .with_scope(self.scope.unwrap_or(defaults.scope))
            .with_mode(mode)
            .with_options(options)
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}
