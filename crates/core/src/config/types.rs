use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::organize::RunOptions;
use crate::scope::Scope;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: RunDefaults,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Default run options shared by the command line and the web form
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunDefaults {
    /// Root folder; the current working directory when unset
    #[serde(default)]
    pub folder: Option<PathBuf>,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub copy: bool,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub extract_qr: bool,
}

impl RunDefaults {
    /// The configured folder, falling back to the current directory.
    pub fn resolved_folder(&self) -> PathBuf {
        self.folder
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            copy: self.copy,
            extract_qr: self.extract_qr,
        }
    }
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    5000
}
