pub mod config;
pub mod event;
pub mod key;
pub mod organize;
pub mod runner;
pub mod scope;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, RunDefaults, ServerConfig,
};
pub use event::{Event, EventSink};
pub use key::{extract_key, is_jpeg, qr_key, trailing_key};
pub use organize::{
    flatten_qr, organize, unique_destination, Action, OrganizeError, OrganizeSummary, Result,
    RunOptions,
};
pub use runner::{run, RunMode, RunReport, RunRequest};
pub use scope::{iter_target_dirs, Scope, TargetDirs};
