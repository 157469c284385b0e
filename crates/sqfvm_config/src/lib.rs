//! Parsing and validation of `sqfvm.toml` diagnostics configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`DiagnosticsConfig`] whose [`LoggingConfig`] can be applied to the
//! per-severity gates of a [`Logger`](sqfvm_diagnostics::Logger).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
