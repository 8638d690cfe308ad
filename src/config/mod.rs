//! Configuration loading for application startup.
//!
//! The pipeline runs once per process: command-line arguments resolve an
//! [`Environment`], [`ConfigPaths`] maps it to a YAML file, the file decodes
//! into a [`RawConfig`], and [`AppConfig::from_raw`] projects that into the
//! configuration the rest of the application reads.

mod app;
mod args;
mod env;
mod error;
mod nullable;
mod yaml;

pub use app::{AppConfig, DatabaseConfig};
pub use args::CmdArgs;
pub use env::Environment;
pub use error::ConfigError;
pub use yaml::{ConfigPaths, RawApplication, RawConfig, RawDatabase};
