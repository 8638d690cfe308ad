//! On-disk YAML document and the environment-to-file mapping.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{ConfigError, Environment, nullable};

const DEV_PATH: &str = "config.dev.yml";
const STAGING_PATH: &str = "config.staging.yml";
const PROD_PATH: &str = "config.yml";

/// Maps each environment to the configuration file it loads.
///
/// Built once at startup and passed by reference to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    development: PathBuf,
    staging: PathBuf,
    production: PathBuf,
}

impl ConfigPaths {
    /// Default file names joined onto `base`.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            development: base.join(DEV_PATH),
            staging: base.join(STAGING_PATH),
            production: base.join(PROD_PATH),
        }
    }

    /// Path of the file for `env`.
    pub fn path_for(&self, env: Environment) -> &Path {
        match env {
            Environment::Development => &self.development,
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }
}

/// Paths relative to the working directory.
impl Default for ConfigPaths {
    fn default() -> Self {
        Self::in_dir("")
    }
}

/// Mirror of the YAML configuration file.
///
/// Missing keys and null values decode to empty strings and zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `application` section.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub application: RawApplication,
    /// `database` section.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub database: RawDatabase,
}

/// `application` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawApplication {
    /// Port the application listens on.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub port: u16,
}

/// `database` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawDatabase {
    /// Login role.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub user: String,
    /// Login password. Not carried into [`AppConfig`](super::AppConfig).
    #[serde(deserialize_with = "nullable::deserialize")]
    pub password: String,

    /// Database name.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
    /// Server hostname or address.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub host: String,
    /// Server port.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub port: u16,
    /// Driver scheme, e.g. "postgres".
    #[serde(deserialize_with = "nullable::deserialize")]
    pub client: String,

    /// Client certificate file.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub ssl_cert_path: String,
    /// Client private key file.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub ssl_key_path: String,
    /// CA certificate used to verify the server.
    #[serde(deserialize_with = "nullable::deserialize")]
    pub root_cert_path: String,
}

impl RawConfig {
    /// Loads the file mapped to `env`.
    pub fn load(paths: &ConfigPaths, env: Environment) -> Result<Self, ConfigError> {
        Self::from_path(paths.path_for(env))
    }

    /// Decodes the YAML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading config file");

        let read_error = |source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let content = io::read_to_string(file).map_err(read_error)?;

        if !has_document(&content) {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Whether `content` holds anything besides blank lines and comments.
fn has_document(content: &str) -> bool {
    content.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'))
}
