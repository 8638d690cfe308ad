//! Application-facing configuration.

use super::{ConfigError, ConfigPaths, Environment, RawConfig};

/// SSL mode enforced on every database connection.
const SSL_MODE_REQUIRE: &str = "require";

/// Configuration passed to the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the application listens on.
    pub port: u16,
    /// Database connection settings.
    pub db: DatabaseConfig,
}

/// Database connection settings.
///
/// TLS is always on; the document only supplies the certificate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Driver scheme, e.g. "postgres".
    pub client: String,
    /// Login role.
    pub user: String,
    /// Server hostname or address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub db_name: String,

    /// Always `true`.
    pub ssl: bool,
    /// Always "require".
    pub ssl_mode: String,
    /// Client certificate file.
    pub ssl_cert: String,
    /// Client private key file.
    pub ssl_key: String,
    /// CA certificate used to verify the server.
    pub root_cert: String,
}

impl AppConfig {
    /// Loads and projects the configuration for `env`.
    pub fn load(paths: &ConfigPaths, env: Environment) -> Result<Self, ConfigError> {
        let raw = RawConfig::load(paths, env)?;
        Ok(Self::from_raw(&raw))
    }

    /// Builds the application config from the decoded document.
    pub fn from_raw(raw: &RawConfig) -> Self {
        let db = &raw.database;
        Self {
            port: raw.application.port,
            db: DatabaseConfig {
                client: db.client.clone(),
                user: db.user.clone(),
                host: db.host.clone(),
                port: db.port,
                db_name: db.name.clone(),

                ssl: true,
                ssl_mode: SSL_MODE_REQUIRE.to_string(),
                ssl_cert: db.ssl_cert_path.clone(),
                ssl_key: db.ssl_key_path.clone(),
                root_cert: db.root_cert_path.clone(),
            },
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        Self::from_raw(&raw)
    }
}
