//! Connection settings and path defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;


/// Default database host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default database port.
pub const DEFAULT_PORT: u16 = 3306;

/// Default database name.
pub const DEFAULT_DATABASE: &str = "sakila";

/// Rows printed by the compare command unless overridden.
pub const DEFAULT_TOP_ROWS: usize = 20;


/// Connection parameters, validated once at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    user: String,
    password: String,
    host: String,
    port: u16,
    database: String,
}


impl DbConfig {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port,
            database: database.into(),
        };

        if config.user.trim().is_empty() {
            return Err(ConfigError::MissingField("user"));
        }
        if config.host.trim().is_empty() {
            return Err(ConfigError::MissingField("host"));
        }
        if config.database.trim().is_empty() {
            return Err(ConfigError::MissingField("database"));
        }
        if config.port == 0 {
            return Err(ConfigError::InvalidPort(config.port));
        }

        Ok(config)
    }

    /// Connection URL with the user URL-encoded and the password masked.
    pub fn redacted_url(&self) -> String {
        format!(
            "sqlite://{}:***@{}:{}/{}",
            urlencoding::encode(&self.user),
            self.host,
            self.port,
            self.database
        )
    }

    /// Location of the database file backing this connection.
    pub fn database_path(&self) -> PathBuf {
        resolve_database_path(&self.database)
    }
}


impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}


/// Get the directory holding named databases.
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rental-delta")
}


/// Map a database name to a file.
///
/// Anything that looks like a path is used as-is; a bare name such as
/// `sakila` resolves to `<data dir>/rental-delta/sakila.db`.
pub fn resolve_database_path(database: &str) -> PathBuf {
    let path = Path::new(database);
    let looks_like_path = path.components().count() > 1
        || path.extension().is_some()
        || path.exists();

    if looks_like_path {
        path.to_path_buf()
    } else {
        get_data_dir().join(format!("{database}.db"))
    }
}
