//! Connection settings, read once at startup from the environment.
//!
//! The four names are `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`. The
//! binary loads a `.env` file into the environment before reading them. The
//! embedded SQLite backend only needs `database`, which names the file; the
//! others are carried so the values are visible in logs and in `Debug` output.

use std::env;
use std::fmt;
use std::io;
use std::path::PathBuf;

use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".billing-app";
/// Extension appended when `database` is a bare name.
const DB_EXTENSION: &str = "sqlite";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PASSWORD: &str = "";
pub const DEFAULT_DATABASE: &str = "billing_app";

#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &redact(&self.password))
            .field("database", &self.database)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

impl StoreConfig {
    /// Read the process environment. Unset variables fall back to defaults; a
    /// variable that is set but empty is taken as-is.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, which keeps tests away from the
    /// global environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        Self {
            host: value("DB_HOST", DEFAULT_HOST),
            user: value("DB_USER", DEFAULT_USER),
            password: value("DB_PASSWORD", DEFAULT_PASSWORD),
            database: value("DB_NAME", DEFAULT_DATABASE),
        }
    }

    /// Resolve the SQLite file this config points at. A `database` that
    /// already looks like a path is used verbatim; a bare name lands in the
    /// application data directory. A blank `database` means the default name.
    pub fn database_path(&self) -> io::Result<PathBuf> {
        let database = self.database.trim();
        if database.is_empty() {
            return Ok(data_dir()?.join(format!("{DEFAULT_DATABASE}.{DB_EXTENSION}")));
        }
        if looks_like_path(database) {
            return Ok(PathBuf::from(database));
        }
        Ok(data_dir()?.join(format!("{database}.{DB_EXTENSION}")))
    }

    /// Directory holding the database file; the log file goes here too.
    pub fn log_dir(&self) -> io::Result<PathBuf> {
        let path = self.database_path()?;
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
            _ => Ok(PathBuf::from(".")),
        }
    }
}

fn looks_like_path(database: &str) -> bool {
    database.contains(std::path::MAIN_SEPARATOR)
        || database.contains('/')
        || database.ends_with(".sqlite")
        || database.ends_with(".db")
}

/// Resolve the application data directory inside the user's home.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
