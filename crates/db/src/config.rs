use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

/// The service always talks to MySQL on its standard port.
pub const MYSQL_PORT: u16 = 3306;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Database connection settings.
///
/// Built from discrete values rather than a URL so credentials never need
/// percent-encoding.
#[derive(Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load settings from the process environment.
    ///
    /// | Env Var              | Required | Default |
    /// |----------------------|----------|---------|
    /// | `USER_DB`            | yes      |         |
    /// | `PASSWORD`           | yes      |         |
    /// | `HOST_DB`            | yes      |         |
    /// | `NAME_DB`            | yes      |         |
    /// | `DB_MAX_CONNECTIONS` | no       | `10`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "DB_MAX_CONNECTIONS",
                    value: raw,
                })?,
        };

        Ok(Self {
            user: required("USER_DB")?,
            password: required("PASSWORD")?,
            host: required("HOST_DB")?,
            database: required("NAME_DB")?,
            max_connections,
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(MYSQL_PORT)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
