//! Application configuration.
//!
//! Loaded from `config/default.toml`, overridden by `config/local.toml` and
//! `ACME_DASHBOARD_*` environment variables. The database URL additionally
//! honors the plain `DATABASE_URL` process environment variable, and TLS is
//! enforced on Postgres connections.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Password hashing configuration.
    pub password: PasswordConfig,
}

/// HTTP server endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL. When unset (and `DATABASE_URL` is absent), the
    /// application falls back to in-memory stores.
    #[serde(default)]
    pub url: Option<String>,
    /// Maximum pool connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Password hashing (Argon2id) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub memory_cost: u32,
    /// Argon2 time cost (iterations).
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Argon2 parallelism factor.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    /// Output hash length in bytes.
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_memory_cost() -> u32 {
    19456 // OWASP recommended minimum
}

const fn default_time_cost() -> u32 {
    2
}

const fn default_parallelism() -> u32 {
    1
}

const fn default_hash_length() -> usize {
    32
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: default_memory_cost(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
            hash_length: default_hash_length(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/local.toml"))
            .merge(Env::prefixed("ACME_DASHBOARD_").split("__"))
            .extract()
            .map_err(Box::new)
    }
}

impl DatabaseConfig {
    /// Resolve the effective connection URL.
    ///
    /// `DATABASE_URL` from the process environment wins over the configured
    /// value; Postgres URLs get TLS enforced.
    #[must_use]
    pub fn resolved_url(&self) -> Option<String> {
        std::env::var("DATABASE_URL")
            .ok()
            .or_else(|| self.url.clone())
            .map(|url| enforce_tls(&url))
    }
}

/// Require TLS on Postgres connection URLs.
///
/// Appends `sslmode=require` unless the URL already carries an `sslmode`
/// parameter. Non-Postgres URLs pass through unchanged.
#[must_use]
pub fn enforce_tls(url: &str) -> String {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return url.to_string();
    }
    if url.contains("sslmode=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}sslmode=require")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.url.is_none());
        assert_eq!(config.password.memory_cost, 19456);
    }

    #[test]
    fn test_enforce_tls_appends_sslmode() {
        assert_eq!(
            enforce_tls("postgres://localhost/acme_dev"),
            "postgres://localhost/acme_dev?sslmode=require"
        );
        assert_eq!(
            enforce_tls("postgres://localhost/acme_dev?application_name=acme"),
            "postgres://localhost/acme_dev?application_name=acme&sslmode=require"
        );
    }

    #[test]
    fn test_enforce_tls_respects_existing_sslmode() {
        let url = "postgres://localhost/acme_dev?sslmode=verify-full";
        assert_eq!(enforce_tls(url), url);
    }

    #[test]
    fn test_enforce_tls_ignores_non_postgres_urls() {
        let url = "sqlite:data/dev.db?mode=rwc";
        assert_eq!(enforce_tls(url), url);
    }
}
