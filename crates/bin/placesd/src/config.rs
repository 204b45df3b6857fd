//! Configuration loading: `places.toml` plus `PLACES_*` environment overrides.
//!
//! The file is optional and every field has a default. Environment variables
//! win over file values, and `RUST_LOG` wins over `PLACES_LOG`.

use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_FILE: &str = "places.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Uploaded image storage.
    pub uploads: UploadsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:` connection URL.
    pub url: String,
}

/// Where uploaded images are written and served from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load `places.toml` (if present), then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if
    /// an override is malformed, or if the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `var`, so tests need not touch the
    /// process environment.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = var("PLACES_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PLACES_PORT") {
            self.server.port = parse_port("PLACES_PORT", &port)?;
        }
        if let Some(bind) = var("PLACES_BIND") {
            let (host, port) = bind.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("PLACES_BIND must be host:port, got {bind}"))
            })?;
            self.server.port = parse_port("PLACES_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(url) = var("PLACES_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(dir) = var("PLACES_UPLOADS_DIR") {
            self.uploads.dir = PathBuf::from(dir);
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("PLACES_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.database.url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(format!(
                "database url must start with sqlite:, got {}",
                self.database.url
            )));
        }
        if self.uploads.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "uploads directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_port(source: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{source} has an invalid port: {raw}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:places.db?mode=rwc".to_string(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads/images"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "places=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_env(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn should_serve_on_port_5000_and_store_images_locally_by_default() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.uploads.dir, PathBuf::from("uploads/images"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_read_uploads_dir_from_file() {
        let config: Config = toml::from_str(
            "
            [uploads]
            dir = '/var/lib/places/images'
            ",
        )
        .unwrap();
        assert_eq!(config.uploads.dir, PathBuf::from("/var/lib/places/images"));
        assert_eq!(config.database_url(), "sqlite:places.db?mode=rwc");
    }

    #[test]
    fn should_override_storage_locations_from_env() {
        let config = with_env(&[
            ("PLACES_DATABASE_URL", "sqlite::memory:"),
            ("PLACES_UPLOADS_DIR", "/tmp/places"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.uploads.dir, PathBuf::from("/tmp/places"));
    }

    #[test]
    fn should_split_bind_into_host_and_port() {
        let config = with_env(&[("PLACES_BIND", "127.0.0.1:8080")]).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_malformed_port_override() {
        assert!(matches!(
            with_env(&[("PLACES_PORT", "http")]),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            with_env(&[("PLACES_BIND", "localhost")]),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_prefer_rust_log_over_places_log() {
        let config = with_env(&[("PLACES_LOG", "warn"), ("RUST_LOG", "debug")]).unwrap();
        assert_eq!(config.logging.filter, "debug");

        let config = with_env(&[("PLACES_LOG", "warn")]).unwrap();
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_reject_non_sqlite_database_url() {
        let mut config = Config::default();
        config.database.url = "postgres://localhost/places".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_uploads_dir() {
        let mut config = Config::default();
        config.uploads.dir = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
