//! Application configuration: four scalars loaded from `config.yaml`, with an
//! environment-variable fallback when the file is absent or malformed.

use std::env;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::core::{BackendError, Result};

/// Default path of the configuration document.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default HTTP listen port when neither file nor `PORT` provide one.
pub const DEFAULT_PORT: u16 = 8080;

/// Default game URL when neither file nor `GAME_URL` provide one.
pub const DEFAULT_GAME_URL: &str = "https://kuvaev.me/telegame/";

/// Immutable application configuration. Built once at startup and shared as
/// `Arc<Config>` by the HTTP handlers and the update listener.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram bot token; empty disables all bot functionality.
    #[serde(default)]
    pub telegram_token: String,
    /// Game short name registered with BotFather; empty disables `/api/send-game`.
    #[serde(default)]
    pub game_short_name: String,
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// URL of the externally hosted game.
    #[serde(default = "default_game_url")]
    pub game_url: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_game_url() -> String {
    DEFAULT_GAME_URL.to_string()
}

impl Config {
    /// Reads and parses the YAML configuration file. Fails when the file is
    /// missing or does not parse; field contents are not validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BackendError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&raw).map_err(|e| {
            BackendError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Builds the configuration from `TELEGRAM_TOKEN`, `GAME_SHORT_NAME`,
    /// `PORT` and `GAME_URL`. Unset or unparsable `PORT` becomes 8080.
    pub fn from_env() -> Self {
        let telegram_token = env::var("TELEGRAM_TOKEN").unwrap_or_default();
        let game_short_name = env::var("GAME_SHORT_NAME").unwrap_or_default();
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let game_url = env::var("GAME_URL").unwrap_or_else(|_| DEFAULT_GAME_URL.to_string());

        Self {
            telegram_token,
            game_short_name,
            port,
            game_url,
        }
    }

    /// Loads the configuration file, falling back to environment variables on
    /// any file error. Never fails.
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Config file unusable, falling back to environment variables");
                Self::from_env()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn clear_env() {
        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("GAME_SHORT_NAME");
        env::remove_var("PORT");
        env::remove_var("GAME_URL");
    }

    #[test]
    fn from_file_reads_all_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "telegram_token: \"123:abc\"\ngame_short_name: telegame\nport: 9090\ngame_url: \"https://example.com/game/\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.game_short_name, "telegame");
        assert_eq!(config.port, 9090);
        assert_eq!(config.game_url, "https://example.com/game/");
    }

    #[test]
    fn from_file_missing_fields_take_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "telegram_token: \"123:abc\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.telegram_token, "123:abc");
        assert!(config.game_short_name.is_empty());
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.game_url, DEFAULT_GAME_URL);
    }

    #[test]
    fn from_file_fails_on_absent_file() {
        let err = Config::from_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn from_file_fails_on_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "telegram_token: [unterminated").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    #[serial]
    fn load_falls_back_to_env_defaults() {
        clear_env();

        let config = Config::load(Path::new("/nonexistent/config.yaml"));

        assert!(config.telegram_token.is_empty());
        assert!(config.game_short_name.is_empty());
        assert_eq!(config.port, 8080);
        assert_eq!(config.game_url, DEFAULT_GAME_URL);
    }

    #[test]
    #[serial]
    fn from_env_reads_all_variables() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "env_token");
        env::set_var("GAME_SHORT_NAME", "env_game");
        env::set_var("PORT", "3000");
        env::set_var("GAME_URL", "https://env.example/");

        let config = Config::from_env();

        assert_eq!(config.telegram_token, "env_token");
        assert_eq!(config.game_short_name, "env_game");
        assert_eq!(config.port, 3000);
        assert_eq!(config.game_url, "https://env.example/");
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_unparsable_port_defaults() {
        clear_env();
        env::set_var("PORT", "notaport");

        let config = Config::from_env();

        assert_eq!(config.port, DEFAULT_PORT);
        clear_env();
    }

    #[test]
    #[serial]
    fn load_prefers_file_over_env() {
        clear_env();
        env::set_var("PORT", "3000");
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port: 9090").unwrap();

        let config = Config::load(file.path());

        assert_eq!(config.port, 9090);
        clear_env();
    }
}
