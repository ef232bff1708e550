use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    pub github_token: Option<String>,
    pub pins_path: Option<PathBuf>,
    pub display_limit: usize,
    pub poll_interval_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("pins_path", &self.pins_path)
            .field("display_limit", &self.display_limit)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            github_token: None,
            pins_path: None,
            display_limit: 12,
            poll_interval_secs: 300,
        }
    }
}

impl Config {
    pub fn load(
        cli_user: Option<String>,
        cli_pins: Option<PathBuf>,
        cli_limit: Option<usize>,
    ) -> Self {
        let config_file = config_dir().join("gitfolio").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("GITFOLIO_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(user) = cli_user {
            figment = figment.merge(Serialized::default("username", user));
        }
        if let Some(pins) = cli_pins {
            figment = figment.merge(Serialized::default("pins_path", pins));
        }
        if let Some(limit) = cli_limit {
            figment = figment.merge(Serialized::default("display_limit", limit));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn resolved_pins_path(&self) -> PathBuf {
        self.pins_path
            .clone()
            .unwrap_or_else(|| config_dir().join("gitfolio").join("pins.json"))
    }

    /// Display limit with 0 meaning "show everything".
    pub fn card_limit(&self) -> usize {
        if self.display_limit == 0 {
            usize::MAX
        } else {
            self.display_limit
        }
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "GITFOLIO_USERNAME",
            "GITFOLIO_DISPLAY_LIMIT",
            "GITFOLIO_PINS_PATH",
            "GITFOLIO_POLL_INTERVAL_SECS",
            "GITFOLIO_GITHUB_TOKEN",
            "GITHUB_TOKEN",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        clear_env();

        let config = Config::load(None, None, None);
        assert_eq!(config.username, "");
        assert_eq!(config.display_limit, 12);
        assert_eq!(config.poll_interval_secs, 300);
        assert!(config.github_token.is_none());
        assert_eq!(config.card_limit(), 12);
    }

    #[test]
    #[serial]
    fn cli_overrides_env() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        clear_env();
        std::env::set_var("GITFOLIO_USERNAME", "env-user");

        let config = Config::load(Some("cli-user".to_string()), None, Some(3));
        assert_eq!(config.username, "cli-user");
        assert_eq!(config.display_limit, 3);

        std::env::remove_var("GITFOLIO_USERNAME");
    }

    #[test]
    #[serial]
    fn token_is_redacted_in_debug() {
        let config = Config {
            github_token: Some("ghp_secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("ghp_secret"));
    }

    #[test]
    #[serial]
    fn zero_limit_means_unlimited() {
        let config = Config {
            display_limit: 0,
            ..Config::default()
        };
        assert_eq!(config.card_limit(), usize::MAX);
    }
}
