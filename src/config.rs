use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `LEARNLAB__SERVICE__HTTP__PORT=9000`
pub const ENV_PREFIX: &str = "LEARNLAB";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub youtube: YoutubeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeConfig {
    /// Upper bound on one transcript fetch, all upstream round trips included
    pub timeout_secs: u64,

    /// Caption languages to look for, in order of preference
    pub languages: Vec<String>,
}

impl YoutubeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            languages: vec!["en".to_string()],
        }
    }
}

impl Config {
    /// Load settings from built-in defaults, then the optional file at `path`,
    /// then `LEARNLAB__*` environment variables.
    pub fn load(path: &str) -> Result<Self> {
        let youtube = YoutubeConfig::default();

        let settings = config::Config::builder()
            .set_default("service.name", "learnlab-server")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8000)?
            .set_default("youtube.timeout_secs", youtube.timeout_secs)?
            .set_default("youtube.languages", youtube.languages)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("youtube.languages")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        let cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        if cfg.youtube.languages.is_empty() {
            anyhow::bail!("youtube.languages must list at least one language code");
        }

        Ok(cfg)
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.http.bind, self.service.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load("/nonexistent/learnlab-server").unwrap();

        assert_eq!(cfg.service.name, "learnlab-server");
        assert_eq!(cfg.service.http.port, 8000);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8000");
        assert_eq!(cfg.youtube.languages, vec!["en".to_string()]);
        assert_eq!(cfg.youtube.timeout(), Duration::from_secs(30));
    }
}
