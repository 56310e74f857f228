use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::store::StoreConfig;

const DEFAULT_TABLE: &str = "guestbook";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("GUESTBOOK_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GUESTBOOK")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // Hosted credentials conventionally arrive through their own
        // environment variables and win over the config file.
        if let Ok(url) = env::var("SUPABASE_URL") {
            config
                .store
                .hosted
                .get_or_insert_with(HostedSection::default)
                .url = url;
        }
        if let Ok(key) = env::var("SUPABASE_KEY") {
            config
                .store
                .hosted
                .get_or_insert_with(HostedSection::default)
                .key = key;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the record store configuration.
    pub fn store_runtime(&self) -> Result<StoreConfig> {
        self.store.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackendKind,
    pub hosted: Option<HostedSection>,
}

impl StoreSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            StoreBackendKind::Hosted => {
                let hosted = self
                    .hosted
                    .clone()
                    .context("store.hosted configuration required when backend is 'hosted'")?;

                if hosted.url.trim().is_empty() {
                    bail!("store.hosted.url must be specified (or set SUPABASE_URL)");
                }
                if hosted.key.trim().is_empty() {
                    bail!("store.hosted.key must be specified (or set SUPABASE_KEY)");
                }

                Ok(StoreConfig::Hosted {
                    url: hosted.url,
                    key: hosted.key,
                    table: hosted.table,
                })
            }
            StoreBackendKind::Memory => Ok(StoreConfig::Memory),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Hosted,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostedSection {
    pub url: String,
    pub key: String,
    pub table: String,
}

impl Default for HostedSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
