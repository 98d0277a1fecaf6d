//! Layered configuration for the Addy server.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ADDY_*` prefix, `__` as separator)
//! 2. Flat environment names used by earlier deployments (`PORT`,
//!    `NOTION_KEY`, `NOTION_DATABASE_ID`, `OPENAI_API_KEY`, `GITHUB_TOKEN`,
//!    `GITHUB_USERNAME`)
//! 3. `addy.toml` in the working directory
//! 4. Built-in defaults
//!
//! Figment maps `ADDY_SERVER__PORT` -> `server.port`,
//! `ADDY_CHAIN__RPC_URL` -> `chain.rpc_url`, and so on.
//!
//! Credentials are values only. A missing key does not fail loading; the
//! affected upstream rejects the request instead.

mod chain;
mod error;
mod server;
mod upstream;

pub use chain::ChainConfig;
pub use error::ConfigError;
pub use server::{CacheConfig, ServerConfig};
pub use upstream::{GitHubConfig, NotionConfig, OpenAiConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "addy.toml";

/// Flat environment names and the nested keys they populate.
const LEGACY_ENV_KEYS: [(&str, &str); 6] = [
    ("PORT", "server.port"),
    ("NOTION_KEY", "notion.api_key"),
    ("NOTION_DATABASE_ID", "notion.database_id"),
    ("OPENAI_API_KEY", "openai.api_key"),
    ("GITHUB_TOKEN", "github.token"),
    ("GITHUB_USERNAME", "github.username"),
];

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddyConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Recommendation cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Task database settings.
    #[serde(default)]
    pub notion: NotionConfig,
    /// Completion model settings.
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Commit feed settings.
    #[serde(default)]
    pub github: GitHubConfig,
    /// NFT contract settings.
    #[serde(default)]
    pub chain: ChainConfig,
}

impl AddyConfig {
    /// Loads configuration from all sources.
    ///
    /// Does not read `.env`; use [`AddyConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source holds a value of the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Path::new(CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Loads `.env` from the working directory, then all other sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source holds a value of the
    /// wrong type.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv()
            && !error.not_found()
        {
            return Err(ConfigError::Dotenv(error.to_string()));
        }
        Self::load()
    }

    /// Builds the provider chain, reading the TOML layer from `file`.
    ///
    /// Public so tests can point at a scratch file or layer extra providers.
    #[must_use]
    pub fn figment(file: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }

        figment
            .merge(
                Env::raw()
                    .only(&LEGACY_ENV_KEYS.map(|(name, _)| name))
                    .map(|key| legacy_target(key.as_str()).into()),
            )
            .merge(Env::prefixed("ADDY_").split("__"))
    }
}

fn legacy_target(name: &str) -> String {
    LEGACY_ENV_KEYS
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map_or_else(|| name.to_ascii_lowercase(), |(_, target)| (*target).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_match_original_deployment() {
        let config = AddyConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.openai.model, "gpt-4-turbo-preview");
        assert_eq!(
            config.chain.contract_address,
            "0x6847f4ef767fc976f9158a1d0de7cb60e1af4ebf"
        );
    }

    #[test]
    fn legacy_env_names_populate_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "4100");
            jail.set_env("NOTION_KEY", "secret_notion");
            jail.set_env("GITHUB_USERNAME", "octocat");

            let config: AddyConfig = AddyConfig::figment(Path::new(CONFIG_FILE)).extract()?;

            assert_eq!(config.server.port, 4100);
            assert_eq!(config.notion.api_key, "secret_notion");
            assert_eq!(config.github.username, "octocat");
            Ok(())
        });
    }

    #[test]
    fn prefixed_env_overrides_legacy_and_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [server]
                port = 5000

                [cache]
                ttl_secs = 60
                "#,
            )?;
            jail.set_env("PORT", "4100");
            jail.set_env("ADDY_SERVER__PORT", "4200");

            let config: AddyConfig = AddyConfig::figment(Path::new(CONFIG_FILE)).extract()?;

            assert_eq!(config.server.port, 4200);
            assert_eq!(config.cache.ttl_secs, 60);
            Ok(())
        });
    }

    #[test]
    fn legacy_target_maps_known_names() {
        assert_eq!(legacy_target("OPENAI_API_KEY"), "openai.api_key");
        assert_eq!(legacy_target("port"), "server.port");
    }
}
