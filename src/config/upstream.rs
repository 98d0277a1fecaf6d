//! Credentials and endpoints for the HTTP upstreams.

use serde::{Deserialize, Serialize};

fn default_notion_api_base() -> String {
    "https://api.notion.com/v1".to_owned()
}

fn default_notion_version() -> String {
    "2022-06-28".to_owned()
}

fn default_openai_api_base() -> String {
    "https://api.openai.com/v1".to_owned()
}

fn default_openai_model() -> String {
    "gpt-4-turbo-preview".to_owned()
}

fn default_github_api_base() -> String {
    "https://api.github.com".to_owned()
}

/// Task database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token sent as a bearer credential.
    #[serde(default)]
    pub api_key: String,

    /// Identifier of the database holding the tasks.
    #[serde(default)]
    pub database_id: String,

    /// API root, without trailing slash.
    #[serde(default = "default_notion_api_base")]
    pub api_base: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "default_notion_version")]
    pub version: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            api_base: default_notion_api_base(),
            version: default_notion_version(),
        }
    }
}

impl NotionConfig {
    /// Returns `true` when both the key and the database are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.database_id.is_empty()
    }
}

/// Completion model settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key sent as a bearer credential.
    #[serde(default)]
    pub api_key: String,

    /// Chat model name.
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// API root, without trailing slash.
    #[serde(default = "default_openai_api_base")]
    pub api_base: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_openai_model(),
            api_base: default_openai_api_base(),
        }
    }
}

impl OpenAiConfig {
    /// Returns `true` when an API key is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Commit feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Personal access token; requests go out unauthenticated when empty.
    #[serde(default)]
    pub token: String,

    /// Account whose most recently pushed repository is reported.
    #[serde(default)]
    pub username: String,

    /// API root, without trailing slash.
    #[serde(default = "default_github_api_base")]
    pub api_base: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            username: String::new(),
            api_base: default_github_api_base(),
        }
    }
}

impl GitHubConfig {
    /// Returns `true` when a username is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_upstreams_are_not_configured() {
        assert!(!NotionConfig::default().is_configured());
        assert!(!OpenAiConfig::default().is_configured());
        assert!(!GitHubConfig::default().is_configured());
    }

    #[test]
    fn notion_requires_key_and_database() {
        let config = NotionConfig {
            api_key: "secret".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());

        let complete = NotionConfig {
            database_id: "db".into(),
            ..config
        };
        assert!(complete.is_configured());
    }
}
