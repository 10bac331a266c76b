#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::chatbot::{DEFAULT_CHATBOT_ENDPOINT, DEFAULT_CHATBOT_MODEL};
use crate::core::links::{JobSearchLinks, DEFAULT_JOB_SEARCH_URL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::path::Path;
use toml_config::TomlConfig;

/// Values given explicitly on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub job_search_url: Option<String>,
}

/// Fully resolved settings: flag, then file, then built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub chatbot_endpoint: String,
    pub chatbot_model: String,
    pub job_search_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chatbot_endpoint: DEFAULT_CHATBOT_ENDPOINT.to_string(),
            chatbot_model: DEFAULT_CHATBOT_MODEL.to_string(),
            job_search_url: DEFAULT_JOB_SEARCH_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn resolve(file: Option<&TomlConfig>, overrides: &ConfigOverrides) -> Self {
        let defaults = AppConfig::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            chatbot_endpoint: overrides
                .endpoint
                .clone()
                .or(file.chatbot.endpoint)
                .unwrap_or(defaults.chatbot_endpoint),
            chatbot_model: overrides
                .model
                .clone()
                .or(file.chatbot.model)
                .unwrap_or(defaults.chatbot_model),
            job_search_url: overrides
                .job_search_url
                .clone()
                .or(file.job_search.base_url)
                .unwrap_or(defaults.job_search_url),
        }
    }

    /// Reads the optional config file and applies overrides. Does not validate.
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let file = config_path.map(TomlConfig::from_file).transpose()?;
        Ok(Self::resolve(file.as_ref(), overrides))
    }

    pub fn job_search_links(&self) -> Result<JobSearchLinks> {
        JobSearchLinks::new(&self.job_search_url)
    }
}

impl ConfigProvider for AppConfig {
    fn chatbot_endpoint(&self) -> &str {
        &self.chatbot_endpoint
    }

    fn chatbot_model(&self) -> &str {
        &self.chatbot_model
    }

    fn job_search_url(&self) -> &str {
        &self.job_search_url
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("chatbot.endpoint", &self.chatbot_endpoint)?;
        validate_non_empty_string("chatbot.model", &self.chatbot_model)?;
        validate_url("job_search.base_url", &self.job_search_url)?;
        Ok(())
    }
}
