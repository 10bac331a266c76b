use crate::utils::error::{JobFinderError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every key may be omitted; missing keys fall back
/// to command-line flags or built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub chatbot: ChatbotSection,
    #[serde(default)]
    pub job_search: JobSearchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatbotSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchSection {
    pub base_url: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(JobFinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| JobFinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[chatbot]
endpoint = "http://inference.internal:11434/api/generate"
model = "llama3"

[job_search]
base_url = "https://jobs.example.com/search"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.chatbot.endpoint.as_deref(),
            Some("http://inference.internal:11434/api/generate")
        );
        assert_eq!(config.chatbot.model.as_deref(), Some("llama3"));
        assert_eq!(
            config.job_search.base_url.as_deref(),
            Some("https://jobs.example.com/search")
        );
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[chatbot]\nmodel = \"phi3\"\n").unwrap();
        assert_eq!(config.chatbot.model.as_deref(), Some("phi3"));
        assert!(config.chatbot.endpoint.is_none());
        assert!(config.job_search.base_url.is_none());

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert!(empty.chatbot.model.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JOB_FINDER_TEST_MODEL", "mistral");

        let config = TomlConfig::from_toml_str(
            "[chatbot]\nmodel = \"${JOB_FINDER_TEST_MODEL}\"\nendpoint = \"${JOB_FINDER_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(config.chatbot.model.as_deref(), Some("mistral"));
        assert_eq!(
            config.chatbot.endpoint.as_deref(),
            Some("${JOB_FINDER_UNSET_VAR}")
        );

        std::env::remove_var("JOB_FINDER_TEST_MODEL");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[chatbot\nmodel = 1").unwrap_err();
        assert!(matches!(err, JobFinderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[job_search]\nbase_url = \"https://jobs.example.com/\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.job_search.base_url.as_deref(),
            Some("https://jobs.example.com/")
        );
    }
}
