use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFinderError {
    #[error("Chatbot request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {kind} '{value}'")]
    SelectionError { kind: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

impl JobFinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JobFinderError::ApiError(_) => ErrorCategory::Network,
            JobFinderError::ConfigValidationError { .. }
            | JobFinderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            JobFinderError::SelectionError { .. } => ErrorCategory::Input,
            JobFinderError::IoError(_) | JobFinderError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Short message shown to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            JobFinderError::ApiError(e) => {
                format!("Could not reach the chatbot service: {}", e)
            }
            JobFinderError::IoError(e) => format!("File or terminal error: {}", e),
            JobFinderError::SerializationError(e) => format!("Could not encode output: {}", e),
            JobFinderError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            JobFinderError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {} ({})", value, field, reason),
            JobFinderError::SelectionError { kind, value } => {
                format!("'{}' is not a known {}", value, kind)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the inference server is running and the --endpoint URL is correct"
            }
            ErrorCategory::Configuration => {
                "Fix the value in the config file or override it with the matching command-line flag"
            }
            ErrorCategory::Input => "Run `job-finder categories` to list the accepted values",
            ErrorCategory::System => "Check file permissions and that the path exists",
        }
    }
}

pub type Result<T> = std::result::Result<T, JobFinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_share_category() {
        let unparsable = JobFinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "TOML parsing error: expected `]`".to_string(),
        };
        let invalid = JobFinderError::InvalidConfigValueError {
            field: "chatbot.endpoint".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };

        assert_eq!(unparsable.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(unparsable.recovery_suggestion(), invalid.recovery_suggestion());
    }

    #[test]
    fn test_user_friendly_message_names_the_value() {
        let err = JobFinderError::SelectionError {
            kind: "condition".to_string(),
            value: "Insomnia".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("Insomnia"));
        assert!(message.contains("condition"));
    }
}
