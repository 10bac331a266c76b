pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{AppConfig, ConfigOverrides};
pub use crate::core::{chatbot::ChatbotRelay, links::JobSearchLinks, suggestions::lookup};
pub use domain::model::{Condition, DisabilityCategory, JobSuggestion};
pub use domain::ports::{Chatbot, ConfigProvider};
pub use utils::error::{JobFinderError, Result};
