pub mod chatbot;
pub mod links;
pub mod suggestions;

pub use crate::domain::model::{Condition, DisabilityCategory, JobSuggestion};
pub use crate::domain::ports::{Chatbot, ConfigProvider};
pub use crate::utils::error::Result;
