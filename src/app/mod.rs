// Terminal front-end: job suggestion and chatbot interactions.

pub mod chat;
pub mod job_finder;

pub use chat::ChatSession;
pub use job_finder::{find_jobs, JobFinderOutcome};
