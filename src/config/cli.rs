use crate::config::ConfigOverrides;
use crate::core::{Condition, DisabilityCategory};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "job-finder")]
#[command(about = "Job suggestions by disability type, plus a job-advice chatbot")]
pub struct Cli {
    /// Optional TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inference endpoint that receives chatbot prompts
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier sent with every prompt
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL used for generated job-search links
    #[arg(long, global = true)]
    pub job_search_url: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List disability types and the conditions each one offers
    Categories,
    /// Show suggested jobs for a disability type and condition
    Suggest {
        #[arg(long, value_enum)]
        category: Option<DisabilityCategory>,

        #[arg(long, value_enum)]
        condition: Option<Condition>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a disability type and condition from menus
    Browse,
    /// Send one question to the chatbot
    Ask {
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Chat with the assistant until `exit`
    Chat,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            job_search_url: self.job_search_url.clone(),
        }
    }
}
