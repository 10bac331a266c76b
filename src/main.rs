use clap::Parser;
use job_finder::app::job_finder::{browse, find_jobs};
use job_finder::app::{chat::render_reply, ChatSession};
use job_finder::config::cli::{Cli, Command};
use job_finder::core::DisabilityCategory;
use job_finder::utils::{logger, validation::Validate};
use job_finder::{AppConfig, ChatbotRelay, JobFinderError};

fn report_and_exit(context: &str, e: &JobFinderError) -> ! {
    tracing::error!("❌ {}: {} (Category: {:?})", context, e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match AppConfig::load(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => report_and_exit("Failed to load configuration", &e),
    };
    if let Err(e) = config.validate() {
        report_and_exit("Configuration validation failed", &e);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let links = match config.job_search_links() {
        Ok(links) => links,
        Err(e) => report_and_exit("Invalid job search URL", &e),
    };

    let stdout = std::io::stdout();
    match cli.command {
        Command::Categories => {
            for category in DisabilityCategory::ALL {
                println!("{} ({})", category.label(), category.label().to_lowercase());
                for condition in category.conditions() {
                    println!("  - {} ({})", condition.label(), condition.cli_name());
                }
            }
        }
        Command::Suggest {
            category,
            condition,
            json,
        } => {
            let outcome = find_jobs(category, condition, &links);
            if json {
                println!("{}", outcome.to_json()?);
            } else {
                print!("{}", outcome.render_text());
            }
        }
        Command::Browse => {
            println!("ENABLE");
            let stdin = std::io::stdin();
            browse(&mut stdin.lock(), &mut stdout.lock(), &links)?;
        }
        Command::Ask { prompt } => {
            let session = ChatSession::new(ChatbotRelay::from_config(&config));
            if let Some(reply) = session.ask(&prompt.join(" ")).await {
                println!("{}", render_reply(&reply));
            }
        }
        Command::Chat => {
            println!("ENABLE");
            let session = ChatSession::new(ChatbotRelay::from_config(&config));
            let stdin = std::io::stdin();
            session.run(&mut stdin.lock(), &mut stdout.lock()).await?;
        }
    }

    Ok(())
}
