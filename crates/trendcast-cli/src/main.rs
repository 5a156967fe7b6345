use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use trendcast_agent::{build_agent_response, AgentError, Pipeline};

#[derive(Debug, Parser)]
#[command(name = "trendcast-cli")]
#[command(about = "Trending AI topics and campaign generation from the command line")]
struct Cli {
    /// Feeds file to use instead of `TRENDCAST_FEEDS_PATH`
    #[arg(long, global = true)]
    feeds: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch feeds and print the full campaign payload as JSON
    Generate {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Fetch feeds and print only the ranked topics as JSON
    Topics {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let mut config = trendcast_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = cli.feeds {
        config.feeds_path = path;
    }

    let feeds = trendcast_core::load_feeds(&config.feeds_path)?;
    tracing::debug!(
        feeds = feeds.feeds.len(),
        path = %config.feeds_path.display(),
        "loaded feed configuration"
    );
    let pipeline = Pipeline::from_app_config(&config, feeds.feeds)?;

    match cli.command {
        Commands::Generate { pretty } => {
            let topics = pipeline.fetch_trending_topics().await;
            let response = match build_agent_response(&topics) {
                Ok(response) => response,
                Err(AgentError::NoDataAvailable) => {
                    anyhow::bail!("no topics available from any configured feed; try again shortly")
                }
                Err(e) => return Err(e.into()),
            };
            print_json(&response, pretty)?;
        }
        Commands::Topics { pretty } => {
            let topics = pipeline.fetch_trending_topics().await;
            print_json(&topics, pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
