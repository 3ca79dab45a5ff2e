//! UnReel CLI — 连通性检查与分析接口的命令行入口
//!
//! Usage:
//!   unreel health                          Check the backend is reachable
//!   unreel analyze <URL>                   Analyze a video link
//!   unreel chat <ANALYSIS_ID> <MESSAGE>    Ask a question about an analysis
//!   unreel translate <ANALYSIS_ID> <LANG>  Translate an analysis transcript

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unreel_client::validation::validate_video_url;
use unreel_client::{AnalysisClient, ClientConfig, ClientError, RetryPolicy};

#[derive(Debug, Parser)]
#[command(name = "unreel", version, about = "Command-line client for the UnReel analysis API")]
struct Cli {
    /// API base URL, e.g. http://localhost:3000/api/v1 (default: UNREEL_API_BASE_URL or platform default)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: transport default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Retry network errors this many times
    #[arg(long, global = true)]
    retries: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the backend is reachable
    Health,
    /// Analyze a video link
    Analyze { url: String },
    /// Ask a question about an analysis
    Chat { analysis_id: String, message: String },
    /// Translate an analysis transcript
    Translate {
        analysis_id: String,
        target_language: String,
    },
}

fn build_client(cli: &Cli) -> Result<AnalysisClient> {
    let mut config = match &cli.base_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.retries {
        config = config.with_retry(RetryPolicy::network_only(retries));
    }
    info!(base_url = config.base_url(), "using analysis API");
    AnalysisClient::new(config).context("failed to build client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(err: ClientError) -> anyhow::Error {
    anyhow!(err.describe())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unreel_client=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match &cli.command {
        Command::Health => {
            let health = client.check_health().await.map_err(report)?;
            print_json(&health)?;
            if !health.is_healthy() {
                return Err(anyhow!(
                    "backend reported status '{}'",
                    health.status().unwrap_or("unknown")
                ));
            }
        }
        Command::Analyze { url } => {
            validate_video_url(url).map_err(report)?;
            let result = client.analyze(url.trim()).await.map_err(report)?;
            print_json(&result)?;
        }
        Command::Chat {
            analysis_id,
            message,
        } => {
            let reply = client.chat(analysis_id, message).await.map_err(report)?;
            print_json(&reply)?;
        }
        Command::Translate {
            analysis_id,
            target_language,
        } => {
            let result = client
                .translate_transcript(analysis_id, target_language)
                .await
                .map_err(report)?;
            print_json(&result)?;
        }
    }

    Ok(())
}
