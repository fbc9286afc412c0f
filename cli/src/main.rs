mod lookup;
mod render;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dictionary::{LookupError, normalize_query};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("nothing to look up; pass a non-empty word")]
    EmptyWord,
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{}", .0.user_message())]
    Lookup(#[from] LookupError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "wordbook-cli", about = "Look up English words from the terminal")]
struct Cli {
    #[arg(long, env = "WORDBOOK_DICTIONARY_API", default_value = dictionary::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "WORDBOOK_HOST_URL", default_value = "http://127.0.0.1:3000")]
    host_url: String,

    #[arg(long, env = "WORDBOOK_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a Wordbook host answers `/healthz`.
    Ping,
    /// Print the headword, pronunciation and first definition of a word.
    Define {
        word: String,
        /// Emit the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("wordbook-cli/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;

    match cli.command {
        Command::Ping => run_ping(&client, &cli.host_url).await,
        Command::Define { word, json } => run_define(&client, &cli.api_base, &word, json).await,
    }
}

async fn run_ping(client: &reqwest::Client, host_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", host_url.trim_end_matches('/'));
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_define(client: &reqwest::Client, api_base: &str, word: &str, json: bool) -> Result<(), CliError> {
    let word = normalize_query(word).ok_or(CliError::EmptyWord)?;
    let entries = lookup::fetch_entries(client, api_base, &word).await?;
    let summary = lookup::first_summary(&entries)?;
    if json {
        println!("{}", render::render_json(&summary)?);
    } else {
        print!("{}", render::render_summary(&summary));
    }
    Ok(())
}
