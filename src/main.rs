//! CLI entry point: scrape one FAQ page and print the result set as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use faqscrape::{DEFAULT_FAQ_URL, ScrapeConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "faqscrape", version, about = "Scrape and classify an accordion-style FAQ page")]
struct Args {
    /// FAQ page to scrape
    #[arg(default_value = DEFAULT_FAQ_URL)]
    url: String,

    /// Seconds to wait for the page to become ready
    #[arg(long, default_value_t = 15)]
    timeout: u64,

    /// Seconds to let expanded content settle before capture
    #[arg(long, default_value_t = 3)]
    settle: u64,

    /// Run the browser with a visible window
    #[arg(long)]
    headful: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let url = Url::parse(&args.url).with_context(|| format!("invalid URL: {}", args.url))?;

    let config = ScrapeConfig::default()
        .with_ready_timeout(Duration::from_secs(args.timeout))
        .with_settle_interval(Duration::from_secs(args.settle))
        .with_headless(!args.headful);

    let results = faqscrape::scrape(url.as_str(), config).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{json}");

    Ok(())
}
