mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xresearch_core::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "xresearch-cli")]
#[command(about = "Analyze saved X research batches")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a saved batch of posts without re-fetching
    Analyze {
        /// Query label for the report (all remaining words)
        #[arg(required = true)]
        query: Vec<String>,

        /// JSON file holding an array of posts
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output format: console, markdown, or json (overrides XRESEARCH_OUTPUT_FORMAT)
        #[arg(long, short = 'f')]
        format: Option<OutputFormat>,
    },
}

/// `RUST_LOG` wins when it parses; otherwise the configured level applies.
fn build_env_filter(
    rust_log: Option<&str>,
    log_level: &str,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        Some(filter) => Ok(filter),
        None => EnvFilter::try_new(log_level),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = xresearch_core::load_app_config()?;
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = build_env_filter(rust_log.as_deref(), &config.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded app config");

    match cli.command {
        Some(Commands::Analyze {
            query,
            input,
            format,
        }) => {
            let query = query.join(" ");
            let posts = xresearch_core::load_posts(&input)?;
            tracing::info!(query = %query, posts = posts.len(), input = %input.display(), "loaded batch");

            let report = xresearch_analysis::analyze(&posts, &query);
            let output = match format.unwrap_or(config.output_format) {
                OutputFormat::Console => render::console(&report, &config.limits),
                OutputFormat::Markdown => render::markdown(&report, &config.limits),
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            };
            println!("{output}");
        }
        None => println!("xresearch-cli: run `xresearch-cli analyze --help` for usage"),
    }

    Ok(())
}
