use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use newsmatch::config::Config;
use newsmatch::fetch::{FetchClient, Headline};
use newsmatch::similarity::match_headlines;
use newsmatch::sources::default_sources;
use newsmatch::text::{extract_keywords, StopwordList};

/// Newsmatch: report news headlines textually similar to your input.
#[derive(Parser)]
#[command(name = "newsmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web form server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Run the pipeline once from the command line
    Query {
        /// The text to match headlines against
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsmatch=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { bind, port } => {
            newsmatch::web::run_server(config, &bind, port).await?;
        }

        Commands::Query { text } => {
            let keywords = extract_keywords(&text, StopwordList::Corpus);
            if keywords.is_empty() {
                println!("{}", "Input reduced to zero keywords.".yellow());
                return Ok(());
            }
            println!("Keywords: {}", keywords.join(" ").dimmed());

            let fetcher = FetchClient::new(&config)?;
            let mut headlines: Vec<Headline> = Vec::new();
            for source in default_sources() {
                let fetched = fetcher.fetch_headlines(&source).await;
                println!("{}: {} headlines", source.name, fetched.len());
                headlines.extend(fetched);
            }

            let matches = match_headlines(&keywords, &headlines, config.similarity_threshold);

            if matches.is_empty() {
                println!("\n{}", "No matching headlines.".dimmed());
            } else {
                println!();
                for line in &matches {
                    println!("{}", line.green());
                }
                println!("\n{} match(es).", matches.len());
            }
        }
    }

    Ok(())
}
