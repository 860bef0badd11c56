//! CLI administration tool for kv-url-shortener.
//!
//! Reads and writes records directly through the configured store, without
//! going through the HTTP or function front doors.
//!
//! # Usage
//!
//! ```bash
//! # Create or overwrite a short URL
//! cargo run --bin admin -- put abc https://example.com
//!
//! # Inspect the stored record
//! cargo run --bin admin -- get abc
//!
//! # Check store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `kv_url_shortener::config`.

use kv_url_shortener::application::services::UrlService;
use kv_url_shortener::{config, server, telemetry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing short URL records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create or overwrite a short URL
    Put {
        /// Short identifier
        short_url: String,

        /// Destination URL
        long_url: String,

        /// Skip confirmation prompt when overwriting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the record stored for a short URL
    Get {
        /// Short identifier
        short_url: String,
    },

    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init_tracing("warn", &config.log_format);

    let service = server::build_url_service(&config)
        .await
        .context("Failed to connect to store")?;

    match cli.command {
        Commands::Put {
            short_url,
            long_url,
            yes,
        } => put_record(&service, short_url, long_url, yes).await?,
        Commands::Get { short_url } => get_record(&service, &short_url).await?,
        Commands::Check => check_store(&service, &config).await?,
    }

    Ok(())
}

/// Writes a record, asking before replacing an existing destination.
async fn put_record(
    service: &UrlService,
    short_url: String,
    long_url: String,
    skip_confirm: bool,
) -> Result<()> {
    if let Some(existing) = service.find(&short_url).await? {
        println!(
            "{} {} -> {}",
            "Existing record:".yellow(),
            short_url.bold(),
            existing.long_url.as_deref().unwrap_or("<no destination>")
        );

        if !skip_confirm {
            let proceed = Confirm::new()
                .with_prompt("Overwrite it?")
                .default(false)
                .interact()?;

            if !proceed {
                println!("{}", "Cancelled".red());
                return Ok(());
            }
        }
    }

    service.create(short_url.clone(), long_url.clone()).await?;

    println!(
        "{} {} -> {}",
        "Stored".green().bold(),
        short_url.bold(),
        long_url
    );

    Ok(())
}

/// Prints the raw record for a short URL.
async fn get_record(service: &UrlService, short_url: &str) -> Result<()> {
    match service.find(short_url).await? {
        Some(record) => {
            println!("{}", "Record".bright_blue().bold());
            println!("  shortId:  {}", record.short_id);
            println!(
                "  longURL:  {}",
                record.long_url.as_deref().unwrap_or("<missing>")
            );
            println!(
                "  owner:    {}",
                record.owner.as_deref().unwrap_or("<missing>")
            );

            if record.destination().is_none() {
                println!(
                    "{}",
                    "This record has no destination and resolves as not found".yellow()
                );
            }
        }
        None => println!("{} {}", "No record for".red(), short_url.bold()),
    }

    Ok(())
}

/// Verifies the store answers a health probe.
async fn check_store(service: &UrlService, config: &config::Config) -> Result<()> {
    print!("Checking {} store... ", config.store_backend);

    if service.health_check().await {
        println!("{}", "OK".green().bold());
        Ok(())
    } else {
        println!("{}", "FAILED".red().bold());
        anyhow::bail!("Store did not answer within {}ms", config.store_timeout_ms)
    }
}
