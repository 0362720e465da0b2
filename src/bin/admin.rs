//! CLI administration tool for short-links.
//!
//! Provides commands for managing links, viewing click metrics, and checking
//! store connectivity without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Create a link
//! cargo run --bin admin -- links create docs https://example.com/docs
//!
//! # Show the metrics report
//! cargo run --bin admin -- metrics
//!
//! # Check PostgreSQL and Redis connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (see `short_links::config`);
//! `DATABASE_URL` and `REDIS_URL` (or their component forms) must point at
//! the stores to administer.

use short_links::application::services::{LinkService, MetricsService};
use short_links::config::{self, Config, mask_connection_string};
use short_links::domain::repositories::{LinkRepository, MetricsRepository};
use short_links::infrastructure::metrics::RedisMetricsRepository;
use short_links::infrastructure::persistence::PgLinkRepository;
use short_links::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// CLI tool for managing short-links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show click counts (codes with 0-50 clicks, highest first)
    Metrics,

    /// Check PostgreSQL and Redis connectivity
    Check,
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a link for a chosen code
    Create {
        /// Short code (at least 3 characters)
        code: String,

        /// Target URL
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    // Store failures are only reported in detail through tracing
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing::subscriber::set_global_default(log_subscriber(&log_level, std::io::stderr))?;

    match cli.command {
        Commands::Links { action } => {
            let service = LinkService::new(connect_link_store(&config).await?);
            handle_link_action(action, &service).await?
        }
        Commands::Metrics => {
            let service = MetricsService::new(connect_metrics_store(&config).await?);
            show_metrics(&service).await?
        }
        Commands::Check => check_stores(&config).await?,
    }

    Ok(())
}

/// Plain-text subscriber for operator output, written to `writer`.
fn log_subscriber<W>(log_level: &str, writer: W) -> impl tracing::Subscriber + Send + Sync + use<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(writer)
        .with_target(false)
        .finish()
}

async fn connect_link_store(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = connect_database(database_url, config).await?;

    Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

async fn connect_metrics_store(config: &Config) -> Result<Arc<dyn MetricsRepository>> {
    let repo = RedisMetricsRepository::connect(&config.redis_url, &config.metrics_key)
        .await
        .context("Failed to connect to Redis")?;

    Ok(Arc::new(repo))
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Create { code, url, yes } => create_link(service, code, url, yes).await,
    }
}

/// Lists all links as a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Short Links
///
///   ID    Code             Created              URL
///   ────────────────────────────────────────────────────────────────────────
///   2     xyz              2024-01-16 14:20     https://example.com/b
///   1     abc              2024-01-15 10:30     https://example.com/a
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "🔗 Short Links".bright_blue().bold());
    println!();

    let links = service.list_links().await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <code> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {:<20} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<16} {:<20} {}",
            link.id,
            link.code.cyan(),
            link.created_at.format("%Y-%m-%d %H:%M").to_string(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

/// Creates a link after an optional confirmation prompt.
///
/// Validation and conflict handling are the same as for `POST /api/links`.
/// A rejected link is an error, so the process exits non-zero.
async fn create_link(
    service: &LinkService,
    code: String,
    url: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Create Short Link".bright_blue().bold());
    println!();
    println!("  Code: {}", code.cyan());
    println!("  URL:  {}", url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.create_link(code, url).await {
        Ok(link) => {
            println!(
                "{} {}",
                "✅ Link created with id".green().bold(),
                link.id.to_string().bright_yellow()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            anyhow::bail!("Link was not created: {}", e)
        }
    }
}

/// Prints the metrics report.
async fn show_metrics(service: &MetricsService) -> Result<()> {
    println!("{}", "📊 Click Metrics".bright_blue().bold());
    println!();

    let scores = service.report().await?;

    if scores.is_empty() {
        println!("{}", "  No clicks recorded in range".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for score in &scores {
        println!("  {:<20} {}", score.code.cyan(), score.score);
    }

    Ok(())
}

/// Checks both stores and reports their status.
async fn check_stores(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking stores...".bright_blue().bold());
    println!();

    let mut healthy = true;

    if let Some(database_url) = config.database_url.as_deref() {
        println!("  Database: {}", mask_connection_string(database_url).bright_black());
    }
    match connect_link_store(config).await {
        Ok(repo) if repo.health_check().await => {
            println!("  {} PostgreSQL", "✅".green());
        }
        Ok(_) => {
            healthy = false;
            println!("  {} PostgreSQL: query failed", "❌".red());
        }
        Err(e) => {
            healthy = false;
            println!("  {} PostgreSQL: {}", "❌".red(), e);
        }
    }

    println!("  Redis: {}", mask_connection_string(&config.redis_url).bright_black());
    match connect_metrics_store(config).await {
        Ok(repo) if repo.health_check().await => {
            println!("  {} Redis", "✅".green());
        }
        Ok(_) => {
            healthy = false;
            println!("  {} Redis: PING failed", "❌".red());
        }
        Err(e) => {
            healthy = false;
            println!("  {} Redis: {}", "❌".red(), e);
        }
    }

    println!();
    if healthy {
        println!("{}", "All stores reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("One or more stores are unreachable")
    }
}
