//! CLI administration tool for tinylink.
//!
//! Inspects and manages links directly in the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List links, newest first (or most clicked first)
//! cargo run --bin admin -- links list
//! cargo run --bin admin -- links list --by clicks
//!
//! # Show one link
//! cargo run --bin admin -- links show mycode1
//!
//! # Delete a link
//! cargo run --bin admin -- links delete mycode1
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use tinylink::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List {
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortBy::Created)]
        by: SortBy,
    },

    /// Show one link
    Show {
        /// Short code (case-sensitive)
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code (case-sensitive)
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Sort order for `links list`.
#[derive(Clone, Copy, ValueEnum)]
enum SortBy {
    /// Newest first
    Created,
    /// Most clicked first
    Clicks,
}

impl From<SortBy> for LinkOrder {
    fn from(value: SortBy) -> Self {
        match value {
            SortBy::Created => LinkOrder::Newest,
            SortBy::Clicks => LinkOrder::MostClicked,
        }
    }
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(
    action: LinkAction,
    service: &LinkService<PgLinkRepository>,
) -> Result<()> {
    match action {
        LinkAction::List { by } => list_links(service, by.into()).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Prints all links as a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code      Clicks  Last clicked       Target
///   ───────────────────────────────────────────────────────────────────────
///   mycode1   12      2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(service: &LinkService<PgLinkRepository>, order: LinkOrder) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links(order)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last clicked".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            format_last_clicked(link).bright_black(),
            truncate(&link.target_url, 50)
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the details of one link.
async fn show_link(service: &LinkService<PgLinkRepository>, code: &str) -> Result<()> {
    let link = match service.get_link(code).await {
        Ok(link) => link,
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("❌ No link with code '{code}'").red());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("{}", format!("🔗 {}", link.code).bright_blue().bold());
    println!();
    println!("  Target:       {}", link.target_url.cyan());
    println!(
        "  Clicks:       {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!("  Last clicked: {}", format_last_clicked(&link));
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
/// - Deletion is permanent; the code becomes free for reuse
async fn delete_link(
    service: &LinkService<PgLinkRepository>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = match service.get_link(code).await {
        Ok(link) => link,
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("⚠️  No link with code '{code}'").yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.clicks);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays total links and clicks.
async fn handle_stats(service: &LinkService<PgLinkRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let totals = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load totals: {}", e))?;

    println!(
        "  Links:  {}",
        totals.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        totals.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

fn format_last_clicked(link: &Link) -> String {
    link.last_clicked
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Shortens long URLs for table output.
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let head: String = value.chars().take(max_chars).collect();
    format!("{head}...")
}
