//! CLI administration tool for the usuario and venta services.
//!
//! Provides commands for seeding test data, viewing row counts, and
//! performing database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Insert 20 fake usuarios (skipped if any exist)
//! cargo run --bin admin -- seed usuarios
//!
//! # Insert 50 fake ventas for the existing usuarios, no prompt
//! cargo run --bin admin -- seed ventas --count 50 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use microservicios::application::seeder::{
    MAX_USUARIOS_SEED_COUNT, MAX_VENTAS_SEED_COUNT, SeedOutcome, Seeder, USUARIOS_SEED_COUNT,
    VENTAS_SEED_COUNT,
};
use microservicios::config::Config;
use microservicios::domain::repositories::{UsuarioRepository, VentaRepository};
use microservicios::infrastructure::persistence::{PgUsuarioRepository, PgVentaRepository};

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the usuario and venta services.
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
    /// Fill empty tables with fake data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Seed subcommands.
#[derive(Subcommand)]
enum SeedTarget {
    /// Insert fake usuarios
    Usuarios {
        /// Number of usuarios to insert
        #[arg(
            short,
            long,
            default_value_t = USUARIOS_SEED_COUNT,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_USUARIOS_SEED_COUNT as u64)
        )]
        count: usize,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Insert fake ventas referencing existing usuarios
    Ventas {
        /// Number of ventas to insert
        #[arg(
            short,
            long,
            default_value_t = VENTAS_SEED_COUNT,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_VENTAS_SEED_COUNT as u64)
        )]
        count: usize,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { target } => handle_seed(target, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches seed commands after an optional confirmation.
async fn handle_seed(target: SeedTarget, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let seeder = Seeder::new(
        Arc::new(PgUsuarioRepository::new(pool.clone())),
        Arc::new(PgVentaRepository::new(pool)),
    );
    let mut rng = rand::rng();

    let (label, count, yes) = match target {
        SeedTarget::Usuarios { count, yes } => ("usuarios", count, yes),
        SeedTarget::Ventas { count, yes } => ("ventas", count, yes),
    };

    println!("{}", format!("🌱 Seed {label}").bright_blue().bold());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {count} fake {label}?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = match target {
        SeedTarget::Usuarios { .. } => seeder.seed_usuarios(&mut rng, count).await,
        SeedTarget::Ventas { .. } => {
            seeder
                .seed_ventas(&mut rng, count, chrono::Local::now().date_naive())
                .await
        }
    }
    .map_err(|e| anyhow::anyhow!("Failed to seed {}: {}", label, e))?;

    match outcome {
        SeedOutcome::Inserted(n) => {
            println!(
                "{} {} {}",
                "✅ Inserted".green().bold(),
                n.to_string().bright_white().bold(),
                label
            );
        }
        SeedOutcome::AlreadySeeded(existing) => {
            println!(
                "{}",
                format!("⚠️  {existing} {label} already present, nothing inserted").yellow()
            );
        }
        SeedOutcome::NoUsuarios => {
            println!("{}", "⚠️  No usuarios found, seed usuarios first".yellow());
            println!(
                "  Run: {} admin -- seed usuarios",
                "cargo run --bin".bright_cyan()
            );
        }
    }
    println!();

    Ok(())
}

/// Displays row counts per table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let shared = Arc::new(pool.clone());
    let usuarios_count = PgUsuarioRepository::new(shared.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count usuarios: {}", e))?;
    let ventas_count = PgVentaRepository::new(shared)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count ventas: {}", e))?;

    let orphan_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM venta v WHERE NOT EXISTS \
         (SELECT 1 FROM usuario u WHERE u.id_usuario = v.id_usuario)",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Usuarios:              {}",
        usuarios_count.to_string().bright_green().bold()
    );
    println!(
        "  Ventas:                {}",
        ventas_count.to_string().bright_green().bold()
    );
    println!(
        "  Ventas without usuario: {}",
        orphan_count.to_string().bright_yellow().bold()
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

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }
    println!();

    Ok(())
}
