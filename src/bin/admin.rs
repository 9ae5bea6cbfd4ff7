//! CLI administration tool for travel-planner.
//!
//! Provides commands for seeding the catalog, viewing record counts, and
//! performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Seed a sample catalog (destinations, hotels, transports)
//! cargo run --bin admin -- seed
//!
//! # View record counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Catalog Seeding**: A small, self-consistent sample catalog to try
//!   the recommendation endpoints against
//! - **Statistics**: Record counts per table
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use travel_planner::domain::entities::{
    BudgetLevel, NewDestination, NewHotel, NewTransport, Objective, TransportMode, TravelCategory,
};
use travel_planner::domain::repositories::{
    DestinationRepository, HotelRepository, TransportRepository,
};
use travel_planner::infrastructure::persistence::{
    PgDestinationRepository, PgHotelRepository, PgTransportRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing travel-planner.
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
    /// Seed the catalog with sample data
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { yes } => seed_catalog(&pool, yes).await?,
        Commands::Stats => show_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Seeds a small sample catalog.
///
/// # Flow
///
/// 1. Confirm (unless `--yes` flag)
/// 2. Insert three destinations across budget tiers
/// 3. Insert hotels per destination covering each star band
/// 4. Insert transports covering the bus/train/flight distance ladder
async fn seed_catalog(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌍 Seed Sample Catalog".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert sample destinations, hotels and transports?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());
    let destinations = PgDestinationRepository::new(pool.clone());
    let hotels = PgHotelRepository::new(pool.clone());
    let transports = PgTransportRepository::new(pool);

    let goa = destinations
        .create(NewDestination {
            name: "Goa".to_string(),
            country: "India".to_string(),
            city: "Panaji".to_string(),
            description: "Beaches, nightlife and Portuguese heritage".to_string(),
            location: "West coast of India".to_string(),
            category: TravelCategory::Beach,
            best_season: "November-February".to_string(),
            budget_level: BudgetLevel::Low,
            budget_min: Some(Decimal::from(200)),
            budget_max: Some(Decimal::from(800)),
            objectives_supported: vec![Objective::Leisure, Objective::Honeymoon],
            is_active: true,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create destination: {}", e))?;

    let rome = destinations
        .create(NewDestination {
            name: "Rome".to_string(),
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            description: "Ancient ruins and world-class food".to_string(),
            location: "Lazio, central Italy".to_string(),
            category: TravelCategory::Historical,
            best_season: "April-June".to_string(),
            budget_level: BudgetLevel::Medium,
            budget_min: Some(Decimal::from(900)),
            budget_max: Some(Decimal::from(2500)),
            objectives_supported: vec![Objective::Leisure, Objective::Family],
            is_active: true,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create destination: {}", e))?;

    let serengeti = destinations
        .create(NewDestination {
            name: "Serengeti".to_string(),
            country: "Tanzania".to_string(),
            city: "Arusha".to_string(),
            description: "Safari across the great migration routes".to_string(),
            location: "Northern Tanzania".to_string(),
            category: TravelCategory::Wildlife,
            best_season: "June-October".to_string(),
            budget_level: BudgetLevel::High,
            budget_min: Some(Decimal::from(3000)),
            budget_max: Some(Decimal::from(9000)),
            objectives_supported: vec![Objective::Adventure, Objective::Honeymoon],
            is_active: true,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create destination: {}", e))?;

    println!("  {} destinations", "3".cyan());

    let sample_hotels = [
        (goa.id, "Palm Guest House", 1, 18, BudgetLevel::Low),
        (goa.id, "Baga Beach Stay", 2, 30, BudgetLevel::Low),
        (rome.id, "Trastevere Rooms", 3, 110, BudgetLevel::Medium),
        (rome.id, "Colosseo Suites", 4, 240, BudgetLevel::High),
        (serengeti.id, "Mara River Lodge", 5, 650, BudgetLevel::High),
    ];

    for (destination_id, name, stars, price, category) in sample_hotels {
        hotels
            .create(NewHotel {
                destination_id,
                name: name.to_string(),
                stars,
                price_per_night: Decimal::from(price),
                budget_category: category,
                description: String::new(),
                amenities: "wifi, breakfast".to_string(),
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create hotel: {}", e))?;
    }

    println!("  {} hotels", sample_hotels.len().to_string().cyan());

    let sample_transports = [
        ("Mumbai", "Panaji", TransportMode::Bus, 120, 8, 3.0),
        ("Mumbai", "Panaji", TransportMode::Train, 590, 15, 9.0),
        ("Milan", "Rome", TransportMode::Train, 570, 45, 3.5),
        ("London", "Rome", TransportMode::Flight, 1800, 160, 2.8),
        ("Nairobi", "Arusha", TransportMode::Flight, 1100, 210, 1.5),
    ];

    for (origin, destination, mode, distance_km, price, duration_hours) in sample_transports {
        transports
            .create(NewTransport {
                origin: origin.to_string(),
                destination: destination.to_string(),
                mode,
                distance_km,
                price: Decimal::from(price),
                duration_hours,
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create transport: {}", e))?;
    }

    println!("  {} transports", sample_transports.len().to_string().cyan());
    println!();
    println!("{}", "✅ Catalog seeded successfully!".green().bold());
    println!();
    println!("{}", "Try it:".bright_white());
    println!(
        "  curl \"http://localhost:3000/api/destinations/recommended?budget=low&interest=beach\""
    );
    println!();

    Ok(())
}

/// Shows record counts per table.
async fn show_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Catalog Statistics".bright_blue().bold());
    println!();

    let tables = [
        ("Destinations", "destinations"),
        ("Hotels", "hotels"),
        ("Transports", "transports"),
        ("Travel plans", "travel_plans"),
        ("Itinerary days", "itinerary_days"),
    ];

    for (label, table) in tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!("  {:<16} {}", label, count.to_string().cyan());
    }

    println!();

    Ok(())
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let result: i32 = sqlx::query_scalar("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            if result == 1 {
                println!("{}", "✅ Database connection OK".green().bold());
            }
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Failed to query database version")?;

            println!("{}", "🗄  Database Info".bright_blue().bold());
            println!();
            println!("  {}", version);
        }
    }

    Ok(())
}
