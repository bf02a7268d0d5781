mod collect;
mod db;
mod import;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::collect::CollectCommands;

#[derive(Debug, Parser)]
#[command(name = "smkt-cli")]
#[command(about = "smkt command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Populate reference data from external sources
    Collect {
        #[command(subcommand)]
        command: CollectCommands,
    },
    /// Load scraper output into the database
    Import {
        #[command(subcommand)]
        command: ImportCommands,
    },
    /// Resolve an address to coordinates
    Geocode {
        address: String,
    },
    /// Search products at supermarkets near a point
    Search {
        keyword: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        radius_km: f64,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Delete stored rows; clears both tables when no flag is given
    Clear {
        #[arg(long)]
        products: bool,
        #[arg(long)]
        supermarkets: bool,
    },
    /// Print row counts
    Stats,
}

#[derive(Debug, Subcommand)]
enum ImportCommands {
    /// Import a JSON file of scraped products
    Products {
        file: PathBuf,
        /// Delete existing products before importing
        #[arg(long)]
        replace: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("smkt-cli: no command given; run with --help");
        return Ok(());
    };

    let config = smkt_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match command {
        Commands::Db { command } => {
            let pool = connect(&config).await?;
            match command {
                DbCommands::Ping => db::run_ping(&pool).await,
                DbCommands::Migrate => db::run_migrate(&pool).await,
                DbCommands::Clear {
                    products,
                    supermarkets,
                } => db::run_clear(&pool, products, supermarkets).await,
                DbCommands::Stats => db::run_stats(&pool).await,
            }
        }
        Commands::Collect { command } => {
            let pool = connect(&config).await?;
            collect::run(&pool, &config, command).await
        }
        Commands::Import {
            command: ImportCommands::Products { file, replace },
        } => {
            let pool = connect(&config).await?;
            import::run_import_products(&pool, &file, replace).await
        }
        Commands::Geocode { address } => search::run_geocode(&config, &address).await,
        Commands::Search {
            keyword,
            lat,
            lon,
            radius_km,
        } => {
            let pool = connect(&config).await?;
            search::run_search(&pool, &keyword, lat, lon, radius_km).await
        }
    }
}

async fn connect(config: &smkt_core::AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = smkt_db::PoolConfig::from_app_config(config);
    Ok(smkt_db::connect_pool(config.require_database_url()?, pool_config).await?)
}

#[cfg(test)]
mod tests;
