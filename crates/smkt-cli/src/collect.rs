//! `collect` subcommand: supermarket discovery from OpenStreetMap.

use clap::{ArgGroup, Subcommand};
use smkt_core::{AppConfig, Coordinates, RadiusKm};
use smkt_db::NewSupermarket;
use smkt_scraper::{DiscoveredSupermarket, OverpassClient};
use sqlx::PgPool;

const OVERPASS_MAX_RETRIES: u32 = 3;
const OVERPASS_BACKOFF_BASE_SECS: u64 = 2;

#[derive(Debug, Subcommand)]
pub enum CollectCommands {
    /// Discover supermarkets around an address or coordinate and store them
    #[command(group(ArgGroup::new("center").required(true).args(["address", "lat"])))]
    Supermarkets {
        /// Free-text address to search around
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        address: Option<String>,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        #[arg(long)]
        radius_km: f64,

        /// Print what was found without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
}

pub(crate) async fn run(
    pool: &PgPool,
    config: &AppConfig,
    command: CollectCommands,
) -> anyhow::Result<()> {
    match command {
        CollectCommands::Supermarkets {
            address,
            lat,
            lon,
            radius_km,
            dry_run,
        } => {
            let radius = RadiusKm::new(radius_km)?;
            let center = match (address, lat, lon) {
                (Some(address), _, _) => {
                    let address = smkt_core::validate_address(&address)?;
                    crate::search::geocoder(config)?.resolve(address).await?
                }
                (None, Some(lat), Some(lon)) => Coordinates::validated(lat, lon)?,
                _ => anyhow::bail!("either --address or both --lat and --lon are required"),
            };
            run_collect_supermarkets(pool, config, center, radius, dry_run).await
        }
    }
}

pub(crate) fn to_new_supermarket(found: DiscoveredSupermarket) -> NewSupermarket {
    NewSupermarket {
        name: found.name,
        brand: found.brand,
        latitude: found.latitude,
        longitude: found.longitude,
        osm_id: Some(found.osm_id),
    }
}

async fn run_collect_supermarkets(
    pool: &PgPool,
    config: &AppConfig,
    center: Coordinates,
    radius: RadiusKm,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = OverpassClient::new(
        &config.overpass_url,
        config.overpass_timeout_secs,
        &config.user_agent,
        OVERPASS_MAX_RETRIES,
        OVERPASS_BACKOFF_BASE_SECS,
    )?;
    let found = client.find_supermarkets(center, radius.km()).await?;

    if dry_run {
        println!("{:<16}{:<36}{:>10}{:>10}", "BRAND", "NAME", "LAT", "LON");
        for s in &found {
            println!(
                "{:<16}{:<36}{:>10.5}{:>10.5}",
                s.brand, s.name, s.latitude, s.longitude
            );
        }
        println!("{} supermarket(s) found (dry run, nothing written)", found.len());
        return Ok(());
    }

    let rows: Vec<NewSupermarket> = found.into_iter().map(to_new_supermarket).collect();
    let (inserted, updated) = smkt_db::upsert_supermarkets(pool, &rows).await?;
    tracing::info!(inserted, updated, "supermarkets stored");
    println!("{inserted} new, {updated} updated supermarket(s)");
    Ok(())
}
