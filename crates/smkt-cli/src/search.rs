//! `geocode` and `search` subcommands, sharing the API's read path.

use smkt_core::{AppConfig, Coordinates, Product, RadiusKm};
use smkt_geocode::NominatimClient;
use sqlx::PgPool;

const TITLE_WIDTH: usize = 48;

pub(crate) fn geocoder(config: &AppConfig) -> anyhow::Result<NominatimClient> {
    Ok(NominatimClient::with_base_url(
        &config.user_agent,
        config.geocoder_timeout_secs,
        &config.geocoder_url,
    )?)
}

pub(crate) async fn run_geocode(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let address = smkt_core::validate_address(address)?;
    match geocoder(config)?.geocode(address).await {
        Ok(location) => {
            println!("{:.6}, {:.6}", location.latitude, location.longitude);
            println!("{}", location.address);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            anyhow::bail!("{e}; try a more specific address")
        }
        Err(e) => Err(e.into()),
    }
}

fn truncate(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        format!("{}...", title.chars().take(TITLE_WIDTH - 3).collect::<String>())
    } else {
        title.to_owned()
    }
}

pub(crate) fn format_row(product: &Product) -> String {
    let discount = if product.on_discount {
        product.discount_action.as_deref().unwrap_or("yes")
    } else {
        ""
    };
    format!(
        "{:<width$}  {:>8}  {:<20}{}",
        truncate(&product.title),
        product.price,
        product.supermarket,
        discount,
        width = TITLE_WIDTH
    )
}

pub(crate) async fn run_search(
    pool: &PgPool,
    keyword: &str,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> anyhow::Result<()> {
    let keyword = smkt_core::validate_keyword(keyword)?;
    let center = Coordinates::validated(lat, lon)?;
    let radius = RadiusKm::new(radius_km)?;

    let products = smkt_db::search_products_in_radius(pool, keyword, center, radius).await?;
    if products.is_empty() {
        println!("no products matching '{keyword}' within {radius}");
        return Ok(());
    }

    println!(
        "{:<width$}  {:>8}  {:<20}DISCOUNT",
        "TITLE",
        "PRICE",
        "SUPERMARKET",
        width = TITLE_WIDTH
    );
    for product in &products {
        println!("{}", format_row(product));
    }
    println!("{} product(s)", products.len());
    Ok(())
}
