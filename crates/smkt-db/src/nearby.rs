//! The read path shared by the API and CLI: store reads composed with the
//! pure proximity filter and keyword search from `smkt-core`.

use smkt_core::{Coordinates, Product, RadiusKm, Supermarket};
use sqlx::PgPool;

use crate::{find_products, list_supermarkets, DbError};

/// Supermarkets within `radius` of `center`, nearest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the store cannot be read.
pub async fn find_supermarkets_in_radius(
    pool: &PgPool,
    center: Coordinates,
    radius: RadiusKm,
) -> Result<Vec<Supermarket>, DbError> {
    let rows = list_supermarkets(pool).await?;
    let candidates = rows.len();
    let in_range =
        smkt_core::find_supermarkets(center, radius.km(), rows.into_iter().map(Supermarket::from));

    tracing::debug!(
        candidates,
        in_range = in_range.len(),
        radius_km = radius.km(),
        "proximity filter applied"
    );
    Ok(in_range)
}

/// Products matching `keyword` that are sold at a supermarket within
/// `radius` of `center`, in store order.
///
/// `keyword` must already be trimmed and non-empty.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the store cannot be read.
pub async fn search_products_in_radius(
    pool: &PgPool,
    keyword: &str,
    center: Coordinates,
    radius: RadiusKm,
) -> Result<Vec<Product>, DbError> {
    let in_range = find_supermarkets_in_radius(pool, center, radius).await?;
    if in_range.is_empty() {
        return Ok(Vec::new());
    }

    let rows = find_products(pool, keyword).await?;
    Ok(smkt_core::search_products(
        keyword,
        &in_range,
        rows.into_iter().map(Product::from),
    ))
}
