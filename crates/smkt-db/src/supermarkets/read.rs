//! Read operations for the `supermarkets` table.

use sqlx::PgPool;

use super::types::SupermarketRow;

/// Return every supermarket in store order (`id ASC`).
///
/// The proximity filter runs over this full list; the table holds a few
/// thousand rows for a whole country.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_supermarkets(pool: &PgPool) -> Result<Vec<SupermarketRow>, sqlx::Error> {
    sqlx::query_as::<_, SupermarketRow>(
        "SELECT id, name, brand, latitude, longitude, osm_id, created_at, updated_at \
         FROM supermarkets \
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}
