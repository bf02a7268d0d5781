//! Write operations for the `supermarkets` table.

use sqlx::PgPool;

use super::types::NewSupermarket;

/// Insert new supermarkets and refresh existing ones matched by `osm_id`.
///
/// Returns `(new_count, updated_count)`. The whole batch goes in one
/// `INSERT … SELECT * FROM UNNEST(…) ON CONFLICT` round-trip.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn upsert_supermarkets(
    pool: &PgPool,
    supermarkets: &[NewSupermarket],
) -> Result<(u64, u64), sqlx::Error> {
    if supermarkets.is_empty() {
        return Ok((0, 0));
    }

    let mut names: Vec<String> = Vec::with_capacity(supermarkets.len());
    let mut brands: Vec<String> = Vec::with_capacity(supermarkets.len());
    let mut latitudes: Vec<f64> = Vec::with_capacity(supermarkets.len());
    let mut longitudes: Vec<f64> = Vec::with_capacity(supermarkets.len());
    let mut osm_ids: Vec<Option<String>> = Vec::with_capacity(supermarkets.len());

    for s in supermarkets {
        names.push(s.name.clone());
        brands.push(s.brand.clone());
        latitudes.push(s.latitude);
        longitudes.push(s.longitude);
        osm_ids.push(s.osm_id.clone());
    }

    let rows: Vec<bool> = sqlx::query_scalar::<_, bool>(
        "INSERT INTO supermarkets (name, brand, latitude, longitude, osm_id) \
         SELECT * FROM UNNEST($1::text[], $2::text[], $3::float8[], $4::float8[], $5::text[]) \
         ON CONFLICT (osm_id) DO UPDATE SET \
             name       = EXCLUDED.name, \
             brand      = EXCLUDED.brand, \
             latitude   = EXCLUDED.latitude, \
             longitude  = EXCLUDED.longitude, \
             updated_at = NOW() \
         RETURNING (xmax = 0) AS is_new",
    )
    .bind(&names)
    .bind(&brands)
    .bind(&latitudes)
    .bind(&longitudes)
    .bind(&osm_ids)
    .fetch_all(pool)
    .await?;

    let new_count = rows.iter().filter(|&&is_new| is_new).count() as u64;
    let updated_count = rows.len() as u64 - new_count;

    Ok((new_count, updated_count))
}

/// Delete every supermarket. Returns the number of rows removed.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn clear_supermarkets(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let rows_affected = sqlx::query("DELETE FROM supermarkets")
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows_affected)
}
