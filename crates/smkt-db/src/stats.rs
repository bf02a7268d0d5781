//! Row counts for the CLI `db stats` command.

use sqlx::PgPool;

/// Supermarket count for one chain.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandCountRow {
    pub brand: String,
    pub supermarket_count: i64,
}

#[derive(Debug, Clone)]
pub struct StoreStats {
    pub supermarket_count: i64,
    pub product_count: i64,
    pub discounted_product_count: i64,
    /// Ordered by `supermarket_count DESC, brand ASC`.
    pub brands: Vec<BrandCountRow>,
}

/// Collect table counts and the per-brand supermarket breakdown.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if any query fails.
pub async fn store_stats(pool: &PgPool) -> Result<StoreStats, sqlx::Error> {
    let supermarket_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supermarkets")
        .fetch_one(pool)
        .await?;

    let (product_count, discounted_product_count): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE on_discount = TRUE) FROM products",
    )
    .fetch_one(pool)
    .await?;

    let brands = sqlx::query_as::<_, BrandCountRow>(
        "SELECT brand, COUNT(*) AS supermarket_count \
         FROM supermarkets \
         GROUP BY brand \
         ORDER BY supermarket_count DESC, brand ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(StoreStats {
        supermarket_count,
        product_count,
        discounted_product_count,
        brands,
    })
}
