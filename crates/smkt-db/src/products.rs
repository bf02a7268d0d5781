//! Database operations for the `products` table.

use chrono::{DateTime, Utc};
use smkt_core::Product;
use sqlx::{PgExecutor, PgPool};

use crate::DbError;

/// A row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub supermarket: String,
    pub on_discount: bool,
    pub original_price: Option<String>,
    pub discount_action: Option<String>,
    pub discount_date: Option<String>,
    pub discount_timestamp: Option<i64>,
    pub scraped_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            title: row.title,
            price: row.price,
            size: row.size,
            image: row.image_url,
            supermarket: row.supermarket,
            on_discount: row.on_discount,
            original_price: row.original_price,
            discount_action: row.discount_action,
            discount_date: row.discount_date,
            discount_timestamp: row.discount_timestamp,
        }
    }
}

/// Candidate products for `keyword`, in store order (`id ASC`).
///
/// ASCII keywords are prefiltered in SQL with `strpos(lower(title), lower($1))`;
/// `strpos` keeps `%` and `_` literal. Postgres `lower()` only folds ASCII
/// under a `C`/`POSIX` ctype, so a keyword with non-ASCII characters skips
/// the prefilter and returns every product. The caller applies the
/// authoritative case-insensitive match either way.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn find_products(pool: &PgPool, keyword: &str) -> Result<Vec<ProductRow>, sqlx::Error> {
    if keyword.is_ascii() {
        sqlx::query_as::<_, ProductRow>(
            "SELECT id, title, price, size, image_url, supermarket, on_discount, \
                    original_price, discount_action, discount_date, discount_timestamp, \
                    scraped_at \
             FROM products \
             WHERE strpos(lower(title), lower($1)) > 0 \
             ORDER BY id ASC",
        )
        .bind(keyword)
        .fetch_all(pool)
        .await
    } else {
        sqlx::query_as::<_, ProductRow>(
            "SELECT id, title, price, size, image_url, supermarket, on_discount, \
                    original_price, discount_action, discount_date, discount_timestamp, \
                    scraped_at \
             FROM products \
             ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }
}

/// Append a batch of products in one round-trip. Returns the number inserted.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn insert_products<'e, E>(executor: E, products: &[Product]) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    if products.is_empty() {
        return Ok(0);
    }

    let mut titles: Vec<String> = Vec::with_capacity(products.len());
    let mut prices: Vec<String> = Vec::with_capacity(products.len());
    let mut sizes: Vec<Option<String>> = Vec::with_capacity(products.len());
    let mut images: Vec<Option<String>> = Vec::with_capacity(products.len());
    let mut supermarkets: Vec<String> = Vec::with_capacity(products.len());
    let mut on_discounts: Vec<bool> = Vec::with_capacity(products.len());
    let mut original_prices: Vec<Option<String>> = Vec::with_capacity(products.len());
    let mut discount_actions: Vec<Option<String>> = Vec::with_capacity(products.len());
    let mut discount_dates: Vec<Option<String>> = Vec::with_capacity(products.len());
    let mut discount_timestamps: Vec<Option<i64>> = Vec::with_capacity(products.len());

    for p in products {
        titles.push(p.title.clone());
        prices.push(p.price.clone());
        sizes.push(p.size.clone());
        images.push(p.image.clone());
        supermarkets.push(p.supermarket.clone());
        on_discounts.push(p.on_discount);
        original_prices.push(p.original_price.clone());
        discount_actions.push(p.discount_action.clone());
        discount_dates.push(p.discount_date.clone());
        discount_timestamps.push(p.discount_timestamp);
    }

    let rows_affected = sqlx::query(
        "INSERT INTO products \
             (title, price, size, image_url, supermarket, on_discount, \
              original_price, discount_action, discount_date, discount_timestamp) \
         SELECT * FROM UNNEST(\
              $1::text[], $2::text[], $3::text[], $4::text[], $5::text[], $6::bool[], \
              $7::text[], $8::text[], $9::text[], $10::int8[])",
    )
    .bind(&titles)
    .bind(&prices)
    .bind(&sizes)
    .bind(&images)
    .bind(&supermarkets)
    .bind(&on_discounts)
    .bind(&original_prices)
    .bind(&discount_actions)
    .bind(&discount_dates)
    .bind(&discount_timestamps)
    .execute(executor)
    .await?
    .rows_affected();

    Ok(rows_affected)
}

/// Delete every product. Returns the number of rows removed.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn clear_products<'e, E>(executor: E) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let rows_affected = sqlx::query("DELETE FROM products")
        .execute(executor)
        .await?
        .rows_affected();
    Ok(rows_affected)
}

/// Replace the whole product set with `products` in one transaction.
///
/// Readers see either the old set or the new one, never an empty table, and
/// a failed insert leaves the old set in place. Returns `(deleted, inserted)`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement or the commit fails.
pub async fn replace_products(pool: &PgPool, products: &[Product]) -> Result<(u64, u64), DbError> {
    let mut tx = pool.begin().await?;
    let deleted = clear_products(&mut *tx).await?;
    let inserted = insert_products(&mut *tx, products).await?;
    tx.commit().await?;
    Ok((deleted, inserted))
}
