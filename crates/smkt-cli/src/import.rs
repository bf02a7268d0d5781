//! `import products`: load scraper JSON output into the `products` table.
//!
//! Records that fail normalization are logged and skipped so one bad row does
//! not abort the import.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use smkt_core::Product;
use smkt_scraper::{normalize_product, RawProduct};
use sqlx::PgPool;

/// Accepts either a bare array of records or an object with a `products`
/// array.
pub(crate) fn product_records(document: Value) -> anyhow::Result<Vec<Value>> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(records)) => Ok(records),
            _ => anyhow::bail!("expected a JSON array or an object with a \"products\" array"),
        },
        _ => anyhow::bail!("expected a JSON array or an object with a \"products\" array"),
    }
}

/// Normalizes every record, returning the good products and the number skipped.
pub(crate) fn normalize_records(records: Vec<Value>) -> (Vec<Product>, usize) {
    let mut products = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let record_id = index.to_string();
        let normalized = serde_json::from_value::<RawProduct>(record)
            .map_err(|e| e.to_string())
            .and_then(|raw| normalize_product(raw, &record_id).map_err(|e| e.to_string()));
        match normalized {
            Ok(product) => products.push(product),
            Err(error) => {
                tracing::warn!(record = index, %error, "skipping product record");
                skipped += 1;
            }
        }
    }

    (products, skipped)
}

pub(crate) async fn run_import_products(
    pool: &PgPool,
    file: &Path,
    replace: bool,
) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let (products, skipped) = normalize_records(product_records(document)?);

    let inserted = if replace {
        let (deleted, inserted) = smkt_db::replace_products(pool, &products).await?;
        println!("deleted {deleted} existing product(s)");
        inserted
    } else {
        smkt_db::insert_products(pool, &products).await?
    };

    tracing::info!(inserted, skipped, file = %file.display(), "products imported");
    println!("imported {inserted} product(s), skipped {skipped}");
    Ok(())
}
