//! `db` subcommand handlers.

use sqlx::PgPool;

pub(crate) async fn run_ping(pool: &PgPool) -> anyhow::Result<()> {
    smkt_db::ping(pool).await?;
    println!("database reachable");
    Ok(())
}

pub(crate) async fn run_migrate(pool: &PgPool) -> anyhow::Result<()> {
    let applied = smkt_db::run_migrations(pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Which tables `db clear` empties. Naming neither flag means both.
pub(crate) fn clear_targets(products: bool, supermarkets: bool) -> (bool, bool) {
    if products || supermarkets {
        (products, supermarkets)
    } else {
        (true, true)
    }
}

pub(crate) async fn run_clear(
    pool: &PgPool,
    products: bool,
    supermarkets: bool,
) -> anyhow::Result<()> {
    let (clear_products, clear_supermarkets) = clear_targets(products, supermarkets);

    if clear_products {
        let deleted = smkt_db::clear_products(pool).await?;
        println!("deleted {deleted} product(s)");
    }
    if clear_supermarkets {
        let deleted = smkt_db::clear_supermarkets(pool).await?;
        println!("deleted {deleted} supermarket(s)");
    }
    Ok(())
}

pub(crate) async fn run_stats(pool: &PgPool) -> anyhow::Result<()> {
    let stats = smkt_db::store_stats(pool).await?;

    println!("supermarkets: {}", stats.supermarket_count);
    println!(
        "products:     {} ({} on discount)",
        stats.product_count, stats.discounted_product_count
    );

    if !stats.brands.is_empty() {
        println!();
        println!("{:<16}SUPERMARKETS", "BRAND");
        for brand in &stats.brands {
            println!("{:<16}{}", brand.brand, brand.supermarket_count);
        }
    }
    Ok(())
}
