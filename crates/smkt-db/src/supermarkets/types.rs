//! Row types for the `supermarkets` table.

use chrono::{DateTime, Utc};
use smkt_core::Supermarket;

/// Input record for inserting/upserting a supermarket.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupermarket {
    pub name: String,
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
    /// OpenStreetMap element id, e.g. `"node/123"`. Rows without one are
    /// always inserted, never merged.
    pub osm_id: Option<String>,
}

/// A row from the `supermarkets` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SupermarketRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
    pub osm_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SupermarketRow> for Supermarket {
    fn from(row: SupermarketRow) -> Self {
        Self {
            name: row.name,
            brand: row.brand,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
