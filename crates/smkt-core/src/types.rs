use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// A geocoded address. Produced per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Display address as resolved by the geocoder.
    pub address: String,
}

impl Location {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A physical supermarket branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supermarket {
    pub name: String,
    /// Chain name, e.g. `"Albert Heijn"`.
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Supermarket {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A scraped product offer at a named supermarket.
///
/// `size` and `image` are `None` when the source had no value; the scrapers'
/// `"N/A"` placeholder never makes it this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Price as displayed by the source, e.g. `"2.69"`.
    pub price: String,
    pub size: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Name of the supermarket offering this product.
    pub supermarket: String,
    #[serde(default)]
    pub on_discount: bool,
    #[serde(default)]
    pub original_price: Option<String>,
    /// Promotion label, e.g. `"2e halve prijs"`.
    #[serde(default)]
    pub discount_action: Option<String>,
    /// Promotion end date as printed by the source.
    #[serde(default)]
    pub discount_date: Option<String>,
    /// `discount_date` as Unix seconds, when it could be parsed.
    #[serde(default)]
    pub discount_timestamp: Option<i64>,
}
