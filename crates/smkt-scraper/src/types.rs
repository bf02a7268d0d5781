use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level Overpass `[out:json]` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A single OSM node or way.
///
/// Nodes carry `lat`/`lon` directly; ways only have a `center` when the query
/// ends in `out center;`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Node position, or the way centroid.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon, self.center) {
            (Some(lat), Some(lon), _) => Some((lat, lon)),
            (_, _, Some(center)) => Some((center.lat, center.lon)),
            _ => None,
        }
    }

    /// Stable OSM identity, e.g. `"node/123"`.
    #[must_use]
    pub fn osm_id(&self) -> String {
        format!("{}/{}", self.kind, self.id)
    }
}

/// A supermarket branch found in OpenStreetMap with a recognised brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveredSupermarket {
    pub osm_id: String,
    pub name: String,
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Price as emitted by the external scrapers: usually a display string,
/// occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Text(String),
    Number(f64),
}

/// A product record as written by the external scrapers.
///
/// Every field is optional here; [`crate::normalize_product`] decides what is
/// actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    pub title: Option<String>,
    pub price: Option<RawPrice>,
    pub size: Option<String>,
    pub image: Option<String>,
    pub supermarket: Option<String>,
    #[serde(default)]
    pub on_discount: bool,
    pub original_price: Option<RawPrice>,
    pub discount_action: Option<String>,
    pub discount_date: Option<String>,
}
