use std::collections::HashSet;

use crate::overpass::brand::match_brand;
use crate::types::{DiscoveredSupermarket, OverpassElement};

/// Coordinates rounded to 5 decimals (about a metre), used as a dedup key.
fn coordinate_key(latitude: f64, longitude: f64) -> (i64, i64) {
    #[allow(clippy::cast_possible_truncation)]
    let round = |v: f64| (v * 100_000.0).round() as i64;
    (round(latitude), round(longitude))
}

/// Converts raw Overpass elements into recognised supermarkets.
///
/// Elements without a position or a known brand are skipped. When two
/// elements share a position (a node inside its own building way, say) the
/// first one wins.
#[must_use]
pub fn collect_supermarkets(elements: Vec<OverpassElement>) -> Vec<DiscoveredSupermarket> {
    let total = elements.len();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for element in elements {
        let Some((latitude, longitude)) = element.position() else {
            continue;
        };
        let name_tag = element.tags.get("name").map(String::as_str);
        let Some(brand) = match_brand(element.tags.get("brand").map(String::as_str), name_tag)
        else {
            continue;
        };
        if !seen.insert(coordinate_key(latitude, longitude)) {
            continue;
        }

        let name = name_tag
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(brand)
            .to_owned();

        found.push(DiscoveredSupermarket {
            osm_id: element.osm_id(),
            name,
            brand: brand.to_owned(),
            latitude,
            longitude,
        });
    }

    tracing::debug!(total, kept = found.len(), "overpass elements filtered");
    found
}
