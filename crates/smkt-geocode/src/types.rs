//! Nominatim response shapes.

use serde::Deserialize;

/// One entry of a Nominatim `/search?format=jsonv2` response.
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub importance: Option<f64>,
}
