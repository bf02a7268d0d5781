use smkt_core::Coordinates;

/// Server-side timeout embedded in the query, in seconds.
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Builds an Overpass QL query for supermarket nodes and ways within
/// `radius_km` of `center`. Ways are reduced to their centroid.
#[must_use]
pub fn supermarkets_query(center: Coordinates, radius_km: f64) -> String {
    let radius_m = (radius_km * 1000.0).round();
    let around = format!(
        "(around:{radius_m},{},{})",
        center.latitude, center.longitude
    );
    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
         (\n  node[\"shop\"=\"supermarket\"]{around};\n  way[\"shop\"=\"supermarket\"]{around};\n);\n\
         out center;"
    )
}
