//! Proximity filter and keyword product search.
//!
//! Both functions are pure: callers load candidates from the store and pass
//! them in. Radius validation happens before these are reached.

use std::collections::HashSet;

use crate::geo::{haversine_km, Coordinates};
use crate::types::{Product, Supermarket};

/// Returns the candidates whose haversine distance to `center` is at most
/// `radius_km`, nearest first.
///
/// The boundary is inclusive. Equidistant supermarkets keep their input
/// order, so the result is stable for a fixed input.
pub fn find_supermarkets<I>(center: Coordinates, radius_km: f64, candidates: I) -> Vec<Supermarket>
where
    I: IntoIterator<Item = Supermarket>,
{
    let mut in_range: Vec<(f64, Supermarket)> = candidates
        .into_iter()
        .filter_map(|s| {
            let d = haversine_km(center, s.coordinates());
            (d <= radius_km).then_some((d, s))
        })
        .collect();

    in_range.sort_by(|a, b| a.0.total_cmp(&b.0));
    in_range.into_iter().map(|(_, s)| s).collect()
}

/// Case-insensitive substring test of `keyword` against a product title.
#[must_use]
pub fn title_matches(title: &str, keyword: &str) -> bool {
    title.to_lowercase().contains(&keyword.to_lowercase())
}

/// Keeps products whose title contains `keyword` (case-insensitive) and whose
/// supermarket is one of `in_range` by name.
///
/// Input order is preserved. `keyword` must already be validated non-empty.
pub fn search_products<I>(keyword: &str, in_range: &[Supermarket], products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let names: HashSet<&str> = in_range.iter().map(|s| s.name.as_str()).collect();
    if names.is_empty() {
        return Vec::new();
    }

    products
        .into_iter()
        .filter(|p| names.contains(p.supermarket.as_str()))
        .filter(|p| title_matches(&p.title, keyword))
        .collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
