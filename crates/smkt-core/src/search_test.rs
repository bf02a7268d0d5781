use super::*;
use crate::geo::EARTH_RADIUS_KM;

const DAM_SQUARE: Coordinates = Coordinates::new(52.3731, 4.8932);

/// A point `km` kilometres due north of `from`.
fn north_of(from: Coordinates, km: f64) -> Coordinates {
    Coordinates::new(
        from.latitude + (km / EARTH_RADIUS_KM).to_degrees(),
        from.longitude,
    )
}

fn store(name: &str, at: Coordinates) -> Supermarket {
    Supermarket {
        name: name.to_string(),
        brand: "Albert Heijn".to_string(),
        latitude: at.latitude,
        longitude: at.longitude,
    }
}

fn product(title: &str, supermarket: &str) -> Product {
    Product {
        title: title.to_string(),
        price: "1.99".to_string(),
        size: Some("500 ml".to_string()),
        image: None,
        supermarket: supermarket.to_string(),
        on_discount: false,
        original_price: None,
        discount_action: None,
        discount_date: None,
        discount_timestamp: None,
    }
}

#[test]
fn dam_square_5km_keeps_3km_store_and_drops_8km_store() {
    let near = store("AH Nieuwmarkt", north_of(DAM_SQUARE, 3.0));
    let far = store("AH Zaandam", north_of(DAM_SQUARE, 8.0));

    let result = find_supermarkets(DAM_SQUARE, 5.0, vec![far, near.clone()]);

    assert_eq!(result, vec![near]);
}

#[test]
fn boundary_distance_is_included() {
    let edge = store("Edge", Coordinates::new(52.41, 4.93));
    let exact = haversine_km(DAM_SQUARE, edge.coordinates());

    let result = find_supermarkets(DAM_SQUARE, exact, vec![edge.clone()]);
    assert_eq!(result, vec![edge.clone()]);

    let just_short = find_supermarkets(DAM_SQUARE, exact - 1e-9, vec![edge]);
    assert!(just_short.is_empty());
}

#[test]
fn zero_radius_returns_only_stores_at_center() {
    let here = store("Here", DAM_SQUARE);
    let next_door = store("Next door", north_of(DAM_SQUARE, 0.01));

    let result = find_supermarkets(DAM_SQUARE, 0.0, vec![next_door, here.clone()]);

    assert_eq!(result, vec![here]);
}

#[test]
fn results_are_sorted_nearest_first() {
    let a = store("A", north_of(DAM_SQUARE, 4.0));
    let b = store("B", north_of(DAM_SQUARE, 1.0));
    let c = store("C", north_of(DAM_SQUARE, 2.5));

    let names: Vec<String> = find_supermarkets(DAM_SQUARE, 5.0, vec![a, b, c])
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, ["B", "C", "A"]);
}

#[test]
fn equidistant_stores_keep_input_order() {
    let spot = north_of(DAM_SQUARE, 2.0);
    let first = store("First", spot);
    let second = store("Second", spot);

    let names: Vec<String> = find_supermarkets(DAM_SQUARE, 5.0, vec![first, second])
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn every_returned_store_is_within_radius_and_every_dropped_store_is_outside() {
    let candidates: Vec<Supermarket> = (0..40)
        .map(|i| {
            let km = f64::from(i) * 0.5;
            store(&format!("S{i}"), north_of(DAM_SQUARE, km))
        })
        .collect();

    for radius in [0.0, 0.1, 1.0, 4.75, 10.0, 19.5, 50.0] {
        let kept = find_supermarkets(DAM_SQUARE, radius, candidates.clone());
        let kept_names: HashSet<&str> = kept.iter().map(|s| s.name.as_str()).collect();
        for s in &candidates {
            let inside = haversine_km(DAM_SQUARE, s.coordinates()) <= radius;
            assert_eq!(
                inside,
                kept_names.contains(s.name.as_str()),
                "radius {radius} disagreed on {}",
                s.name
            );
        }
    }
}

#[test]
fn knorr_search_only_returns_in_range_store_products() {
    let in_range = vec![
        store("A", north_of(DAM_SQUARE, 1.0)),
        store("B", north_of(DAM_SQUARE, 2.0)),
    ];
    let products = vec![
        product("Knorr Bouillon", "A"),
        product("Knorr Soup", "C"),
        product("Unox Rookworst", "B"),
    ];

    let result = search_products("Knorr", &in_range, products);

    assert_eq!(result, vec![product("Knorr Bouillon", "A")]);
}

#[test]
fn keyword_matching_ignores_case() {
    let in_range = vec![store("A", DAM_SQUARE)];
    let products = vec![
        product("Knorr Bouillon", "A"),
        product("KNORR wereldgerechten", "A"),
        product("Honig soep", "A"),
    ];

    let lower = search_products("knorr", &in_range, products.clone());
    let upper = search_products("KNORR", &in_range, products);

    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 2);
}

#[test]
fn results_are_subset_of_in_range_names() {
    let in_range = vec![store("A", DAM_SQUARE), store("B", DAM_SQUARE)];
    let products = vec![
        product("Melk", "A"),
        product("Melk", "B"),
        product("Melk", "C"),
        product("Melk", "a"),
    ];

    let result = search_products("melk", &in_range, products);

    assert_eq!(result.len(), 2);
    assert!(result
        .iter()
        .all(|p| in_range.iter().any(|s| s.name == p.supermarket)));
}

#[test]
fn no_match_is_empty_not_error() {
    let in_range = vec![store("A", DAM_SQUARE)];
    let result = search_products("durian", &in_range, vec![product("Appel", "A")]);
    assert!(result.is_empty());
}

#[test]
fn empty_in_range_set_yields_no_products() {
    let result = search_products("knorr", &[], vec![product("Knorr Bouillon", "A")]);
    assert!(result.is_empty());
}

#[test]
fn search_preserves_store_order() {
    let in_range = vec![store("A", DAM_SQUARE), store("B", DAM_SQUARE)];
    let products = vec![
        product("Pasta 3", "B"),
        product("Pasta 1", "A"),
        product("Pasta 2", "B"),
    ];

    let titles: Vec<String> = search_products("pasta", &in_range, products)
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, ["Pasta 3", "Pasta 1", "Pasta 2"]);
}

#[test]
fn title_matches_handles_non_ascii() {
    assert!(title_matches("Crème fraîche", "CRÈME"));
    assert!(!title_matches("Crème fraîche", "creme"));
}

#[test]
fn keyword_matching_folds_non_ascii_case() {
    let in_range = vec![store("A", DAM_SQUARE)];
    let products = vec![
        product("CRÈME FRAÎCHE", "A"),
        product("Slagroom", "A"),
        product("Crème brûlée", "A"),
    ];

    let titles: Vec<String> = search_products("crème", &in_range, products)
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, ["CRÈME FRAÎCHE", "Crème brûlée"]);
}
