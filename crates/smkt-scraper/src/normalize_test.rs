use super::*;

fn knorr() -> RawProduct {
    RawProduct {
        title: Some("Knorr Wereldgerechten Nasi Goreng".to_owned()),
        price: Some(RawPrice::Text("4.29".to_owned())),
        size: Some("N/A".to_owned()),
        image: Some("https://static.ah.nl/knorr.jpg".to_owned()),
        supermarket: Some("Albert Heijn".to_owned()),
        ..RawProduct::default()
    }
}

#[test]
fn normalize_product_maps_placeholders_to_none() {
    let product = normalize_product(knorr(), "0").unwrap();
    assert_eq!(product.title, "Knorr Wereldgerechten Nasi Goreng");
    assert_eq!(product.price, "4.29");
    assert_eq!(product.size, None);
    assert_eq!(
        product.image.as_deref(),
        Some("https://static.ah.nl/knorr.jpg")
    );
    assert_eq!(product.supermarket, "Albert Heijn");
    assert!(!product.on_discount);
    assert_eq!(product.discount_timestamp, None);
}

#[test]
fn normalize_product_trims_fields() {
    let raw = RawProduct {
        title: Some("  Melk  ".to_owned()),
        supermarket: Some(" Jumbo ".to_owned()),
        ..knorr()
    };
    let product = normalize_product(raw, "1").unwrap();
    assert_eq!(product.title, "Melk");
    assert_eq!(product.supermarket, "Jumbo");
}

#[test]
fn normalize_product_formats_numeric_price() {
    let raw = RawProduct {
        price: Some(RawPrice::Number(1.5)),
        original_price: Some(RawPrice::Number(2.0)),
        ..knorr()
    };
    let product = normalize_product(raw, "2").unwrap();
    assert_eq!(product.price, "1.50");
    assert_eq!(product.original_price.as_deref(), Some("2.00"));
}

#[test]
fn normalize_product_rejects_missing_title() {
    let raw = RawProduct {
        title: None,
        ..knorr()
    };
    let err = normalize_product(raw, "7").unwrap_err();
    match err {
        ScraperError::Normalization { record, reason } => {
            assert_eq!(record, "7");
            assert!(reason.contains("title"), "reason: {reason}");
        }
        other => panic!("expected Normalization, got {other:?}"),
    }
}

#[test]
fn normalize_product_rejects_unknown_supermarket() {
    let raw = RawProduct {
        supermarket: Some("Unknown".to_owned()),
        ..knorr()
    };
    let err = normalize_product(raw, "3").unwrap_err();
    assert!(err.to_string().contains("supermarket"), "{err}");
}

#[test]
fn normalize_product_rejects_placeholder_price() {
    let raw = RawProduct {
        price: Some(RawPrice::Text("N/A".to_owned())),
        ..knorr()
    };
    assert!(normalize_product(raw, "4").is_err());
}

#[test]
fn normalize_product_keeps_discount_fields() {
    let raw = RawProduct {
        on_discount: true,
        original_price: Some(RawPrice::Text("5.49".to_owned())),
        discount_action: Some("2e halve prijs".to_owned()),
        discount_date: Some("t/m 09-03-2025".to_owned()),
        ..knorr()
    };
    let product = normalize_product(raw, "5").unwrap();
    assert!(product.on_discount);
    assert_eq!(product.original_price.as_deref(), Some("5.49"));
    assert_eq!(product.discount_action.as_deref(), Some("2e halve prijs"));
    assert_eq!(product.discount_date.as_deref(), Some("t/m 09-03-2025"));
    // 2025-03-09T23:59:59Z
    assert_eq!(product.discount_timestamp, Some(1_741_564_799));
}

#[test]
fn parse_discount_date_accepts_dashes_and_slashes() {
    assert_eq!(parse_discount_date("01-01-2025"), Some(1_735_775_999));
    assert_eq!(parse_discount_date("1/1/2025"), Some(1_735_775_999));
}

#[test]
fn parse_discount_date_is_end_of_last_valid_day() {
    // 2025-11-04T23:59:59Z
    assert_eq!(parse_discount_date("t/m di 04-11-2025"), Some(1_762_300_799));
}

#[test]
fn parse_discount_date_rejects_impossible_dates() {
    assert_eq!(parse_discount_date("31-02-2025"), None);
    assert_eq!(parse_discount_date("00-13-2025"), None);
}

#[test]
fn parse_discount_date_ignores_text_without_date() {
    assert_eq!(parse_discount_date("alleen deze week"), None);
    assert_eq!(parse_discount_date(""), None);
}
