use super::*;
use serde_json::json;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["smkt-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_clear_flags() {
    let cli = Cli::try_parse_from(["smkt-cli", "db", "clear", "--products"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Clear {
                products: true,
                supermarkets: false
            }
        })
    ));
}

#[test]
fn clear_without_flags_targets_both_tables() {
    assert_eq!(db::clear_targets(false, false), (true, true));
    assert_eq!(db::clear_targets(true, false), (true, false));
    assert_eq!(db::clear_targets(false, true), (false, true));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["smkt-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_collect_supermarkets_by_address() {
    let cli = Cli::try_parse_from([
        "smkt-cli",
        "collect",
        "supermarkets",
        "--address",
        "Dam 1, Amsterdam",
        "--radius-km",
        "3",
        "--dry-run",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Collect {
            command: CollectCommands::Supermarkets {
                address: Some(ref a),
                lat: None,
                lon: None,
                dry_run: true,
                ..
            }
        }) if a == "Dam 1, Amsterdam"
    ));
}

#[test]
fn parses_collect_supermarkets_with_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "smkt-cli",
        "collect",
        "supermarkets",
        "--lat",
        "-33.86",
        "--lon",
        "151.2",
        "--radius-km",
        "1",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Collect {
            command:
                CollectCommands::Supermarkets {
                    lat: Some(lat),
                    lon: Some(lon),
                    dry_run: false,
                    ..
                },
        }) => {
            assert!((lat + 33.86).abs() < 1e-9);
            assert!((lon - 151.2).abs() < 1e-9);
        }
        other => panic!("unexpected parse: {other:?}"),
    }
}

#[test]
fn collect_supermarkets_requires_a_center() {
    let result = Cli::try_parse_from(["smkt-cli", "collect", "supermarkets", "--radius-km", "3"]);
    assert!(result.is_err());
}

#[test]
fn collect_supermarkets_rejects_lat_without_lon() {
    let result = Cli::try_parse_from([
        "smkt-cli",
        "collect",
        "supermarkets",
        "--lat",
        "52.37",
        "--radius-km",
        "3",
    ]);
    assert!(result.is_err());
}

#[test]
fn collect_supermarkets_rejects_address_with_coordinates() {
    let result = Cli::try_parse_from([
        "smkt-cli",
        "collect",
        "supermarkets",
        "--address",
        "Dam",
        "--lat",
        "52.37",
        "--lon",
        "4.89",
        "--radius-km",
        "3",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_import_products_with_replace() {
    let cli = Cli::try_parse_from(["smkt-cli", "import", "products", "ah.json", "--replace"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Import {
            command: ImportCommands::Products {
                ref file,
                replace: true
            }
        }) if file == std::path::Path::new("ah.json")
    ));
}

#[test]
fn parses_search_command() {
    let cli = Cli::try_parse_from([
        "smkt-cli",
        "search",
        "knorr",
        "--lat",
        "52.3731",
        "--lon",
        "4.8932",
        "--radius-km",
        "5",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref keyword, .. }) if keyword == "knorr"
    ));
}

#[test]
fn search_requires_radius() {
    let result = Cli::try_parse_from([
        "smkt-cli", "search", "knorr", "--lat", "52.3", "--lon", "4.8",
    ]);
    assert!(result.is_err());
}

#[test]
fn product_records_accepts_array_or_wrapped_object() {
    let bare = import::product_records(json!([{"title": "a"}])).expect("array");
    assert_eq!(bare.len(), 1);

    let wrapped =
        import::product_records(json!({"products": [{"title": "a"}, {"title": "b"}]}))
            .expect("object");
    assert_eq!(wrapped.len(), 2);

    assert!(import::product_records(json!({"items": []})).is_err());
    assert!(import::product_records(json!("nope")).is_err());
}

#[test]
fn normalize_records_skips_bad_rows() {
    let records = vec![
        json!({"title": "Knorr Bouillon", "price": "1.99", "size": "N/A",
               "image": "N/A", "supermarket": "AH Dam"}),
        json!({"title": "No store", "price": "1.00", "supermarket": "Unknown"}),
        json!({"title": 42}),
        json!({"title": "Melk", "price": 1.09, "supermarket": "Jumbo Centrum",
               "on_discount": true, "discount_date": "31-12-2025"}),
    ];

    let (products, skipped) = import::normalize_records(records);

    assert_eq!(skipped, 2);
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Knorr Bouillon");
    assert_eq!(products[0].size, None);
    assert_eq!(products[1].price, "1.09");
    assert!(products[1].discount_timestamp.is_some());
}

#[test]
fn to_new_supermarket_keeps_osm_id() {
    let row = collect::to_new_supermarket(smkt_scraper::DiscoveredSupermarket {
        osm_id: "node/42".to_owned(),
        name: "Jumbo Centrum".to_owned(),
        brand: "Jumbo".to_owned(),
        latitude: 52.37,
        longitude: 4.89,
    });
    assert_eq!(row.osm_id.as_deref(), Some("node/42"));
    assert_eq!(row.brand, "Jumbo");
}

#[test]
fn format_row_shows_discount_action() {
    let product = smkt_core::Product {
        title: "Knorr Wereldgerechten Nasi Goreng met extra lange titel voor de test".to_owned(),
        price: "4.29".to_owned(),
        size: None,
        image: None,
        supermarket: "AH Dam".to_owned(),
        on_discount: true,
        original_price: Some("5.49".to_owned()),
        discount_action: Some("2e halve prijs".to_owned()),
        discount_date: None,
        discount_timestamp: None,
    };
    let row = search::format_row(&product);
    assert!(row.contains("..."), "long titles are truncated: {row}");
    assert!(row.contains("4.29"));
    assert!(row.ends_with("2e halve prijs"));
}
