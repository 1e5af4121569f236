//! Dataset reading, item building, augmentation and the caller-owned store.

use geofill::modules::provider::domain::GeoPoint;
use geofill::{
    augment_table, build_items, BatchItem, BatchMode, ColumnSelection, CsvTable, Outcome,
    OutcomePayload, ReverseLocation, TokenStore,
};

fn sites_csv() -> CsvTable {
    CsvTable::from_reader(
        "site,address\nHQ,1 Main St\nLab,2 Side St\nDepot,3 Back St\n".as_bytes(),
    )
    .unwrap()
}

#[test]
fn test_build_geocode_items_in_row_order() {
    let table = sites_csv();
    let selection = ColumnSelection {
        address: Some("address".to_string()),
        ..ColumnSelection::default()
    };

    let items = build_items(&table, BatchMode::Geocode, &selection).unwrap();
    assert_eq!(
        items,
        vec![
            BatchItem::Value("1 Main St".to_string()),
            BatchItem::Value("2 Side St".to_string()),
            BatchItem::Value("3 Back St".to_string()),
        ]
    );
}

#[test]
fn test_geocode_augmentation_leaves_failed_rows_blank() {
    let mut table = sites_csv();
    let outcomes = vec![
        Outcome::success(0, "1 Main St", OutcomePayload::Geocoded(GeoPoint::new(39.9, 116.4))),
        Outcome::failure(
            1,
            "2 Side St",
            geofill::ProviderFailure::no_result("https://geo.example", "{}"),
        ),
        Outcome::success(2, "3 Back St", OutcomePayload::Geocoded(GeoPoint::new(31.2, 121.5))),
    ];

    augment_table(&mut table, BatchMode::Geocode, &outcomes);

    assert_eq!(table.headers(), &["site", "address", "latitude", "longitude"]);
    assert_eq!(table.value(0, 2), "39.9");
    assert_eq!(table.value(0, 3), "116.4");
    assert_eq!(table.value(1, 2), "");
    assert_eq!(table.value(1, 3), "");
    assert_eq!(table.value(2, 2), "31.2");

    // Row count is unchanged by augmentation.
    assert_eq!(table.row_count(), 3);
}

#[test]
fn test_reverse_augmentation_writes_admin_columns() {
    let mut table = CsvTable::from_reader("coords\n\"39.9,116.4\"\n".as_bytes()).unwrap();
    let outcomes = vec![Outcome::success(
        0,
        "39.9,116.4",
        OutcomePayload::Reversed(ReverseLocation {
            address: "Dongcheng, Beijing".to_string(),
            admin1: "Beijing".to_string(),
            admin2: "Beijing".to_string(),
            admin3: "Dongcheng".to_string(),
        }),
    )];

    augment_table(&mut table, BatchMode::Reverse, &outcomes);

    assert_eq!(
        table.headers(),
        &["coords", "resolved_address", "admin1", "admin2", "admin3"]
    );
    assert_eq!(table.value(0, 1), "Dongcheng, Beijing");
    assert_eq!(table.value(0, 4), "Dongcheng");
}

#[test]
fn test_augmented_table_round_trips_through_csv() {
    let mut table = sites_csv();
    augment_table(&mut table, BatchMode::Geocode, &[]);

    let mut buffer = Vec::new();
    table.write_to(&mut buffer).unwrap();

    let reread = CsvTable::from_reader(buffer.as_slice()).unwrap();
    assert_eq!(reread.headers(), table.headers());
    assert_eq!(reread.row_count(), table.row_count());
}

#[test]
fn test_store_holds_datasets_until_taken() {
    let store: TokenStore<CsvTable> = TokenStore::new();
    let token = store.insert(sites_csv());

    let fetched = store.fetch(&token).unwrap();
    assert_eq!(fetched.row_count(), 3);

    let taken = store.take(&token).unwrap();
    assert_eq!(taken.row_count(), 3);
    assert!(store.take(&token).is_none());
}
