use chrono::NaiveDate;
use tableready_core::db::open_db_in_memory;
use tableready_core::{
    export_file_name, export_pretty, export_to_file, SqliteStateStore, StateStore, StoreError,
};

#[test]
fn import_of_unparseable_content_fails_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let err = store.import_json("not json").unwrap_err();
    assert!(matches!(err, StoreError::ParseFailure(_)));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn import_of_non_object_fails_with_invalid_payload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let err = store.import_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, StoreError::InvalidPayload(_)));
}

#[test]
fn import_without_schema_version_fails() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let err = store.import_json("{}").unwrap_err();
    assert!(matches!(err, StoreError::MissingSchemaVersion));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn import_failure_leaves_prior_state_untouched() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let seeded = store.initialize_if_missing().unwrap();
    store.import_json("{}").unwrap_err();

    assert_eq!(store.load().unwrap().unwrap(), seeded);
}

#[test]
fn import_of_valid_document_persists_it() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let imported = store.import_json("{\"schemaVersion\": 1}").unwrap();
    assert_eq!(imported.schema_version, 1);

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, imported);
}

#[test]
fn import_replaces_prior_state_in_full() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let seeded = store.initialize_if_missing().unwrap();
    assert!(!seeded.campaigns.is_empty());

    let imported = store.import_json("{\"schemaVersion\": 7}").unwrap();
    assert!(imported.campaigns.is_empty());
    assert_eq!(store.load().unwrap().unwrap(), imported);
}

#[test]
fn import_accepts_any_schema_version_value() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let imported = store.import_json("{\"schemaVersion\": 99}").unwrap();
    assert_eq!(imported.schema_version, 99);
}

#[test]
fn export_is_parse_equal_to_saved_payload() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    let state = store.initialize_if_missing().unwrap();
    let pretty = export_pretty(&state).unwrap();
    assert!(pretty.contains('\n'));

    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, serde_json::to_value(&state).unwrap());
}

#[test]
fn export_file_round_trips_through_import() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();
    let state = store.initialize_if_missing().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(export_file_name(NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()));
    export_to_file(&state, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let imported = store.import_json(&contents).unwrap();
    assert_eq!(imported, state);
}

#[test]
fn export_file_name_carries_the_date() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    assert_eq!(export_file_name(date), "table-ready-export-2026-08-25.json");
}
