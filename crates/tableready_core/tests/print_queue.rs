use tableready_core::db::open_db_in_memory;
use tableready_core::{
    render_queue, AppState, CardType, PrintQueueEntry, SqliteStateStore, StateStore,
};

#[test]
fn seeded_queue_renders_all_three_cards_in_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();
    let state = store.initialize_if_missing().unwrap();

    let output = render_queue(&state);

    let creature_at = output.find("=== Creature: Goblin Raider ===").unwrap();
    let item_at = output
        .find("=== Item: Potion of Cure Light Wounds ===")
        .unwrap();
    let session_at = output
        .find("=== Session: Session 1: Road to Blackhill ===")
        .unwrap();
    assert!(creature_at < item_at);
    assert!(item_at < session_at);

    assert!(output.contains("AC 16 | HP 6 | Speed 30 ft."));
    assert!(output.contains("Type: Potion"));
    assert!(output.contains("Opening recap: the caravan leaves at dawn."));
}

#[test]
fn dangling_ref_renders_missing_placeholder() {
    let state = AppState {
        print_queue: vec![PrintQueueEntry {
            kind: CardType::CreatureCard,
            ref_id: "gone".to_string(),
            ..PrintQueueEntry::new()
        }],
        ..AppState::default()
    };

    let output = render_queue(&state);
    assert!(output.contains("=== Creature: (missing) ==="));
    assert!(output.contains("No record with id gone."));
}

#[test]
fn empty_queue_renders_empty_output() {
    let state = AppState::default();
    assert!(render_queue(&state).is_empty());
}
