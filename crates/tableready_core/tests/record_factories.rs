use tableready_core::{
    Campaign, CardType, Creature, Item, PrintQueueEntry, Session, SourceType,
};

#[test]
fn factories_generate_distinct_ids_with_identical_defaults() {
    let first = Item::new();
    let second = Item::new();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);
    assert_eq!(first.kind, second.kind);
    assert_eq!(first.description, second.description);
    assert_eq!(first.mechanics, second.mechanics);
    assert_eq!(first.tags, second.tags);
}

#[test]
fn overrides_win_and_unspecified_fields_keep_defaults() {
    let wand = Item {
        name: "Wand".to_string(),
        ..Item::new()
    };

    assert_eq!(wand.name, "Wand");
    assert_eq!(wand.kind, "Wondrous Item");
    assert!(wand.description.is_empty());
    assert!(wand.tags.is_empty());
    assert!(!wand.id.is_empty());
}

#[test]
fn campaign_defaults_match_the_documented_shape() {
    let campaign = Campaign::new();

    assert_eq!(campaign.name, "My Pathfinder Campaign");
    assert_eq!(campaign.system, "PF1e");
    assert!(!campaign.created_at.is_empty());
    assert!(campaign.sessions.is_empty());
    assert!(campaign.creatures.is_empty());
    assert!(campaign.items.is_empty());
}

#[test]
fn session_defaults_are_dated_today_with_empty_links() {
    let session = Session::new();

    assert_eq!(session.title, "New Session");
    assert!(session.campaign_id.is_empty());
    assert!(session.notes.is_empty());
    assert!(session.encounters.is_empty());
    // YYYY-MM-DD
    assert_eq!(session.date.len(), 10);
    assert_eq!(session.date.matches('-').count(), 2);
}

#[test]
fn creature_defaults_use_paste_source_and_placeholder_stats() {
    let creature = Creature::new();

    assert_eq!(creature.name, "New Creature");
    assert_eq!(creature.source_type, SourceType::Paste);
    assert!(creature.source_text.is_empty());
    assert!(creature.aon_url.is_empty());
    assert_eq!(creature.extracted.ac, "—");
    assert_eq!(creature.extracted.hp, "—");
    assert_eq!(creature.extracted.speed, "—");
}

#[test]
fn print_queue_entry_defaults_to_creature_card_with_open_options() {
    let entry = PrintQueueEntry::new();

    assert_eq!(entry.kind, CardType::CreatureCard);
    assert!(entry.ref_id.is_empty());
    assert!(entry.options.is_empty());
}

#[test]
fn factory_ids_are_unique_across_kinds_in_bulk() {
    let mut ids = std::collections::HashSet::new();
    for _ in 0..100 {
        assert!(ids.insert(Campaign::new().id));
        assert!(ids.insert(Session::new().id));
        assert!(ids.insert(Creature::new().id));
        assert!(ids.insert(Item::new().id));
        assert!(ids.insert(PrintQueueEntry::new().id));
    }
}
