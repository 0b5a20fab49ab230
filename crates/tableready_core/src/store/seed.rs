//! First-run default state.
//!
//! # Responsibility
//! - Build the seeded document returned when no persisted state exists yet.
//!
//! # Invariants
//! - The seed contains one campaign, one session, one creature and one item,
//!   with the campaign's ID lists back-referencing each record and a print
//!   queue entry for all three printable records.

use crate::model::records::{
    today, AppState, Campaign, CardType, Creature, ExtractedStats, Item, PrintQueueEntry, Session,
    Settings, SourceType, SCHEMA_VERSION,
};

/// Builds the application state seeded with one campaign and sample records.
///
/// The sample data makes the print queue usable immediately on first run.
pub fn build_default_state() -> AppState {
    let campaign = Campaign {
        name: "Sample Campaign: Crown & Catacombs".to_string(),
        ..Campaign::new()
    };

    let creature = Creature {
        name: "Goblin Raider".to_string(),
        source_type: SourceType::Paste,
        source_text: "Goblin Raider CR 1/3\nXP 135\nAC 16, touch 13, flat-footed 14\nHP 6 (1d8+2)\nSpeed 30 ft.\nMelee short sword +2 (1d4/19-20)".to_string(),
        extracted: ExtractedStats {
            ac: "16".to_string(),
            hp: "6".to_string(),
            speed: "30 ft.".to_string(),
        },
        tags: vec!["goblin".to_string(), "low-level".to_string()],
        ..Creature::new()
    };

    let item = Item {
        name: "Potion of Cure Light Wounds".to_string(),
        kind: "Potion".to_string(),
        description: "A stoppered vial of red liquid with a faint metallic taste.".to_string(),
        mechanics: "Drink to restore 1d8+1 hit points (CL 1st).".to_string(),
        tags: vec!["consumable".to_string(), "healing".to_string()],
        ..Item::new()
    };

    let session = Session {
        campaign_id: campaign.id.clone(),
        title: "Session 1: Road to Blackhill".to_string(),
        date: today(),
        notes: "Opening recap: the caravan leaves at dawn.\nScenes: ambush at the ford, ruined tollhouse, goblin cave entrance.\nNPCs: Harlan the driver.".to_string(),
        ..Session::new()
    };

    let mut campaign = campaign;
    campaign.creatures.push(creature.id.clone());
    campaign.items.push(item.id.clone());
    campaign.sessions.push(session.id.clone());

    let print_queue = vec![
        PrintQueueEntry {
            kind: CardType::CreatureCard,
            ref_id: creature.id.clone(),
            ..PrintQueueEntry::new()
        },
        PrintQueueEntry {
            kind: CardType::ItemCard,
            ref_id: item.id.clone(),
            ..PrintQueueEntry::new()
        },
        PrintQueueEntry {
            kind: CardType::SessionNotes,
            ref_id: session.id.clone(),
            ..PrintQueueEntry::new()
        },
    ];

    AppState {
        schema_version: SCHEMA_VERSION,
        settings: Settings::default(),
        active_campaign_id: campaign.id.clone(),
        campaigns: vec![campaign],
        sessions: vec![session],
        creatures: vec![creature],
        items: vec![item],
        print_queue,
    }
}
