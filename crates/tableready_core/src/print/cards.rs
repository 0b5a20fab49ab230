//! Plain-text card templates for the print queue.
//!
//! Queue entries are resolved by scanning the matching collection; a record
//! that is no longer present renders as "(missing)" rather than failing.

use crate::model::records::{AppState, CardType, Creature, Item, PrintQueueEntry, Session};
use std::fmt::Write;

const MISSING: &str = "(missing)";

/// Renders every queued card/page in order, separated by blank lines.
pub fn render_queue(state: &AppState) -> String {
    let mut out = String::new();
    for entry in &state.print_queue {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_entry(state, entry));
    }
    out
}

fn render_entry(state: &AppState, entry: &PrintQueueEntry) -> String {
    match entry.kind {
        CardType::CreatureCard => state
            .creature_by_id(&entry.ref_id)
            .map(render_creature_card)
            .unwrap_or_else(|| render_missing_card("Creature", &entry.ref_id)),
        CardType::ItemCard => state
            .item_by_id(&entry.ref_id)
            .map(render_item_card)
            .unwrap_or_else(|| render_missing_card("Item", &entry.ref_id)),
        CardType::SessionNotes => state
            .session_by_id(&entry.ref_id)
            .map(render_session_notes_page)
            .unwrap_or_else(|| render_missing_card("Session", &entry.ref_id)),
    }
}

/// Renders a creature print card.
pub fn render_creature_card(creature: &Creature) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "=== Creature: {} ===", creature.name);
    let _ = writeln!(
        card,
        "AC {} | HP {} | Speed {}",
        creature.extracted.ac, creature.extracted.hp, creature.extracted.speed
    );
    let _ = writeln!(card, "{}", or_fallback(&creature.source_text, "(No statblock text yet)"));
    card
}

/// Renders an item print card.
pub fn render_item_card(item: &Item) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "=== Item: {} ===", item.name);
    let _ = writeln!(card, "Type: {}", or_fallback(&item.kind, "—"));
    let _ = writeln!(card, "Description: {}", or_fallback(&item.description, "—"));
    let _ = writeln!(card, "Mechanics: {}", or_fallback(&item.mechanics, "—"));
    card
}

/// Renders session notes as a printable page.
pub fn render_session_notes_page(session: &Session) -> String {
    let mut page = String::new();
    let _ = writeln!(page, "=== Session: {} ===", session.title);
    let _ = writeln!(page, "Date: {}", or_fallback(&session.date, "—"));
    let _ = writeln!(page, "{}", or_fallback(&session.notes, "(No notes yet)"));
    page
}

fn render_missing_card(label: &str, ref_id: &str) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "=== {label}: {MISSING} ===");
    let _ = writeln!(card, "No record with id {ref_id}.");
    card
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
