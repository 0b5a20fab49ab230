//! Application state document and record factories.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted inside the state document.
//! - Provide `new()` factories with per-type defaults and a fresh ID.
//!
//! # Invariants
//! - Serialized field names are camelCase to match the persisted document
//!   shape (`schemaVersion`, `printQueue`, `activeCampaignId`, ...).
//! - Cross-record references are plain IDs; dangling references are a
//!   normal, tolerated state and never an error.
//! - Factories perform no cross-record validation (creating a `Session`
//!   does not verify its `campaign_id` exists).
//!
//! Caller overrides are applied with struct update syntax on top of a
//! factory call, so unspecified fields keep their defaults:
//!
//! ```
//! use tableready_core::model::records::Item;
//!
//! let wand = Item {
//!     name: "Wand".to_string(),
//!     ..Item::new()
//! };
//! assert_eq!(wand.kind, "Wondrous Item");
//! ```

use crate::model::ids::{new_record_id, RecordId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current schema version written into every persisted document.
///
/// Import only checks that the field is present; values are not compared
/// against this constant. It exists as the anchor for future migrations.
pub const SCHEMA_VERSION: u32 = 1;

/// Placeholder shown for stats that have not been filled in yet.
pub const STAT_PLACEHOLDER: &str = "—";

/// Root application state document.
///
/// Owns every collection outright; records inside it reference each other
/// only by ID. `activeCampaignId` should point at an existing campaign but
/// this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub schema_version: u32,
    pub settings: Settings,
    pub active_campaign_id: RecordId,
    pub campaigns: Vec<Campaign>,
    pub sessions: Vec<Session>,
    pub creatures: Vec<Creature>,
    pub items: Vec<Item>,
    pub print_queue: Vec<PrintQueueEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            settings: Settings::default(),
            active_campaign_id: String::new(),
            campaigns: Vec::new(),
            sessions: Vec::new(),
            creatures: Vec::new(),
            items: Vec::new(),
            print_queue: Vec::new(),
        }
    }
}

impl AppState {
    /// Finds a campaign by ID. Absence is a normal outcome.
    pub fn campaign_by_id(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|campaign| campaign.id == id)
    }

    /// Mutable campaign lookup used by append paths that back-reference
    /// new records on their owning campaign.
    pub fn campaign_by_id_mut(&mut self, id: &str) -> Option<&mut Campaign> {
        self.campaigns.iter_mut().find(|campaign| campaign.id == id)
    }

    pub fn session_by_id(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    pub fn creature_by_id(&self, id: &str) -> Option<&Creature> {
        self.creatures.iter().find(|creature| creature.id == id)
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Document-wide display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub app_name: String,
    pub show_cut_lines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Table-Ready".to_string(),
            show_cut_lines: true,
        }
    }
}

/// A campaign groups sessions, creatures and items via append-only ID lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: RecordId,
    pub name: String,
    pub system: String,
    pub created_at: String,
    pub sessions: Vec<RecordId>,
    pub creatures: Vec<RecordId>,
    pub items: Vec<RecordId>,
}

impl Campaign {
    /// Creates a campaign with default fields and a fresh ID.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            name: "My Pathfinder Campaign".to_string(),
            system: "PF1e".to_string(),
            created_at: Utc::now().to_rfc3339(),
            sessions: Vec::new(),
            creatures: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self::new()
    }
}

/// A prep/play session belonging to one campaign by ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: RecordId,
    pub campaign_id: RecordId,
    pub title: String,
    /// Date-only string, `YYYY-MM-DD`.
    pub date: String,
    pub notes: String,
    pub encounters: Vec<RecordId>,
}

impl Session {
    /// Creates a session with default fields, dated today, and a fresh ID.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            campaign_id: String::new(),
            title: "New Session".to_string(),
            date: today(),
            notes: String::new(),
            encounters: Vec::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a creature's statblock came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Pasted statblock text.
    Paste,
    /// Entered by hand.
    Manual,
    /// Linked from an Archives of Nethys URL.
    AonUrl,
}

/// Headline stats pulled out of a statblock for the card header.
///
/// Values are display strings, not numbers; unfilled stats show a dash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedStats {
    pub ac: String,
    pub hp: String,
    pub speed: String,
}

impl Default for ExtractedStats {
    fn default() -> Self {
        Self {
            ac: STAT_PLACEHOLDER.to_string(),
            hp: STAT_PLACEHOLDER.to_string(),
            speed: STAT_PLACEHOLDER.to_string(),
        }
    }
}

/// A creature statblock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: RecordId,
    pub name: String,
    pub source_type: SourceType,
    pub source_text: String,
    pub aon_url: String,
    pub extracted: ExtractedStats,
    pub tags: Vec<String>,
}

impl Creature {
    /// Creates a creature with default fields and a fresh ID.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            name: "New Creature".to_string(),
            source_type: SourceType::Paste,
            source_text: String::new(),
            aon_url: String::new(),
            extracted: ExtractedStats::default(),
            tags: Vec::new(),
        }
    }
}

impl Default for Creature {
    fn default() -> Self {
        Self::new()
    }
}

/// A treasure/equipment entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    /// Serialized as `type` to match the persisted document naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub mechanics: String,
    pub tags: Vec<String>,
}

impl Item {
    /// Creates an item with default fields and a fresh ID.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            name: "New Item".to_string(),
            kind: "Wondrous Item".to_string(),
            description: String::new(),
            mechanics: String::new(),
            tags: Vec::new(),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of printable output a queue entry produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    CreatureCard,
    ItemCard,
    SessionNotes,
}

/// One entry in the print queue, referencing a record by ID.
///
/// `ref_id` is a weak reference: the referenced record may be absent, which
/// renders as a placeholder card rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintQueueEntry {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: CardType,
    pub ref_id: RecordId,
    /// Open per-entry option map; shape is not constrained by the core.
    pub options: Map<String, Value>,
}

impl PrintQueueEntry {
    /// Creates a queue entry with default fields and a fresh ID.
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            kind: CardType::CreatureCard,
            ref_id: String::new(),
            options: Map::new(),
        }
    }
}

impl Default for PrintQueueEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's date as a `YYYY-MM-DD` string.
pub fn today() -> String {
    Utc::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::{AppState, Campaign, CardType, PrintQueueEntry, SourceType, SCHEMA_VERSION};

    #[test]
    fn app_state_default_carries_current_schema_version() {
        let state = AppState::default();
        assert_eq!(state.schema_version, SCHEMA_VERSION);
        assert!(state.campaigns.is_empty());
        assert!(state.print_queue.is_empty());
    }

    #[test]
    fn enum_variants_serialize_snake_case() {
        let source = serde_json::to_value(SourceType::AonUrl).unwrap();
        assert_eq!(source, "aon_url");
        let card = serde_json::to_value(CardType::SessionNotes).unwrap();
        assert_eq!(card, "session_notes");
    }

    #[test]
    fn campaign_lookup_tolerates_absence() {
        let state = AppState {
            campaigns: vec![Campaign::new()],
            ..AppState::default()
        };
        assert!(state.campaign_by_id("no-such-id").is_none());
    }

    #[test]
    fn print_queue_entry_serializes_kind_as_type() {
        let entry = PrintQueueEntry::new();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "creature_card");
        assert_eq!(value["refId"], "");
    }
}
