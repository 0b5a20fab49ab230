//! Core domain logic for Table-Ready, a local-first catalog manager for
//! tabletop session preparation.
//! This crate is the single source of truth for the state document and its
//! persistence contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod print;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::ids::{new_record_id, RecordId};
pub use model::records::{
    AppState, Campaign, CardType, Creature, ExtractedStats, Item, PrintQueueEntry, Session,
    Settings, SourceType, SCHEMA_VERSION,
};
pub use print::cards::render_queue;
pub use service::state_service::StateService;
pub use store::state_store::{
    export_file_name, export_pretty, export_to_file, SqliteStateStore, StateStore, StoreError,
    StoreResult, STATE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
