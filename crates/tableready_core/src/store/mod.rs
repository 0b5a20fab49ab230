//! State document persistence.
//!
//! # Responsibility
//! - Define the state-store contract: load, save, seed-on-first-run,
//!   export, import.
//! - Isolate SQLite key-value details from service orchestration.
//!
//! # Invariants
//! - `save` (and the success path of import) are the only operations that
//!   mutate persisted storage; failures leave prior state untouched.
//! - Persistence is whole-document, last-write-wins; there are no partial
//!   updates.

pub mod seed;
pub mod state_store;

pub use state_store::{
    export_file_name, export_pretty, export_to_file, SqliteStateStore, StateStore, StoreError,
    StoreResult, STATE_KEY,
};
