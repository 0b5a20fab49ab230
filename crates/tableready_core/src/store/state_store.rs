//! State store contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Round-trip the whole `AppState` document through one key-value row.
//! - Seed the default document on first use.
//! - Provide the JSON export/import surface.
//!
//! # Invariants
//! - `save` overwrites the persisted value unconditionally (last-write-wins).
//! - A persisted payload that fails to parse degrades to "missing"; the
//!   store never hands back partially-parsed data.
//! - Import persists nothing unless the payload is accepted in full.

use crate::db::DbError;
use crate::model::records::AppState;
use crate::store::seed::build_default_state;
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;

/// Single storage key for v1 application state.
///
/// Keeping this centralized makes schema migration easier later.
pub const STATE_KEY: &str = "tableready_state_v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by state persistence, import and export.
///
/// All variants are recoverable: load parse failures degrade to a missing
/// document, and import failures leave prior persisted state untouched.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The document could not be serialized. Effectively unreachable for
    /// well-formed `AppState` values but surfaced rather than swallowed.
    Serialize(serde_json::Error),
    /// Imported content is not valid JSON.
    ParseFailure(String),
    /// Imported content parsed, but is not a usable state document.
    InvalidPayload(String),
    /// Imported document lacks the `schemaVersion` field.
    MissingSchemaVersion,
    /// The connection has not been bootstrapped via `db::open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    Io(std::io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize state document: {err}"),
            Self::ParseFailure(message) => write!(f, "invalid JSON payload: {message}"),
            Self::InvalidPayload(message) => write!(f, "invalid state document: {message}"),
            Self::MissingSchemaVersion => write!(f, "imported file missing schemaVersion"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage contract for the application state document.
///
/// There is exactly one document per store; every mutation must flow through
/// `save` to survive a reload.
pub trait StateStore {
    /// Reads the persisted document.
    ///
    /// Returns `Ok(None)` both when nothing is stored and when the stored
    /// payload fails to parse (logged, never propagated as an error).
    fn load(&self) -> StoreResult<Option<AppState>>;

    /// Serializes the full document and overwrites the persisted value.
    fn save(&self, state: &AppState) -> StoreResult<()>;

    /// Returns the persisted document, seeding and persisting the default
    /// one when absent. Idempotent: never re-seeds over existing data.
    fn initialize_if_missing(&self) -> StoreResult<AppState>;

    /// Parses, validates and persists an imported document, replacing prior
    /// state in full. Nothing is persisted on any failure path.
    fn import_json(&self, contents: &str) -> StoreResult<AppState>;
}

/// SQLite-backed state store holding the document under [`STATE_KEY`].
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Wraps a bootstrapped connection, verifying that migrations ran.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected = crate::db::migrations::latest_version();
        let actual =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual < expected {
            return Err(StoreError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self) -> StoreResult<Option<AppState>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [STATE_KEY], |row| {
                row.get(0)
            })
            .optional()?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<AppState>(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                error!(
                    "event=state_load module=store status=error error_code=parse_failure error={err}"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        let payload = serde_json::to_string(state).map_err(StoreError::Serialize)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![STATE_KEY, payload],
        )?;
        Ok(())
    }

    fn initialize_if_missing(&self) -> StoreResult<AppState> {
        if let Some(existing) = self.load()? {
            return Ok(existing);
        }

        let seeded = build_default_state();
        self.save(&seeded)?;
        info!(
            "event=state_seed module=store status=ok campaigns={} print_queue={}",
            seeded.campaigns.len(),
            seeded.print_queue.len()
        );
        Ok(seeded)
    }

    fn import_json(&self, contents: &str) -> StoreResult<AppState> {
        let value: serde_json::Value = serde_json::from_str(contents)
            .map_err(|err| StoreError::ParseFailure(err.to_string()))?;

        match value.as_object() {
            None => {
                return Err(StoreError::InvalidPayload(
                    "payload is not a JSON object".to_string(),
                ));
            }
            Some(object) if !object.contains_key("schemaVersion") => {
                return Err(StoreError::MissingSchemaVersion);
            }
            Some(_) => {}
        }

        let state: AppState = serde_json::from_value(value)
            .map_err(|err| StoreError::InvalidPayload(err.to_string()))?;

        self.save(&state)?;
        info!(
            "event=state_import module=store status=ok schema_version={}",
            state.schema_version
        );
        Ok(state)
    }
}

/// Serializes the document as pretty-printed JSON for export.
///
/// Parse-equal to what `save` persists; pretty-printing is the one
/// intentional format divergence, for human readability.
pub fn export_pretty(state: &AppState) -> StoreResult<String> {
    serde_json::to_string_pretty(state).map_err(StoreError::Serialize)
}

/// Export file name carrying the given date: `table-ready-export-YYYY-MM-DD.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("table-ready-export-{}.json", date.format("%Y-%m-%d"))
}

/// Writes the pretty-printed export payload to `path`.
pub fn export_to_file(state: &AppState, path: impl AsRef<Path>) -> StoreResult<()> {
    let payload = export_pretty(state)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(payload.as_bytes())?;
    Ok(())
}
