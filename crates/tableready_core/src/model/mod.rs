//! Domain model for campaign-prep records.
//!
//! # Responsibility
//! - Define the plain serde records that make up the application state
//!   document.
//! - Provide record factories that fill in per-type defaults and a fresh ID.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId` string.
//! - Records reference each other only by ID; lookups tolerate absence.
//! - The model is append-only: no factory or helper removes records.

pub mod ids;
pub mod records;
