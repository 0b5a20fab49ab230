//! Print-queue projection.
//!
//! # Responsibility
//! - Render the queued cards/pages as plain text for printing frontends.
//!
//! # Invariants
//! - A dangling `refId` renders a placeholder card, never an error.

pub mod cards;

pub use cards::{render_creature_card, render_item_card, render_queue, render_session_notes_page};
