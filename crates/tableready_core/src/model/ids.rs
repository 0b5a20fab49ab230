//! Record identifier generation.
//!
//! # Responsibility
//! - Produce unique string IDs for every new domain record.
//!
//! # Invariants
//! - IDs are unique with overwhelmingly high probability across calls in one
//!   process and across reloads; collisions are not formally guarded against.
//! - ID format is `<epoch_ms>-<8 hex chars>` and is treated as opaque by all
//!   consumers.

use chrono::Utc;
use uuid::Uuid;

/// Stable identifier for every domain record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = String;

/// Number of random hex characters appended after the timestamp.
const SUFFIX_LEN: usize = 8;

/// Creates a lightweight unique identifier: millisecond timestamp plus a
/// random hex suffix.
pub fn new_record_id() -> RecordId {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &random[..SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::new_record_id;

    #[test]
    fn ids_have_timestamp_and_suffix_parts() {
        let id = new_record_id();
        let (timestamp, suffix) = id.split_once('-').expect("id should contain a dash");
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(new_record_id(), new_record_id());
    }
}
