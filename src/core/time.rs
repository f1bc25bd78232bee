//! Timestamp and identifier helpers shared across the store.

use ulid::Ulid;

/// UTC seconds since the epoch with a `Z` suffix (e.g. `1771220592Z`).
/// Stable ordering and human readability without pulling in chrono.
pub fn now_iso() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}Z", secs)
}

/// Store-generated entity identifier.
pub fn new_id() -> String {
    Ulid::new().to_string()
}
