//! Time source port.

use chrono::{DateTime, Utc};

/// Port for reading the current instant.
///
/// Offset snapshots are resolved against a time supplied through this
/// trait, never against an ambient clock read, so tests can pin "now" to a
/// fixed instant.
pub trait TimeSource: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
