//! UTC offset snapshot type.

use std::fmt;

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// A timezone's UTC offset at one instant, in minutes east of UTC.
///
/// This is a snapshot: daylight-saving transitions after the instant it was
/// resolved at are not reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// Resolves the offset of `tz` at the given instant.
    #[must_use]
    pub fn resolve(tz: Tz, at: DateTime<Utc>) -> Self {
        let seconds = tz.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc();
        Self { minutes: seconds / 60 }
    }

    /// Creates an offset from a minute count.
    #[must_use]
    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    /// The offset in minutes east of UTC. Negative values are west of UTC.
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    /// The offset formatted as `±HH:MM`, e.g. `+00:00`, `-05:00`, `+05:45`.
    #[must_use]
    pub fn label(&self) -> String {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
