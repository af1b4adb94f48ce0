//! The clock value object.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::coordinates::Coordinates;
use crate::display::DisplayNameRule;
use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;
use crate::offset::UtcOffset;
use crate::persistence::{Id, SavedClock};

/// One timezone entry on the board.
///
/// A `Clock` is a plain value built from a [`SavedClock`] record. It does
/// not hold temporal state: the UTC offset is resolved once, at the instant
/// supplied to [`Clock::from_saved`], and never recomputed. The `id`,
/// `primary` flag and `name` may be mutated by the owning interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    /// Stable identifier.
    pub id: Id,
    /// City or place name.
    pub location: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Geographic position, passed through unmodified.
    pub coordinates: Option<Coordinates>,
    /// Whether this is the board's primary clock.
    pub primary: bool,
    /// User-supplied override name.
    pub name: Option<String>,
    timezone: Tz,
    offset: UtcOffset,
}

impl Clock {
    /// Builds a clock from a saved record, resolving its UTC offset at the
    /// given instant.
    ///
    /// A record without an `id` gets a freshly generated one. The offset is
    /// a snapshot: it reflects `now` and is not updated across later
    /// daylight-saving transitions.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownTimezone`] if the record's timezone is
    /// not a known IANA identifier.
    pub fn from_saved(saved: &SavedClock, now: DateTime<Utc>) -> DomainResult<Self> {
        let timezone = saved
            .timezone
            .parse::<Tz>()
            .map_err(|_| DomainError::UnknownTimezone(saved.timezone.clone()))?;

        Ok(Self {
            id: saved.id.clone().unwrap_or_else(generate_id),
            location: saved.location.clone(),
            country: saved.country.clone(),
            coordinates: saved.coordinates,
            primary: saved.primary,
            name: saved.name.clone(),
            timezone,
            offset: UtcOffset::resolve(timezone, now),
        })
    }

    /// The clock's timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The IANA name of the clock's timezone.
    #[must_use]
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }

    /// The UTC offset snapshot taken at construction.
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// The name to show for this clock, chosen by
    /// [`DisplayNameRule::PRIORITY`].
    #[must_use]
    pub fn display_name(&self) -> String {
        DisplayNameRule::PRIORITY
            .iter()
            .find_map(|rule| rule.apply(self))
            .unwrap_or_else(|| self.timezone.name().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn builds_from_minimal_record() {
        let clock = Clock::from_saved(&SavedClock::new("UTC"), noon_utc()).unwrap();
        assert_eq!(clock.timezone_name(), "UTC");
        assert_eq!(clock.offset().minutes(), 0);
        assert_eq!(clock.offset().label(), "+00:00");
        assert!(!clock.primary);
    }

    #[test]
    fn generates_id_when_record_has_none() {
        let clock = Clock::from_saved(&SavedClock::new("UTC"), noon_utc()).unwrap();
        assert_eq!(clock.id.len(), 36);
    }

    #[test]
    fn keeps_supplied_id() {
        let mut record = SavedClock::new("UTC");
        record.id = Some("clock-1".to_string());
        let clock = Clock::from_saved(&record, noon_utc()).unwrap();
        assert_eq!(clock.id, "clock-1");
    }

    #[test]
    fn explicit_primary_is_preserved() {
        let record = SavedClock::new("UTC").with_primary(true);
        let clock = Clock::from_saved(&record, noon_utc()).unwrap();
        assert!(clock.primary);
    }

    #[test]
    fn unknown_timezone_fails() {
        let err = Clock::from_saved(&SavedClock::new("Mars/Olympus_Mons"), noon_utc())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownTimezone("Mars/Olympus_Mons".to_string())
        );
    }

    #[test]
    fn offset_reflects_the_supplied_instant() {
        let record = SavedClock::new("Europe/Paris");
        let winter = Clock::from_saved(&record, noon_utc()).unwrap();
        let summer = Clock::from_saved(
            &record,
            Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap(),
        )
        .unwrap();

        assert_eq!(winter.offset().label(), "+01:00");
        assert_eq!(summer.offset().label(), "+02:00");
    }

    #[test]
    fn mutation_does_not_touch_the_offset_snapshot() {
        let mut clock = Clock::from_saved(
            &SavedClock::new("Asia/Kathmandu").with_location("Kathmandu"),
            noon_utc(),
        )
        .unwrap();
        let before = clock.offset();

        clock.id = "renumbered".to_string();
        clock.primary = true;
        clock.name = Some("Base camp".to_string());

        assert_eq!(clock.id, "renumbered");
        assert!(clock.primary);
        assert_eq!(clock.display_name(), "Base camp");
        assert_eq!(clock.offset(), before);
        assert_eq!(clock.offset().label(), "+05:45");
    }

    #[test]
    fn coordinates_are_carried_through() {
        let record = SavedClock::new("Europe/Paris")
            .with_coordinates(Coordinates::new(48.8566, 2.3522));
        let clock = Clock::from_saved(&record, noon_utc()).unwrap();
        let coords = clock.coordinates.unwrap();
        assert!((coords.latitude - 48.8566).abs() < f64::EPSILON);
    }
}
