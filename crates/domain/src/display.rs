//! Display-name selection rules.
//!
//! The name shown for a clock is chosen by walking an ordered rule list
//! rather than nested branching, so the priority is explicit and each rule
//! is testable on its own.

use crate::clock::Clock;

/// One rule for choosing a clock's display name.
///
/// Rules are evaluated in [`DisplayNameRule::PRIORITY`] order; the first
/// rule that matches wins. Empty strings count as absent, mirroring the
/// truthiness of the raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayNameRule {
    /// The user-supplied override name.
    UserOverride,
    /// `"{location}, {country}"` when both are present.
    LocationAndCountry,
    /// The location alone.
    LocationOnly,
    /// The IANA timezone name; always matches.
    TimezoneFallback,
}

impl DisplayNameRule {
    /// Evaluation order, highest priority first.
    pub const PRIORITY: [Self; 4] = [
        Self::UserOverride,
        Self::LocationAndCountry,
        Self::LocationOnly,
        Self::TimezoneFallback,
    ];

    /// Applies this rule to a clock, returning the chosen name on a match.
    #[must_use]
    pub fn apply(self, clock: &Clock) -> Option<String> {
        match self {
            Self::UserOverride => non_empty(clock.name.as_deref()).map(String::from),
            Self::LocationAndCountry => {
                let location = non_empty(clock.location.as_deref())?;
                let country = non_empty(clock.country.as_deref())?;
                Some(format!("{location}, {country}"))
            }
            Self::LocationOnly => non_empty(clock.location.as_deref()).map(String::from),
            Self::TimezoneFallback => Some(clock.timezone_name().to_string()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
