//! French month names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar month, named the way the user sees it.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Janvier = 1,
    Fevrier = 2,
    Mars = 3,
    Avril = 4,
    Mai = 5,
    Juin = 6,
    Juillet = 7,
    Aout = 8,
    Septembre = 9,
    Octobre = 10,
    Novembre = 11,
    Decembre = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Janvier,
        Self::Fevrier,
        Self::Mars,
        Self::Avril,
        Self::Mai,
        Self::Juin,
        Self::Juillet,
        Self::Aout,
        Self::Septembre,
        Self::Octobre,
        Self::Novembre,
        Self::Decembre,
    ];

    /// Ordinal in `1..=12`.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Month for an ordinal, `None` outside `1..=12`.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Canonical display name, accents included.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Janvier => "Janvier",
            Self::Fevrier => "Février",
            Self::Mars => "Mars",
            Self::Avril => "Avril",
            Self::Mai => "Mai",
            Self::Juin => "Juin",
            Self::Juillet => "Juillet",
            Self::Aout => "Août",
            Self::Septembre => "Septembre",
            Self::Octobre => "Octobre",
            Self::Novembre => "Novembre",
            Self::Decembre => "Décembre",
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of [`month_name_to_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLookup {
    /// Resolved month.
    pub month: Month,
    /// True when the name was not recognised and January was substituted.
    pub is_fallback: bool,
}

impl MonthLookup {
    /// Ordinal of the resolved month.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.month.number()
    }
}

/// Maps a month name to its ordinal, defaulting to January for unknown names.
///
/// The default is reported through [`MonthLookup::is_fallback`] and a warning.
#[must_use]
pub fn month_name_to_number(name: &str) -> MonthLookup {
    match Month::from_name(name) {
        Some(month) => MonthLookup {
            month,
            is_fallback: false,
        },
        None => {
            tracing::warn!(name, "unknown month name, defaulting to Janvier");
            MonthLookup {
                month: Month::Janvier,
                is_fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Janvier", 1)]
    #[case("Février", 2)]
    #[case("Mars", 3)]
    #[case("Août", 8)]
    #[case("Décembre", 12)]
    fn test_known_names(#[case] name: &str, #[case] expected: u32) {
        let lookup = month_name_to_number(name);
        assert_eq!(lookup.number(), expected);
        assert!(!lookup.is_fallback);
    }

    #[rstest]
    #[case("Unknown")]
    #[case("mars")]
    #[case("Fevrier")]
    #[case("")]
    fn test_unknown_names_fall_back_to_january(#[case] name: &str) {
        let lookup = month_name_to_number(name);
        assert_eq!(lookup.number(), 1);
        assert!(lookup.is_fallback);
    }

    #[test]
    fn test_number_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
            assert_eq!(Month::from_name(month.name()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }
}
