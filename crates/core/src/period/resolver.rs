//! Active period resolution and persistence.

use compta_shared::config::PeriodConfig;

use super::error::PeriodError;
use super::month::month_name_to_number;
use super::types::{Period, StoredPeriod, parse_year};
use crate::store::LedgerStore;

/// Where a resolved period came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOrigin {
    /// Read from the store.
    Stored,
    /// Store was empty; the configured default was written and returned.
    Initialized,
    /// Store failed; the configured default was returned without being persisted.
    Fallback,
}

/// The period a session starts with, in its persisted (textual) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    /// Month name and year text, verbatim.
    pub stored: StoredPeriod,
    /// How the value was obtained.
    pub origin: PeriodOrigin,
}

impl ResolvedPeriod {
    /// Month name as stored.
    #[must_use]
    pub fn month_name(&self) -> &str {
        &self.stored.month_name
    }

    /// Year text as stored.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.stored.year
    }

    /// Turns the textual period into a [`Period`].
    ///
    /// Unknown month names resolve to January, like every month lookup; the
    /// year must still be numeric.
    pub fn to_period(&self) -> Result<Period, PeriodError> {
        let month = month_name_to_number(&self.stored.month_name).month;
        Period::of(month, parse_year(&self.stored.year)?)
    }
}

/// Reads and writes the singleton period record.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Determines the active period at session start.
    ///
    /// Never fails: an empty store is initialised with `defaults`, and a
    /// failing store yields `defaults` after logging the error.
    pub fn resolve_active_period<S>(store: &mut S, defaults: &PeriodConfig) -> ResolvedPeriod
    where
        S: LedgerStore + ?Sized,
    {
        let default = StoredPeriod::new(&defaults.default_month, &defaults.default_year);

        match store.load_period() {
            Ok(Some(stored)) => {
                tracing::info!(month = %stored.month_name, year = %stored.year, "period loaded");
                ResolvedPeriod {
                    stored,
                    origin: PeriodOrigin::Stored,
                }
            }
            Ok(None) => match store.save_period(&default) {
                Ok(()) => {
                    tracing::info!(
                        month = %default.month_name,
                        year = %default.year,
                        "no stored period, default written"
                    );
                    ResolvedPeriod {
                        stored: default,
                        origin: PeriodOrigin::Initialized,
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not write default period");
                    ResolvedPeriod {
                        stored: default,
                        origin: PeriodOrigin::Fallback,
                    }
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "could not load period, using default");
                ResolvedPeriod {
                    stored: default,
                    origin: PeriodOrigin::Fallback,
                }
            }
        }
    }

    /// Upserts the singleton period record.
    ///
    /// The month must be a canonical name and the year numeric. Writing the same
    /// values twice leaves the same record.
    pub fn persist_period<S>(store: &mut S, month_name: &str, year: &str) -> Result<StoredPeriod, PeriodError>
    where
        S: LedgerStore + ?Sized,
    {
        let stored = Period::from_names(month_name, year)?.to_stored();
        store.save_period(&stored)?;
        tracing::debug!(month = %stored.month_name, year = %stored.year, "period persisted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Month;
    use crate::store::{MemoryStore, StoreError};

    fn defaults() -> PeriodConfig {
        PeriodConfig::default()
    }

    #[test]
    fn test_resolve_reads_stored_period() {
        let mut store = MemoryStore::new();
        store.save_period(&StoredPeriod::new("Mars", "2024")).unwrap();

        let resolved = PeriodResolver::resolve_active_period(&mut store, &defaults());
        assert_eq!(resolved.origin, PeriodOrigin::Stored);
        assert_eq!(resolved.month_name(), "Mars");
        assert_eq!(resolved.year(), "2024");
        assert_eq!(resolved.to_period().unwrap().month(), Month::Mars);
    }

    #[test]
    fn test_resolve_initialises_empty_store() {
        let mut store = MemoryStore::new();

        let resolved = PeriodResolver::resolve_active_period(&mut store, &defaults());
        assert_eq!(resolved.origin, PeriodOrigin::Initialized);
        assert_eq!(resolved.stored, StoredPeriod::new("Janvier", "2023"));
        assert_eq!(store.load_period().unwrap(), Some(StoredPeriod::new("Janvier", "2023")));
    }

    #[test]
    fn test_resolve_falls_back_on_read_failure() {
        let mut store = MemoryStore::new();
        store.fail_reads(true);

        let resolved = PeriodResolver::resolve_active_period(&mut store, &defaults());
        assert_eq!(resolved.origin, PeriodOrigin::Fallback);
        assert_eq!(resolved.stored, StoredPeriod::new("Janvier", "2023"));
    }

    #[test]
    fn test_resolve_returns_default_when_write_fails() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);

        let resolved = PeriodResolver::resolve_active_period(&mut store, &defaults());
        assert_eq!(resolved.origin, PeriodOrigin::Fallback);
        assert_eq!(resolved.month_name(), "Janvier");
    }

    #[test]
    fn test_corrupted_month_resolves_to_january() {
        let mut store = MemoryStore::new();
        store.save_period(&StoredPeriod::new("Brumaire", "2024")).unwrap();

        let resolved = PeriodResolver::resolve_active_period(&mut store, &defaults());
        let period = resolved.to_period().unwrap();
        assert_eq!(period.month(), Month::Janvier);
        assert_eq!(period.year(), 2024);
    }

    #[test]
    fn test_persist_is_idempotent() {
        let mut store = MemoryStore::new();
        PeriodResolver::persist_period(&mut store, "Avril", "2025").unwrap();
        PeriodResolver::persist_period(&mut store, "Avril", "2025").unwrap();

        assert_eq!(store.load_period().unwrap(), Some(StoredPeriod::new("Avril", "2025")));
    }

    #[test]
    fn test_persist_rejects_bad_values_without_writing() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            PeriodResolver::persist_period(&mut store, "Avril", "deux mille"),
            Err(PeriodError::InvalidYear(_))
        ));
        assert!(matches!(
            PeriodResolver::persist_period(&mut store, "april", "2025"),
            Err(PeriodError::UnknownMonthName(_))
        ));
        assert_eq!(store.load_period().unwrap(), None);
    }

    #[test]
    fn test_persist_propagates_store_failure() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        assert!(matches!(
            PeriodResolver::persist_period(&mut store, "Avril", "2025"),
            Err(PeriodError::Store(StoreError::Unavailable(_)))
        ));
    }
}
