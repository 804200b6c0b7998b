//! Period selection over one working session.

use compta_shared::config::PeriodConfig;

use super::error::PeriodError;
use super::resolver::{PeriodOrigin, PeriodResolver, ResolvedPeriod};
use super::types::{Period, StoredPeriod};
use crate::store::LedgerStore;

/// The active period from session start to session end.
///
/// `begin` resolves the stored period, `select` changes it in memory and
/// `end` writes it back.
#[derive(Debug, Clone)]
pub struct PeriodSession {
    current: ResolvedPeriod,
}

impl PeriodSession {
    /// Starts a session with the stored period, or the default.
    pub fn begin<S>(store: &mut S, defaults: &PeriodConfig) -> Self
    where
        S: LedgerStore + ?Sized,
    {
        Self {
            current: PeriodResolver::resolve_active_period(store, defaults),
        }
    }

    /// The active period in textual form.
    #[must_use]
    pub fn current(&self) -> &StoredPeriod {
        &self.current.stored
    }

    /// How the starting period was obtained.
    #[must_use]
    pub fn origin(&self) -> PeriodOrigin {
        self.current.origin
    }

    /// The active period, validated.
    pub fn period(&self) -> Result<Period, PeriodError> {
        self.current.to_period()
    }

    /// Switches to another period chosen by the user.
    ///
    /// Invalid input leaves the current period untouched.
    pub fn select(&mut self, month_name: &str, year: &str) -> Result<Period, PeriodError> {
        let period = Period::from_names(month_name, year)?;
        self.current.stored = period.to_stored();
        tracing::debug!(period = %period, "period selected");
        Ok(period)
    }

    /// Persists the active period and closes the session.
    pub fn end<S>(self, store: &mut S) -> Result<StoredPeriod, PeriodError>
    where
        S: LedgerStore + ?Sized,
    {
        let StoredPeriod { month_name, year } = self.current.stored;
        PeriodResolver::persist_period(store, &month_name, &year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_session_lifecycle() {
        let mut store = MemoryStore::new();
        let mut session = PeriodSession::begin(&mut store, &PeriodConfig::default());
        assert_eq!(session.origin(), PeriodOrigin::Initialized);
        assert_eq!(session.period().unwrap().label(), "Janvier 2023");

        let period = session.select("Juin", "2024").unwrap();
        assert_eq!(period.label(), "Juin 2024");
        assert_eq!(session.current(), &StoredPeriod::new("Juin", "2024"));

        session.end(&mut store).unwrap();
        assert_eq!(store.load_period().unwrap(), Some(StoredPeriod::new("Juin", "2024")));

        let next = PeriodSession::begin(&mut store, &PeriodConfig::default());
        assert_eq!(next.origin(), PeriodOrigin::Stored);
        assert_eq!(next.current(), &StoredPeriod::new("Juin", "2024"));
    }

    #[test]
    fn test_invalid_selection_keeps_current_period() {
        let mut store = MemoryStore::new();
        let mut session = PeriodSession::begin(&mut store, &PeriodConfig::default());

        assert!(session.select("Juin", "24a").is_err());
        assert_eq!(session.current(), &StoredPeriod::new("Janvier", "2023"));
    }
}
