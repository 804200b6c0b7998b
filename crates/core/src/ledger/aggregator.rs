//! Period aggregation of expenses and receipts.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{Expense, Receipt, Transaction};
use crate::period::Period;
use crate::store::LedgerStore;

/// Records of one kind for a period, with their totals.
///
/// A snapshot: it does not follow later store changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerAggregate<T> {
    /// Period the records were loaded for.
    pub period: Period,
    /// Records in store insertion order.
    pub records: Vec<T>,
    /// Sum of VAT-inclusive amounts.
    pub total_gross: Decimal,
    /// Sum of VAT amounts.
    pub total_vat: Decimal,
}

impl<T: Transaction> LedgerAggregate<T> {
    /// Totals `records` for `period`.
    ///
    /// Fails with [`LedgerError::Overflow`] when a total does not fit in a `Decimal`.
    pub fn from_records(period: Period, records: Vec<T>) -> Result<Self, LedgerError> {
        let (total_gross, total_vat) =
            records
                .iter()
                .try_fold((Decimal::ZERO, Decimal::ZERO), |(gross, vat), r| {
                    Ok::<_, LedgerError>((checked_total(gross, r.gross())?, checked_total(vat, r.vat())?))
                })?;
        Ok(Self {
            period,
            records,
            total_gross,
            total_vat,
        })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the period has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// All expenses not yet settled, whatever their date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsettledAggregate {
    /// Unsettled expenses in store insertion order.
    pub records: Vec<Expense>,
    /// Sum of VAT-inclusive amounts.
    pub total_gross: Decimal,
}

impl UnsettledAggregate {
    /// Totals unsettled `records`.
    pub fn from_records(records: Vec<Expense>) -> Result<Self, LedgerError> {
        let total_gross = records
            .iter()
            .try_fold(Decimal::ZERO, |total, e| checked_total(total, e.gross))?;
        Ok(Self { records, total_gross })
    }
}

fn checked_total(total: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    total.checked_add(amount).ok_or(LedgerError::Overflow)
}

/// Loads ledger records from a store and totals them.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Expenses dated in `period`.
    pub fn load_expenses<S>(store: &S, period: &Period) -> Result<LedgerAggregate<Expense>, LedgerError>
    where
        S: LedgerStore + ?Sized,
    {
        let records = store.expenses_in_period(period)?;
        tracing::debug!(period = %period, count = records.len(), "expenses loaded");
        LedgerAggregate::from_records(*period, records)
    }

    /// Receipts dated in `period`.
    pub fn load_receipts<S>(store: &S, period: &Period) -> Result<LedgerAggregate<Receipt>, LedgerError>
    where
        S: LedgerStore + ?Sized,
    {
        let records = store.receipts_in_period(period)?;
        tracing::debug!(period = %period, count = records.len(), "receipts loaded");
        LedgerAggregate::from_records(*period, records)
    }

    /// Expenses still to be paid, any period.
    pub fn load_unsettled_expenses<S>(store: &S) -> Result<UnsettledAggregate, LedgerError>
    where
        S: LedgerStore + ?Sized,
    {
        let records = store.unsettled_expenses()?;
        tracing::debug!(count = records.len(), "unsettled expenses loaded");
        UnsettledAggregate::from_records(records)
    }
}
