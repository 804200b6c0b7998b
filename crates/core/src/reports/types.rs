//! Report data types.

use compta_shared::types::{ExpenseId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-period balance (bilan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Sum of expense gross amounts.
    pub total_expenses_gross: Decimal,
    /// Sum of expense VAT.
    pub total_expenses_vat: Decimal,
    /// Sum of receipt gross amounts.
    pub total_receipts_gross: Decimal,
    /// Sum of receipt VAT.
    pub total_receipts_vat: Decimal,
    /// `total_receipts_gross - total_expenses_gross`.
    pub balance: Decimal,
    /// `total_receipts_vat - total_expenses_vat`; negative means a VAT credit.
    pub vat_due: Decimal,
}

impl MonthlySummary {
    /// The six bilan lines as (label, `X.XX €`) pairs.
    #[must_use]
    pub fn lines(&self) -> [(&'static str, String); 6] {
        [
            ("Total Dépenses TTC", Money::new(self.total_expenses_gross).euro()),
            ("Total Dépenses TVA", Money::new(self.total_expenses_vat).euro()),
            ("Total Recettes", Money::new(self.total_receipts_gross).euro()),
            ("Total Recettes TVA", Money::new(self.total_receipts_vat).euro()),
            ("Solde", Money::new(self.balance).euro()),
            ("TVA à payer", Money::new(self.vat_due).euro()),
        ]
    }
}

/// One unsettled expense, formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsettledRow {
    /// Expense identifier.
    pub id: ExpenseId,
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Supplier name.
    pub supplier: String,
    /// Gross amount, `1 234,56 €`.
    pub gross: String,
}

/// Expenses still to be paid, with their grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsettledReport {
    /// Rows in store insertion order.
    pub rows: Vec<UnsettledRow>,
    /// Sum of gross amounts.
    pub total_gross: Decimal,
    /// Total formatted as `1 234,56 €`.
    pub total_display: String,
}

/// A table inside a document section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers; empty for label/value tables.
    pub headers: Vec<String>,
    /// Body rows.
    pub rows: Vec<Vec<String>>,
    /// Totals row, rendered emphasised.
    pub footer: Option<Vec<String>>,
}

/// A titled part of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading (`DÉPENSES`, ...), if any.
    pub heading: Option<String>,
    /// Section content.
    pub table: ReportTable,
}

/// A document ready for a renderer: display strings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Main title.
    pub title: String,
    /// Line under the title.
    pub subtitle: Option<String>,
    /// Sections in order; renderers start each on a new page.
    pub sections: Vec<ReportSection>,
    /// Suggested file name for the save dialog.
    pub file_name: String,
}

/// Renderer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Suggested file name, with the renderer's extension.
    pub file_name: String,
    /// Encoded document.
    pub bytes: Vec<u8>,
}

pub(crate) fn strings<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}
