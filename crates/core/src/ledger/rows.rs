//! Display rows for ledger tables.
//!
//! Everything is pre-formatted text; the presentation layer only lays it out.

use compta_shared::types::{ExpenseId, Money, ReceiptId};
use serde::Serialize;

use super::aggregator::LedgerAggregate;
use super::types::{Expense, Receipt};

/// Date format used in tables and documents.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// One line of the expense table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    /// Record identifier (Repère).
    pub id: ExpenseId,
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Supplier name.
    pub supplier: String,
    /// VAT-inclusive amount, two decimals.
    pub gross: String,
    /// Rate without the `%` sign.
    pub vat_rate: String,
    /// VAT amount, two decimals.
    pub vat: String,
    /// `Oui` or `Non`.
    pub settled: String,
    /// Comment, empty when absent.
    pub comment: String,
}

impl ExpenseRow {
    /// Column headers, in field order.
    pub const HEADERS: [&'static str; 8] = [
        "Repère",
        "Date",
        "Fournisseur",
        "TTC",
        "Taux TVA",
        "Montant TVA",
        "Validation",
        "Commentaire",
    ];
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date.format(DISPLAY_DATE_FORMAT).to_string(),
            supplier: expense.supplier.clone(),
            gross: Money::new(expense.gross).plain(),
            vat_rate: expense.vat_rate.plain(),
            vat: Money::new(expense.vat).plain(),
            settled: yes_no(expense.settled).to_string(),
            comment: expense.comment.clone().unwrap_or_default(),
        }
    }
}

/// One line of the receipt table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptRow {
    /// Record identifier (Repère).
    pub id: ReceiptId,
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Client name.
    pub client: String,
    /// Payment method label.
    pub payment_method: String,
    /// Invoice number, empty when absent.
    pub invoice_number: String,
    /// VAT-inclusive amount, two decimals.
    pub gross: String,
    /// Rate without the `%` sign.
    pub vat_rate: String,
    /// VAT amount, two decimals.
    pub vat: String,
    /// Comment, empty when absent.
    pub comment: String,
}

impl ReceiptRow {
    /// Column headers, in field order.
    pub const HEADERS: [&'static str; 9] = [
        "Repère",
        "Date",
        "Client",
        "Paiement",
        "N° Facture",
        "Montant",
        "Taux TVA",
        "Montant TVA",
        "Commentaire",
    ];
}

impl From<&Receipt> for ReceiptRow {
    fn from(receipt: &Receipt) -> Self {
        Self {
            id: receipt.id,
            date: receipt.date.format(DISPLAY_DATE_FORMAT).to_string(),
            client: receipt.client.clone(),
            payment_method: receipt.payment_method.label().to_string(),
            invoice_number: receipt.invoice_number.clone().unwrap_or_default(),
            gross: Money::new(receipt.gross).plain(),
            vat_rate: receipt.vat_rate.plain(),
            vat: Money::new(receipt.vat).plain(),
            comment: receipt.comment.clone().unwrap_or_default(),
        }
    }
}

impl LedgerAggregate<Expense> {
    /// Table rows, in record order.
    #[must_use]
    pub fn rows(&self) -> Vec<ExpenseRow> {
        self.records.iter().map(ExpenseRow::from).collect()
    }
}

impl LedgerAggregate<Receipt> {
    /// Table rows, in record order.
    #[must_use]
    pub fn rows(&self) -> Vec<ReceiptRow> {
        self.records.iter().map(ReceiptRow::from).collect()
    }
}

/// `Oui` / `Non`.
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value { "Oui" } else { "Non" }
}
