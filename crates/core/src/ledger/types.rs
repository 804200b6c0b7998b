//! Ledger domain types: expenses, receipts and what they share.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use compta_shared::types::{ContactId, ExpenseId, ReceiptId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use crate::vat::{VatCalculator, VatRate};

/// Fields shared by expenses and receipts.
pub trait Transaction {
    /// Operation date.
    fn date(&self) -> NaiveDate;

    /// Supplier name (expense) or client name (receipt).
    fn counterpart(&self) -> &str;

    /// Contact resolved for the counterpart, if any.
    fn contact_id(&self) -> Option<ContactId>;

    /// VAT-inclusive amount.
    fn gross(&self) -> Decimal;

    /// VAT rate applied.
    fn vat_rate(&self) -> VatRate;

    /// VAT portion of the gross amount.
    fn vat(&self) -> Decimal;

    /// Free-text comment.
    fn comment(&self) -> Option<&str>;
}

/// An expense (dépense) paid to a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier.
    pub id: ExpenseId,
    /// Operation date.
    pub date: NaiveDate,
    /// Supplier name.
    pub supplier: String,
    /// Resolved supplier contact.
    pub contact_id: Option<ContactId>,
    /// VAT-inclusive amount (TTC).
    pub gross: Decimal,
    /// VAT rate.
    pub vat_rate: VatRate,
    /// VAT amount.
    pub vat: Decimal,
    /// Whether the supplier has been paid.
    pub settled: bool,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl Expense {
    /// Creates an unsettled expense, deriving the VAT from `gross` and `vat_rate`.
    pub fn new(date: NaiveDate, supplier: impl Into<String>, gross: Decimal, vat_rate: VatRate) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            supplier: supplier.into(),
            contact_id: None,
            gross,
            vat_rate,
            vat: VatCalculator::vat_from_gross(gross, vat_rate),
            settled: false,
            comment: None,
        }
    }
}

impl Transaction for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn counterpart(&self) -> &str {
        &self.supplier
    }

    fn contact_id(&self) -> Option<ContactId> {
        self.contact_id
    }

    fn gross(&self) -> Decimal {
        self.gross
    }

    fn vat_rate(&self) -> VatRate {
        self.vat_rate
    }

    fn vat(&self) -> Decimal {
        self.vat
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// How a client paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Not recorded.
    #[default]
    None,
    /// Paid by cheque.
    Cheque,
    /// Paid by bank transfer.
    Transfer,
}

impl PaymentMethod {
    /// Values offered by the payment picker, in order.
    pub const ALL: [Self; 3] = [Self::None, Self::Cheque, Self::Transfer];

    /// Picker and storage value: `null`, `chèque` or `virement`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "null",
            Self::Cheque => "chèque",
            Self::Transfer => "virement",
        }
    }

    /// Label shown in tables and documents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Aucun",
            Self::Cheque => "Chèque",
            Self::Transfer => "Virement",
        }
    }

    /// Parses a picker or storage value. Blank text means [`PaymentMethod::None`].
    pub fn parse(text: &str) -> Result<Self, LedgerError> {
        match text.trim() {
            "" | "null" => Ok(Self::None),
            "chèque" | "cheque" => Ok(Self::Cheque),
            "virement" => Ok(Self::Transfer),
            other => Err(LedgerError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A receipt (recette) from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Identifier.
    pub id: ReceiptId,
    /// Operation date.
    pub date: NaiveDate,
    /// Client name.
    pub client: String,
    /// Resolved client contact.
    pub contact_id: Option<ContactId>,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Invoice number (N° Facture).
    pub invoice_number: Option<String>,
    /// VAT-inclusive amount.
    pub gross: Decimal,
    /// VAT rate.
    pub vat_rate: VatRate,
    /// VAT amount.
    pub vat: Decimal,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl Receipt {
    /// Creates a receipt with no payment method, deriving the VAT.
    pub fn new(date: NaiveDate, client: impl Into<String>, gross: Decimal, vat_rate: VatRate) -> Self {
        Self {
            id: ReceiptId::new(),
            date,
            client: client.into(),
            contact_id: None,
            payment_method: PaymentMethod::None,
            invoice_number: None,
            gross,
            vat_rate,
            vat: VatCalculator::vat_from_gross(gross, vat_rate),
            comment: None,
        }
    }
}

impl Transaction for Receipt {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn counterpart(&self) -> &str {
        &self.client
    }

    fn contact_id(&self) -> Option<ContactId> {
        self.contact_id
    }

    fn gross(&self) -> Decimal {
        self.gross
    }

    fn vat_rate(&self) -> VatRate {
        self.vat_rate
    }

    fn vat(&self) -> Decimal {
        self.vat
    }

    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
