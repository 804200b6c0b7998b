//! Raw entry forms and their validation.
//!
//! Forms hold text exactly as typed. Validation turns them into records with
//! the VAT derived from the amount and rate; any VAT shown in the form is
//! ignored.

use chrono::NaiveDate;
use compta_shared::types::{ExpenseId, Money, ReceiptId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::EntryError;
use crate::ledger::{DISPLAY_DATE_FORMAT, Expense, PaymentMethod, Receipt};
use crate::vat::{VatCalculator, VatError, VatRate};

/// Expense form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpenseForm {
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Supplier name.
    pub supplier: String,
    /// VAT-inclusive amount.
    pub amount: String,
    /// Rate in `X.XX%` form.
    pub vat_rate: String,
    /// Settled checkbox.
    pub settled: bool,
    /// Optional comment.
    pub comment: String,
}

impl ExpenseForm {
    /// Validates the form into an expense with the given id.
    ///
    /// The contact id is left empty; it is filled in when the supplier is resolved.
    pub fn to_expense(&self, id: ExpenseId) -> Result<Expense, EntryError> {
        require(&[
            ("date", &self.date),
            ("fournisseur", &self.supplier),
            ("montant", &self.amount),
            ("taux TVA", &self.vat_rate),
        ])?;
        let date = parse_display_date(&self.date)?;
        let (gross, vat_rate) = parse_amount_and_rate(&self.amount, &self.vat_rate)?;

        Ok(Expense {
            id,
            date,
            supplier: self.supplier.trim().to_string(),
            contact_id: None,
            gross,
            vat_rate,
            vat: VatCalculator::vat_from_gross(gross, vat_rate),
            settled: self.settled,
            comment: optional(&self.comment),
        })
    }

    /// Form pre-filled from a stored expense, for editing.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DISPLAY_DATE_FORMAT).to_string(),
            supplier: expense.supplier.clone(),
            amount: Money::new(expense.gross).plain(),
            vat_rate: expense.vat_rate.to_string(),
            settled: expense.settled,
            comment: expense.comment.clone().unwrap_or_default(),
        }
    }
}

/// Receipt form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReceiptForm {
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Client name.
    pub client: String,
    /// `null`, `chèque` or `virement`; blank means none.
    pub payment_method: String,
    /// Optional invoice number.
    pub invoice_number: String,
    /// VAT-inclusive amount.
    pub amount: String,
    /// Rate in `X.XX%` form.
    pub vat_rate: String,
    /// Optional comment.
    pub comment: String,
}

impl ReceiptForm {
    /// Validates the form into a receipt with the given id.
    pub fn to_receipt(&self, id: ReceiptId) -> Result<Receipt, EntryError> {
        require(&[
            ("date", &self.date),
            ("client", &self.client),
            ("montant", &self.amount),
            ("taux TVA", &self.vat_rate),
        ])?;
        let date = parse_display_date(&self.date)?;
        let (gross, vat_rate) = parse_amount_and_rate(&self.amount, &self.vat_rate)?;
        let payment_method = PaymentMethod::parse(&self.payment_method)?;

        Ok(Receipt {
            id,
            date,
            client: self.client.trim().to_string(),
            contact_id: None,
            payment_method,
            invoice_number: optional(&self.invoice_number),
            gross,
            vat_rate,
            vat: VatCalculator::vat_from_gross(gross, vat_rate),
            comment: optional(&self.comment),
        })
    }

    /// Form pre-filled from a stored receipt, for editing.
    #[must_use]
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            date: receipt.date.format(DISPLAY_DATE_FORMAT).to_string(),
            client: receipt.client.clone(),
            payment_method: receipt.payment_method.code().to_string(),
            invoice_number: receipt.invoice_number.clone().unwrap_or_default(),
            amount: Money::new(receipt.gross).plain(),
            vat_rate: receipt.vat_rate.to_string(),
            comment: receipt.comment.clone().unwrap_or_default(),
        }
    }
}

/// Live VAT preview for a form: two decimals, or empty while the input is invalid.
#[must_use]
pub fn vat_preview(amount_text: &str, rate_text: &str) -> String {
    VatCalculator::compute_vat_from_gross(amount_text, rate_text)
        .map(|vat| Money::new(vat).plain())
        .unwrap_or_default()
}

/// Parses a `DD/MM/YYYY` date.
pub fn parse_display_date(text: &str) -> Result<NaiveDate, EntryError> {
    NaiveDate::parse_from_str(text.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|_| EntryError::InvalidDate(text.to_string()))
}

fn parse_amount_and_rate(amount: &str, rate: &str) -> Result<(Decimal, VatRate), EntryError> {
    let gross = Money::parse(amount).map_err(VatError::from)?;
    let vat_rate = VatRate::parse(rate)?;
    Ok((gross.amount(), vat_rate))
}

fn require(fields: &[(&'static str, &String)]) -> Result<(), EntryError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(EntryError::MissingFields(missing))
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn expense_form() -> ExpenseForm {
        ExpenseForm {
            date: "04/03/2024".into(),
            supplier: " Garage ".into(),
            amount: "100.00".into(),
            vat_rate: "20.00%".into(),
            settled: false,
            comment: String::new(),
        }
    }

    #[test]
    fn test_valid_expense_form() {
        let expense = expense_form().to_expense(ExpenseId::new()).unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(expense.supplier, "Garage");
        assert_eq!(expense.gross, dec!(100.00));
        assert_eq!(expense.vat, dec!(16.67));
        assert_eq!(expense.comment, None);
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let form = ExpenseForm {
            supplier: "  ".into(),
            amount: String::new(),
            ..expense_form()
        };
        match form.to_expense(ExpenseId::new()) {
            Err(EntryError::MissingFields(fields)) => assert_eq!(fields, vec!["fournisseur", "montant"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case("2024-03-04")]
    #[case("31/02/2024")]
    #[case("4 mars 2024")]
    fn test_invalid_dates(#[case] date: &str) {
        let form = ExpenseForm {
            date: date.into(),
            ..expense_form()
        };
        assert!(matches!(form.to_expense(ExpenseId::new()), Err(EntryError::InvalidDate(_))));
    }

    #[test]
    fn test_invalid_amount_and_rate() {
        let form = ExpenseForm {
            amount: "12,50".into(),
            ..expense_form()
        };
        assert!(matches!(
            form.to_expense(ExpenseId::new()),
            Err(EntryError::Vat(VatError::InvalidAmount(_)))
        ));

        let form = ExpenseForm {
            vat_rate: "20".into(),
            ..expense_form()
        };
        assert!(matches!(
            form.to_expense(ExpenseId::new()),
            Err(EntryError::Vat(VatError::InvalidRate(_)))
        ));

        let form = ExpenseForm {
            vat_rate: "20.005%".into(),
            ..expense_form()
        };
        assert!(matches!(
            form.to_expense(ExpenseId::new()),
            Err(EntryError::Vat(VatError::RateTooPrecise(_)))
        ));
    }

    #[test]
    fn test_receipt_form() {
        let form = ReceiptForm {
            date: "15/03/2024".into(),
            client: "Mairie".into(),
            payment_method: "chèque".into(),
            invoice_number: "F-12".into(),
            amount: "110".into(),
            vat_rate: "10.00%".into(),
            comment: "acompte".into(),
        };
        let receipt = form.to_receipt(ReceiptId::new()).unwrap();
        assert_eq!(receipt.payment_method, PaymentMethod::Cheque);
        assert_eq!(receipt.invoice_number.as_deref(), Some("F-12"));
        assert_eq!(receipt.vat, dec!(10.00));

        let bad = ReceiptForm {
            payment_method: "carte".into(),
            ..form
        };
        assert!(matches!(bad.to_receipt(ReceiptId::new()), Err(EntryError::Ledger(_))));
    }

    #[test]
    fn test_form_round_trips_through_record() {
        let expense = expense_form().to_expense(ExpenseId::new()).unwrap();
        let form = ExpenseForm::from_expense(&expense);
        assert_eq!(form.date, "04/03/2024");
        assert_eq!(form.vat_rate, "20.00%");
        assert_eq!(form.to_expense(expense.id).unwrap(), expense);
    }

    #[test]
    fn test_vat_preview() {
        assert_eq!(vat_preview("100", "20.00%"), "16.67");
        assert_eq!(vat_preview("abc", "20.00%"), "");
    }
}
