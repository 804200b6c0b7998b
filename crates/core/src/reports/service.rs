//! Report generation service.

use compta_shared::types::Money;

use super::error::ReportError;
use super::renderer::DocumentRenderer;
use super::types::{
    MonthlySummary, RenderedDocument, ReportDocument, ReportSection, ReportTable, UnsettledReport, UnsettledRow,
    strings,
};
use crate::ledger::{
    DISPLAY_DATE_FORMAT, Expense, LedgerAggregate, LedgerAggregator, LedgerError, Receipt, UnsettledAggregate,
};
use crate::period::Period;
use crate::store::LedgerStore;

/// Title of the period tax document.
pub const PERIOD_DOCUMENT_TITLE: &str = "Document de Données Fiscales";
/// Title of the unsettled-expense document.
pub const UNSETTLED_DOCUMENT_TITLE: &str = "Dépenses à Régler";
/// Default file name of the unsettled-expense document.
pub const UNSETTLED_FILE_NAME: &str = "fournisseur_a_regler.pdf";

/// Service for building reports from ledger aggregates.
pub struct ReportService;

impl ReportService {
    /// Balance and VAT due for a period.
    ///
    /// Fails with [`LedgerError::Overflow`] when a difference does not fit in a `Decimal`.
    pub fn build_monthly_summary(
        expenses: &LedgerAggregate<Expense>,
        receipts: &LedgerAggregate<Receipt>,
    ) -> Result<MonthlySummary, ReportError> {
        let balance = receipts
            .total_gross
            .checked_sub(expenses.total_gross)
            .ok_or(LedgerError::Overflow)?;
        let vat_due = receipts
            .total_vat
            .checked_sub(expenses.total_vat)
            .ok_or(LedgerError::Overflow)?;
        Ok(MonthlySummary {
            total_expenses_gross: expenses.total_gross,
            total_expenses_vat: expenses.total_vat,
            total_receipts_gross: receipts.total_gross,
            total_receipts_vat: receipts.total_vat,
            balance,
            vat_due,
        })
    }

    /// Formatted list of unsettled expenses.
    #[must_use]
    pub fn build_unsettled_report(unsettled: &UnsettledAggregate) -> UnsettledReport {
        let rows = unsettled
            .records
            .iter()
            .map(|expense| UnsettledRow {
                id: expense.id,
                date: expense.date.format(DISPLAY_DATE_FORMAT).to_string(),
                supplier: expense.supplier.clone(),
                gross: Money::new(expense.gross).euro_grouped(),
            })
            .collect();

        UnsettledReport {
            rows,
            total_gross: unsettled.total_gross,
            total_display: Money::new(unsettled.total_gross).euro_grouped(),
        }
    }

    /// The period tax document: expenses, receipts and the bilan.
    ///
    /// Records are listed by date; records sharing a date keep their store order.
    pub fn build_period_document(
        period: &Period,
        expenses: &LedgerAggregate<Expense>,
        receipts: &LedgerAggregate<Receipt>,
    ) -> Result<ReportDocument, ReportError> {
        let summary = Self::build_monthly_summary(expenses, receipts)?;

        let mut expense_records: Vec<&Expense> = expenses.records.iter().collect();
        expense_records.sort_by_key(|e| e.date);
        let expense_table = ReportTable {
            headers: strings(["Date", "Fournisseur", "TTC", "Taux TVA", "TVA"]),
            rows: expense_records
                .iter()
                .map(|e| {
                    vec![
                        e.date.format(DISPLAY_DATE_FORMAT).to_string(),
                        e.supplier.clone(),
                        Money::new(e.gross).euro(),
                        e.vat_rate.to_string(),
                        Money::new(e.vat).euro(),
                    ]
                })
                .collect(),
            footer: Some(strings([
                "",
                "",
                &Money::new(expenses.total_gross).euro(),
                "",
                &Money::new(expenses.total_vat).euro(),
            ])),
        };

        let mut receipt_records: Vec<&Receipt> = receipts.records.iter().collect();
        receipt_records.sort_by_key(|r| r.date);
        let receipt_table = ReportTable {
            headers: strings(["Date", "Client", "Montant", "Taux TVA", "TVA"]),
            rows: receipt_records
                .iter()
                .map(|r| {
                    vec![
                        r.date.format(DISPLAY_DATE_FORMAT).to_string(),
                        r.client.clone(),
                        Money::new(r.gross).euro(),
                        r.vat_rate.to_string(),
                        Money::new(r.vat).euro(),
                    ]
                })
                .collect(),
            footer: Some(strings([
                "",
                "",
                &Money::new(receipts.total_gross).euro(),
                "",
                &Money::new(receipts.total_vat).euro(),
            ])),
        };

        let bilan_table = ReportTable {
            headers: Vec::new(),
            rows: summary
                .lines()
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value])
                .collect(),
            footer: None,
        };

        let month_name = period.month().name();
        Ok(ReportDocument {
            title: PERIOD_DOCUMENT_TITLE.to_string(),
            subtitle: Some(format!("Période : {month_name} {}", period.year())),
            sections: vec![
                ReportSection {
                    heading: Some("DÉPENSES".to_string()),
                    table: expense_table,
                },
                ReportSection {
                    heading: Some("RECETTES".to_string()),
                    table: receipt_table,
                },
                ReportSection {
                    heading: Some("BILAN".to_string()),
                    table: bilan_table,
                },
            ],
            file_name: format!("donnees_fiscales_{month_name}_{}.pdf", period.year()),
        })
    }

    /// The unsettled-expense document.
    #[must_use]
    pub fn unsettled_document(report: &UnsettledReport) -> ReportDocument {
        let table = ReportTable {
            headers: strings(["ID", "Date", "Fournisseur", "TTC"]),
            rows: report
                .rows
                .iter()
                .map(|row| vec![row.id.to_string(), row.date.clone(), row.supplier.clone(), row.gross.clone()])
                .collect(),
            footer: Some(strings(["", "", "Total TTC :", &report.total_display])),
        };

        ReportDocument {
            title: UNSETTLED_DOCUMENT_TITLE.to_string(),
            subtitle: None,
            sections: vec![ReportSection { heading: None, table }],
            file_name: UNSETTLED_FILE_NAME.to_string(),
        }
    }

    /// Loads a period, builds its tax document and renders it.
    pub fn export_period_document<S, R>(store: &S, period: &Period, renderer: &R) -> Result<RenderedDocument, ReportError>
    where
        S: LedgerStore + ?Sized,
        R: DocumentRenderer + ?Sized,
    {
        let expenses = LedgerAggregator::load_expenses(store, period)?;
        let receipts = LedgerAggregator::load_receipts(store, period)?;
        let document = Self::build_period_document(period, &expenses, &receipts)?;
        let rendered = renderer.render_named(&document)?;
        tracing::info!(
            period = %period,
            file = %rendered.file_name,
            expenses = expenses.len(),
            receipts = receipts.len(),
            "period document exported"
        );
        Ok(rendered)
    }

    /// Loads unsettled expenses, builds their document and renders it.
    pub fn export_unsettled_document<S, R>(store: &S, renderer: &R) -> Result<RenderedDocument, ReportError>
    where
        S: LedgerStore + ?Sized,
        R: DocumentRenderer + ?Sized,
    {
        let unsettled = LedgerAggregator::load_unsettled_expenses(store)?;
        let document = Self::unsettled_document(&Self::build_unsettled_report(&unsettled));
        let rendered = renderer.render_named(&document)?;
        tracing::info!(file = %rendered.file_name, count = unsettled.records.len(), "unsettled document exported");
        Ok(rendered)
    }
}
