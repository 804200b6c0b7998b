//! Integration tests for the expense and receipt repositories.

use chrono::NaiveDate;
use compta_core::ledger::{Expense, PaymentMethod, Receipt};
use compta_core::period::Period;
use compta_core::vat::VatRate;
use compta_db::entities::{expenses, receipts};
use compta_db::{DbError, ExpenseRepository, ReceiptRepository};
use compta_shared::config::DatabaseConfig;
use compta_shared::types::{ExpenseId, ReceiptId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

async fn setup() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    compta_db::connect_and_migrate(&config)
        .await
        .expect("Failed to set up database")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn march() -> Period {
    Period::try_new(3, 2024).unwrap()
}

#[tokio::test]
async fn test_expenses_in_period() {
    let repo = ExpenseRepository::new(setup().await);
    let late = Expense::new(date(2024, 3, 31), "Garage", dec!(100), VatRate::STANDARD);
    let early = Expense::new(date(2024, 3, 1), "Papeterie", dec!(50), VatRate::STANDARD);
    let april = Expense::new(date(2024, 4, 1), "Garage", dec!(999), VatRate::STANDARD);
    let february = Expense::new(date(2024, 2, 29), "Garage", dec!(999), VatRate::STANDARD);
    for expense in [&late, &early, &april, &february] {
        repo.insert(expense).await.unwrap();
    }

    let found = repo.find_in_period(&march()).await.unwrap();
    assert_eq!(found, vec![late, early]);
}

#[tokio::test]
async fn test_expense_fields_survive_storage() {
    let repo = ExpenseRepository::new(setup().await);
    let mut expense = Expense::new(date(2024, 3, 5), "Boulangerie", dec!(12.66), VatRate::REDUCED);
    expense.comment = Some("Réunion".to_string());
    expense.settled = true;
    repo.insert(&expense).await.unwrap();

    let stored = repo.find_by_id(expense.id).await.unwrap().unwrap();
    assert_eq!(stored.vat_rate, VatRate::REDUCED);
    assert_eq!(stored.vat, dec!(0.66));
    assert_eq!(stored, expense);
}

#[tokio::test]
async fn test_null_amounts_read_as_zero() {
    let db = setup().await;
    let id = Uuid::now_v7();
    expenses::ActiveModel {
        id: Set(id),
        date: Set(date(2024, 3, 15)),
        supplier: Set("Ancien".to_string()),
        contact_id: Set(None),
        gross_cents: Set(None),
        vat_rate_hundredths: Set(2000),
        vat_cents: Set(None),
        settled: Set(false),
        comment: Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    let repo = ExpenseRepository::new(db);
    let found = repo.find_in_period(&march()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].gross, Decimal::ZERO);
    assert_eq!(found[0].vat, Decimal::ZERO);
}

#[tokio::test]
async fn test_settling_expenses() {
    let repo = ExpenseRepository::new(setup().await);
    let january = Expense::new(date(2024, 1, 15), "EDF", dec!(80), VatRate::STANDARD);
    let march = Expense::new(date(2024, 3, 2), "Orange", dec!(40), VatRate::STANDARD);
    repo.insert(&january).await.unwrap();
    repo.insert(&march).await.unwrap();

    assert_eq!(repo.find_unsettled().await.unwrap().len(), 2);

    repo.set_settled(january.id, true).await.unwrap();
    let unsettled = repo.find_unsettled().await.unwrap();
    assert_eq!(unsettled, vec![march]);

    let result = repo.set_settled(ExpenseId::new(), true).await;
    assert!(matches!(result, Err(DbError::NotFound { entity: "expense", .. })));
}

#[tokio::test]
async fn test_expense_update_and_delete() {
    let repo = ExpenseRepository::new(setup().await);
    let mut expense = Expense::new(date(2024, 3, 5), "Garage", dec!(100), VatRate::STANDARD);
    repo.insert(&expense).await.unwrap();
    assert!(matches!(repo.insert(&expense).await, Err(DbError::Conflict(_))));

    expense.supplier = "Garage Martin".to_string();
    repo.update(&expense).await.unwrap();
    assert_eq!(repo.find_by_id(expense.id).await.unwrap().unwrap().supplier, "Garage Martin");

    repo.delete(expense.id).await.unwrap();
    assert!(repo.find_by_id(expense.id).await.unwrap().is_none());
    assert!(matches!(repo.delete(expense.id).await, Err(DbError::NotFound { .. })));
    assert!(matches!(repo.update(&expense).await, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn test_receipts_round_trip_payment_method() {
    let repo = ReceiptRepository::new(setup().await);
    let mut receipt = Receipt::new(date(2024, 3, 12), "Client", dec!(200), VatRate::STANDARD);
    receipt.payment_method = PaymentMethod::Cheque;
    receipt.invoice_number = Some("F-2024-031".to_string());
    repo.insert(&receipt).await.unwrap();
    repo.insert(&Receipt::new(date(2024, 4, 1), "Client", dec!(10), VatRate::ZERO))
        .await
        .unwrap();

    let found = repo.find_in_period(&march()).await.unwrap();
    assert_eq!(found, vec![receipt.clone()]);

    receipt.payment_method = PaymentMethod::Transfer;
    repo.update(&receipt).await.unwrap();
    let stored = repo.find_by_id(receipt.id).await.unwrap().unwrap();
    assert_eq!(stored.payment_method, PaymentMethod::Transfer);

    repo.delete(receipt.id).await.unwrap();
    assert!(matches!(repo.delete(ReceiptId::new()).await, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn test_unknown_payment_code_is_reported() {
    let db = setup().await;
    receipts::ActiveModel {
        id: Set(Uuid::now_v7()),
        date: Set(date(2024, 3, 12)),
        client: Set("Client".to_string()),
        contact_id: Set(None),
        payment_method: Set("espèces".to_string()),
        invoice_number: Set(None),
        gross_cents: Set(Some(1000)),
        vat_rate_hundredths: Set(2000),
        vat_cents: Set(Some(167)),
        comment: Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    let result = ReceiptRepository::new(db).find_in_period(&march()).await;
    assert!(matches!(result, Err(DbError::CorruptRow { entity: "receipt", .. })));
}
