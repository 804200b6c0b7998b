//! Integration tests for the period repository.

use compta_core::period::StoredPeriod;
use compta_db::PeriodRepository;
use compta_db::entities::period;
use compta_shared::config::DatabaseConfig;
use sea_orm::{DatabaseConnection, EntityTrait};

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

#[tokio::test]
async fn test_empty_database_has_no_period() {
    let repo = PeriodRepository::new(setup().await);
    assert_eq!(repo.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_save_is_an_upsert() {
    let db = setup().await;
    let repo = PeriodRepository::new(db.clone());

    repo.save(&StoredPeriod::new("Mars", "2024")).await.unwrap();
    repo.save(&StoredPeriod::new("Mars", "2024")).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(StoredPeriod::new("Mars", "2024")));

    repo.save(&StoredPeriod::new("Décembre", "2025")).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(StoredPeriod::new("Décembre", "2025")));

    let rows = period::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, period::SINGLETON_ID);
}
