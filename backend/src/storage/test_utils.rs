//! Shared fixtures for storage-backed tests.

use crate::storage::connection::DbConnection;

/// Fresh in-memory database with the schema applied
pub async fn setup_test_db() -> DbConnection {
    DbConnection::in_memory()
        .await
        .expect("Failed to create test database")
}

/// Insert a category row directly, bypassing the repositories
pub async fn seed_category(db: &DbConnection, category_id: i64, name: &str, type_code: i64) {
    sqlx::query("INSERT INTO categories (category_id, name, category_type) VALUES (?, ?, ?)")
        .bind(category_id)
        .bind(name)
        .bind(type_code)
        .execute(db.pool())
        .await
        .expect("Failed to seed category");
}

/// Insert a record row directly and return its id
///
/// `datetime` uses the stored text form, e.g. `2024-04-15 00:00:00`.
pub async fn seed_record(db: &DbConnection, category_id: i64, datetime: &str, amount: i64) -> i64 {
    sqlx::query("INSERT INTO records (category_id, datetime, amount) VALUES (?, ?, ?)")
        .bind(category_id)
        .bind(datetime)
        .bind(amount)
        .execute(db.pool())
        .await
        .expect("Failed to seed record")
        .last_insert_rowid()
}

/// The category catalog used by most service tests
pub async fn seed_standard_categories(db: &DbConnection) {
    seed_category(db, 100, "Salary", 1).await;
    seed_category(db, 200, "Rent", 2).await;
    seed_category(db, 201, "Groceries", 2).await;
    seed_category(db, 300, "Index fund", 3).await;
    seed_category(db, 400, "Emergency fund", 4).await;
}
