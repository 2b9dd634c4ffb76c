use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::storage::repositories::{CategoryRepository, RecordRepository};
use crate::storage::traits::Connection;

// The database URL used when none is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:ledger.db";

/// DbConnection manages the SQLite pool and schema
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if missing) the database at `url` and set up the schema
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url: {}", url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to connect to {}", url))?;

        Self::setup_schema(&pool).await?;
        info!(url, "Database ready");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// A private in-memory database, used by tests
    ///
    /// The pool holds exactly one connection that never expires, because an
    /// in-memory SQLite database disappears with its last connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;

        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Categories are maintained outside this service; the table is only
        // created so that a fresh database is usable.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER NOT NULL UNIQUE,
                name TEXT NOT NULL DEFAULT '',
                category_type INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        // No foreign key on category_id: dangling references are tolerated.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER NOT NULL,
                datetime TEXT NOT NULL,
                source TEXT NOT NULL DEFAULT '',
                kind TEXT NOT NULL DEFAULT '',
                amount INTEGER NOT NULL,
                memo TEXT NOT NULL DEFAULT '',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for month and fiscal-year windows
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_records_datetime
            ON records(datetime);
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for category filtering
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_records_category_id
            ON records(category_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type CategoryRepository = CategoryRepository;
    type RecordRepository = RecordRepository;

    fn create_category_repository(&self) -> Self::CategoryRepository {
        CategoryRepository::new(self.clone())
    }

    fn create_record_repository(&self) -> Self::RecordRepository {
        RecordRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_in_memory_schema_is_created() {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'records') ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<String> = rows.iter().map(|row| row.get("name")).collect();
        assert_eq!(names, vec!["categories", "records"]);
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("ledger.db").display());

        let db = DbConnection::new(&url).await.expect("Failed to open database");
        sqlx::query("INSERT INTO categories (category_id, name, category_type) VALUES (100, 'Salary', 1)")
            .execute(db.pool())
            .await
            .unwrap();
        db.pool().close().await;

        // Reopening runs the schema setup again; it must be idempotent.
        let reopened = DbConnection::new(&url).await.expect("Failed to reopen database");
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM categories")
            .fetch_one(reopened.pool())
            .await
            .unwrap()
            .get("n");
        assert_eq!(count, 1);
    }
}
