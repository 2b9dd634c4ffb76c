use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::category::{Category, CategoryType};
use crate::error::LedgerResult;
use crate::storage::connection::DbConnection;
use crate::storage::traits::CategoryStorage;

/// Repository for category lookups
#[derive(Clone)]
pub struct CategoryRepository {
    db: DbConnection,
}

impl CategoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn category_from_row(row: &SqliteRow) -> LedgerResult<Category> {
        Ok(Category {
            id: row.try_get("id")?,
            category_id: row.try_get("category_id")?,
            name: row.try_get("name")?,
            category_type: CategoryType::from_code(row.try_get("category_type")?),
        })
    }
}

#[async_trait]
impl CategoryStorage for CategoryRepository {
    async fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT id, category_id, name, category_type
            FROM categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::category_from_row).collect()
    }

    async fn get_category(&self, category_id: i64) -> LedgerResult<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, category_id, name, category_type
            FROM categories
            WHERE category_id = ?
            "#,
        )
        .bind(category_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::category_from_row).transpose()
    }
}
