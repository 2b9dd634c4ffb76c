use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

use crate::domain::commands::records::RecordFilter;
use crate::domain::models::period::{DateWindow, YearMonth};
use crate::domain::models::record::{MonthlyCategoryTotal, NewRecord, Record};
use crate::error::LedgerResult;
use crate::storage::connection::DbConnection;
use crate::storage::traits::RecordStorage;

const RECORD_COLUMNS: &str = "id, category_id, datetime, source, kind, amount, memo";

/// Repository for record operations
#[derive(Clone)]
pub struct RecordRepository {
    db: DbConnection,
}

impl RecordRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn record_from_row(row: &SqliteRow) -> LedgerResult<Record> {
        Ok(Record {
            id: row.try_get("id")?,
            category_id: row.try_get("category_id")?,
            category_name: String::new(),
            occurred_at: row.try_get("datetime")?,
            from: row.try_get("source")?,
            kind: row.try_get("kind")?,
            amount: row.try_get("amount")?,
            memo: row.try_get("memo")?,
        })
    }

    /// Append the WHERE clause for `filter`
    fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &RecordFilter) {
        let mut separator = " WHERE ";
        if let Some(window) = filter.month {
            builder
                .push(separator)
                .push("datetime >= ")
                .push_bind(window.start)
                .push(" AND datetime < ")
                .push_bind(window.end);
            separator = " AND ";
        }
        if let Some(category_id) = filter.category_id {
            builder
                .push(separator)
                .push("category_id = ")
                .push_bind(category_id);
        }
    }
}

#[async_trait]
impl RecordStorage for RecordRepository {
    async fn create_record(&self, record: &NewRecord) -> LedgerResult<Option<Record>> {
        let mut tx = self.db.pool().begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO records (category_id, datetime, source, kind, amount, memo)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.category_id)
        .bind(record.occurred_at)
        .bind(&record.from)
        .bind(&record.kind)
        .bind(record.amount)
        .bind(&record.memo)
        .execute(&mut *tx)
        .await?;

        let category_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM categories WHERE category_id = ?")
                .bind(record.category_id)
                .fetch_optional(&mut *tx)
                .await?;

        match category_name {
            Some(name) => {
                tx.commit().await?;
                Ok(Some(
                    record
                        .clone()
                        .into_record(inserted.last_insert_rowid(), name),
                ))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    async fn get_record(&self, id: i64) -> LedgerResult<Option<Record>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM records WHERE id = ?",
            RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn list_records(
        &self,
        filter: &RecordFilter,
        limit: u32,
        offset: u32,
    ) -> LedgerResult<Vec<Record>> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM records", RECORD_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(i64::from(offset));

        let rows = builder.build().fetch_all(self.db.pool()).await?;
        rows.iter().map(Self::record_from_row).collect()
    }

    async fn count_records(&self, filter: &RecordFilter) -> LedgerResult<i64> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM records");
        Self::push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }

    async fn delete_record(&self, id: i64) -> LedgerResult<bool> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_record_months(&self) -> LedgerResult<Vec<YearMonth>> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT
                CAST(strftime('%Y', datetime) AS INTEGER) AS year,
                CAST(strftime('%m', datetime) AS INTEGER) AS month
            FROM records
            ORDER BY year DESC, month DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let year: i64 = row.try_get("year")?;
                let month: i64 = row.try_get("month")?;
                Ok(YearMonth {
                    year: year as i32,
                    month: month as u32,
                })
            })
            .collect()
    }

    async fn monthly_category_totals(
        &self,
        window: &DateWindow,
    ) -> LedgerResult<Vec<MonthlyCategoryTotal>> {
        // A fiscal-year window holds each calendar month once, so grouping by
        // month number is the same as grouping by fiscal month.
        let rows = sqlx::query(
            r#"
            SELECT
                category_id,
                CAST(strftime('%m', datetime) AS INTEGER) AS month,
                SUM(amount) AS total_amount,
                COUNT(*) AS count
            FROM records
            WHERE datetime >= ? AND datetime < ?
            GROUP BY category_id, month
            ORDER BY category_id, month
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let month: i64 = row.try_get("month")?;
                Ok(MonthlyCategoryTotal {
                    category_id: row.try_get("category_id")?,
                    month: month as u32,
                    amount: row.try_get("total_amount")?,
                    count: row.try_get("count")?,
                })
            })
            .collect()
    }
}
