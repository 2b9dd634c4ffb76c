//! # Record Service
//!
//! Create, read, list, count and delete ledger records.
//!
//! Records leave this service "enriched": their `category_name` is filled in
//! from the category index. Two enrichment modes exist and are chosen per
//! operation:
//!
//! - **Strict** (`find_by_id`): a record whose category is missing is reported
//!   as `NotFound`.
//! - **Best effort** (`find_all`): the lookup table is built once per call and a
//!   missing category leaves the name empty.
//!
//! `create` needs no separate enrichment step; storage resolves the name inside
//! the insert transaction.

use tracing::{debug, info, instrument, warn};

use crate::context::RequestContext;
use crate::domain::commands::records::{CreateRecordCommand, RecordFilterQuery, RecordListQuery};
use crate::domain::models::category::{Category, CategoryDirectory};
use crate::domain::models::record::Record;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::{CategoryStorage, Connection, RecordStorage};

/// How a record's category name is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentMode {
    /// A missing category fails the operation
    Strict,
    /// A missing category leaves `category_name` empty
    BestEffort,
}

impl EnrichmentMode {
    pub fn apply(self, record: &mut Record, category: Option<&Category>) -> LedgerResult<()> {
        match (category, self) {
            (Some(category), _) => {
                record.category_name = category.name.clone();
                Ok(())
            }
            (None, EnrichmentMode::Strict) => Err(LedgerError::category_not_found(record.category_id)),
            (None, EnrichmentMode::BestEffort) => {
                debug!(
                    record_id = record.id,
                    category_id = record.category_id,
                    "Category missing, leaving name empty"
                );
                record.category_name.clear();
                Ok(())
            }
        }
    }
}

/// Service for managing ledger records
#[derive(Clone)]
pub struct RecordService<C: Connection> {
    record_repository: C::RecordRepository,
    category_repository: C::CategoryRepository,
}

impl<C: Connection> RecordService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            record_repository: connection.create_record_repository(),
            category_repository: connection.create_category_repository(),
        }
    }

    /// Persist a new record and return it with its id and category name
    #[instrument(skip(self, ctx, command), fields(category_id = ?command.category_id))]
    pub async fn create(
        &self,
        ctx: &RequestContext,
        command: CreateRecordCommand,
    ) -> LedgerResult<Record> {
        let new_record = command.validate()?;
        let category_id = new_record.category_id;

        let created = ctx
            .run_to_completion(self.record_repository.create_record(&new_record))
            .await?;

        match created {
            Some(record) => {
                info!(record_id = record.id, category_id, amount = record.amount, "Created record");
                Ok(record)
            }
            None => {
                warn!(category_id, "Rejected record for unknown category");
                Err(LedgerError::category_not_found(category_id))
            }
        }
    }

    /// Fetch one record; its category must exist
    #[instrument(skip(self, ctx))]
    pub async fn find_by_id(&self, ctx: &RequestContext, id: i64) -> LedgerResult<Record> {
        ctx.run(async {
            let mut record = self
                .record_repository
                .get_record(id)
                .await?
                .ok_or_else(|| LedgerError::record_not_found(id))?;

            let category = self
                .category_repository
                .get_category(record.category_id)
                .await?;
            EnrichmentMode::Strict.apply(&mut record, category.as_ref())?;
            Ok::<_, LedgerError>(record)
        })
        .await
    }

    /// List records, newest id first
    #[instrument(skip(self, ctx))]
    pub async fn find_all(
        &self,
        ctx: &RequestContext,
        query: &RecordListQuery,
    ) -> LedgerResult<Vec<Record>> {
        let filter = query.filter.resolve()?;

        let (mut records, directory) = ctx
            .run(async {
                let records = self
                    .record_repository
                    .list_records(&filter, query.limit, query.offset)
                    .await?;
                let categories = self.category_repository.list_categories().await?;
                Ok::<_, LedgerError>((records, CategoryDirectory::new(categories)))
            })
            .await?;

        for record in records.iter_mut() {
            EnrichmentMode::BestEffort.apply(record, directory.get(record.category_id))?;
        }

        info!(count = records.len(), "Listed records");
        Ok(records)
    }

    /// Number of records matching the filters
    #[instrument(skip(self, ctx))]
    pub async fn count(&self, ctx: &RequestContext, query: &RecordFilterQuery) -> LedgerResult<i64> {
        let filter = query.resolve()?;
        let count = ctx.run(self.record_repository.count_records(&filter)).await?;
        info!(count, "Counted records");
        Ok(count)
    }

    /// Remove a record by id
    #[instrument(skip(self, ctx))]
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> LedgerResult<()> {
        let deleted = ctx.run_to_completion(self.record_repository.delete_record(id)).await?;
        if !deleted {
            return Err(LedgerError::record_not_found(id));
        }

        info!(record_id = id, "Deleted record");
        Ok(())
    }
}
