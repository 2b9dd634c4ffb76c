//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use async_trait::async_trait;

use crate::domain::commands::records::RecordFilter;
use crate::domain::models::category::Category;
use crate::domain::models::period::{DateWindow, YearMonth};
use crate::domain::models::record::{MonthlyCategoryTotal, NewRecord, Record};
use crate::error::LedgerResult;

/// Read-only access to the category catalog
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// All categories ordered by display id ascending
    async fn list_categories(&self) -> LedgerResult<Vec<Category>>;

    /// Look up a single category by its display id
    async fn get_category(&self, category_id: i64) -> LedgerResult<Option<Category>>;
}

/// Trait defining the interface for record storage operations
///
/// Records returned by this trait carry an empty `category_name` unless the
/// method says otherwise; enrichment is the domain layer's job.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Insert a record and resolve its category name atomically.
    /// Returns `None`, persisting nothing, when the category does not exist.
    async fn create_record(&self, record: &NewRecord) -> LedgerResult<Option<Record>>;

    /// Retrieve a specific record by id
    async fn get_record(&self, id: i64) -> LedgerResult<Option<Record>>;

    /// List records matching `filter`, newest id first, then apply offset/limit
    async fn list_records(
        &self,
        filter: &RecordFilter,
        limit: u32,
        offset: u32,
    ) -> LedgerResult<Vec<Record>>;

    /// Count records matching `filter`
    async fn count_records(&self, filter: &RecordFilter) -> LedgerResult<i64>;

    /// Delete a record. Returns true if a row was removed.
    async fn delete_record(&self, id: i64) -> LedgerResult<bool>;

    /// Distinct calendar months that have at least one record
    async fn list_record_months(&self) -> LedgerResult<Vec<YearMonth>>;

    /// Sum and count of records per (category, calendar month) inside `window`
    async fn monthly_category_totals(
        &self,
        window: &DateWindow,
    ) -> LedgerResult<Vec<MonthlyCategoryTotal>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer can work
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    type CategoryRepository: CategoryStorage + Clone;
    type RecordRepository: RecordStorage + Clone;

    fn create_category_repository(&self) -> Self::CategoryRepository;

    fn create_record_repository(&self) -> Self::RecordRepository;
}
