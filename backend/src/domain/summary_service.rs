//! # Summary Service
//!
//! Builds the per-category fiscal year report.
//!
//! For fiscal year `Y` every record in `[Y-04-01, (Y+1)-04-01)` is grouped by
//! category and fiscal month. Each category gets one summary holding the twelve
//! monthly sums (April first) plus the overall count and total. Groups whose
//! category is no longer in the index are dropped from the report.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::context::RequestContext;
use crate::domain::models::category::CategoryDirectory;
use crate::domain::models::period::{fiscal_month, fiscal_year_window};
use crate::domain::models::record::{CategoryYearSummary, MonthlyCategoryTotal};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::{CategoryStorage, Connection, RecordStorage};

#[derive(Clone)]
pub struct SummaryService<C: Connection> {
    record_repository: C::RecordRepository,
    category_repository: C::CategoryRepository,
}

impl<C: Connection> SummaryService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            record_repository: connection.create_record_repository(),
            category_repository: connection.create_category_repository(),
        }
    }

    /// Per-category totals for `fiscal_year`, ordered by category display id
    #[instrument(skip(self, ctx))]
    pub async fn get_year_summary(
        &self,
        ctx: &RequestContext,
        fiscal_year: i32,
    ) -> LedgerResult<Vec<CategoryYearSummary>> {
        let window = fiscal_year_window(fiscal_year)?;

        let (directory, totals) = ctx
            .run(async {
                let categories = self.category_repository.list_categories().await?;
                let totals = self.record_repository.monthly_category_totals(&window).await?;
                Ok::<_, LedgerError>((CategoryDirectory::new(categories), totals))
            })
            .await?;

        let summaries = fold_year_summaries(&directory, &totals)?;
        info!(fiscal_year, categories = summaries.len(), "Built year summary");
        Ok(summaries)
    }
}

/// Fold monthly group totals into one summary per known category
///
/// Fails with `Overflow` when a category's yearly count or total leaves `i64`.
pub fn fold_year_summaries(
    directory: &CategoryDirectory,
    totals: &[MonthlyCategoryTotal],
) -> LedgerResult<Vec<CategoryYearSummary>> {
    let mut summaries: BTreeMap<i64, CategoryYearSummary> = BTreeMap::new();

    for group in totals {
        let Some(category) = directory.get(group.category_id) else {
            debug!(category_id = group.category_id, month = group.month, "Skipping group with unknown category");
            continue;
        };

        let summary = summaries.entry(group.category_id).or_insert_with(|| {
            CategoryYearSummary::empty(category.category_id, category.name.clone(), category.category_type)
        });

        let slot = fiscal_month(group.month) as usize - 1;
        if let Some(amount) = summary.monthly_amounts.get_mut(slot) {
            *amount = group.amount;
        }
        summary.count = summary.count.checked_add(group.count).ok_or_else(|| {
            LedgerError::Overflow(format!("record count of category {}", group.category_id))
        })?;
        summary.total = summary.total.checked_add(group.amount).ok_or_else(|| {
            LedgerError::Overflow(format!("yearly total of category {}", group.category_id))
        })?;
    }

    Ok(summaries.into_values().collect())
}
