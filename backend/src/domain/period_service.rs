//! Period service: which calendar months and fiscal years hold records.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::{info, instrument};

use crate::context::RequestContext;
use crate::domain::models::period::YearMonth;
use crate::domain::models::record::AvailablePeriods;
use crate::error::LedgerResult;
use crate::storage::{Connection, RecordStorage};

#[derive(Clone)]
pub struct PeriodService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> PeriodService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            record_repository: connection.create_record_repository(),
        }
    }

    /// Distinct `YYYYMM` months and fiscal years, newest first
    ///
    /// Recomputed from the store on every call.
    #[instrument(skip(self, ctx))]
    pub async fn get_available_periods(&self, ctx: &RequestContext) -> LedgerResult<AvailablePeriods> {
        let months = ctx.run(self.record_repository.list_record_months()).await?;
        let periods = periods_from_months(&months);

        info!(
            months = periods.yyyymm.len(),
            fiscal_years = periods.fiscal_years.len(),
            "Computed available periods"
        );
        Ok(periods)
    }
}

/// Collapse months into the descending, de-duplicated period lists
pub fn periods_from_months(months: &[YearMonth]) -> AvailablePeriods {
    let distinct_months: BTreeSet<Reverse<YearMonth>> = months.iter().copied().map(Reverse).collect();
    let fiscal_years: BTreeSet<Reverse<i32>> = months
        .iter()
        .map(|month| Reverse(month.fiscal_year()))
        .collect();

    AvailablePeriods {
        yyyymm: distinct_months
            .into_iter()
            .map(|Reverse(month)| month.to_yyyymm())
            .collect(),
        fiscal_years: fiscal_years
            .into_iter()
            .map(|Reverse(year)| year.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{seed_record, setup_test_db};
    use crate::storage::DbConnection;

    #[tokio::test]
    async fn test_empty_store_has_no_periods() {
        let db = setup_test_db().await;
        let service = PeriodService::<DbConnection>::new(&db);

        let periods = service
            .get_available_periods(&RequestContext::background())
            .await
            .unwrap();
        assert!(periods.yyyymm.is_empty());
        assert!(periods.fiscal_years.is_empty());
    }

    #[tokio::test]
    async fn test_fiscal_year_boundary() {
        let db = setup_test_db().await;
        seed_record(&db, 201, "2024-03-31 00:00:00", 100).await;
        seed_record(&db, 201, "2024-04-01 00:00:00", 100).await;
        let service = PeriodService::new(&db);

        let periods = service
            .get_available_periods(&RequestContext::background())
            .await
            .unwrap();
        assert_eq!(periods.yyyymm, vec!["202404", "202403"]);
        assert_eq!(periods.fiscal_years, vec!["2024", "2023"]);
    }

    #[tokio::test]
    async fn test_periods_reflect_new_records() {
        let db = setup_test_db().await;
        let service = PeriodService::new(&db);
        let ctx = RequestContext::background();
        seed_record(&db, 201, "2024-05-10 00:00:00", 100).await;

        assert_eq!(service.get_available_periods(&ctx).await.unwrap().yyyymm, vec!["202405"]);

        seed_record(&db, 201, "2025-01-02 00:00:00", 100).await;
        let periods = service.get_available_periods(&ctx).await.unwrap();
        assert_eq!(periods.yyyymm, vec!["202501", "202405"]);
        // January 2025 is still fiscal year 2024.
        assert_eq!(periods.fiscal_years, vec!["2024"]);
    }

    #[test]
    fn test_periods_from_unsorted_months() {
        let months = [
            YearMonth { year: 2023, month: 12 },
            YearMonth { year: 2025, month: 2 },
            YearMonth { year: 2023, month: 12 },
            YearMonth { year: 2024, month: 7 },
        ];

        let periods = periods_from_months(&months);
        assert_eq!(periods.yyyymm, vec!["202502", "202407", "202312"]);
        assert_eq!(periods.fiscal_years, vec!["2024", "2023"]);
    }
}
