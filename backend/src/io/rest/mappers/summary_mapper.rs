use crate::domain::models::record::{
    AvailablePeriods as DomainPeriods, CategoryYearSummary as DomainSummary,
};
use shared::{AvailablePeriods as SharedPeriods, CategoryYearSummary as SharedSummary};

/// Mapper for the report DTOs (available periods and year summaries).
pub struct SummaryMapper;

impl SummaryMapper {
    pub fn to_dto(domain: DomainSummary) -> SharedSummary {
        SharedSummary {
            category_id: domain.category_id,
            category_name: domain.category_name,
            category_type: domain.category_type.to_string(),
            count: domain.count,
            price: domain.monthly_amounts.to_vec(),
            total: domain.total,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainSummary>) -> Vec<SharedSummary> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_periods_dto(domain: DomainPeriods) -> SharedPeriods {
        SharedPeriods {
            fy: domain.fiscal_years,
            yyyymm: domain.yyyymm,
        }
    }
}
