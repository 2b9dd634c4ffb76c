//! Conversions between record DTOs and domain types.

use crate::domain::commands::records::{
    CreateRecordCommand, RecordFilterQuery, RecordListQuery, DEFAULT_PAGE_SIZE,
};
use crate::domain::models::record::Record as DomainRecord;
use shared::{CreateRecordRequest, Record as SharedRecord};

/// Mapper to convert between shared Record DTOs and domain records.
pub struct RecordMapper;

impl RecordMapper {
    pub fn to_dto(domain: DomainRecord) -> SharedRecord {
        SharedRecord {
            id: domain.id,
            category_id: domain.category_id,
            category_name: domain.category_name,
            datetime: domain.occurred_at,
            from: domain.from,
            kind: domain.kind,
            price: domain.amount,
            memo: domain.memo,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainRecord>) -> Vec<SharedRecord> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    /// Converts a create request into the domain command; validation happens there.
    pub fn to_create_command(request: CreateRecordRequest) -> CreateRecordCommand {
        CreateRecordCommand {
            category_id: request.category_id,
            datetime: request.datetime,
            from: request.from,
            kind: request.kind,
            amount: request.price,
            memo: request.memo,
        }
    }

    /// Absent filters mean "no filter"; absent paging uses the defaults.
    pub fn to_filter_query(yyyymm: Option<String>, category_id: Option<i64>) -> RecordFilterQuery {
        RecordFilterQuery {
            yyyymm: yyyymm.unwrap_or_default(),
            category_id: category_id.unwrap_or(0),
        }
    }

    pub fn to_list_query(
        num: Option<u32>,
        offset: Option<u32>,
        yyyymm: Option<String>,
        category_id: Option<i64>,
    ) -> RecordListQuery {
        RecordListQuery {
            limit: num.unwrap_or(DEFAULT_PAGE_SIZE),
            offset: offset.unwrap_or(0),
            filter: Self::to_filter_query(yyyymm, category_id),
        }
    }
}
