//! Domain models for ledger records and their derived reports.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::category::CategoryType;
use crate::error::{LedgerError, LedgerResult};

/// Number of fiscal months in a summary (April..March)
pub const FISCAL_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub category_id: i64,
    /// Resolved from the category index; empty when enrichment was lenient
    /// and the category is missing
    pub category_name: String,
    pub occurred_at: NaiveDateTime,
    pub from: String,
    /// Free-form record type ("type" on the wire)
    pub kind: String,
    pub amount: i64,
    pub memo: String,
}

/// A validated record that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub category_id: i64,
    pub occurred_at: NaiveDateTime,
    pub from: String,
    pub kind: String,
    pub amount: i64,
    pub memo: String,
}

impl NewRecord {
    /// Attach the store-assigned id and resolved category name
    pub fn into_record(self, id: i64, category_name: String) -> Record {
        Record {
            id,
            category_id: self.category_id,
            category_name,
            occurred_at: self.occurred_at,
            from: self.from,
            kind: self.kind,
            amount: self.amount,
            memo: self.memo,
        }
    }
}

/// Parse a record timestamp: `YYYYMMDD` (midnight) or RFC 3339
///
/// RFC 3339 input keeps the wall-clock time as written, dropping the offset.
pub fn parse_occurred_at(value: &str) -> LedgerResult<NaiveDateTime> {
    if value.len() == 8 {
        return NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| LedgerError::validation(format!("invalid datetime format: {}", value)));
    }

    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.naive_local())
        .map_err(|e| LedgerError::validation(format!("invalid datetime format: {}: {}", value, e)))
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Amount and row count of one category in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCategoryTotal {
    pub category_id: i64,
    pub month: u32,
    pub amount: i64,
    pub count: i64,
}

/// Per-category totals for one fiscal year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryYearSummary {
    pub category_id: i64,
    pub category_name: String,
    pub category_type: CategoryType,
    pub count: i64,
    /// Index 0 = April ... index 11 = March
    pub monthly_amounts: [i64; FISCAL_MONTHS],
    pub total: i64,
}

impl CategoryYearSummary {
    pub fn empty(category_id: i64, category_name: String, category_type: CategoryType) -> Self {
        Self {
            category_id,
            category_name,
            category_type,
            count: 0,
            monthly_amounts: [0; FISCAL_MONTHS],
            total: 0,
        }
    }
}

/// Reporting periods present in the store, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailablePeriods {
    pub yyyymm: Vec<String>,
    pub fiscal_years: Vec<String>,
}
