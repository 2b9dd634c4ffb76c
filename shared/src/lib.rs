use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A category as exposed to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable display identifier (e.g. 201)
    pub category_id: i64,
    pub category_name: String,
    /// One of "income", "outgoing", "saving", "investing" or "unknown"
    pub category_type: String,
}

/// A ledger record enriched with its category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub category_id: i64,
    /// Empty when the referenced category no longer exists (list endpoints only)
    pub category_name: String,
    pub datetime: NaiveDateTime,
    pub from: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Signed amount in the minor currency unit
    pub price: i64,
    pub memo: String,
}

/// Body of `POST /api/records`
///
/// Every field is optional on the wire so that missing required fields can be
/// reported as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub category_id: Option<i64>,
    /// `YYYYMMDD` or RFC 3339; defaults to the current time
    pub datetime: Option<String>,
    pub from: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<i64>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCount {
    pub num: i64,
}

/// Reporting periods that currently have data, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailablePeriods {
    pub fy: Vec<String>,
    pub yyyymm: Vec<String>,
}

/// Per-category totals for one fiscal year (April..March)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearSummary {
    pub category_id: i64,
    pub category_name: String,
    pub category_type: String,
    pub count: i64,
    /// Twelve monthly sums, index 0 = April ... index 11 = March
    pub price: Vec<i64>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    /// Older servers spelled this key `reversion`
    #[serde(alias = "reversion")]
    pub revision: String,
    pub build: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
