//! # Domain Module
//!
//! Contains the business logic of the household ledger. It works against the
//! storage traits only and knows nothing about HTTP.
//!
//! ## Module Organization
//!
//! - **category_service**: Read access to the category index
//! - **record_service**: Record create/read/list/count/delete with category enrichment
//! - **period_service**: Calendar months and fiscal years that hold records
//! - **summary_service**: Per-category fiscal year totals
//! - **commands**: Validated inputs handed to the services
//! - **models**: Domain entities and calendar arithmetic
//!
//! ## Business Rules
//!
//! - A fiscal year `Y` runs from April 1st of `Y` to March 31st of `Y + 1`
//! - Amounts are signed integers and are never converted or rounded
//! - Every operation runs under a [`RequestContext`](crate::context::RequestContext)
//!   and fails with `Cancelled` / `DeadlineExceeded` when it fires

pub mod category_service;
pub mod commands;
pub mod models;
pub mod period_service;
pub mod record_service;
pub mod summary_service;

pub use category_service::CategoryService;
pub use period_service::PeriodService;
pub use record_service::{EnrichmentMode, RecordService};
pub use summary_service::SummaryService;
