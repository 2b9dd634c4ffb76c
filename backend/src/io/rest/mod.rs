//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints of the household ledger. This layer handles:
//! - JSON request/response serialization through the `shared` DTOs
//! - Mapping query and path parameters onto domain commands
//! - Error translation from [`LedgerError`](crate::error::LedgerError) to HTTP status codes
//! - Wrapping every call in a request context bounded by the configured timeout
//!
//! ## Design Principles
//!
//! - **Domain Separation**: Handlers translate and delegate, nothing more
//! - **Consistent Error Format**: Every failure body is `{"error": "..."}`

pub mod category_apis;
pub mod error;
pub mod mappers;
pub mod record_apis;
pub mod report_apis;
pub mod system_apis;

pub use category_apis::*;
pub use record_apis::*;
pub use report_apis::*;
pub use system_apis::*;
