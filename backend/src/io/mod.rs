//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain services.
//!
//! ## Supported Operations
//!
//! - **GET /api/health**, **GET /api/version**: Liveness and build information
//! - **GET /api/categories**: The category index
//! - **GET/POST /api/records**: List (paged, filtered) and create records
//! - **GET /api/records/count**: Count records under the same filters
//! - **GET /api/records/available**: Months and fiscal years holding records
//! - **GET /api/records/summary/:year**: Per-category fiscal year totals
//! - **GET/DELETE /api/records/:id**: Fetch or delete one record

pub mod rest;

pub use rest::*;
