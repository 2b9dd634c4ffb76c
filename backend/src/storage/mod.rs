//! # Storage Module
//!
//! Handles all data persistence for the household ledger.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation lives in [`connection`] and [`repositories`].
//!
//! ## Key Responsibilities
//!
//! - **Category Catalog**: Read access to the externally maintained category table
//! - **Record Persistence**: Inserting, listing, counting and deleting records
//! - **Aggregation Queries**: Distinct record months and per-month category totals
//! - **Connection Management**: Pool setup and idempotent schema creation
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite through SQLx with a connection pool
//! - **Timestamps**: Stored as `YYYY-MM-DD HH:MM:SS[.fff]` text so that string
//!   comparison orders them chronologically

pub mod connection;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{CategoryRepository, RecordRepository};
pub use traits::{CategoryStorage, Connection, RecordStorage};
