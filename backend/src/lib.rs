//! # Household Ledger Backend
//!
//! Records income, outgoing, saving and investing events against a category
//! catalog, and answers the questions a household budget review asks: which
//! records fall in a month, which months and fiscal years hold data, and how
//! much each category moved per fiscal month.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, commands, models)
//!     ↓
//! Storage Layer (SQLite repositories behind traits)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the database and the application state
//! - Set up the REST API router with request tracing and CORS
//! - Bound every request by the configured timeout

pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod storage;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use shared::VersionInfo;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{version_info, ServeArgs};
use crate::context::RequestContext;
use crate::domain::{CategoryService, PeriodService, RecordService, SummaryService};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService<DbConnection>,
    pub record_service: RecordService<DbConnection>,
    pub period_service: PeriodService<DbConnection>,
    pub summary_service: SummaryService<DbConnection>,
    pub request_timeout: Duration,
    pub version: VersionInfo,
}

impl AppState {
    pub fn new(db: &DbConnection, request_timeout: Duration) -> Self {
        Self {
            category_service: CategoryService::new(db),
            record_service: RecordService::new(db),
            period_service: PeriodService::new(db),
            summary_service: SummaryService::new(db),
            request_timeout,
            version: version_info(),
        }
    }

    /// Fresh context for one request, expiring after the configured timeout
    pub fn request_context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(args: &ServeArgs) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(&args.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(&db_conn, args.request_timeout()))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin: {}", cors_origin))?;

    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health))
        .route("/version", get(io::version))
        .route("/categories", get(io::list_categories))
        .route("/records", get(io::list_records).post(io::create_record))
        .route("/records/count", get(io::count_records))
        .route("/records/available", get(io::get_available_periods))
        .route("/records/summary/:year", get(io::get_year_summary))
        .route("/records/:id", get(io::get_record).delete(io::delete_record));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
