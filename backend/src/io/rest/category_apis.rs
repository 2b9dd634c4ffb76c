//! # REST API for Categories
//!
//! Read-only listing of the category index.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::error::error_response;
use crate::io::rest::mappers::CategoryMapper;
use crate::AppState;

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/categories");

    let ctx = state.request_context();
    match state.category_service.list_categories(&ctx).await {
        Ok(categories) => {
            (StatusCode::OK, Json(CategoryMapper::to_dto_list(categories))).into_response()
        }
        Err(e) => error_response("list categories", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_helpers::{body_json, setup_test_state};
    use crate::storage::test_utils::seed_standard_categories;

    #[tokio::test]
    async fn test_list_categories() {
        let (db, state) = setup_test_state().await;
        seed_standard_categories(&db).await;

        let response = list_categories(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Vec<shared::Category> = body_json(response).await;
        assert_eq!(body.len(), 5);
        assert_eq!(body[0].category_id, 100);
        assert_eq!(body[0].category_type, "income");
        assert_eq!(body[4].category_type, "saving");
    }
}
