//! # REST API for Records
//!
//! Endpoints for creating, retrieving, listing, counting and deleting
//! ledger records.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{CreateRecordRequest, RecordCount};
use tracing::info;

use crate::io::rest::error::{error_response, invalid_request};
use crate::io::rest::mappers::RecordMapper;
use crate::AppState;

/// Query parameters for GET /api/records
#[derive(Deserialize, Debug, Default)]
pub struct RecordListParams {
    pub num: Option<u32>,
    pub offset: Option<u32>,
    pub yyyymm: Option<String>,
    pub category_id: Option<i64>,
}

/// Query parameters for GET /api/records/count
#[derive(Deserialize, Debug, Default)]
pub struct RecordCountParams {
    pub yyyymm: Option<String>,
    pub category_id: Option<i64>,
}

/// Create a new record
pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_request("create record", rejection.body_text()),
    };
    info!("POST /api/records - request: {:?}", request);

    let ctx = state.request_context();
    let command = RecordMapper::to_create_command(request);
    match state.record_service.create(&ctx, command).await {
        Ok(record) => (StatusCode::CREATED, Json(RecordMapper::to_dto(record))).into_response(),
        Err(e) => error_response("create record", e),
    }
}

/// Get a record by id
pub async fn get_record(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return invalid_request("get record", rejection.body_text()),
    };
    info!("GET /api/records/{}", id);

    let ctx = state.request_context();
    match state.record_service.find_by_id(&ctx, id).await {
        Ok(record) => (StatusCode::OK, Json(RecordMapper::to_dto(record))).into_response(),
        Err(e) => error_response("get record", e),
    }
}

/// List records, newest first
pub async fn list_records(
    State(state): State<AppState>,
    query: Result<Query<RecordListParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_request("list records", rejection.body_text()),
    };
    info!("GET /api/records - query: {:?}", params);

    let ctx = state.request_context();
    let query = RecordMapper::to_list_query(params.num, params.offset, params.yyyymm, params.category_id);
    match state.record_service.find_all(&ctx, &query).await {
        Ok(records) => (StatusCode::OK, Json(RecordMapper::to_dto_list(records))).into_response(),
        Err(e) => error_response("list records", e),
    }
}

/// Count records matching the filters
pub async fn count_records(
    State(state): State<AppState>,
    query: Result<Query<RecordCountParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_request("count records", rejection.body_text()),
    };
    info!("GET /api/records/count - query: {:?}", params);

    let ctx = state.request_context();
    let query = RecordMapper::to_filter_query(params.yyyymm, params.category_id);
    match state.record_service.count(&ctx, &query).await {
        Ok(num) => (StatusCode::OK, Json(RecordCount { num })).into_response(),
        Err(e) => error_response("count records", e),
    }
}

/// Delete a record
pub async fn delete_record(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => return invalid_request("delete record", rejection.body_text()),
    };
    info!("DELETE /api/records/{}", id);

    let ctx = state.request_context();
    match state.record_service.delete(&ctx, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("delete record", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_helpers::{body_json, setup_test_state};
    use crate::storage::test_utils::{seed_record, seed_standard_categories};
    use shared::{ErrorResponse, Record};

    fn create_request(category_id: i64, price: i64, datetime: &str) -> CreateRecordRequest {
        CreateRecordRequest {
            category_id: Some(category_id),
            datetime: Some(datetime.to_string()),
            price: Some(price),
            memo: Some("test".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get_record() {
        let (db, state) = setup_test_state().await;
        seed_standard_categories(&db).await;

        let response = create_record(State(state.clone()), Ok(Json(create_request(201, 1500, "20240415"))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Record = body_json(response).await;
        assert_eq!(created.category_name, "Groceries");
        assert_eq!(created.price, 1500);
        assert_eq!(created.from, "");

        let response = get_record(State(state), Ok(Path(created.id))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Record = body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_record_errors() {
        let (db, state) = setup_test_state().await;
        seed_standard_categories(&db).await;

        let response = create_record(State(state.clone()), Ok(Json(create_request(999, 1, "20240415"))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error, "category not found: 999");

        let response = create_record(State(state.clone()), Ok(Json(create_request(201, 1, "15/04/2024"))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = create_record(State(state), Ok(Json(CreateRecordRequest::default())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_and_count_records() {
        let (db, state) = setup_test_state().await;
        seed_standard_categories(&db).await;
        for day in 1..=3 {
            seed_record(&db, 201, &format!("2024-04-0{} 00:00:00", day), 100).await;
        }
        seed_record(&db, 100, "2024-05-25 00:00:00", 300000).await;

        let params = RecordListParams {
            num: Some(2),
            yyyymm: Some("202404".to_string()),
            ..Default::default()
        };
        let response = list_records(State(state.clone()), Ok(Query(params))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let records: Vec<Record> = body_json(response).await;
        assert_eq!(records.len(), 2);
        assert!(records[0].id > records[1].id);

        let params = RecordCountParams {
            category_id: Some(201),
            ..Default::default()
        };
        let response = count_records(State(state.clone()), Ok(Query(params))).await.into_response();
        let count: RecordCount = body_json(response).await;
        assert_eq!(count.num, 3);

        let params = RecordCountParams {
            yyyymm: Some("2024-4".to_string()),
            ..Default::default()
        };
        let response = count_records(State(state), Ok(Query(params))).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_record() {
        let (db, state) = setup_test_state().await;
        let id = seed_record(&db, 201, "2024-04-01 00:00:00", 100).await;

        let response = delete_record(State(state.clone()), Ok(Path(id))).await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete_record(State(state.clone()), Ok(Path(id))).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get_record(State(state), Ok(Path(id))).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
