use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{Receipt, ReceiptId};
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::{ScoreStore, StoreError};

/// Router builder exposing the process and lookup endpoints.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ScoreStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    S: ScoreStore + 'static,
{
    let Json(receipt) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let payload = json!({
                "error": format!("invalid receipt payload: {}", rejection.body_text()),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.process(receipt) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id.0 }))).into_response(),
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.message,
                "field": error.field,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(_) => {
            // Internal detail stays out of the response body.
            let payload = json!({
                "error": "failed to process receipt",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: ScoreStore + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(ReceiptServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": "receipt not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(_) => {
            let payload = json!({
                "error": "failed to look up receipt",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
