//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{Entry, Fields};
use crate::Error;

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// List all entries, newest first
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.store.list().await?;
    Ok(Json(entries))
}

/// Create an entry from the posted fields
///
/// The body is taken as-is; whatever columns the client sends are
/// handed to the store unchanged.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(fields): Json<Fields>,
) -> Result<(StatusCode, Json<Vec<Entry>>), ApiError> {
    let rows = state.store.insert(fields).await?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// Update the entry matching `id`
///
/// An id that matches nothing yields an empty array rather than an
/// error, mirroring the store.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Fields>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let rows = state.store.update(&id, fields).await?;
    Ok(Json(rows))
}

/// Delete the entry matching `id`
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Deleted successfully".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// HTTP-facing error carrying a JSON body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::Store(_) | Error::Transport(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status, "{}", self.message);

        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}
