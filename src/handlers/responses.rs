//! Handlers for follow-up responses recorded against a contact.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    handlers::AppError,
    models::{NewResponse, ResponseSubmission},
    state::AppState,
};

fn contact_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Contact not found" })),
    )
        .into_response()
}

/// Record a response to a contact (POST /api/contacts/{id}/responses).
pub async fn create_response(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    Json(payload): Json<ResponseSubmission>,
) -> Result<Response, AppError> {
    if !payload.has_required_fields() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Response text is required" })),
        )
            .into_response());
    }

    if state.contacts.get_contact(contact_id).await?.is_none() {
        return Ok(contact_not_found());
    }

    let response = NewResponse {
        contact_id,
        response_text: payload.response_text.unwrap_or_default(),
        responded_by: payload.responded_by,
    };

    let response_id = state.contacts.create_response(&response).await?;

    tracing::info!(contact_id, response_id, "Response recorded");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Response recorded successfully",
            "responseId": response_id,
        })),
    )
        .into_response())
}

/// List responses for a contact (GET /api/contacts/{id}/responses).
pub async fn list_responses(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> Result<Response, AppError> {
    if state.contacts.get_contact(contact_id).await?.is_none() {
        return Ok(contact_not_found());
    }

    let responses = state.contacts.list_responses(contact_id).await?;

    Ok(Json(json!({ "success": true, "responses": responses })).into_response())
}
