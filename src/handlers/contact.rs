//! Contact form submission and admin retrieval handlers.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    handlers::AppError,
    models::{ContactSubmission, NewContact},
    state::AppState,
};

/// Simple `local@domain.tld` check: no whitespace, exactly one `@`, and at
/// least one `.` with non-empty segments after it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

/// Requester IP as reported by the first `x-forwarded-for` hop.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Submit the contact form (POST /api/contact).
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactSubmission>,
) -> Result<Response, AppError> {
    if !payload.has_required_fields() {
        return Ok(bad_request("All fields are required including consent"));
    }

    let email = payload.email.clone().unwrap_or_default();
    if !is_valid_email(&email) {
        return Ok(bad_request("Invalid email format"));
    }

    let contact = NewContact {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email,
        message: payload.message.unwrap_or_default(),
        consent: payload.consent.unwrap_or_default(),
        ip_address: client_ip(&headers),
        user_agent: user_agent(&headers),
    };

    let contact_id = state.contacts.create_contact(&contact).await?;

    tracing::info!(contact_id, "Contact form submitted");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Contact form submitted successfully",
            "contactId": contact_id,
        })),
    )
        .into_response())
}

/// List all contacts, newest first (GET /api/contacts).
pub async fn list_contacts(State(state): State<AppState>) -> Result<Response, AppError> {
    let contacts = state.contacts.list_contacts().await?;

    Ok(Json(json!({ "success": true, "contacts": contacts })).into_response())
}

/// Get a single contact by id (GET /api/contacts/{id}).
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.contacts.get_contact(id).await? {
        Some(contact) => Ok(Json(json!({ "success": true, "contact": contact })).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Contact not found" })),
        )
            .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("two@@at.com"));
        assert!(!is_valid_email("spa ce@domain.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_client_ip_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.7, 10.0.0.1".parse().unwrap(),
        );

        assert_eq!(client_ip(&headers), Some("203.0.113.7".to_string()));
    }

    #[test]
    fn test_client_ip_missing_header() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }
}
