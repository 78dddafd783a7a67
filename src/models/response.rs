use serde::{Deserialize, Serialize};

/// A follow-up response recorded against a contact.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub contact_id: i64,
    pub response_date: String,
    pub response_text: String,
    pub responded_by: Option<String>,
}

/// Data for inserting a new response row.
#[derive(Debug, Clone)]
pub struct NewResponse {
    pub contact_id: i64,
    pub response_text: String,
    pub responded_by: Option<String>,
}

/// Request payload for `POST /api/contacts/{id}/responses`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseSubmission {
    pub response_text: Option<String>,
    pub responded_by: Option<String>,
}

impl ResponseSubmission {
    pub fn has_required_fields(&self) -> bool {
        self.response_text.as_deref().is_some_and(|s| !s.is_empty())
    }
}
