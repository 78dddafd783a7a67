use serde::{Deserialize, Serialize};

/// A stored contact form submission.
///
/// Serializes with database column names, which is the shape the admin
/// endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub consent: bool,
    pub submission_date: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

/// Data for inserting a new contact row.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub consent: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Request payload for `POST /api/contact`.
///
/// Every field is optional so that missing or null fields reach the
/// handler's own validation (which answers 400 with the form-level message)
/// instead of being rejected by the deserializer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub consent: Option<bool>,
}

impl ContactSubmission {
    /// True when every field is present and truthy: non-empty strings and
    /// consent explicitly given.
    pub fn has_required_fields(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

        filled(&self.first_name)
            && filled(&self.last_name)
            && filled(&self.email)
            && filled(&self.message)
            && self.consent == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> ContactSubmission {
        ContactSubmission {
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            email: Some("a@b.com".to_string()),
            message: Some("hi".to_string()),
            consent: Some(true),
        }
    }

    #[test]
    fn test_full_submission_is_accepted() {
        assert!(full_submission().has_required_fields());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let submission = ContactSubmission {
            message: None,
            ..full_submission()
        };
        assert!(!submission.has_required_fields());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let submission = ContactSubmission {
            first_name: Some(String::new()),
            ..full_submission()
        };
        assert!(!submission.has_required_fields());
    }

    #[test]
    fn test_consent_must_be_true() {
        let submission = ContactSubmission {
            consent: Some(false),
            ..full_submission()
        };
        assert!(!submission.has_required_fields());

        let submission = ContactSubmission {
            consent: None,
            ..full_submission()
        };
        assert!(!submission.has_required_fields());
    }

    #[test]
    fn test_camel_case_payload_deserializes() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@b.com","message":"hi","consent":true}"#,
        )
        .unwrap();
        assert!(submission.has_required_fields());
    }
}
