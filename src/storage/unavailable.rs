//! Stand-in repository used when database initialization fails.
//!
//! The server keeps accepting requests; every database-backed endpoint
//! fails with a generic error until the process is restarted.

use async_trait::async_trait;

use crate::models::{Contact, ContactResponse, NewContact, NewResponse};

use super::{ContactRepository, Result, StorageError};

/// Repository whose every operation fails with `ConnectionFailed`.
pub struct UnavailableRepository;

fn unavailable<T>() -> Result<T> {
    Err(StorageError::ConnectionFailed(
        "database is not available".to_string(),
    ))
}

#[async_trait]
impl ContactRepository for UnavailableRepository {
    async fn create_contact(&self, _contact: &NewContact) -> Result<i64> {
        unavailable()
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn get_contact(&self, _id: i64) -> Result<Option<Contact>> {
        unavailable()
    }

    async fn create_response(&self, _response: &NewResponse) -> Result<i64> {
        unavailable()
    }

    async fn list_responses(&self, _contact_id: i64) -> Result<Vec<ContactResponse>> {
        unavailable()
    }
}
