use async_trait::async_trait;

use crate::models::{Contact, ContactResponse, NewContact, NewResponse};

use super::Result;

/// Repository for contact form submissions and their responses.
///
/// Mutating methods persist the whole database to the backing file before
/// returning, so a successful call is durable (up to the crash window the
/// whole-file flush model accepts).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a new contact and returns its row id.
    async fn create_contact(&self, contact: &NewContact) -> Result<i64>;

    /// Lists all contacts, newest submission first.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Gets a contact by its id.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Inserts a response to a contact and returns its row id.
    async fn create_response(&self, response: &NewResponse) -> Result<i64>;

    /// Lists all responses recorded for a contact.
    async fn list_responses(&self, contact_id: i64) -> Result<Vec<ContactResponse>>;
}
