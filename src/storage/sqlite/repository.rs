//! SQLite repository implementation.
//!
//! The database lives in memory. At startup the backing file (if any) is
//! copied into the in-memory instance with SQLite's backup API; after every
//! mutation the whole in-memory database is written back over the file. A
//! mutation and its flush run inside a single connection-actor closure, so
//! they are serialized against all other database work.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use rusqlite::backup::Backup;
use tokio_rusqlite::Connection;

use crate::models::{Contact, ContactResponse, NewContact, NewResponse};
use crate::storage::{ContactRepository, Result, StorageError};

use super::conversions::{row_to_contact, row_to_response};
use super::error::{map_tokio_rusqlite_error, wrap_err};
use super::schema;

/// Pages copied per backup step. The databases involved are small, so a
/// flush normally completes in a single step.
const BACKUP_PAGES_PER_STEP: std::ffi::c_int = 64;

/// SQLite-backed repository with whole-file persistence.
pub struct SqliteRepository {
    conn: Connection,
    db_path: Option<PathBuf>,
}

/// Copy the full contents of `conn` over the database file at `path`.
fn flush_to_disk(conn: &rusqlite::Connection, path: &Path) -> rusqlite::Result<()> {
    let mut file = rusqlite::Connection::open(path)?;
    let backup = Backup::new(conn, &mut file)?;
    backup.run_to_completion(BACKUP_PAGES_PER_STEP, Duration::from_millis(0), None)?;
    Ok(())
}

/// Copy the full contents of the database file at `path` into `conn`.
fn load_from_disk(conn: &mut rusqlite::Connection, path: &Path) -> rusqlite::Result<()> {
    let file = rusqlite::Connection::open(path)?;
    let backup = Backup::new(&file, conn)?;
    backup.run_to_completion(BACKUP_PAGES_PER_STEP, Duration::from_millis(0), None)?;
    Ok(())
}

impl SqliteRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// Loads the file into memory when it exists, applies the schema, and
    /// flushes once so the file exists before the first mutation.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = path.into();
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let load_path = db_path.clone();
        conn.call(move |conn| {
            if load_path.exists() {
                load_from_disk(conn, &load_path).map_err(wrap_err)?;
            }
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            flush_to_disk(conn, &load_path).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)?;

        Ok(Self {
            conn,
            db_path: Some(db_path),
        })
    }

    /// Creates a repository with no backing file.
    ///
    /// Used in tests; data is lost when the connection is dropped and flush
    /// is a no-op.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)?;

        Ok(Self {
            conn,
            db_path: None,
        })
    }
}

#[async_trait]
impl ContactRepository for SqliteRepository {
    async fn create_contact(&self, contact: &NewContact) -> Result<i64> {
        let contact = contact.clone();
        let db_path = self.db_path.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CONTACT,
                    rusqlite::params![
                        contact.first_name,
                        contact.last_name,
                        contact.email,
                        contact.message,
                        i64::from(contact.consent),
                        contact.ip_address,
                        contact.user_agent,
                    ],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                if let Some(path) = db_path {
                    flush_to_disk(conn, &path).map_err(wrap_err)?;
                }
                Ok(id)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_CONTACTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_contact).map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_contact) {
                    Ok(contact) => Ok(Some(contact)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_response(&self, response: &NewResponse) -> Result<i64> {
        let response = response.clone();
        let db_path = self.db_path.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_RESPONSE,
                    rusqlite::params![
                        response.contact_id,
                        response.response_text,
                        response.responded_by,
                    ],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                if let Some(path) = db_path {
                    flush_to_disk(conn, &path).map_err(wrap_err)?;
                }
                Ok(id)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_responses(&self, contact_id: i64) -> Result<Vec<ContactResponse>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_RESPONSES_BY_CONTACT)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([contact_id], row_to_response)
                    .map_err(wrap_err)?;

                let mut responses = Vec::new();
                for row_result in rows {
                    responses.push(row_result.map_err(wrap_err)?);
                }
                Ok(responses)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> NewContact {
        NewContact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the contact form".to_string(),
            consent: true,
            ip_address: Some("203.0.113.7".to_string()),
            user_agent: Some("test-agent/1.0".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_contact() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let id = repo.create_contact(&sample_contact()).await.unwrap();
        assert!(id >= 1);

        let contact = repo.get_contact(id).await.unwrap().unwrap();
        assert_eq!(contact.id, id);
        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        assert!(contact.consent);
        assert_eq!(contact.status, "new");
        assert!(!contact.submission_date.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_contact_returns_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert!(repo.get_contact(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_contacts_empty() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert!(repo.list_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_startup_flush_creates_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");

        let _repo = SqliteRepository::new(&path).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_mutations_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");

        let repo = SqliteRepository::new(&path).await.unwrap();
        let id = repo.create_contact(&sample_contact()).await.unwrap();
        drop(repo);

        let reloaded = SqliteRepository::new(&path).await.unwrap();
        let contacts = reloaded.list_contacts().await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, id);
        assert_eq!(contacts[0].last_name, "Lovelace");
    }

    #[tokio::test]
    async fn test_reload_preserves_responses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");

        let repo = SqliteRepository::new(&path).await.unwrap();
        let contact_id = repo.create_contact(&sample_contact()).await.unwrap();
        repo.create_response(&NewResponse {
            contact_id,
            response_text: "Thanks for reaching out".to_string(),
            responded_by: Some("madison".to_string()),
        })
        .await
        .unwrap();
        drop(repo);

        let reloaded = SqliteRepository::new(&path).await.unwrap();
        let responses = reloaded.list_responses(contact_id).await.unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].response_text, "Thanks for reaching out");
    }

    #[tokio::test]
    async fn test_response_for_missing_contact_is_rejected() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo
            .create_response(&NewResponse {
                contact_id: 42,
                response_text: "orphan".to_string(),
                responded_by: None,
            })
            .await;

        assert!(matches!(result, Err(StorageError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        // Same second-resolution timestamp is possible; pin distinct dates
        // through direct SQL to make the ordering observable.
        repo.conn
            .call(|conn| {
                conn.execute_batch(
                    "INSERT INTO contacts (first_name, last_name, email, message, consent, submission_date)
                     VALUES ('Old', 'One', 'old@example.com', 'hi', 1, '2020-01-01 00:00:00');
                     INSERT INTO contacts (first_name, last_name, email, message, consent, submission_date)
                     VALUES ('New', 'One', 'new@example.com', 'hi', 1, '2024-01-01 00:00:00');",
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .unwrap();

        let contacts = repo.list_contacts().await.unwrap();
        assert_eq!(contacts[0].first_name, "New");
        assert_eq!(contacts[1].first_name, "Old");
    }
}
