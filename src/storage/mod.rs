//! Storage abstraction for the contact database.
//!
//! Handlers only see the [`ContactRepository`] trait; the embedded SQLite
//! implementation lives in [`sqlite`] and can be swapped without touching
//! any handler code.

mod error;
mod traits;

pub mod sqlite;
pub mod unavailable;

pub use error::{storage_error_to_status_code, Result, StorageError};
pub use traits::ContactRepository;
