//! Embedded SQLite storage backend.
//!
//! The live database is an in-memory SQLite instance wrapped by
//! `tokio-rusqlite`. It is loaded from the backing file at startup and
//! written back whole after every mutation.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
