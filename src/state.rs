//! Shared application state.
//!
//! The storage handle is constructed once in `main` and injected into every
//! handler through this state, so there is no process-wide mutable database
//! global.

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::ContactRepository;

/// Shared application state, cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact repository backing all database access.
    pub contacts: Arc<dyn ContactRepository>,
    /// Root directory for the static portfolio pages.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactRepository>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            contacts,
            static_dir: Arc::new(static_dir.into()),
        }
    }
}
