use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the database file (default: "portfolio.db")
    pub database_path: String,
    /// Root directory for static pages (default: "static")
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PATH` - database file path (default: "portfolio.db")
    /// - `STATIC_DIR` - static page directory (default: "static")
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "portfolio.db".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
