pub mod contact;
pub mod error;
pub mod health;
pub mod responses;
pub mod static_files;

pub use error::AppError;
