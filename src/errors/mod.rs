// Defines a custom error type and a result type alias using the thiserror crate.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    // The #[from] attribute automatically converts a StoreError into an
    // AppError::Storage using the From trait.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
