//! # Store Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │  SourceError             │      │  StoreError                  │    │
//! │  │                          │      │                              │    │
//! │  │  Unavailable             │      │  InvalidConfig               │    │
//! │  │  Malformed               │      │  ConfigLoadFailed            │    │
//! │  │                          │      │  ConfigSaveFailed            │    │
//! │  └────────────┬─────────────┘      └──────────────────────────────┘    │
//! │               │                                                         │
//! │               ▼                                                         │
//! │  caught in AppStore::load_initial_data, never returned:                │
//! │  becomes `error: Some(message)` + `loading: false`                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Failures of the pet data source. The only runtime failure in the system.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be reached or refused the request.
    #[error("Pet data source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with records that could not be decoded.
    #[error("Malformed pet data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

/// Result type alias for store configuration.
pub type StoreResult<T> = Result<T, StoreError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}
