//! Error types for the driver
//!
//! Covers settings persistence and anything the engine rejects while a
//! session is running.

use amazons_engine::EngineError;
use thiserror::Error;

/// Errors that can occur outside the engine core
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A setting is out of range
    #[error("Invalid setting: {message}")]
    InvalidSetting { message: String },

    /// The engine refused a move or query
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type alias for driver operations
pub type AppResult<T> = Result<T, AppError>;
