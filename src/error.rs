//! Error taxonomy shared by repositories and services.

use serde_json::{Value, json};

/// Errors surfaced by repository and service operations.
///
/// Absent lookups are not errors: `find_one` and the derived lookups return
/// `Ok(None)` and `delete` of a missing identity returns `Ok(())`. The
/// variants here cover caller mistakes (`Validation`), vanished update
/// targets (`NotFound`), backend constraint violations (`Conflict`) and
/// everything else the storage engine reports (`Internal`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    #[error("conflict: {message}")]
    Conflict { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

/// Maps low-level sqlx errors onto the [`AppError`] taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`] with the
/// constraint name in the details; anything else is passed through as
/// [`AppError::Internal`] without retry or further translation.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    AppError::internal("Database error", json!({ "source": e.to_string() }))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}
