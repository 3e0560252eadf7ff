//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid clock action: {0}")]
    InvalidAction(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Stored-entry validation
    // ---------------------------
    /// A persisted time entry that cannot be decoded. Callers are expected
    /// to skip the record and keep processing the rest; one bad row never
    /// aborts a whole report.
    #[error("Invalid stored entry {id}: {reason}")]
    ValidationError { id: i64, reason: String },

    // ---------------------------
    // Report scope
    // ---------------------------
    #[error("No reference date supplied: select a date for the report")]
    MissingScope,

    // ---------------------------
    // Roster / entry logic
    // ---------------------------
    #[error("Unknown employee id: {0}")]
    UnknownEmployee(i64),

    #[error("Unknown shop id: {0}")]
    UnknownShop(i64),

    #[error("Invalid clock transition: {0}")]
    InvalidTransition(String),

    #[error("No time entry with id {0}")]
    UnknownEntry(i64),

    #[error("The system owner cannot be deleted")]
    OwnerProtected,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
