//! Unified application error type.
//! Every layer (store, core, export, cli) returns AppError so that the
//! binary has a single place where failures are printed.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    // ---------------------------
    // Day record errors
    // ---------------------------
    #[error("Invalid interval: end {end} must be after start {start}")]
    InvalidInterval { start: String, end: String },

    #[error("Minute of day out of range: {0} (expected 0 to 1440)")]
    MinuteOutOfRange(i64),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("No entry #{0} on this day")]
    InvalidEntryIndex(usize),

    #[error("A punch is already running for {0}")]
    PunchAlreadyRunning(String),

    #[error("No running punch for {0}")]
    NoOngoingPunch(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
