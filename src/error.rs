//! Error type definitions.
//!
//! This module defines the startup error type and the lookup error taxonomy
//! shared by both report builders.

use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error constructing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures a single lookup can produce.
///
/// Each variant aborts only the lookup that raised it. No variant ever
/// carries a partially built report; the interactive shell maps every one
/// to a message and re-prompts.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Empty or blank input string.
    #[error("Empty input")]
    InvalidInput,

    /// The input could not be interpreted as a phone number.
    #[error("Phone number parse error: {message}")]
    Parse {
        /// Engine-reported reason the input was rejected.
        message: String,
    },

    /// The number parsed but failed the validity check.
    #[error("Phone number failed validation")]
    InvalidNumber,

    /// Transport-level failure reaching the geolocation service,
    /// including timeouts.
    #[error("Geolocation service unreachable: {0}")]
    Connection(#[from] ReqwestError),

    /// The geolocation service answered with a non-success status code.
    #[error("Geolocation service returned HTTP {status}")]
    Provider {
        /// HTTP status code of the failed response.
        status: u16,
    },

    /// Catch-all for provider-internal faults, such as a response body
    /// that cannot be decoded.
    #[error("Unexpected provider failure: {0}")]
    Unexpected(String),
}
