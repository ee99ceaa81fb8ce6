// ABOUTME: Unified error handling for the HabitBite client with standard error codes
// ABOUTME: Maps transport, server, session and storage failures to user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible client operation returns [`AppResult`]. The `Display` output of an
//! [`AppError`] is the message a UI should show verbatim; raw transport errors are only kept
//! as the chained `source` for logs.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation
    /// Server payload did not have the minimal expected shape
    #[serde(rename = "INVALID_RESPONSE")]
    InvalidResponse,
    /// Client-side input check failed before any request was sent
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    // Authorization
    /// Server answered 401; the session has been torn down
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired,
    /// Server answered 403 to a non-mutating request
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied,
    /// Server answered 403 to a mutating request; the CSRF token was invalidated
    #[serde(rename = "CSRF_REJECTED")]
    CsrfRejected,

    // Transport and server
    /// Server answered 404
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Server answered with any other non-success status
    #[serde(rename = "SERVER_ERROR")]
    ServerError,
    /// Connection could not be established or was interrupted
    #[serde(rename = "NETWORK_ERROR")]
    Network,
    /// Request exceeded the configured timeout
    #[serde(rename = "TIMEOUT")]
    Timeout,

    // Infrastructure
    /// Persistent client store could not be read or written
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Local (de)serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Configuration value rejected during validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
}

impl ErrorCode {
    /// Get a generic description of this error class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidResponse => "The server response had an unexpected shape",
            Self::InvalidInput => "The provided input is invalid",
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::CsrfRejected => "The anti-forgery token was rejected",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ServerError => "The server reported an error",
            Self::Network => "The server could not be reached",
            Self::Timeout => "The request timed out",
            Self::StorageError => "Client storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether repeating the same call may succeed without user intervention
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CsrfRejected | Self::Timeout)
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
    /// HTTP status returned by the server, when there was one
    pub status: Option<u16>,
    /// Correlation id sent with the failing request
    pub request_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            request_id: None,
            source: None,
        }
    }

    /// Attach the HTTP status the server answered with
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the request correlation id
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether repeating the same call may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for common errors
impl AppError {
    /// Malformed server payload
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidResponse, message)
    }

    /// Invalid client input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Session rejected by the server
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRequired, message).with_status(401)
    }

    /// CSRF token rejected on a mutating request
    #[must_use]
    pub fn csrf_rejected() -> Self {
        Self::new(ErrorCode::CsrfRejected, "Session expired. Please try again.").with_status(403)
    }

    /// Server-side error with a status code
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError, message).with_status(status)
    }

    /// Request timed out
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, message)
    }

    /// Connection failure
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Network, message)
    }

    /// Client store failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration rejected
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("Failed to process JSON data: {error}"),
        )
        .with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(format!("Client store I/O failed: {error}")).with_source(error)
    }
}
