//! Error types and error code constants for jast.
//!
//! `JastError` is the single error type the CLI reports. Errors from visitor
//! hooks and from JSON output are bridged into it with `From` impls, and
//! `OutputErrorCode` maps every variant onto a stable exit code:
//!
//! - `2`: Invalid arguments (unknown kind)
//! - `3`: Input errors (file not found or unreadable)
//! - `4`: Malformed tree (the file is not a valid serialized tree)
//! - `5`: Traversal failed (a hook returned an error)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;
use std::io;

use thiserror::Error;

use jast_tree::HookError;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON error output and process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// The input file could not be found or read.
    InputError = 3,
    /// The input file is not a valid serialized tree.
    MalformedTree = 4,
    /// A hook stopped the traversal with an error.
    TraversalFailed = 5,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
#[derive(Debug, Error)]
pub enum JastError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Input file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Input file is not a serialized tree.
    #[error("malformed tree in {path}: {message}")]
    MalformedTree { path: String, message: String },

    /// A visitor hook returned an error.
    #[error("traversal failed: {message}")]
    Traversal { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl JastError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        JastError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        JastError::Internal {
            message: message.into(),
        }
    }
}

impl From<&JastError> for OutputErrorCode {
    fn from(err: &JastError) -> Self {
        match err {
            JastError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            JastError::FileNotFound { .. } => OutputErrorCode::InputError,
            JastError::Io { .. } => OutputErrorCode::InputError,
            JastError::MalformedTree { .. } => OutputErrorCode::MalformedTree,
            JastError::Traversal { .. } => OutputErrorCode::TraversalFailed,
            JastError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<JastError> for OutputErrorCode {
    fn from(err: JastError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Bridges
// ============================================================================

impl From<HookError> for JastError {
    fn from(err: HookError) -> Self {
        JastError::Traversal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for JastError {
    fn from(err: serde_json::Error) -> Self {
        JastError::internal(format!("failed to serialize output: {err}"))
    }
}
