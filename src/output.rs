//! JSON output types for CLI responses.
//!
//! Every JSON response has `status` as its first field and carries the
//! schema version, so consumers can detect format changes.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use jast_tree::{Category, FieldSpec, NodeKind};

use crate::error::{JastError, OutputErrorCode};

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

/// Error information for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// Numeric error code, also the process exit code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
}

impl ErrorInfo {
    /// Create from a JastError.
    pub fn from_error(err: &JastError) -> Self {
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
        }
    }
}

/// Response emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    pub schema_version: String,
    pub error: ErrorInfo,
}

impl ErrorResponse {
    pub fn from_error(err: &JastError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

/// Declared schema of one kind.
#[derive(Debug, Clone, Serialize)]
pub struct KindSchema {
    pub kind: NodeKind,
    pub category: Category,
    pub fields: &'static [FieldSpec],
}

impl KindSchema {
    pub fn of(kind: NodeKind) -> Self {
        KindSchema {
            kind,
            category: kind.category(),
            fields: kind.fields(),
        }
    }
}

/// Response for `jast schema --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaResponse {
    /// Status: "ok".
    pub status: String,
    pub schema_version: String,
    pub kinds: Vec<KindSchema>,
}

impl SchemaResponse {
    pub fn new(kinds: Vec<KindSchema>) -> Self {
        SchemaResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            kinds,
        }
    }
}

/// Response for `jast stats --json`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Status: "ok".
    pub status: String,
    pub schema_version: String,
    /// Total number of nodes, the root included.
    pub total: usize,
    /// Deepest nesting level; the root is at depth 1.
    pub max_depth: usize,
    /// Node count per category. Categories with no nodes are listed as 0.
    pub categories: BTreeMap<Category, usize>,
    /// Node count per kind, for kinds that occur.
    pub kinds: BTreeMap<NodeKind, usize>,
}

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
