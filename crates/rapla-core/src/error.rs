//! Error types for timetable parsing operations.

use thiserror::Error;

/// Type alias for [`Result<T, RaplaError>`].
pub type Result<T> = std::result::Result<T, RaplaError>;

/// Error type for timetable parsing operations.
///
/// Ordinary absence — an empty spacer cell, a malformed date header, a
/// block cell with no link — is never an error; those are recovered
/// locally during parsing by omitting the affected value. Only failures
/// that make the whole operation meaningless surface here.
#[derive(Error, Debug)]
pub enum RaplaError {
    /// The input contained no markup to parse.
    ///
    /// Returned when the document text is empty or whitespace-only.
    /// Anything else is repaired into a tree on a best-effort basis and
    /// parsed, so this is the only whole-document failure mode.
    #[error("empty document: input contains no markup")]
    EmptyDocument,

    /// File I/O error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error when rendering a parsed timetable.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
