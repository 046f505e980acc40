//! Error handling for XML parsing.
//!
//! The tokenizer's own five error kinds live on [`crate::TokenizeError`]
//! (re-exported from the crate root); this module adds the ambient layer on
//! top of it: [`DomError`], the DOM recorder's two-level error surface from
//! spec.md §4.4, and [`Error`]/[`Result`] for the handful of fallible
//! convenience methods (`Document::parse_reader`) that can also fail on I/O.
use crate::TokenizeError;

/// The DOM recorder's error surface (spec.md §4.4): either the document has
/// never been successfully parsed, or the tokenizer rejected the input at a
/// specific position.
///
/// `Display` renders `"{message} at line {line}, column {column}"`, in the
/// same spirit as the teacher's `ErrorContext` — context for a human reading
/// a failed parse, not behaviour the specification excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No successful `Document::parse` has happened yet (spec.md §4.4:
    /// "before any successful parse, the document is in the 'uninitialised'
    /// error state").
    #[error("document has not been parsed yet")]
    Uninitialized,

    /// The tokenizer failed while recording this document.
    #[error("{source} at line {line}, column {column}")]
    Tokenize {
        /// The tokenizer error that stopped the parse.
        source: TokenizeError,
        /// 1-based line the error occurred on.
        line: u64,
        /// 1-based column the error occurred on.
        column: u64,
    },
}

impl DomError {
    /// The underlying tokenizer error, if this isn't the initial
    /// "never parsed" state.
    #[must_use]
    pub fn source(&self) -> Option<TokenizeError> {
        match self {
            DomError::Uninitialized => None,
            DomError::Tokenize { source, .. } => Some(*source),
        }
    }
}

/// Crate-level error for the convenience methods (`Document::parse_reader`)
/// that can fail on I/O in addition to the DOM recorder's own error surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input failed before the tokenizer ever saw it.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A result type for the crate's fallible I/O convenience methods.
pub type Result<T> = std::result::Result<T, Error>;
