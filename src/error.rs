//! Error types for seqload

use thiserror::Error;

/// Result type alias for seqload operations
pub type Result<T> = std::result::Result<T, SeqLoadError>;

/// Error types that can occur while locating, validating, and loading
/// sequence resources
///
/// Every failure of the load pipeline maps onto one variant here, named by
/// the stage that detects it: path validation (`BlankPath`,
/// `InvalidExtension`), resource lookup (`ResourceNotFound`), line grouping
/// (`InvalidFormat`, `WrongRecordCount`), sequence construction
/// (`InvalidBase`, `EmptySequence`), and the underlying transport (`Io`).
#[derive(Debug, Error)]
pub enum SeqLoadError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource path is empty or whitespace-only
    #[error("Blank resource path")]
    BlankPath,

    /// Resource path does not carry one of the extensions expected for
    /// the file format, or has no basename in front of the extension
    #[error("Invalid path '{path}': expected a non-empty basename with one of the extensions {expected:?}")]
    InvalidExtension {
        /// Path that failed validation
        path: String,
        /// Extensions accepted for the format, without the leading dot
        expected: &'static [&'static str],
    },

    /// No resource with the given logical name exists under the catalog root
    #[error("Resource '{name}' not found")]
    ResourceNotFound {
        /// Logical resource name that could not be resolved
        name: String,
    },

    /// Invalid sequence file format
    #[error("Invalid sequence format at line {line}: {msg}")]
    InvalidFormat {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        msg: String,
    },

    /// Grouping produced a different number of records than the format allows
    #[error("Expected exactly {expected} sequence record(s), found {found}")]
    WrongRecordCount {
        /// Number of records the format requires
        expected: usize,
        /// Number of records actually grouped
        found: usize,
    },

    /// A sequence body contains a character outside the nucleotide alphabet
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase {
        /// The offending character
        base: char,
        /// Offset of the character within the body (0-based)
        position: usize,
    },

    /// A sequence value was constructed from an empty body
    #[error("Empty sequence body")]
    EmptySequence,
}
