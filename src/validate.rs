//! Resource path validation
//!
//! Validation is a pure predicate over the path string and runs strictly
//! before any stream is opened: a rejected path never reaches the stream
//! source. The two checks form a closed set of variants selected when a
//! loader is constructed, not by runtime dispatch.

use crate::error::{Result, SeqLoadError};
use crate::types::FileFormat;

/// Pre-I/O validator over resource path strings
///
/// # Examples
///
/// ```
/// use seqload::{FileFormat, PathValidator};
///
/// let validator = PathValidator::for_format(FileFormat::Fasta);
/// assert!(validator.validate("sample.fasta").is_ok());
/// assert!(validator.validate("sample.fas").is_ok());
/// assert!(validator.validate("sample.rna").is_err());
/// assert!(validator.validate(".fasta").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathValidator {
    /// Reject blank (empty or whitespace-only) paths
    NonBlank,
    /// Reject blank paths, then require `<non-empty-basename>.<ext>` where
    /// `ext` is one of the listed extensions (case-sensitive, no
    /// normalization)
    Extension {
        /// Accepted extensions, without the leading dot
        expected: &'static [&'static str],
    },
}

impl PathValidator {
    /// Validator enforcing only the blank check
    pub const fn non_blank() -> Self {
        PathValidator::NonBlank
    }

    /// Validator enforcing the extension list of the given file format
    pub const fn for_format(format: FileFormat) -> Self {
        PathValidator::Extension {
            expected: format.extensions(),
        }
    }

    /// Check a path, returning the first violated rule
    pub fn validate(&self, path: &str) -> Result<()> {
        if path.trim().is_empty() {
            return Err(SeqLoadError::BlankPath);
        }
        match self {
            PathValidator::NonBlank => Ok(()),
            PathValidator::Extension { expected } => {
                if expected.iter().any(|ext| has_extension(path, ext)) {
                    Ok(())
                } else {
                    Err(SeqLoadError::InvalidExtension {
                        path: path.to_string(),
                        expected,
                    })
                }
            }
        }
    }
}

/// True if `path` ends in `.<ext>` with a non-empty basename in front
fn has_extension(path: &str, ext: &str) -> bool {
    let stem = match path
        .strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
    {
        Some(stem) => stem,
        None => return false,
    };
    // The final path component must carry a real name, not just a dot-file
    // extension or a trailing separator.
    let basename = stem.rsplit('/').next().unwrap_or("");
    !basename.trim().is_empty()
}
