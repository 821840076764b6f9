//! Error types for kcounter.
//!
//! Counting a single in-memory sequence fails in exactly one way: a
//! non-positive k-mer length. The remaining variants belong to the file and
//! output layers wrapped around the counting core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kcounter operations.
#[derive(Debug, Error)]
pub enum KcounterError {
    /// K-mer length is not a positive integer.
    #[error("'k' must be a positive integer, got {k}")]
    InvalidArgument { k: i64 },

    /// Failed to read sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse sequence record.
    #[error("failed to parse sequence record: {details}")]
    SequenceParse { details: String },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to decompress gzip file.
    #[cfg(feature = "gzip")]
    #[error("failed to decompress gzip file '{path}': {source}")]
    GzipError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl KcounterError {
    /// Returns `true` for a rejected k-mer length, as opposed to I/O trouble.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Error for a non-positive k-mer length.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("'k' must be a positive integer, got {k}")]
pub struct KmerLengthError {
    /// The rejected k value.
    pub k: i64,
}

/// A byte outside `{A, C, G, T}` (either case) inside a k-mer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBaseError {
    /// The offending byte.
    pub base: u8,
    /// Offset of the byte in the scanned sequence.
    pub position: usize,
}

impl std::fmt::Display for InvalidBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.base.is_ascii_graphic() || self.base == b' ' {
            write!(
                f,
                "invalid base '{}' (0x{:02x}) at position {}",
                self.base as char, self.base, self.position
            )
        } else {
            write!(
                f,
                "invalid base 0x{:02x} at position {}",
                self.base, self.position
            )
        }
    }
}

impl std::error::Error for InvalidBaseError {}

impl From<std::io::Error> for KcounterError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteError { source }
    }
}

impl From<serde_json::Error> for KcounterError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

impl From<KmerLengthError> for KcounterError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidArgument { k: err.k }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling a counting method.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Invalid k-mer length provided.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Error reading input, counting, or writing output.
    #[error(transparent)]
    Kcounter(#[from] KcounterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_error_display() {
        let err = KmerLengthError { k: -1 };
        assert_eq!(err.to_string(), "'k' must be a positive integer, got -1");
    }

    #[test]
    fn invalid_base_error_display() {
        let err = InvalidBaseError {
            base: b'N',
            position: 5,
        };
        assert_eq!(err.to_string(), "invalid base 'N' (0x4e) at position 5");

        let err = InvalidBaseError {
            base: 0xc3,
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid base 0xc3 at position 2");
    }

    #[test]
    fn kcounter_error_from_kmer_length_error() {
        let err: KcounterError = KmerLengthError { k: 0 }.into();
        assert!(matches!(err, KcounterError::InvalidArgument { k: 0 }));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn io_error_is_not_invalid_argument() {
        let err: KcounterError = std::io::Error::other("broken pipe").into();
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "failed to write output: broken pipe");
    }

    #[test]
    fn builder_error_is_transparent() {
        let err: BuilderError = KmerLengthError { k: 0 }.into();
        assert_eq!(err.to_string(), "'k' must be a positive integer, got 0");
    }
}
