//! Crate-wide error type.
//!
//! Three kinds of failure reach callers:
//! - transport I/O, passed through unchanged from the raw stream or the codec;
//! - unsupported operations, raised by the inert buffer-pump handles;
//! - contract violations, raised when a caller hands back a handle this codec
//!   did not lend out.
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O failure from the raw transport or the stream codec.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Data-bearing call on a stream-only handle.
    #[error("{handle} is not supported (attempted `{operation}`)")]
    Unsupported {
        handle: &'static str,
        operation: &'static str,
    },

    /// Two-argument stream creation received a handle that is not the codec's own.
    #[error("handle is not the {expected} lent out by this codec")]
    ForeignHandle { expected: &'static str },

    /// Registry lookup for a codec name that is not known.
    #[error("unknown compression codec: {0}")]
    UnknownCodec(String),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CodecError {
    pub fn unsupported(handle: &'static str, operation: &'static str) -> Self {
        CodecError::Unsupported { handle, operation }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, CodecError::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_pass_through_unchanged() {
        let err = CodecError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "pipe closed");
        match err {
            CodecError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_message_names_handle_and_operation() {
        let err = CodecError::unsupported("Snappy Compressor", "set_input");
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "Snappy Compressor is not supported (attempted `set_input`)"
        );
    }

    #[test]
    fn foreign_handle_is_not_unsupported() {
        let err = CodecError::ForeignHandle { expected: "compressor" };
        assert!(!err.is_unsupported());
    }
}
