//! Error types for byte stream operations.

use std::fmt;

/// Result type for byte stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while reading or writing protocol primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Attempted to read past the end of the available bytes.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A variable-length integer kept its continuation bit set past the
    /// maximum number of 7-bit groups.
    VarIntTooLong {
        /// Maximum number of groups for the integer width.
        max_bytes: usize,
    },

    /// A length prefix decoded to a negative value.
    NegativeLength {
        /// The decoded length.
        length: i32,
    },

    /// A string payload was not valid UTF-8.
    InvalidUtf8,

    /// A payload is too long for its VarInt length prefix.
    LengthOverflow {
        /// The payload length in bytes.
        length: usize,
    },
}

impl StreamError {
    /// Returns `true` if the error means the input ran out of bytes.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::VarIntTooLong { max_bytes } => {
                write!(f, "variable-length integer longer than {max_bytes} bytes")
            }
            Self::NegativeLength { length } => {
                write!(f, "negative length prefix: {length}")
            }
            Self::InvalidUtf8 => write!(f, "string is not valid utf-8"),
            Self::LengthOverflow { length } => {
                write!(f, "length {length} does not fit in a varint prefix")
            }
        }
    }
}

impl std::error::Error for StreamError {}
