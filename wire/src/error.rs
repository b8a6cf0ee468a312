//! Error types for frame transport.

use std::fmt;
use std::io;

use bytestream::StreamError;

/// Result type for frame transport operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while reading or writing frames.
#[derive(Debug)]
pub enum WireError {
    /// The underlying stream failed or ended mid-frame.
    Io(io::Error),

    /// The length prefix was not a valid VarInt.
    MalformedLength(StreamError),

    /// A frame length exceeded the configured limit.
    FrameTooLarge { length: usize, limit: usize },

    /// The length prefix decoded to a negative value.
    NegativeLength { length: i32 },
}

impl WireError {
    /// Returns `true` if the stream ended, either between frames or inside one.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::MalformedLength(e) => write!(f, "malformed frame length: {e}"),
            Self::FrameTooLarge { length, limit } => {
                write!(f, "frame too large: {length} bytes exceeds limit of {limit}")
            }
            Self::NegativeLength { length } => {
                write!(f, "negative frame length: {length}")
            }
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MalformedLength(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WireError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
