//! Error types for composite codec operations.

use std::fmt;

use bytestream::StreamError;

use crate::metadata::MetadataType;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding composite fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Primitive read/write error.
    Stream(StreamError),

    /// A chat string exceeded the byte ceiling.
    StringTooLong { length: usize, max: usize },

    /// A metadata entry carried a type tag outside the known set.
    UnknownMetadataType { index: u8, tag: u8 },

    /// A metadata entry's declared type does not match its value.
    MetadataTypeMismatch {
        index: u8,
        expected: MetadataType,
        found: MetadataType,
    },

    /// A metadata entry used the terminator index.
    ReservedMetadataIndex,

    /// An enumerated field held a value outside its known set.
    UnknownDiscriminant { field: &'static str, value: i32 },
}

impl CodecError {
    /// Returns `true` if the error means the input ran out of bytes.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Stream(e) if e.is_eof())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(e) => write!(f, "stream error: {e}"),
            Self::StringTooLong { length, max } => {
                write!(f, "string exceeds maximum length: {length} > {max} bytes")
            }
            Self::UnknownMetadataType { index, tag } => {
                write!(f, "unknown metadata type {tag} at index {index}")
            }
            Self::MetadataTypeMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "metadata index {index} declared as {expected:?} but holds {found:?}"
                )
            }
            Self::ReservedMetadataIndex => {
                write!(f, "metadata index 0xFF is reserved for the terminator")
            }
            Self::UnknownDiscriminant { field, value } => {
                write!(f, "unknown {field} value {value}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamError> for CodecError {
    fn from(err: StreamError) -> Self {
        Self::Stream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_string_too_long() {
        let err = CodecError::StringTooLong {
            length: 40_000,
            max: 32_767,
        };
        let msg = err.to_string();
        assert!(msg.contains("40000"));
        assert!(msg.contains("32767"));
    }

    #[test]
    fn error_display_unknown_metadata_type() {
        let err = CodecError::UnknownMetadataType { index: 3, tag: 9 };
        let msg = err.to_string();
        assert!(msg.contains("unknown metadata type 9"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn error_display_unknown_discriminant() {
        let err = CodecError::UnknownDiscriminant {
            field: "player list action",
            value: 7,
        };
        assert_eq!(err.to_string(), "unknown player list action value 7");
    }

    #[test]
    fn error_from_stream_error() {
        let stream_err = StreamError::InvalidUtf8;
        let codec_err: CodecError = stream_err.into();
        assert!(matches!(codec_err, CodecError::Stream(_)));
    }

    #[test]
    fn error_source_stream() {
        let err = CodecError::Stream(StreamError::InvalidUtf8);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_source_none_for_others() {
        let err = CodecError::ReservedMetadataIndex;
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn eof_passes_through() {
        let err = CodecError::Stream(StreamError::UnexpectedEof {
            requested: 4,
            available: 0,
        });
        assert!(err.is_eof());
        assert!(!CodecError::ReservedMetadataIndex.is_eof());
    }
}
