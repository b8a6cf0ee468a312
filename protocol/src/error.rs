//! Error types for registry, session and connection operations.

use std::fmt;
use std::io;

use bytestream::StreamError;
use codec::CodecError;
use wire::WireError;

use crate::phase::{Direction, Phase};

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors raised above the codec layers.
///
/// Every variant is fatal to the connection that produced it.
#[derive(Debug)]
pub enum ProtocolError {
    /// Socket-level failure outside frame transport.
    Io(io::Error),

    /// Frame transport error.
    Wire(WireError),

    /// A packet body failed to encode or decode.
    Codec(CodecError),

    /// No packet is registered for this ID in the active phase and direction.
    UnknownPacketId {
        id: i32,
        phase: Phase,
        direction: Direction,
    },

    /// The requested phase is not a legal successor of the current one.
    InvalidTransition { from: Phase, to: Phase },

    /// A decoder left bytes unread while strict frames are enabled.
    TrailingBytes { id: i32, remaining: usize },

    /// A registration used an ID outside the table.
    IdOutOfRange { id: i32, capacity: usize },

    /// A registration targeted an occupied slot.
    DuplicateRegistration {
        phase: Phase,
        direction: Direction,
        id: i32,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::UnknownPacketId {
                id,
                phase,
                direction,
            } => {
                write!(f, "unknown packet ID 0x{id:02X} ({phase} {direction})")
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "invalid phase transition: {from} -> {to}")
            }
            Self::TrailingBytes { id, remaining } => {
                write!(
                    f,
                    "packet 0x{id:02X} left {remaining} trailing bytes in its frame"
                )
            }
            Self::IdOutOfRange { id, capacity } => {
                write!(f, "packet ID {id} outside table capacity {capacity}")
            }
            Self::DuplicateRegistration {
                phase,
                direction,
                id,
            } => {
                write!(
                    f,
                    "packet ID 0x{id:02X} already registered for {phase} {direction}"
                )
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Wire(e) => Some(e),
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WireError> for ProtocolError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<CodecError> for ProtocolError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}

impl From<StreamError> for ProtocolError {
    fn from(err: StreamError) -> Self {
        Self::Codec(CodecError::Stream(err))
    }
}
