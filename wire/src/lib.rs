//! Frame transport for the mcproto protocol.
//!
//! This crate turns a blocking byte stream into discrete length-prefixed
//! frames and back. It does not know about phases or packet types, only
//! that each payload begins with a VarInt packet ID.
//!
//! # Design Principles
//!
//! - **Bounded decoding** - Frame lengths are checked against [`Limits`] before allocation.
//! - **Atomic writes** - A frame's length prefix and payload go out in one `write_all`.
//! - **No domain knowledge** - This crate handles framing, not packet bodies.

mod error;
mod frame;
mod limits;

pub use error::{WireError, WireResult};
pub use frame::{
    encode_frame, read_frame, split_packet_id, write_frame, FrameReader, FrameWriter,
};
pub use limits::Limits;
