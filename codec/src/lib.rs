//! Composite field codecs for the mcproto protocol.
//!
//! Builds on [`bytestream`] primitives to read and write the structured
//! fields packets carry:
//!
//! - Chat strings with a byte-length ceiling
//! - Packed block positions
//! - Entity metadata sequences
//! - Inventory item slots
//!
//! # Design Principles
//!
//! - **Closed value sets** - Metadata values are an enum, not a dynamic type.
//! - **Fail whole** - A malformed metadata sequence yields no partial result.
//! - **No framing** - This crate never sees packet lengths or IDs.

mod chat;
mod error;
mod metadata;
mod position;
mod slot;

pub use chat::{read_chat, write_chat, Chat, MAX_CHAT_LEN};
pub use error::{CodecError, CodecResult};
pub use metadata::{
    read_metadata, write_metadata, MetadataEntry, MetadataType, MetadataValue, METADATA_END,
};
pub use position::{read_position, write_position, Position, XZ_MAX, XZ_MIN, Y_MAX, Y_MIN};
pub use slot::{read_slot, write_slot, ItemSlot};
