//! Low-level byte primitives for the mcproto codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for the protocol's
//! primitive types: big-endian fixed-width integers and floats, booleans,
//! VarInt/VarLong, VarInt-prefixed strings and byte arrays, UUIDs and angles.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about packets or phases.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_varint(300);
//! writer.write_string("hello").unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_varint().unwrap(), 300);
//! assert_eq!(reader.read_string().unwrap(), "hello");
//! ```

mod angle;
mod error;
mod reader;
mod writer;

pub use angle::Angle;
pub use error::{StreamError, StreamResult};
pub use reader::ByteReader;
pub use writer::{varint_len, ByteWriter};

/// Re-exported so downstream crates name the same UUID type.
pub use uuid::Uuid;

/// Maximum encoded size of a VarInt.
pub const VARINT_MAX_BYTES: usize = 5;

/// Maximum encoded size of a VarLong.
pub const VARLONG_MAX_BYTES: usize = 10;
