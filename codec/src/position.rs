//! Block positions packed into one 64-bit word.
//!
//! Layout, most significant bit first: `x` (26 bits), `y` (12 bits),
//! `z` (26 bits). Each field is two's complement within its width, so
//! values outside the representable range wrap silently.

use bytestream::{ByteReader, ByteWriter};

use crate::error::CodecResult;

const XZ_BITS: u32 = 26;
const Y_BITS: u32 = 12;
const XZ_MASK: u64 = (1 << XZ_BITS) - 1;
const Y_MASK: u64 = (1 << Y_BITS) - 1;

/// Smallest representable `x`/`z`.
pub const XZ_MIN: i32 = -(1 << (XZ_BITS - 1));
/// Largest representable `x`/`z`.
pub const XZ_MAX: i32 = (1 << (XZ_BITS - 1)) - 1;
/// Smallest representable `y`.
pub const Y_MIN: i32 = -(1 << (Y_BITS - 1));
/// Largest representable `y`.
pub const Y_MAX: i32 = (1 << (Y_BITS - 1)) - 1;

/// A block coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every field is inside its packed range.
    #[must_use]
    pub const fn in_range(&self) -> bool {
        self.x >= XZ_MIN
            && self.x <= XZ_MAX
            && self.z >= XZ_MIN
            && self.z <= XZ_MAX
            && self.y >= Y_MIN
            && self.y <= Y_MAX
    }

    /// Packs into the wire word. Out-of-range fields are truncated.
    #[must_use]
    pub const fn pack(&self) -> u64 {
        let x = self.x as u64 & XZ_MASK;
        let y = self.y as u64 & Y_MASK;
        let z = self.z as u64 & XZ_MASK;
        (x << (Y_BITS + XZ_BITS)) | (y << XZ_BITS) | z
    }

    /// Unpacks a wire word, sign-extending each field.
    #[must_use]
    pub const fn unpack(word: u64) -> Self {
        Self {
            x: sign_extend(word >> (Y_BITS + XZ_BITS), XZ_BITS),
            y: sign_extend((word >> XZ_BITS) & Y_MASK, Y_BITS),
            z: sign_extend(word & XZ_MASK, XZ_BITS),
        }
    }
}

const fn sign_extend(value: u64, width: u32) -> i32 {
    let value = value as i64;
    if value >= 1 << (width - 1) {
        (value - (1 << width)) as i32
    } else {
        value as i32
    }
}

/// Reads a packed position.
pub fn read_position(reader: &mut ByteReader<'_>) -> CodecResult<Position> {
    Ok(Position::unpack(reader.read_u64()?))
}

/// Writes a packed position.
pub fn write_position(writer: &mut ByteWriter, position: Position) {
    writer.write_u64(position.pack());
}
