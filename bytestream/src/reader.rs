//! Byte-level reader with bounded operations.

use uuid::Uuid;

use crate::angle::Angle;
use crate::error::{StreamError, StreamResult};
use crate::{VARINT_MAX_BYTES, VARLONG_MAX_BYTES};

/// A byte-level reader for decoding protocol primitives.
///
/// All multi-byte fixed-width values are big-endian. Every read is
/// bounds-checked and returns an error instead of panicking on short input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread tail without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Reads exactly `len` bytes, borrowing them from the input.
    pub fn read_bytes(&mut self, len: usize) -> StreamResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> StreamResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads an unsigned byte.
    pub fn read_u8(&mut self) -> StreamResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a signed byte.
    pub fn read_i8(&mut self) -> StreamResult<i8> {
        Ok(i8::from_be_bytes(self.read_array::<1>()?))
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> StreamResult<u16> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> StreamResult<i16> {
        Ok(i16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> StreamResult<i32> {
        Ok(i32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> StreamResult<i64> {
        Ok(i64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> StreamResult<u64> {
        Ok(u64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads an IEEE-754 single from its raw big-endian bit pattern.
    pub fn read_f32(&mut self) -> StreamResult<f32> {
        Ok(f32::from_bits(u32::from_be_bytes(self.read_array::<4>()?)))
    }

    /// Reads an IEEE-754 double from its raw big-endian bit pattern.
    pub fn read_f64(&mut self) -> StreamResult<f64> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array::<8>()?)))
    }

    /// Reads a VarInt (at most 5 groups of 7 bits).
    pub fn read_varint(&mut self) -> StreamResult<i32> {
        let mut result = 0u32;
        for group in 0..VARINT_MAX_BYTES {
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << (7 * group);
            if byte & 0x80 == 0 {
                return Ok(result as i32);
            }
        }
        Err(StreamError::VarIntTooLong {
            max_bytes: VARINT_MAX_BYTES,
        })
    }

    /// Reads a VarLong (at most 10 groups of 7 bits).
    pub fn read_varlong(&mut self) -> StreamResult<i64> {
        let mut result = 0u64;
        for group in 0..VARLONG_MAX_BYTES {
            let byte = self.read_u8()?;
            result |= u64::from(byte & 0x7F) << (7 * group);
            if byte & 0x80 == 0 {
                return Ok(result as i64);
            }
        }
        Err(StreamError::VarIntTooLong {
            max_bytes: VARLONG_MAX_BYTES,
        })
    }

    /// Reads a VarInt length prefix and rejects negative values.
    pub fn read_length(&mut self) -> StreamResult<usize> {
        let length = self.read_varint()?;
        usize::try_from(length).map_err(|_| StreamError::NegativeLength { length })
    }

    /// Reads a VarInt-prefixed byte array.
    pub fn read_byte_array(&mut self) -> StreamResult<Vec<u8>> {
        let len = self.read_length()?;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Reads a VarInt-prefixed UTF-8 string. The prefix counts bytes.
    pub fn read_string(&mut self) -> StreamResult<String> {
        let len = self.read_length()?;
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| StreamError::InvalidUtf8)
    }

    /// Reads a 16-byte UUID.
    pub fn read_uuid(&mut self) -> StreamResult<Uuid> {
        Ok(Uuid::from_bytes(self.read_array::<16>()?))
    }

    /// Reads a single-byte rotation angle.
    pub fn read_angle(&mut self) -> StreamResult<Angle> {
        Ok(Angle(self.read_u8()?))
    }

    fn ensure_bytes(&self, bytes: usize) -> StreamResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(StreamError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
