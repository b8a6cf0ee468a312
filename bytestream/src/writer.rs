//! Byte-level writer for encoding protocol primitives.

use uuid::Uuid;

use crate::angle::Angle;
use crate::error::{StreamError, StreamResult};

/// A byte-level writer for encoding protocol primitives.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer. Fixed-width writes cannot fail; only
/// length-prefixed writes can, when the payload does not fit a VarInt prefix.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends raw bytes without a length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a boolean as `0x00` or `0x01`.
    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(u8::from(value));
    }

    /// Writes an unsigned byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a signed byte.
    pub fn write_i8(&mut self, value: i8) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes the raw IEEE-754 bit pattern of a single.
    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes the raw IEEE-754 bit pattern of a double.
    pub fn write_f64(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes a VarInt.
    ///
    /// Negative values are encoded from their `u32` bit pattern and always
    /// take 5 bytes.
    pub fn write_varint(&mut self, value: i32) {
        let mut value = value as u32;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.bytes.push(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Writes a VarLong.
    ///
    /// The shift is logical over the `u64` bit pattern, so negative values
    /// terminate after exactly 10 bytes.
    pub fn write_varlong(&mut self, value: i64) {
        let mut value = value as u64;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.bytes.push(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Writes a VarInt length prefix for a payload of `len` bytes.
    pub fn write_length(&mut self, len: usize) -> StreamResult<()> {
        let prefix = i32::try_from(len).map_err(|_| StreamError::LengthOverflow { length: len })?;
        self.write_varint(prefix);
        Ok(())
    }

    /// Writes a VarInt-prefixed byte array.
    pub fn write_byte_array(&mut self, data: &[u8]) -> StreamResult<()> {
        self.write_length(data.len())?;
        self.write_bytes(data);
        Ok(())
    }

    /// Writes a VarInt-prefixed UTF-8 string. The prefix counts bytes.
    pub fn write_string(&mut self, value: &str) -> StreamResult<()> {
        self.write_byte_array(value.as_bytes())
    }

    /// Writes a UUID as 16 raw bytes.
    pub fn write_uuid(&mut self, value: &Uuid) {
        self.bytes.extend_from_slice(value.as_bytes());
    }

    /// Writes a single-byte rotation angle.
    pub fn write_angle(&mut self, value: Angle) {
        self.bytes.push(value.0);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

/// Returns the number of bytes the VarInt encoding of `value` occupies.
#[must_use]
pub const fn varint_len(value: i32) -> usize {
    let mut value = value as u32;
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert_eq!(writer.len(), 0);
        assert!(writer.is_empty());
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_fixed_width_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u16(0x1234);
        writer.write_i32(-2);
        assert_eq!(writer.finish(), vec![0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFE]);
    }

    #[test]
    fn write_bool_canonical() {
        let mut writer = ByteWriter::new();
        writer.write_bool(true);
        writer.write_bool(false);
        assert_eq!(writer.finish(), vec![0x01, 0x00]);
    }

    #[test]
    fn write_varint_examples() {
        let cases: [(i32, &[u8]); 6] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (300, &[0xAC, 0x02]),
            (-1, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for (value, expected) in cases {
            let mut writer = ByteWriter::new();
            writer.write_varint(value);
            assert_eq!(writer.finish(), expected, "encoding of {value}");
        }
    }

    #[test]
    fn write_varint_min_and_max() {
        let mut writer = ByteWriter::new();
        writer.write_varint(i32::MAX);
        assert_eq!(writer.finish(), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x07]);

        let mut writer = ByteWriter::new();
        writer.write_varint(i32::MIN);
        assert_eq!(writer.finish(), vec![0x80, 0x80, 0x80, 0x80, 0x08]);
    }

    #[test]
    fn write_varlong_negative_terminates() {
        let mut writer = ByteWriter::new();
        writer.write_varlong(-1);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[9], 0x01);
        assert!(bytes[..9].iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn write_varlong_min() {
        let mut writer = ByteWriter::new();
        writer.write_varlong(i64::MIN);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[9], 0x01);
        assert!(bytes[..9].iter().all(|b| *b == 0x80));
    }

    #[test]
    fn write_string_prefix_counts_bytes() {
        let mut writer = ByteWriter::new();
        writer.write_string("aé").unwrap();
        assert_eq!(writer.finish(), vec![0x03, b'a', 0xC3, 0xA9]);
    }

    #[test]
    fn varint_len_matches_encoding() {
        for value in [0, 1, 127, 128, 16_383, 16_384, i32::MAX, -1, i32::MIN] {
            let mut writer = ByteWriter::new();
            writer.write_varint(value);
            assert_eq!(varint_len(value), writer.len(), "length of {value}");
        }
    }

    #[test]
    fn finish_into() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);

        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }

    #[test]
    fn with_capacity() {
        let writer = ByteWriter::with_capacity(100);
        assert_eq!(writer.len(), 0);
    }
}
