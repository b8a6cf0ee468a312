//! Frame reading and writing over blocking byte streams.
//!
//! A frame is `VarInt(len) ++ payload[len]`, and the payload starts with
//! `VarInt(packet_id)`. Reads issue one `read` call per length-prefix byte,
//! so wrap unbuffered sockets in a `BufReader`.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter, StreamError, StreamResult, VARINT_MAX_BYTES};

use crate::error::{WireError, WireResult};
use crate::limits::Limits;

/// Reads the length prefix one byte at a time so no payload bytes are
/// pulled from the stream early.
fn read_length_prefix<R: Read>(reader: &mut R) -> WireResult<i32> {
    let mut buf = [0u8; VARINT_MAX_BYTES];
    for (i, slot) in buf.iter_mut().enumerate() {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        *slot = byte[0];
        if byte[0] & 0x80 == 0 {
            return ByteReader::new(&buf[..=i])
                .read_varint()
                .map_err(WireError::MalformedLength);
        }
    }
    Err(WireError::MalformedLength(StreamError::VarIntTooLong {
        max_bytes: VARINT_MAX_BYTES,
    }))
}

/// Reads one frame and returns its payload.
///
/// Blocks until the whole payload has arrived. A stream that ends before
/// then yields an `Io` error of kind `UnexpectedEof`.
pub fn read_frame<R: Read>(reader: &mut R, limits: &Limits) -> WireResult<Vec<u8>> {
    let length = read_length_prefix(reader)?;
    let len = usize::try_from(length).map_err(|_| WireError::NegativeLength { length })?;
    limits.check(len)?;
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Splits a frame payload into its packet ID and body.
pub fn split_packet_id(payload: &[u8]) -> StreamResult<(i32, &[u8])> {
    let mut reader = ByteReader::new(payload);
    let id = reader.read_varint()?;
    Ok((id, reader.rest()))
}

/// Builds a complete frame for `id` and `body` in memory.
pub fn encode_frame(id: i32, body: &[u8]) -> WireResult<Vec<u8>> {
    let payload_len = bytestream::varint_len(id) + body.len();
    let length = i32::try_from(payload_len).map_err(|_| WireError::FrameTooLarge {
        length: payload_len,
        limit: i32::MAX as usize,
    })?;
    let mut writer = ByteWriter::with_capacity(bytestream::varint_len(length) + payload_len);
    writer.write_varint(length);
    writer.write_varint(id);
    writer.write_bytes(body);
    Ok(writer.finish())
}

/// Writes one frame with a single `write_all` call, then flushes.
pub fn write_frame<W: Write>(
    writer: &mut W,
    id: i32,
    body: &[u8],
    limits: &Limits,
) -> WireResult<()> {
    limits.check(bytestream::varint_len(id) + body.len())?;
    let frame = encode_frame(id, body)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Reads consecutive frames from a stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    inner: R,
    limits: Limits,
    frames_read: u64,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R, limits: Limits) -> Self {
        Self {
            inner,
            limits,
            frames_read: 0,
        }
    }

    /// Reads the next frame payload.
    pub fn read_frame(&mut self) -> WireResult<Vec<u8>> {
        let payload = read_frame(&mut self.inner, &self.limits)?;
        self.frames_read += 1;
        Ok(payload)
    }
}

impl<R> FrameReader<R> {
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of frames read so far.
    #[must_use]
    pub const fn frames_read(&self) -> u64 {
        self.frames_read
    }

    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Writes frames to a stream, one `write_all` per frame.
#[derive(Debug)]
pub struct FrameWriter<W> {
    inner: W,
    limits: Limits,
    frames_written: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(inner: W, limits: Limits) -> Self {
        Self {
            inner,
            limits,
            frames_written: 0,
        }
    }

    /// Writes a frame for `id` and `body`.
    pub fn write_frame(&mut self, id: i32, body: &[u8]) -> WireResult<()> {
        write_frame(&mut self.inner, id, body, &self.limits)?;
        self.frames_written += 1;
        Ok(())
    }
}

impl<W> FrameWriter<W> {
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
