use bytestream::{ByteReader, ByteWriter};
use codec::CodecResult;

use crate::packet::Packet;

/// Serverbound `0x00`: asks for the server list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRequest;

impl StatusRequest {
    pub const ID: i32 = 0x00;
}

impl Packet for StatusRequest {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, _writer: &mut ByteWriter) -> CodecResult<()> {
        Ok(())
    }

    fn decode(&mut self, _reader: &mut ByteReader<'_>) -> CodecResult<()> {
        Ok(())
    }
}

/// Serverbound `0x01`: latency probe, echoed back as [`StatusPong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusPing {
    pub payload: i64,
}

impl StatusPing {
    pub const ID: i32 = 0x01;
}

impl Packet for StatusPing {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i64(self.payload);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.payload = reader.read_i64()?;
        Ok(())
    }
}

/// Clientbound `0x00`: server list JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusResponse {
    pub json: String,
}

impl StatusResponse {
    pub const ID: i32 = 0x00;
}

impl Packet for StatusResponse {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_string(&self.json)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.json = reader.read_string()?;
        Ok(())
    }
}

/// Clientbound `0x01`: echo of [`StatusPing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusPong {
    pub payload: i64,
}

impl StatusPong {
    pub const ID: i32 = 0x01;
}

impl From<StatusPing> for StatusPong {
    fn from(ping: StatusPing) -> Self {
        Self {
            payload: ping.payload,
        }
    }
}

impl Packet for StatusPong {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i64(self.payload);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.payload = reader.read_i64()?;
        Ok(())
    }
}
