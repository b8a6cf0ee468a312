use bytestream::{ByteReader, ByteWriter};
use codec::CodecResult;

use crate::packet::Packet;
use crate::phase::Phase;

/// Serverbound `0x00`: opens a connection and names the next phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Handshake {
    pub protocol_version: i32,
    pub server_address: String,
    pub server_port: u16,
    /// `1` for Status, `2` for Login.
    pub next_state: i32,
}

impl Handshake {
    pub const ID: i32 = 0x00;

    /// The phase `next_state` asks for, if it names one.
    #[must_use]
    pub const fn next_phase(&self) -> Option<Phase> {
        match self.next_state {
            1 => Some(Phase::Status),
            2 => Some(Phase::Login),
            _ => None,
        }
    }
}

impl Packet for Handshake {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.protocol_version);
        writer.write_string(&self.server_address)?;
        writer.write_u16(self.server_port);
        writer.write_varint(self.next_state);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.protocol_version = reader.read_varint()?;
        self.server_address = reader.read_string()?;
        self.server_port = reader.read_u16()?;
        self.next_state = reader.read_varint()?;
        Ok(())
    }
}
