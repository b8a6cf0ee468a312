use bytestream::{ByteReader, ByteWriter, Uuid};
use codec::{read_chat, write_chat, Chat, CodecResult};

use crate::packet::Packet;

/// Serverbound `0x00`: the client's username.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginStart {
    pub name: String,
}

impl LoginStart {
    pub const ID: i32 = 0x00;
}

impl Packet for LoginStart {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_string(&self.name)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.name = reader.read_string()?;
        Ok(())
    }
}

/// Clientbound `0x00`: login refused, with a chat-formatted reason.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginDisconnect {
    pub reason: Chat,
}

impl LoginDisconnect {
    pub const ID: i32 = 0x00;
}

impl Packet for LoginDisconnect {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        write_chat(writer, &self.reason)
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.reason = read_chat(reader)?;
        Ok(())
    }
}

/// Clientbound `0x02`: login accepted. The UUID travels as dashed text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginSuccess {
    pub uuid: String,
    pub username: String,
}

impl LoginSuccess {
    pub const ID: i32 = 0x02;

    /// Builds the packet from a parsed UUID.
    #[must_use]
    pub fn new(uuid: Uuid, username: impl Into<String>) -> Self {
        Self {
            uuid: uuid.hyphenated().to_string(),
            username: username.into(),
        }
    }

    /// Parses the UUID text.
    pub fn parsed_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.uuid)
    }
}

impl Packet for LoginSuccess {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_string(&self.uuid)?;
        writer.write_string(&self.username)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.uuid = reader.read_string()?;
        self.username = reader.read_string()?;
        Ok(())
    }
}
