use bytestream::{Angle, ByteReader, ByteWriter, Uuid};
use codec::{
    read_chat, read_metadata, read_position, read_slot, write_chat, write_metadata,
    write_position, write_slot, Chat, CodecResult, ItemSlot, MetadataEntry, Position,
};

use crate::packet::Packet;

/// Serverbound `0x00`: the client's answer to [`ClientKeepAlive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerKeepAlive {
    pub keep_alive_id: i32,
}

impl ServerKeepAlive {
    pub const ID: i32 = 0x00;
}

impl Packet for ServerKeepAlive {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.keep_alive_id);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.keep_alive_id = reader.read_varint()?;
        Ok(())
    }
}

/// Serverbound `0x01`: a line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerChatMessage {
    pub message: String,
}

impl ServerChatMessage {
    pub const ID: i32 = 0x01;
}

impl Packet for ServerChatMessage {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_string(&self.message)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.message = reader.read_string()?;
        Ok(())
    }
}

/// Clientbound `0x00`: liveness probe the client must echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientKeepAlive {
    pub keep_alive_id: i32,
}

impl ClientKeepAlive {
    pub const ID: i32 = 0x00;
}

impl Packet for ClientKeepAlive {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.keep_alive_id);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.keep_alive_id = reader.read_varint()?;
        Ok(())
    }
}

/// Clientbound `0x01`: enters the world.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JoinGame {
    pub entity_id: i32,
    pub gamemode: u8,
    pub dimension: i8,
    pub difficulty: u8,
    pub max_players: u8,
    pub level_type: String,
    pub reduced_debug_info: bool,
}

impl JoinGame {
    pub const ID: i32 = 0x01;
}

impl Packet for JoinGame {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i32(self.entity_id);
        writer.write_u8(self.gamemode);
        writer.write_i8(self.dimension);
        writer.write_u8(self.difficulty);
        writer.write_u8(self.max_players);
        writer.write_string(&self.level_type)?;
        writer.write_bool(self.reduced_debug_info);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.entity_id = reader.read_i32()?;
        self.gamemode = reader.read_u8()?;
        self.dimension = reader.read_i8()?;
        self.difficulty = reader.read_u8()?;
        self.max_players = reader.read_u8()?;
        self.level_type = reader.read_string()?;
        self.reduced_debug_info = reader.read_bool()?;
        Ok(())
    }
}

/// Clientbound `0x02`: a chat line. `position` is 0 for chat, 1 for system, 2 for the action bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientChatMessage {
    pub message: Chat,
    pub position: i8,
}

impl ClientChatMessage {
    pub const ID: i32 = 0x02;
}

impl Packet for ClientChatMessage {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        write_chat(writer, &self.message)?;
        writer.write_i8(self.position);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.message = read_chat(reader)?;
        self.position = reader.read_i8()?;
        Ok(())
    }
}

/// Clientbound `0x05`: world spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnPosition {
    pub location: Position,
}

impl SpawnPosition {
    pub const ID: i32 = 0x05;
}

impl Packet for SpawnPosition {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        write_position(writer, self.location);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.location = read_position(reader)?;
        Ok(())
    }
}

/// Bits of [`PlayerPositionAndLook::flags`] marking a field as relative.
pub mod position_flags {
    pub const X: u8 = 0x01;
    pub const Y: u8 = 0x02;
    pub const Z: u8 = 0x04;
    pub const Y_ROT: u8 = 0x08;
    pub const X_ROT: u8 = 0x10;
}

/// Clientbound `0x08`: teleports the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerPositionAndLook {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub flags: u8,
}

impl PlayerPositionAndLook {
    pub const ID: i32 = 0x08;

    /// Returns `true` if `flag` marks its field as relative.
    #[must_use]
    pub const fn is_relative(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }
}

impl Packet for PlayerPositionAndLook {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_f64(self.x);
        writer.write_f64(self.y);
        writer.write_f64(self.z);
        writer.write_f32(self.yaw);
        writer.write_f32(self.pitch);
        writer.write_u8(self.flags);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.x = reader.read_f64()?;
        self.y = reader.read_f64()?;
        self.z = reader.read_f64()?;
        self.yaw = reader.read_f32()?;
        self.pitch = reader.read_f32()?;
        self.flags = reader.read_u8()?;
        Ok(())
    }
}

/// Clientbound `0x0C`: another player comes into view.
///
/// Coordinates are fixed-point, 1/32 of a block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpawnPlayer {
    pub entity_id: i32,
    pub player_uuid: Uuid,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub yaw: Angle,
    pub pitch: Angle,
    pub current_item: i16,
    pub metadata: Vec<MetadataEntry>,
}

impl SpawnPlayer {
    pub const ID: i32 = 0x0C;
}

impl Packet for SpawnPlayer {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.entity_id);
        writer.write_uuid(&self.player_uuid);
        writer.write_i32(self.x);
        writer.write_i32(self.y);
        writer.write_i32(self.z);
        writer.write_angle(self.yaw);
        writer.write_angle(self.pitch);
        writer.write_i16(self.current_item);
        write_metadata(writer, &self.metadata)
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.entity_id = reader.read_varint()?;
        self.player_uuid = reader.read_uuid()?;
        self.x = reader.read_i32()?;
        self.y = reader.read_i32()?;
        self.z = reader.read_i32()?;
        self.yaw = reader.read_angle()?;
        self.pitch = reader.read_angle()?;
        self.current_item = reader.read_i16()?;
        self.metadata = read_metadata(reader)?;
        Ok(())
    }
}

/// Clientbound `0x1C`: metadata changes for one entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityMetadata {
    pub entity_id: i32,
    pub metadata: Vec<MetadataEntry>,
}

impl EntityMetadata {
    pub const ID: i32 = 0x1C;
}

impl Packet for EntityMetadata {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.entity_id);
        write_metadata(writer, &self.metadata)
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.entity_id = reader.read_varint()?;
        self.metadata = read_metadata(reader)?;
        Ok(())
    }
}

/// Clientbound `0x2F`: replaces one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetSlot {
    pub window_id: i8,
    pub slot: i16,
    pub item: ItemSlot,
}

impl SetSlot {
    pub const ID: i32 = 0x2F;
}

impl Packet for SetSlot {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i8(self.window_id);
        writer.write_i16(self.slot);
        write_slot(writer, &self.item)
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.window_id = reader.read_i8()?;
        self.slot = reader.read_i16()?;
        self.item = read_slot(reader)?;
        Ok(())
    }
}

/// Clientbound `0x39`: flight and field-of-view settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerAbilities {
    pub flags: i8,
    pub flying_speed: f32,
    pub field_of_view: f32,
}

impl PlayerAbilities {
    pub const ID: i32 = 0x39;
}

impl Packet for PlayerAbilities {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i8(self.flags);
        writer.write_f32(self.flying_speed);
        writer.write_f32(self.field_of_view);
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        self.flags = reader.read_i8()?;
        self.flying_speed = reader.read_f32()?;
        self.field_of_view = reader.read_f32()?;
        Ok(())
    }
}

/// Clientbound `0x40`: the server closes the connection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disconnect {
    pub reason: Chat,
}

impl Disconnect {
    pub const ID: i32 = 0x40;
}

impl Packet for Disconnect {
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
