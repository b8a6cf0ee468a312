//! Clientbound `0x38`: tab-list updates.
//!
//! The body is `VarInt(action) ++ VarInt(count)` followed by `count`
//! records, each a UUID plus action-specific fields. One packet carries a
//! single action, so the records are modelled as one enum variant per
//! action holding a homogeneous list.

use bytestream::{ByteReader, ByteWriter, Uuid};
use codec::{read_chat, write_chat, Chat, CodecError, CodecResult};

use crate::packet::Packet;

/// A signed or unsigned profile property, as the tab list carries it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

impl PlayerProperty {
    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_string(&self.name)?;
        writer.write_string(&self.value)?;
        writer.write_bool(self.signature.is_some());
        if let Some(signature) = &self.signature {
            writer.write_string(signature)?;
        }
        Ok(())
    }

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        let name = reader.read_string()?;
        let value = reader.read_string()?;
        let signature = if reader.read_bool()? {
            Some(reader.read_string()?)
        } else {
            None
        };
        Ok(Self {
            name,
            value,
            signature,
        })
    }
}

/// A player being added to the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerInfo {
    pub uuid: Uuid,
    pub name: String,
    pub properties: Vec<PlayerProperty>,
    pub gamemode: i32,
    pub ping: i32,
    pub display_name: Option<Chat>,
}

/// The records of one update, grouped by action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerListUpdate {
    /// Action 0.
    AddPlayer(Vec<PlayerInfo>),
    /// Action 1: `(uuid, gamemode)`.
    UpdateGamemode(Vec<(Uuid, i32)>),
    /// Action 2: `(uuid, ping in milliseconds)`.
    UpdateLatency(Vec<(Uuid, i32)>),
    /// Action 3: `(uuid, display name)`.
    UpdateDisplayName(Vec<(Uuid, Option<Chat>)>),
    /// Action 4.
    RemovePlayer(Vec<Uuid>),
}

impl Default for PlayerListUpdate {
    fn default() -> Self {
        Self::AddPlayer(Vec::new())
    }
}

impl PlayerListUpdate {
    /// The action discriminant written on the wire.
    #[must_use]
    pub const fn action(&self) -> i32 {
        match self {
            Self::AddPlayer(_) => 0,
            Self::UpdateGamemode(_) => 1,
            Self::UpdateLatency(_) => 2,
            Self::UpdateDisplayName(_) => 3,
            Self::RemovePlayer(_) => 4,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::AddPlayer(v) => v.len(),
            Self::UpdateGamemode(v) | Self::UpdateLatency(v) => v.len(),
            Self::UpdateDisplayName(v) => v.len(),
            Self::RemovePlayer(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn write_optional_chat(writer: &mut ByteWriter, chat: Option<&Chat>) -> CodecResult<()> {
    writer.write_bool(chat.is_some());
    if let Some(chat) = chat {
        write_chat(writer, chat)?;
    }
    Ok(())
}

fn read_optional_chat(reader: &mut ByteReader<'_>) -> CodecResult<Option<Chat>> {
    if reader.read_bool()? {
        Ok(Some(read_chat(reader)?))
    } else {
        Ok(None)
    }
}

/// Reads `count` records. Capacity grows as records arrive so a forged
/// count cannot force a large allocation.
fn read_records<T>(
    reader: &mut ByteReader<'_>,
    count: usize,
    mut read_one: impl FnMut(&mut ByteReader<'_>) -> CodecResult<T>,
) -> CodecResult<Vec<T>> {
    let mut records = Vec::new();
    for _ in 0..count {
        records.push(read_one(reader)?);
    }
    Ok(records)
}

/// Clientbound `0x38`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerListItem {
    pub update: PlayerListUpdate,
}

impl PlayerListItem {
    pub const ID: i32 = 0x38;
}

impl Packet for PlayerListItem {
    fn id(&self) -> i32 {
        Self::ID
    }

    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_varint(self.update.action());
        writer.write_length(self.update.len())?;
        match &self.update {
            PlayerListUpdate::AddPlayer(players) => {
                for player in players {
                    writer.write_uuid(&player.uuid);
                    writer.write_string(&player.name)?;
                    writer.write_length(player.properties.len())?;
                    for property in &player.properties {
                        property.encode(writer)?;
                    }
                    writer.write_varint(player.gamemode);
                    writer.write_varint(player.ping);
                    write_optional_chat(writer, player.display_name.as_ref())?;
                }
            }
            PlayerListUpdate::UpdateGamemode(records) | PlayerListUpdate::UpdateLatency(records) => {
                for (uuid, value) in records {
                    writer.write_uuid(uuid);
                    writer.write_varint(*value);
                }
            }
            PlayerListUpdate::UpdateDisplayName(records) => {
                for (uuid, display_name) in records {
                    writer.write_uuid(uuid);
                    write_optional_chat(writer, display_name.as_ref())?;
                }
            }
            PlayerListUpdate::RemovePlayer(uuids) => {
                for uuid in uuids {
                    writer.write_uuid(uuid);
                }
            }
        }
        Ok(())
    }

    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
        let action = reader.read_varint()?;
        let count = reader.read_length()?;
        self.update = match action {
            0 => PlayerListUpdate::AddPlayer(read_records(reader, count, |r| {
                let uuid = r.read_uuid()?;
                let name = r.read_string()?;
                let property_count = r.read_length()?;
                let properties = read_records(r, property_count, PlayerProperty::decode)?;
                Ok(PlayerInfo {
                    uuid,
                    name,
                    properties,
                    gamemode: r.read_varint()?,
                    ping: r.read_varint()?,
                    display_name: read_optional_chat(r)?,
                })
            })?),
            1 => PlayerListUpdate::UpdateGamemode(read_records(reader, count, |r| {
                Ok((r.read_uuid()?, r.read_varint()?))
            })?),
            2 => PlayerListUpdate::UpdateLatency(read_records(reader, count, |r| {
                Ok((r.read_uuid()?, r.read_varint()?))
            })?),
            3 => PlayerListUpdate::UpdateDisplayName(read_records(reader, count, |r| {
                Ok((r.read_uuid()?, read_optional_chat(r)?))
            })?),
            4 => PlayerListUpdate::RemovePlayer(read_records(reader, count, |r| {
                Ok(r.read_uuid()?)
            })?),
            value => {
                return Err(CodecError::UnknownDiscriminant {
                    field: "player list action",
                    value,
                })
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(update: PlayerListUpdate) -> PlayerListItem {
        let packet = PlayerListItem { update };
        let mut writer = ByteWriter::new();
        packet.encode(&mut writer).unwrap();
        let bytes = writer.finish();
        let mut decoded = PlayerListItem::default();
        let mut reader = ByteReader::new(&bytes);
        decoded.decode(&mut reader).unwrap();
        assert!(reader.is_empty());
        assert_eq!(decoded, packet);
        decoded
    }

    #[test]
    fn add_player_with_properties() {
        roundtrip(PlayerListUpdate::AddPlayer(vec![PlayerInfo {
            uuid: Uuid::from_u128(0xABCD),
            name: "Alex".to_string(),
            properties: vec![
                PlayerProperty {
                    name: "textures".to_string(),
                    value: "e30=".to_string(),
                    signature: Some("c2ln".to_string()),
                },
                PlayerProperty {
                    name: "cape".to_string(),
                    value: String::new(),
                    signature: None,
                },
            ],
            gamemode: 1,
            ping: 35,
            display_name: Some(Chat::from(r#"{"text":"Alex"}"#)),
        }]));
    }

    #[test]
    fn every_other_action() {
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        roundtrip(PlayerListUpdate::UpdateGamemode(vec![(a, 3), (b, 0)]));
        roundtrip(PlayerListUpdate::UpdateLatency(vec![(a, 120)]));
        roundtrip(PlayerListUpdate::UpdateDisplayName(vec![
            (a, None),
            (b, Some(Chat::from("B"))),
        ]));
        roundtrip(PlayerListUpdate::RemovePlayer(vec![a, b]));
    }

    #[test]
    fn remove_layout() {
        let packet = PlayerListItem {
            update: PlayerListUpdate::RemovePlayer(vec![Uuid::from_u128(7)]),
        };
        let mut writer = ByteWriter::new();
        packet.encode(&mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(&bytes[..2], &[0x04, 0x01]);
        assert_eq!(bytes.len(), 2 + 16);
        assert_eq!(bytes[17], 7);
    }

    #[test]
    fn unknown_action_fails() {
        let mut packet = PlayerListItem::default();
        let mut reader = ByteReader::new(&[0x05, 0x00]);
        assert_eq!(
            packet.decode(&mut reader).unwrap_err(),
            CodecError::UnknownDiscriminant {
                field: "player list action",
                value: 5
            }
        );
    }

    #[test]
    fn forged_count_hits_eof() {
        let mut packet = PlayerListItem::default();
        // RemovePlayer with a count of 2^28 and no records.
        let mut reader = ByteReader::new(&[0x04, 0x80, 0x80, 0x80, 0x80, 0x01]);
        assert!(packet.decode(&mut reader).unwrap_err().is_eof());
    }
}
