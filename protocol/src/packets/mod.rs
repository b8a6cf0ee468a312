//! The protocol 47 packet catalog.
//!
//! Each packet is a plain struct with a `Default` value and an `ID`
//! constant. [`register_standard`] installs all of them.

mod handshake;
mod login;
mod play;
mod player_list;
mod status;

pub use handshake::Handshake;
pub use login::{LoginDisconnect, LoginStart, LoginSuccess};
pub use play::{
    position_flags, ClientChatMessage, ClientKeepAlive, Disconnect, EntityMetadata, JoinGame,
    PlayerAbilities, PlayerPositionAndLook, ServerChatMessage, ServerKeepAlive, SetSlot,
    SpawnPlayer, SpawnPosition,
};
pub use player_list::{PlayerInfo, PlayerListItem, PlayerListUpdate, PlayerProperty};
pub use status::{StatusPing, StatusPong, StatusRequest, StatusResponse};

use crate::error::ProtocolResult;
use crate::phase::{Direction, Phase};
use crate::registry::Registry;

/// Protocol version these packets implement.
pub const PROTOCOL_VERSION: i32 = 47;

/// Registers every packet in the catalog.
pub fn register_standard(registry: &mut Registry) -> ProtocolResult<()> {
    use Direction::{ClientBound, ServerBound};

    registry.register_packet::<Handshake>(Phase::Handshake, ServerBound)?;

    registry.register_packet::<StatusRequest>(Phase::Status, ServerBound)?;
    registry.register_packet::<StatusPing>(Phase::Status, ServerBound)?;
    registry.register_packet::<StatusResponse>(Phase::Status, ClientBound)?;
    registry.register_packet::<StatusPong>(Phase::Status, ClientBound)?;

    registry.register_packet::<LoginStart>(Phase::Login, ServerBound)?;
    registry.register_packet::<LoginDisconnect>(Phase::Login, ClientBound)?;
    registry.register_packet::<LoginSuccess>(Phase::Login, ClientBound)?;

    registry.register_packet::<ServerKeepAlive>(Phase::Play, ServerBound)?;
    registry.register_packet::<ServerChatMessage>(Phase::Play, ServerBound)?;

    registry.register_packet::<ClientKeepAlive>(Phase::Play, ClientBound)?;
    registry.register_packet::<JoinGame>(Phase::Play, ClientBound)?;
    registry.register_packet::<ClientChatMessage>(Phase::Play, ClientBound)?;
    registry.register_packet::<SpawnPosition>(Phase::Play, ClientBound)?;
    registry.register_packet::<PlayerPositionAndLook>(Phase::Play, ClientBound)?;
    registry.register_packet::<SpawnPlayer>(Phase::Play, ClientBound)?;
    registry.register_packet::<EntityMetadata>(Phase::Play, ClientBound)?;
    registry.register_packet::<SetSlot>(Phase::Play, ClientBound)?;
    registry.register_packet::<PlayerListItem>(Phase::Play, ClientBound)?;
    registry.register_packet::<PlayerAbilities>(Phase::Play, ClientBound)?;
    registry.register_packet::<Disconnect>(Phase::Play, ClientBound)?;

    Ok(())
}
