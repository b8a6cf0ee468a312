//! Per-connection phase state.

use std::io::{Read, Write};
use std::sync::Arc;

use tracing::{debug, trace, warn};
use wire::Limits;

use crate::error::{ProtocolError, ProtocolResult};
use crate::packet::{encode_body, Packet};
use crate::phase::{Direction, Phase, Role};
use crate::registry::Registry;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Which end of the connection this session is.
    pub role: Role,
    /// Frame transport limits.
    pub limits: Limits,
    /// Fail frames whose decoder leaves bytes unread instead of discarding them.
    pub strict_frames: bool,
}

impl SessionConfig {
    #[must_use]
    pub fn server() -> Self {
        Self {
            role: Role::Server,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn client() -> Self {
        Self {
            role: Role::Client,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strict_frames(mut self, strict: bool) -> Self {
        self.strict_frames = strict;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// The active phase of one connection, bound to a shared registry.
///
/// Decoding always uses the table for the role's inbound direction in the
/// current phase.
#[derive(Debug, Clone)]
pub struct Session {
    registry: Arc<Registry>,
    config: SessionConfig,
    phase: Phase,
}

impl Session {
    /// A session in the Handshake phase.
    pub fn new(registry: Arc<Registry>, config: SessionConfig) -> Self {
        Self {
            registry,
            config,
            phase: Phase::Handshake,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.config.role
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Direction of packets this session decodes.
    #[must_use]
    pub const fn inbound(&self) -> Direction {
        self.config.role.inbound()
    }

    /// Direction of packets this session encodes.
    #[must_use]
    pub const fn outbound(&self) -> Direction {
        self.config.role.outbound()
    }

    /// Advances to `next`.
    ///
    /// Fails with `InvalidTransition` for anything but the three forward
    /// edges, including re-entering the current phase.
    pub fn set_phase(&mut self, next: Phase) -> ProtocolResult<()> {
        if !self.phase.can_transition_to(next) {
            return Err(ProtocolError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
        Ok(())
    }

    /// Decodes a frame payload (`VarInt(id) ++ body`) in the current phase.
    pub fn decode_payload(&self, payload: &[u8]) -> ProtocolResult<Box<dyn Packet>> {
        let (id, body) = wire::split_packet_id(payload)?;
        trace!(id, len = payload.len(), phase = %self.phase, "inbound frame");
        let direction = self.inbound();
        let decoded = self
            .registry
            .decode_counted(self.phase, direction, id, body);
        let (packet, remaining) = match decoded {
            Ok(result) => result,
            Err(err @ ProtocolError::UnknownPacketId { .. }) => {
                warn!(id, phase = %self.phase, %direction, "unknown packet ID");
                return Err(err);
            }
            Err(err) => return Err(err),
        };
        if remaining > 0 {
            if self.config.strict_frames {
                return Err(ProtocolError::TrailingBytes { id, remaining });
            }
            debug!(id, remaining, packet = packet.name(), "discarding trailing bytes");
        }
        Ok(packet)
    }

    /// Encodes a packet as a complete frame.
    pub fn encode_frame(&self, packet: &dyn Packet) -> ProtocolResult<Vec<u8>> {
        let body = encode_body(packet)?;
        Ok(wire::encode_frame(packet.id(), &body)?)
    }

    /// Reads one frame from `reader` and decodes it.
    pub fn read_message<R: Read>(&self, reader: &mut R) -> ProtocolResult<Box<dyn Packet>> {
        let payload = wire::read_frame(reader, &self.config.limits)?;
        self.decode_payload(&payload)
    }

    /// Encodes `packet` and writes it as one frame.
    pub fn write_message<W: Write>(&self, writer: &mut W, packet: &dyn Packet) -> ProtocolResult<()> {
        let body = encode_body(packet)?;
        trace!(id = packet.id(), len = body.len(), packet = packet.name(), "outbound frame");
        wire::write_frame(writer, packet.id(), &body, &self.config.limits)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::{Handshake, JoinGame, LoginStart, StatusRequest};

    fn server_session() -> Session {
        Session::new(
            Arc::new(Registry::standard().unwrap()),
            SessionConfig::server(),
        )
    }

    #[test]
    fn starts_in_handshake() {
        assert_eq!(server_session().phase(), Phase::Handshake);
    }

    #[test]
    fn rejects_illegal_transitions() {
        let mut session = server_session();
        assert!(matches!(
            session.set_phase(Phase::Play),
            Err(ProtocolError::InvalidTransition {
                from: Phase::Handshake,
                to: Phase::Play
            })
        ));
        session.set_phase(Phase::Login).unwrap();
        assert!(session.set_phase(Phase::Login).is_err());
        assert!(session.set_phase(Phase::Handshake).is_err());
        session.set_phase(Phase::Play).unwrap();
        for phase in Phase::ALL {
            assert!(session.set_phase(phase).is_err());
        }
        assert_eq!(session.phase(), Phase::Play);
    }

    #[test]
    fn status_is_a_dead_end() {
        let mut session = server_session();
        session.set_phase(Phase::Status).unwrap();
        assert!(session.set_phase(Phase::Login).is_err());
    }

    #[test]
    fn write_then_read_message() {
        let session = server_session();
        let handshake = Handshake {
            protocol_version: 47,
            server_address: "localhost".to_string(),
            server_port: 25565,
            next_state: 2,
        };
        let mut out = Vec::new();
        session.write_message(&mut out, &handshake).unwrap();

        let packet = session.read_message(&mut out.as_slice()).unwrap();
        assert_eq!(packet.downcast_ref::<Handshake>(), Some(&handshake));
    }

    #[test]
    fn decode_uses_current_phase() {
        let mut session = server_session();
        let frame = session.encode_frame(&StatusRequest).unwrap();
        let payload = &frame[1..];

        // 0x00 in Handshake is the handshake itself, which needs a body.
        assert!(session.decode_payload(payload).is_err());

        session.set_phase(Phase::Status).unwrap();
        let packet = session.decode_payload(payload).unwrap();
        assert!(packet.is::<StatusRequest>());
    }

    #[test]
    fn client_role_reads_clientbound() {
        let registry = Arc::new(Registry::standard().unwrap());
        let mut client = Session::new(registry, SessionConfig::client());
        client.set_phase(Phase::Login).unwrap();
        client.set_phase(Phase::Play).unwrap();

        let join = JoinGame {
            entity_id: 7,
            level_type: "default".to_string(),
            ..JoinGame::default()
        };
        let frame = client.encode_frame(&join).unwrap();
        let packet = client.read_message(&mut frame.as_slice()).unwrap();
        assert_eq!(packet.downcast_ref::<JoinGame>(), Some(&join));
    }

    #[test]
    fn strict_frames_reject_trailing_bytes() {
        let registry = Arc::new(Registry::standard().unwrap());
        let mut payload = vec![0x00];
        let mut body = Vec::new();
        Session::new(registry.clone(), SessionConfig::server())
            .write_message(
                &mut body,
                &LoginStart {
                    name: "Steve".to_string(),
                },
            )
            .unwrap();
        // Drop the length prefix and ID, keep the body.
        payload.extend_from_slice(&body[2..]);
        payload.push(0xAB);

        let mut lax = Session::new(registry.clone(), SessionConfig::server());
        lax.set_phase(Phase::Login).unwrap();
        assert!(lax.decode_payload(&payload).is_ok());

        let mut strict = Session::new(registry, SessionConfig::server().with_strict_frames(true));
        strict.set_phase(Phase::Login).unwrap();
        assert!(matches!(
            strict.decode_payload(&payload),
            Err(ProtocolError::TrailingBytes {
                id: 0x00,
                remaining: 1
            })
        ));
    }
}
