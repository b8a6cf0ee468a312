//! Phase-scoped packets, sessions and connections for the mcproto protocol.
//!
//! This crate ties the codec layers to the protocol's state machine:
//!
//! - [`Packet`] is the capability every message type implements
//! - [`Registry`] maps `(phase, direction, id)` to packet constructors
//! - [`Session`] tracks the active phase and decodes inbound frames
//! - [`Connection`] binds a session to a blocking byte stream
//! - [`packets`] holds the protocol 47 catalog
//!
//! # Design Principles
//!
//! - **Explicit registry** - Built once, passed by `Arc`, never global.
//! - **Fail fast** - Unknown IDs and illegal transitions end the connection.
//! - **Forward only** - Phases advance along fixed edges and never regress.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use protocol::packets::Handshake;
//! use protocol::{Registry, Session, SessionConfig};
//!
//! let registry = Arc::new(Registry::standard().unwrap());
//! let mut session = Session::new(registry, SessionConfig::server());
//!
//! let hello = Handshake {
//!     protocol_version: 47,
//!     server_address: "localhost".into(),
//!     server_port: 25565,
//!     next_state: 2,
//! };
//! let frame = session.encode_frame(&hello).unwrap();
//!
//! let packet = session.read_message(&mut frame.as_slice()).unwrap();
//! let next = packet.downcast_ref::<Handshake>().unwrap().next_phase().unwrap();
//! session.set_phase(next).unwrap();
//! ```

mod connection;
mod error;
mod packet;
pub mod packets;
mod phase;
mod profile;
mod registry;
mod session;

pub use connection::{Connection, Inbound, Outbound};
pub use error::{ProtocolError, ProtocolResult};
pub use packet::{encode_body, AsAny, Packet};
pub use phase::{Direction, Phase, Role};
pub use profile::{
    PlayerProfile, ProfileError, ProfileProperty, ProfileResult, UsernameLookup,
};
pub use registry::{PacketFactory, PacketTable, Registry, MAX_PACKET_ID};
pub use session::{Session, SessionConfig};
