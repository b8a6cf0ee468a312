//! Phase-scoped packet tables.
//!
//! A [`Registry`] maps `(phase, direction, id)` to a constructor for the
//! packet type with that ID. It is built once, then shared read-only
//! (typically through an `Arc`) by every session. Registration takes
//! `&mut self`, so a shared registry can no longer change.

use std::fmt;

use bytestream::ByteReader;

use crate::error::{ProtocolError, ProtocolResult};
use crate::packet::Packet;
use crate::phase::{Direction, Phase};

/// Table capacity: one past the highest packet ID the protocol uses.
pub const MAX_PACKET_ID: usize = 0x49;

/// Builds a fresh, default-valued packet ready to decode into.
pub type PacketFactory = fn() -> Box<dyn Packet>;

fn construct<T: Packet + Default>() -> Box<dyn Packet> {
    Box::new(T::default())
}

/// Fixed-capacity table for one phase and direction.
#[derive(Clone)]
pub struct PacketTable {
    slots: [Option<PacketFactory>; MAX_PACKET_ID],
}

impl PacketTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_PACKET_ID],
        }
    }

    /// Returns the factory for `id`, if one is registered.
    #[must_use]
    pub fn get(&self, id: i32) -> Option<PacketFactory> {
        let index = usize::try_from(id).ok()?;
        self.slots.get(index).copied().flatten()
    }

    /// Registered IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(|(index, _)| i32::try_from(index).ok())
    }

    /// Number of registered IDs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PacketTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PacketTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// Packet tables for every phase and direction.
#[derive(Clone, Default)]
pub struct Registry {
    tables: [[PacketTable; 2]; 4],
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the full protocol 47 packet catalog.
    pub fn standard() -> ProtocolResult<Self> {
        let mut registry = Self::new();
        crate::packets::register_standard(&mut registry)?;
        Ok(registry)
    }

    /// Registers a factory under an explicit ID.
    pub fn register(
        &mut self,
        phase: Phase,
        direction: Direction,
        id: i32,
        factory: PacketFactory,
    ) -> ProtocolResult<()> {
        let index = usize::try_from(id)
            .ok()
            .filter(|&index| index < MAX_PACKET_ID)
            .ok_or(ProtocolError::IdOutOfRange {
                id,
                capacity: MAX_PACKET_ID,
            })?;
        let slot = &mut self.tables[phase.index()][direction.index()].slots[index];
        if slot.is_some() {
            return Err(ProtocolError::DuplicateRegistration {
                phase,
                direction,
                id,
            });
        }
        *slot = Some(factory);
        Ok(())
    }

    /// Registers `T` under the ID its default value reports.
    pub fn register_packet<T: Packet + Default>(
        &mut self,
        phase: Phase,
        direction: Direction,
    ) -> ProtocolResult<()> {
        let id = T::default().id();
        self.register(phase, direction, id, construct::<T>)
    }

    /// The table for one phase and direction.
    #[must_use]
    pub const fn table(&self, phase: Phase, direction: Direction) -> &PacketTable {
        &self.tables[phase.index()][direction.index()]
    }

    /// Resolves an ID to its factory.
    pub fn lookup(
        &self,
        phase: Phase,
        direction: Direction,
        id: i32,
    ) -> ProtocolResult<PacketFactory> {
        self.table(phase, direction)
            .get(id)
            .ok_or(ProtocolError::UnknownPacketId {
                id,
                phase,
                direction,
            })
    }

    /// Decodes a packet body. Bytes the decoder leaves unread are ignored.
    pub fn decode(
        &self,
        phase: Phase,
        direction: Direction,
        id: i32,
        body: &[u8],
    ) -> ProtocolResult<Box<dyn Packet>> {
        self.decode_counted(phase, direction, id, body)
            .map(|(packet, _)| packet)
    }

    /// Decodes a packet body and requires the decoder to consume all of it.
    pub fn decode_exact(
        &self,
        phase: Phase,
        direction: Direction,
        id: i32,
        body: &[u8],
    ) -> ProtocolResult<Box<dyn Packet>> {
        let (packet, remaining) = self.decode_counted(phase, direction, id, body)?;
        if remaining > 0 {
            return Err(ProtocolError::TrailingBytes { id, remaining });
        }
        Ok(packet)
    }

    /// Decodes a packet body and reports how many bytes were left unread.
    pub fn decode_counted(
        &self,
        phase: Phase,
        direction: Direction,
        id: i32,
        body: &[u8],
    ) -> ProtocolResult<(Box<dyn Packet>, usize)> {
        let factory = self.lookup(phase, direction, id)?;
        let mut packet = factory();
        let mut reader = ByteReader::new(body);
        packet.decode(&mut reader)?;
        Ok((packet, reader.remaining()))
    }

    /// Total number of registered packets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.iter().flatten().map(PacketTable::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hash of the registered `(phase, direction, id, type name)` set.
    ///
    /// Two registries with the same contents share a fingerprint regardless
    /// of registration order.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        for phase in Phase::ALL {
            for direction in Direction::ALL {
                let table = self.table(phase, direction);
                for id in table.ids() {
                    hasher.update(&[phase.index() as u8, direction.index() as u8]);
                    hasher.update(&id.to_le_bytes());
                    if let Some(factory) = table.get(id) {
                        let name = factory().name();
                        hasher.update(&(name.len() as u32).to_le_bytes());
                        hasher.update(name.as_bytes());
                    }
                }
            }
        }
        *hasher.finalize().as_bytes()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for phase in Phase::ALL {
            for direction in Direction::ALL {
                let table = self.table(phase, direction);
                if !table.is_empty() {
                    map.entry(&format_args!("{phase} {direction}"), table);
                }
            }
        }
        map.finish()
    }
}
