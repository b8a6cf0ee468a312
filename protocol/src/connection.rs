//! A session bound to a blocking byte stream.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use tracing::debug;
use wire::{FrameReader, FrameWriter};

use crate::error::ProtocolResult;
use crate::packet::{encode_body, Packet};
use crate::phase::Phase;
use crate::session::Session;

/// A byte stream plus the session that interprets it.
///
/// Reads and writes each need `&mut self`, so one `Connection` serializes
/// both paths. Use [`Connection::try_split`] for a dedicated reader thread
/// and writer thread.
#[derive(Debug)]
pub struct Connection<S> {
    stream: S,
    session: Session,
}

impl<S> Connection<S> {
    pub fn new(stream: S, session: Session) -> Self {
        Self { stream, session }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Advances the session to `next`.
    pub fn set_phase(&mut self, next: Phase) -> ProtocolResult<()> {
        self.session.set_phase(next)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    pub fn into_parts(self) -> (S, Session) {
        (self.stream, self.session)
    }
}

impl<S: Read + Write> Connection<S> {
    /// Blocks until one frame arrives and decodes it in the current phase.
    pub fn read_message(&mut self) -> ProtocolResult<Box<dyn Packet>> {
        self.session.read_message(&mut self.stream)
    }

    /// Encodes `packet` and writes it as one frame.
    pub fn write_message(&mut self, packet: &dyn Packet) -> ProtocolResult<()> {
        self.session.write_message(&mut self.stream, packet)
    }
}

impl Connection<TcpStream> {
    pub fn peer_addr(&self) -> ProtocolResult<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    /// Closes both directions of the socket.
    pub fn shutdown(&self) -> ProtocolResult<()> {
        debug!(phase = %self.session.phase(), "closing connection");
        self.stream.shutdown(Shutdown::Both)?;
        Ok(())
    }

    /// Splits into a reading half that owns the session and a writing half.
    pub fn try_split(self) -> ProtocolResult<(Inbound<TcpStream>, Outbound<TcpStream>)> {
        let writer = self.stream.try_clone()?;
        let limits = self.session.config().limits.clone();
        let inbound = Inbound {
            reader: FrameReader::new(self.stream, limits.clone()),
            session: self.session,
        };
        let outbound = Outbound {
            writer: FrameWriter::new(writer, limits),
        };
        Ok((inbound, outbound))
    }
}

/// Reading half of a split connection. Phase changes happen here.
#[derive(Debug)]
pub struct Inbound<S> {
    reader: FrameReader<S>,
    session: Session,
}

impl<S: Read> Inbound<S> {
    /// Blocks until one frame arrives and decodes it in the current phase.
    pub fn read_message(&mut self) -> ProtocolResult<Box<dyn Packet>> {
        let payload = self.reader.read_frame()?;
        self.session.decode_payload(&payload)
    }
}

impl<S> Inbound<S> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn set_phase(&mut self, next: Phase) -> ProtocolResult<()> {
        self.session.set_phase(next)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn get_ref(&self) -> &S {
        self.reader.get_ref()
    }
}

/// Writing half of a split connection.
#[derive(Debug)]
pub struct Outbound<S> {
    writer: FrameWriter<S>,
}

impl<S: Write> Outbound<S> {
    /// Encodes `packet` and writes it as one frame.
    pub fn write_message(&mut self, packet: &dyn Packet) -> ProtocolResult<()> {
        let body = encode_body(packet)?;
        self.writer.write_frame(packet.id(), &body)?;
        Ok(())
    }
}

impl<S> Outbound<S> {
    pub const fn get_ref(&self) -> &S {
        self.writer.get_ref()
    }

    /// Number of frames written through this half.
    #[must_use]
    pub const fn frames_written(&self) -> u64 {
        self.writer.frames_written()
    }
}
