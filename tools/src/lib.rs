//! Inspection and decoding tools for mcproto captures.
//!
//! A capture is a raw byte dump of one direction of a connection: frames
//! back to back, exactly as they crossed the wire.
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what crossed the wire.
//! - **Partial results** - A damaged capture still reports every frame before the damage.

use std::fmt::Write as _;
use std::io::Cursor;

use anyhow::{Context, Result};
use protocol::packets::{Handshake, LoginSuccess};
use protocol::{Direction, Packet, Phase, Registry};
use serde::Serialize;
use tracing::debug;
use wire::Limits;

/// One frame's position and size within a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
    pub index: usize,
    /// Byte offset of the length prefix.
    pub offset: usize,
    /// Payload length, excluding the prefix.
    pub length: usize,
    pub packet_id: Option<i32>,
}

/// Frame layout of a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub total_bytes: usize,
    pub frames: Vec<FrameSummary>,
    /// Bytes after the last complete frame.
    pub trailing_bytes: usize,
    /// Why the scan stopped early, if it did.
    pub error: Option<String>,
}

/// Splits a capture into frames without decoding bodies.
pub fn inspect_capture(bytes: &[u8], limits: &Limits) -> InspectReport {
    let mut cursor = Cursor::new(bytes);
    let mut frames = Vec::new();
    let mut error = None;
    let mut consumed = 0;

    while consumed < bytes.len() {
        match wire::read_frame(&mut cursor, limits) {
            Ok(payload) => {
                let packet_id = wire::split_packet_id(&payload).ok().map(|(id, _)| id);
                frames.push(FrameSummary {
                    index: frames.len(),
                    offset: consumed,
                    length: payload.len(),
                    packet_id,
                });
                consumed = cursor_position(&cursor);
            }
            Err(err) => {
                error = Some(err.to_string());
                break;
            }
        }
    }

    InspectReport {
        total_bytes: bytes.len(),
        frames,
        trailing_bytes: bytes.len() - consumed,
        error,
    }
}

fn cursor_position(cursor: &Cursor<&[u8]>) -> usize {
    usize::try_from(cursor.position()).unwrap_or(usize::MAX)
}

/// One decoded frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFrame {
    pub index: usize,
    pub phase: String,
    pub direction: String,
    pub packet_id: i32,
    pub packet: String,
    /// `Debug` rendering of the decoded packet.
    pub fields: String,
}

/// Options for [`decode_capture`].
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub phase: Phase,
    pub direction: Direction,
    pub limits: Limits,
    /// Advance the phase on Handshake and LoginSuccess packets.
    pub follow_phases: bool,
}

/// Decodes every frame of a capture with `registry`.
///
/// Stops at the first frame that fails; frames before it are kept in the
/// error context.
pub fn decode_capture(
    bytes: &[u8],
    registry: &Registry,
    options: &DecodeOptions,
) -> Result<Vec<DecodedFrame>> {
    let mut cursor = Cursor::new(bytes);
    let mut phase = options.phase;
    let mut decoded = Vec::new();

    while cursor_position(&cursor) < bytes.len() {
        let index = decoded.len();
        let payload = wire::read_frame(&mut cursor, &options.limits)
            .with_context(|| format!("read frame {index}"))?;
        let (id, body) = wire::split_packet_id(&payload)
            .with_context(|| format!("read packet id of frame {index}"))?;
        let packet = registry
            .decode(phase, options.direction, id, body)
            .with_context(|| format!("decode frame {index} ({phase} {})", options.direction))?;

        decoded.push(DecodedFrame {
            index,
            phase: phase.to_string(),
            direction: options.direction.to_string(),
            packet_id: id,
            packet: packet.name().to_string(),
            fields: format!("{packet:?}"),
        });

        if options.follow_phases {
            if let Some(next) = next_phase(phase, &*packet) {
                debug!(from = %phase, to = %next, frame = index, "following phase change");
                phase = next;
            }
        }
    }
    Ok(decoded)
}

/// Phase a packet moves the connection into, if any.
fn next_phase(current: Phase, packet: &dyn Packet) -> Option<Phase> {
    let next = if let Some(handshake) = packet.downcast_ref::<Handshake>() {
        handshake.next_phase()?
    } else if packet.is::<LoginSuccess>() {
        Phase::Play
    } else {
        return None;
    };
    current.can_transition_to(next).then_some(next)
}

/// Renders decoded frames one per line.
pub fn format_decode_pretty(frames: &[DecodedFrame]) -> String {
    let mut out = String::new();
    for frame in frames {
        let _ = writeln!(
            out,
            "#{:<4} {:<9} {:<11} 0x{:02X} {}",
            frame.index, frame.phase, frame.direction, frame.packet_id, frame.fields
        );
    }
    out
}

/// Hex rendering of a VarInt encoding, e.g. `ff ff ff ff 0f`.
pub fn varint_hex(value: i32) -> String {
    let mut writer = bytestream::ByteWriter::new();
    writer.write_varint(value);
    writer
        .finish()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
