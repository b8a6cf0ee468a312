//! Entity metadata: indexed, type-tagged values terminated by `0xFF`.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult};
use crate::slot::{read_slot, write_slot, ItemSlot};

/// Index byte that terminates a metadata sequence.
pub const METADATA_END: u8 = 0xFF;

/// Metadata type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MetadataType {
    Byte = 0,
    VarInt = 1,
    Float = 2,
    String = 3,
    Slot = 4,
    Bool = 5,
    Vector3F = 6,
}

impl MetadataType {
    /// Parses a type tag from a raw byte.
    pub const fn parse(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Byte),
            1 => Some(Self::VarInt),
            2 => Some(Self::Float),
            3 => Some(Self::String),
            4 => Some(Self::Slot),
            5 => Some(Self::Bool),
            6 => Some(Self::Vector3F),
            _ => None,
        }
    }

    /// Returns the raw tag byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// A metadata value. The variant determines the type tag on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Byte(i8),
    VarInt(i32),
    Float(f32),
    String(String),
    Slot(ItemSlot),
    Bool(bool),
    /// Three floats in `x, y, z` order.
    Vector3F([f32; 3]),
}

impl MetadataValue {
    /// Returns the type tag for this value.
    #[must_use]
    pub const fn kind(&self) -> MetadataType {
        match self {
            Self::Byte(_) => MetadataType::Byte,
            Self::VarInt(_) => MetadataType::VarInt,
            Self::Float(_) => MetadataType::Float,
            Self::String(_) => MetadataType::String,
            Self::Slot(_) => MetadataType::Slot,
            Self::Bool(_) => MetadataType::Bool,
            Self::Vector3F(_) => MetadataType::Vector3F,
        }
    }
}

/// One metadata entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub index: u8,
    pub value: MetadataValue,
}

impl MetadataEntry {
    #[must_use]
    pub const fn new(index: u8, value: MetadataValue) -> Self {
        Self { index, value }
    }

    /// Builds an entry whose value must match a declared type.
    ///
    /// Used where the type comes from a separate source, such as a
    /// per-entity attribute table.
    pub fn typed(index: u8, declared: MetadataType, value: MetadataValue) -> CodecResult<Self> {
        let found = value.kind();
        if found != declared {
            return Err(CodecError::MetadataTypeMismatch {
                index,
                expected: declared,
                found,
            });
        }
        Ok(Self { index, value })
    }

    /// Returns the type tag written for this entry.
    #[must_use]
    pub const fn kind(&self) -> MetadataType {
        self.value.kind()
    }
}

/// Reads a metadata sequence up to and including its terminator.
///
/// An unknown type tag aborts the whole sequence.
pub fn read_metadata(reader: &mut ByteReader<'_>) -> CodecResult<Vec<MetadataEntry>> {
    let mut entries = Vec::new();
    loop {
        let index = reader.read_u8()?;
        if index == METADATA_END {
            return Ok(entries);
        }
        let tag = reader.read_u8()?;
        let kind = MetadataType::parse(tag).ok_or(CodecError::UnknownMetadataType { index, tag })?;
        let value = read_value(reader, kind)?;
        entries.push(MetadataEntry { index, value });
    }
}

fn read_value(reader: &mut ByteReader<'_>, kind: MetadataType) -> CodecResult<MetadataValue> {
    let value = match kind {
        MetadataType::Byte => MetadataValue::Byte(reader.read_i8()?),
        MetadataType::VarInt => MetadataValue::VarInt(reader.read_varint()?),
        MetadataType::Float => MetadataValue::Float(reader.read_f32()?),
        MetadataType::String => MetadataValue::String(reader.read_string()?),
        MetadataType::Slot => MetadataValue::Slot(read_slot(reader)?),
        MetadataType::Bool => MetadataValue::Bool(reader.read_bool()?),
        MetadataType::Vector3F => {
            let x = reader.read_f32()?;
            let y = reader.read_f32()?;
            let z = reader.read_f32()?;
            MetadataValue::Vector3F([x, y, z])
        }
    };
    Ok(value)
}

/// Writes a metadata sequence followed by its terminator.
pub fn write_metadata(writer: &mut ByteWriter, entries: &[MetadataEntry]) -> CodecResult<()> {
    for entry in entries {
        if entry.index == METADATA_END {
            return Err(CodecError::ReservedMetadataIndex);
        }
        writer.write_u8(entry.index);
        writer.write_u8(entry.kind().raw());
        match &entry.value {
            MetadataValue::Byte(v) => writer.write_i8(*v),
            MetadataValue::VarInt(v) => writer.write_varint(*v),
            MetadataValue::Float(v) => writer.write_f32(*v),
            MetadataValue::String(v) => writer.write_string(v)?,
            MetadataValue::Slot(v) => write_slot(writer, v)?,
            MetadataValue::Bool(v) => writer.write_bool(*v),
            MetadataValue::Vector3F([x, y, z]) => {
                writer.write_f32(*x);
                writer.write_f32(*y);
                writer.write_f32(*z);
            }
        }
    }
    writer.write_u8(METADATA_END);
    Ok(())
}
