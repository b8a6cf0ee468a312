//! Inventory item slots.

use bytestream::{ByteReader, ByteWriter, StreamError};

use crate::error::CodecResult;

/// Extra-data length prefix that marks "no extra data" when writing.
const ABSENT_EXTRA_LEN: i32 = -1;

/// Legacy extra-data length that also means "no extra data".
const LEGACY_ABSENT_EXTRA_LEN: i32 = 0xFF;

/// An item slot.
///
/// A negative `item_id` is an empty slot: nothing follows the ID on the
/// wire and `count`/`extra` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemSlot {
    pub item_id: i32,
    pub count: i8,
    pub extra: Option<Vec<u8>>,
}

impl ItemSlot {
    /// An empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item_id: -1,
            count: 0,
            extra: None,
        }
    }

    /// A filled slot without extra data.
    #[must_use]
    pub const fn new(item_id: i32, count: i8) -> Self {
        Self {
            item_id,
            count,
            extra: None,
        }
    }

    /// Attaches extra data.
    #[must_use]
    pub fn with_extra(mut self, extra: Vec<u8>) -> Self {
        self.extra = Some(extra);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_id < 0
    }
}

/// Reads an item slot.
///
/// An extra-data length of `-1` is absent and consumes nothing more. A
/// length of `0xFF` consumes its 255 bytes and is also stored as absent.
pub fn read_slot(reader: &mut ByteReader<'_>) -> CodecResult<ItemSlot> {
    let item_id = reader.read_varint()?;
    if item_id < 0 {
        return Ok(ItemSlot {
            item_id,
            count: 0,
            extra: None,
        });
    }
    let count = reader.read_i8()?;
    let extra = match reader.read_varint()? {
        ABSENT_EXTRA_LEN => None,
        LEGACY_ABSENT_EXTRA_LEN => {
            reader.read_bytes(LEGACY_ABSENT_EXTRA_LEN as usize)?;
            None
        }
        length => {
            let len =
                usize::try_from(length).map_err(|_| StreamError::NegativeLength { length })?;
            Some(reader.read_bytes(len)?.to_vec())
        }
    };
    Ok(ItemSlot {
        item_id,
        count,
        extra,
    })
}

/// Writes an item slot.
pub fn write_slot(writer: &mut ByteWriter, slot: &ItemSlot) -> CodecResult<()> {
    writer.write_varint(slot.item_id);
    if slot.is_empty() {
        return Ok(());
    }
    writer.write_i8(slot.count);
    match &slot.extra {
        None => writer.write_varint(ABSENT_EXTRA_LEN),
        Some(extra) => writer.write_byte_array(extra)?,
    }
    Ok(())
}
