use bytestream::{ByteReader, ByteWriter};
use codec::{
    read_metadata, read_position, read_slot, write_metadata, write_position, write_slot,
    CodecError, ItemSlot, MetadataEntry, MetadataType, MetadataValue, Position, XZ_MAX, XZ_MIN,
    Y_MAX, Y_MIN,
};
use proptest::prelude::*;

fn every_tag() -> Vec<MetadataEntry> {
    vec![
        MetadataEntry::new(0, MetadataValue::Byte(0x21)),
        MetadataEntry::new(1, MetadataValue::VarInt(300)),
        MetadataEntry::new(2, MetadataValue::Float(0.5)),
        MetadataEntry::new(3, MetadataValue::String("Steve".to_string())),
        MetadataEntry::new(
            4,
            MetadataValue::Slot(ItemSlot::new(276, 1).with_extra(vec![0x0A, 0x00])),
        ),
        MetadataEntry::new(5, MetadataValue::Bool(true)),
        MetadataEntry::new(6, MetadataValue::Vector3F([0.0, -90.0, 45.5])),
        MetadataEntry::new(10, MetadataValue::Slot(ItemSlot::empty())),
    ]
}

#[test]
fn every_tag_roundtrips_in_order() {
    let entries = every_tag();
    let mut writer = ByteWriter::new();
    write_metadata(&mut writer, &entries).unwrap();
    let bytes = writer.finish();
    assert_eq!(*bytes.last().unwrap(), 0xFF);

    let mut reader = ByteReader::new(&bytes);
    let decoded = read_metadata(&mut reader).unwrap();
    assert_eq!(decoded, entries);
    assert!(reader.is_empty());

    let kinds: Vec<MetadataType> = decoded.iter().map(MetadataEntry::kind).collect();
    assert_eq!(
        kinds,
        vec![
            MetadataType::Byte,
            MetadataType::VarInt,
            MetadataType::Float,
            MetadataType::String,
            MetadataType::Slot,
            MetadataType::Bool,
            MetadataType::Vector3F,
            MetadataType::Slot,
        ]
    );
}

#[test]
fn metadata_stops_at_terminator() {
    let mut writer = ByteWriter::new();
    write_metadata(
        &mut writer,
        &[MetadataEntry::new(1, MetadataValue::VarInt(-1))],
    )
    .unwrap();
    writer.write_bytes(&[0xDE, 0xAD]);
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    read_metadata(&mut reader).unwrap();
    assert_eq!(reader.rest(), &[0xDE, 0xAD]);
}

#[test]
fn unknown_tag_after_valid_entries_fails() {
    let mut bytes = Vec::new();
    let mut writer = ByteWriter::new();
    writer.write_u8(0);
    writer.write_u8(MetadataType::Byte.raw());
    writer.write_i8(1);
    writer.write_u8(1);
    writer.write_u8(42);
    writer.finish_into(&mut bytes);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        read_metadata(&mut reader).unwrap_err(),
        CodecError::UnknownMetadataType { index: 1, tag: 42 }
    );
}

#[test]
fn empty_slot_encodes_as_minus_one() {
    let mut writer = ByteWriter::new();
    write_slot(&mut writer, &ItemSlot::empty()).unwrap();
    assert_eq!(writer.finish(), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
}

#[test]
fn slot_without_extra_encodes_minus_one_length() {
    let mut writer = ByteWriter::new();
    write_slot(&mut writer, &ItemSlot::new(5, 3)).unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0x05, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);

    let mut reader = ByteReader::new(&bytes);
    let slot = read_slot(&mut reader).unwrap();
    assert_eq!(slot.item_id, 5);
    assert_eq!(slot.count, 3);
    assert_eq!(slot.extra, None);
}

#[test]
fn position_boundaries() {
    for pos in [
        Position::new(XZ_MAX, Y_MAX, XZ_MAX),
        Position::new(XZ_MIN, Y_MIN, XZ_MIN),
        Position::new(-1, 0, 1),
    ] {
        let mut writer = ByteWriter::new();
        write_position(&mut writer, pos);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 8);
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(read_position(&mut reader).unwrap(), pos);
    }
}

proptest! {
    #[test]
    fn position_roundtrip_in_range(
        x in XZ_MIN..=XZ_MAX,
        y in Y_MIN..=Y_MAX,
        z in XZ_MIN..=XZ_MAX,
    ) {
        let pos = Position::new(x, y, z);
        let mut writer = ByteWriter::new();
        write_position(&mut writer, pos);
        let bytes = writer.finish();
        let mut reader = ByteReader::new(&bytes);
        prop_assert_eq!(read_position(&mut reader).unwrap(), pos);
    }

    #[test]
    fn metadata_varint_and_string_roundtrip(
        values in prop::collection::vec((0u8..0xFF, any::<i32>(), ".{0,16}"), 0..8),
    ) {
        let entries: Vec<MetadataEntry> = values
            .into_iter()
            .flat_map(|(index, number, text)| {
                [
                    MetadataEntry::new(index, MetadataValue::VarInt(number)),
                    MetadataEntry::new(index, MetadataValue::String(text)),
                ]
            })
            .collect();
        let mut writer = ByteWriter::new();
        write_metadata(&mut writer, &entries).unwrap();
        let bytes = writer.finish();
        let mut reader = ByteReader::new(&bytes);
        prop_assert_eq!(read_metadata(&mut reader).unwrap(), entries);
        prop_assert!(reader.is_empty());
    }
}
