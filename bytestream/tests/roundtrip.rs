use bytestream::{varint_len, ByteReader, ByteWriter, StreamError};

fn encode_varint(value: i32) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_varint(value);
    writer.finish()
}

fn encode_varlong(value: i64) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_varlong(value);
    writer.finish()
}

#[test]
fn varint_boundaries_roundtrip_with_group_counts() {
    let cases = [
        (0, 1),
        (127, 1),
        (128, 2),
        (i32::MAX, 5),
        (-1, 5),
        (i32::MIN, 5),
    ];
    for (value, groups) in cases {
        let bytes = encode_varint(value);
        assert_eq!(bytes.len(), groups, "group count for {value}");
        assert_eq!(varint_len(value), groups);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_varint().unwrap(), value);
        assert!(reader.is_empty());
    }
}

#[test]
fn varlong_boundaries_roundtrip_with_group_counts() {
    let cases = [
        (0i64, 1usize),
        (127, 1),
        (128, 2),
        (i64::from(i32::MAX), 5),
        (i64::MAX, 9),
        (-1, 10),
        (i64::MIN, 10),
    ];
    for (value, groups) in cases {
        let bytes = encode_varlong(value);
        assert_eq!(bytes.len(), groups, "group count for {value}");

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_varlong().unwrap(), value);
        assert!(reader.is_empty());
    }
}

#[test]
fn varint_continuation_past_five_groups_is_malformed() {
    let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x00];
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        reader.read_varint().unwrap_err(),
        StreamError::VarIntTooLong { max_bytes: 5 }
    );
}

#[test]
fn varint_accepts_non_minimal_encoding() {
    // Zero padded into two groups is still a well-formed VarInt.
    let mut reader = ByteReader::new(&[0x80, 0x00]);
    assert_eq!(reader.read_varint().unwrap(), 0);
}

#[test]
fn consecutive_varints_consume_exactly_their_bytes() {
    let mut writer = ByteWriter::new();
    for value in [1, -1, 300, i32::MIN] {
        writer.write_varint(value);
    }
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 1 + 5 + 2 + 5);

    let mut reader = ByteReader::new(&bytes);
    for value in [1, -1, 300, i32::MIN] {
        assert_eq!(reader.read_varint().unwrap(), value);
    }
    assert!(reader.is_empty());
}

#[test]
fn string_then_trailing_primitives() {
    let mut writer = ByteWriter::new();
    writer.write_string("localhost").unwrap();
    writer.write_u16(25565);
    writer.write_varint(2);
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "localhost");
    assert_eq!(reader.read_u16().unwrap(), 25565);
    assert_eq!(reader.read_varint().unwrap(), 2);
}

#[test]
fn string_truncated_body_is_eof() {
    let mut reader = ByteReader::new(&[0x05, b'a', b'b']);
    let err = reader.read_string().unwrap_err();
    assert_eq!(
        err,
        StreamError::UnexpectedEof {
            requested: 5,
            available: 2
        }
    );
}
