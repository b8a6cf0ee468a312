#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Input bytes pick the next read.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        let progressed = match op {
            0 => reader.read_varint().is_ok(),
            1 => reader.read_varlong().is_ok(),
            2 => reader.read_string().is_ok(),
            3 => reader.read_uuid().is_ok(),
            4 => codec::read_position(&mut reader).is_ok(),
            5 => codec::read_slot(&mut reader).is_ok(),
            _ => codec::read_metadata(&mut reader).is_ok(),
        };
        if !progressed && reader.remaining() == 0 {
            break;
        }
    }
});
