//! The capability every packet type provides.

use std::any::Any;
use std::fmt;

use bytestream::{ByteReader, ByteWriter};
use codec::CodecResult;

/// Upcast to [`Any`] so boxed packets can be downcast to their concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A packet: a numeric ID plus a body layout.
///
/// Decoding starts from a default-constructed value and fills it in, so
/// registries can hold plain constructor functions.
pub trait Packet: AsAny + fmt::Debug + Send {
    /// The packet ID within its phase and direction.
    fn id(&self) -> i32;

    /// Writes the body, without ID or length prefix.
    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()>;

    /// Reads the body. Bytes after the body are left in `reader`.
    fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()>;

    /// Short type name, for logs and tooling.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

impl dyn Packet {
    /// Returns `true` if the packet is a `T`.
    pub fn is<T: Packet>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    /// Returns the packet as a `T` if it is one.
    pub fn downcast_ref<T: Packet>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }
}

/// Encodes a packet body into a fresh buffer.
pub fn encode_body(packet: &dyn Packet) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new();
    packet.encode(&mut writer)?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        value: i32,
    }

    impl Packet for Probe {
        fn id(&self) -> i32 {
            0x2A
        }

        fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()> {
            writer.write_varint(self.value);
            Ok(())
        }

        fn decode(&mut self, reader: &mut ByteReader<'_>) -> CodecResult<()> {
            self.value = reader.read_varint()?;
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct Other;

    impl Packet for Other {
        fn id(&self) -> i32 {
            0
        }

        fn encode(&self, _writer: &mut ByteWriter) -> CodecResult<()> {
            Ok(())
        }

        fn decode(&mut self, _reader: &mut ByteReader<'_>) -> CodecResult<()> {
            Ok(())
        }
    }

    #[test]
    fn downcast_to_concrete_type() {
        let packet: Box<dyn Packet> = Box::new(Probe { value: 9 });
        assert!(packet.is::<Probe>());
        assert!(!packet.is::<Other>());
        assert_eq!(packet.downcast_ref::<Probe>(), Some(&Probe { value: 9 }));
        assert!(packet.downcast_ref::<Other>().is_none());
    }

    #[test]
    fn name_is_short_type_name() {
        let packet: Box<dyn Packet> = Box::new(Probe::default());
        assert_eq!(packet.name(), "Probe");
    }

    #[test]
    fn encode_body_has_no_prefix() {
        let body = encode_body(&Probe { value: 300 }).unwrap();
        assert_eq!(body, vec![0xAC, 0x02]);
    }
}
