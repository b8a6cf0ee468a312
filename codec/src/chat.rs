//! Length-capped chat strings.

use std::fmt;

use bytestream::{ByteReader, ByteWriter, StreamError};

use crate::error::{CodecError, CodecResult};

/// Maximum encoded length of a chat string in bytes.
pub const MAX_CHAT_LEN: usize = 32_767;

/// A string whose UTF-8 encoding may not exceed [`MAX_CHAT_LEN`] bytes.
///
/// Construction is unchecked; the ceiling is enforced when the value is
/// written or read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Chat(String);

impl Chat {
    /// Wraps a string as chat text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if the encoded text fits the ceiling.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.0.len() <= MAX_CHAT_LEN
    }
}

impl From<&str> for Chat {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Chat {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads a chat string, rejecting prefixes above the ceiling before
/// touching the body.
pub fn read_chat(reader: &mut ByteReader<'_>) -> CodecResult<Chat> {
    let length = reader.read_length()?;
    if length > MAX_CHAT_LEN {
        return Err(CodecError::StringTooLong {
            length,
            max: MAX_CHAT_LEN,
        });
    }
    let bytes = reader.read_bytes(length)?;
    let text = std::str::from_utf8(bytes).map_err(|_| StreamError::InvalidUtf8)?;
    Ok(Chat(text.to_owned()))
}

/// Writes a chat string.
pub fn write_chat(writer: &mut ByteWriter, chat: &Chat) -> CodecResult<()> {
    if !chat.fits() {
        return Err(CodecError::StringTooLong {
            length: chat.0.len(),
            max: MAX_CHAT_LEN,
        });
    }
    writer.write_string(&chat.0)?;
    Ok(())
}
