//! Configurable limits for bounded frame reads.

/// Frame transport limits.
///
/// A declared frame length above `max_frame_len` is rejected before any
/// buffer is allocated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum frame payload length in bytes.
    pub max_frame_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Largest length a 3-byte VarInt can express.
            max_frame_len: 2_097_151,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_frame_len: 4096,
        }
    }

    /// Creates limits with no restrictions beyond what the length prefix can express.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_frame_len: usize::MAX,
        }
    }

    pub(crate) fn check(&self, length: usize) -> crate::WireResult<()> {
        if length > self.max_frame_len {
            return Err(crate::WireError::FrameTooLarge {
                length,
                limit: self.max_frame_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fits_three_byte_varint() {
        assert_eq!(Limits::default().max_frame_len, (1 << 21) - 1);
    }

    #[test]
    fn testing_limits_smaller() {
        assert!(Limits::for_testing().max_frame_len < Limits::default().max_frame_len);
    }

    #[test]
    fn unlimited_limits() {
        assert_eq!(Limits::unlimited().max_frame_len, usize::MAX);
    }

    #[test]
    fn check_boundary() {
        let limits = Limits::for_testing();
        assert!(limits.check(4096).is_ok());
        assert!(matches!(
            limits.check(4097),
            Err(crate::WireError::FrameTooLarge {
                length: 4097,
                limit: 4096
            })
        ));
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_frame_len, 4096);
    }
}
