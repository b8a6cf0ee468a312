//! Single-byte rotation angle.

/// A rotation in steps of 1/256 of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Angle(pub u8);

impl Angle {
    /// Converts degrees to the nearest step, wrapping into one turn.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        let steps = (degrees.rem_euclid(360.0) * 256.0 / 360.0).round();
        Self((steps as u32 % 256) as u8)
    }

    /// Returns the angle in degrees within `[0, 360)`.
    #[must_use]
    pub fn to_degrees(self) -> f32 {
        f32::from(self.0) * 360.0 / 256.0
    }
}
