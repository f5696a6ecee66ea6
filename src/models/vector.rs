//! Three-axis offset and rotation vectors.
//!
//! Offsets (millimetres) and rotations (degrees) share a shape and compose
//! by componentwise addition, but the two kinds never mix.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Common shape of [`Offset`] and [`Rotation`].
pub trait Axes: Copy {
    /// Builds a vector from its X/Y/Z components.
    fn from_axes(x: f64, y: f64, z: f64) -> Self;

    /// Returns the X/Y/Z components.
    fn axes(&self) -> (f64, f64, f64);
}

/// Adds two vectors of the same kind componentwise.
#[must_use]
pub fn combine<T: Axes>(a: T, b: T) -> T {
    let (ax, ay, az) = a.axes();
    let (bx, by, bz) = b.axes();
    T::from_axes(ax + bx, ay + by, az + bz)
}

/// Positional offset along X/Y/Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

/// Rotation angles around X/Y/Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    /// Rotation around the X axis
    pub x: f64,
    /// Rotation around the Y axis
    pub y: f64,
    /// Rotation around the Z axis
    pub z: f64,
}

impl Offset {
    /// Creates a new offset.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Rotation {
    /// Creates a new rotation.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotation leaning around X only (column tilt).
    #[must_use]
    pub const fn tilt_x(angle: f64) -> Self {
        Self::new(angle, 0.0, 0.0)
    }

    /// Rotation leaning around Y only (row curvature).
    #[must_use]
    pub const fn tilt_y(angle: f64) -> Self {
        Self::new(0.0, angle, 0.0)
    }
}

impl Axes for Offset {
    fn from_axes(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }

    fn axes(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Axes for Rotation {
    fn from_axes(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }

    fn axes(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        combine(self, rhs)
    }
}

impl Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        combine(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_offsets() {
        let a = Offset::new(1.0, -2.0, 3.5);
        let b = Offset::new(0.5, 2.0, -1.5);
        assert_eq!(combine(a, b), Offset::new(1.5, 0.0, 2.0));
        assert_eq!(a + b, combine(a, b));
    }

    #[test]
    fn test_combine_rotations() {
        let a = Rotation::tilt_x(10.0);
        let b = Rotation::tilt_y(-4.0);
        assert_eq!(combine(a, b), Rotation::new(10.0, -4.0, 0.0));
    }

    #[test]
    fn test_combine_is_commutative_and_associative() {
        // Dyadic fractions keep the float sums exact
        let a = Offset::new(0.25, -7.5, 12.0);
        let b = Offset::new(3.0, 0.125, -2.5);
        let c = Offset::new(-1.75, 4.0, 0.5);

        assert_eq!(combine(a, b), combine(b, a));
        assert_eq!(combine(combine(a, b), c), combine(a, combine(b, c)));

        let r1 = Rotation::new(15.0, 0.5, -3.0);
        let r2 = Rotation::new(-7.25, 2.0, 1.0);
        let r3 = Rotation::new(0.0, -0.75, 8.0);
        assert_eq!(combine(combine(r1, r2), r3), combine(r1, combine(r2, r3)));
    }

    #[test]
    fn test_zero_is_identity() {
        let a = Rotation::new(1.0, 2.0, 3.0);
        assert_eq!(combine(a, Rotation::default()), a);
        assert_eq!(Offset::default() + Offset::new(4.0, 5.0, 6.0), Offset::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_deserialize_partial_vector() {
        let offset: Offset = serde_yml::from_str("z: -2.5").unwrap();
        assert_eq!(offset, Offset::new(0.0, 0.0, -2.5));
    }
}
