use serde::{Deserialize, Serialize};

/// 3D vector for particle transforms
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Same value on every axis (uniform scale)
    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Closed interval `[min, max]` used for spawn and scale draws
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Finite, ordered, and with a width that fits in an f32
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && (self.max - self.min).is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assign_moves_every_axis() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::splat(0.5);
        assert_eq!(v, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn range_validity() {
        assert!(Range::new(-5.0, 5.0).is_valid());
        assert!(Range::new(1.0, 1.0).is_valid());
        assert!(!Range::new(2.0, 1.0).is_valid());
        assert!(!Range::new(f32::NAN, 1.0).is_valid());
        assert!(!Range::new(-3e38, 3e38).is_valid());
        assert!(Range::new(-5.0, 5.0).contains(5.0));
        assert!(!Range::new(-5.0, 5.0).contains(5.01));
    }
}
