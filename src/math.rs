//! 2D vector math shared by the rasterizer and the game world

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D vector, used both for pixel coordinates and world-space locations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn magnitude_sqrd(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_sqrd().sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            *self
        }
    }

    /// Shorten the vector to at most `max` length
    pub fn clamp_length(&self, max: f32) -> Self {
        let len = self.magnitude();
        if len > max && len > 0.0 {
            *self * (max / len)
        } else {
            *self
        }
    }

    /// Approximate equality check for floating point comparison
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_sqrd(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_sub_then_magnitude() {
        let d = Vec2::new(10.0, 10.0) - Vec2::new(7.0, 6.0);
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(d.magnitude(), 5.0);
    }

    #[test]
    fn test_clamp_length() {
        let v = Vec2::new(30.0, 40.0).clamp_length(5.0);
        assert!(v.approx_eq(&Vec2::new(3.0, 4.0), 1e-4));

        let short = Vec2::new(1.0, 0.0);
        assert_eq!(short.clamp_length(5.0), short);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }
}
