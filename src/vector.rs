//! The `Vector2` value type.
//!
//! Every mutator works in place on `self`. The pure counterparts that hand
//! back a fresh vector live in [`crate::library`].

use std::ops;

/// A point or displacement in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    pub fn from_array(xy: [f64; 2]) -> Vector2 {
        Vector2 { x: xy[0], y: xy[1] }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Returns an independent vector with the same coordinates.
    pub fn copy(&self) -> Vector2 {
        Vector2 { x: self.x, y: self.y }
    }

    pub fn add(&mut self, v: &Vector2) {
        self.x += v.x;
        self.y += v.y;
    }

    pub fn sub(&mut self, v: &Vector2) {
        self.x -= v.x;
        self.y -= v.y;
    }

    pub fn mult(&mut self, n: f64) {
        self.x *= n;
        self.y *= n;
    }

    /// Divides both components by `n`. Dividing by zero is not trapped and
    /// leaves infinite or NaN components behind.
    pub fn div(&mut self, n: f64) {
        self.x /= n;
        self.y /= n;
    }

    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    pub fn dist(&self, v: &Vector2) -> f64 {
        let mut vdist = self.copy();
        vdist.sub(v);
        vdist.mag()
    }

    /// Scales to unit length. The zero vector is left as it is.
    pub fn normalize(&mut self) {
        let len = self.mag();
        if len != 0.0 {
            self.div(len);
        }
    }

    /// Shrinks the vector to `max` if it is longer than that.
    pub fn limit(&mut self, max: f64) {
        if self.mag_sq() > max * max {
            self.set_mag(max);
        }
    }

    pub fn set_mag(&mut self, magnitude: f64) {
        self.normalize();
        self.mult(magnitude);
    }

    pub fn dot(&self, v: &Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Scalar cross product. Positive when `v` lies counter-clockwise of
    /// `self`.
    pub fn cross(&self, v: &Vector2) -> f64 {
        self.x * v.y - self.y * v.x
    }

    /// Angle from the positive x-axis in radians.
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotates `self` by `angle` radians around `base`, going through the
    /// polar form of the offset from `base`.
    pub fn rotate(&mut self, base: &Vector2, angle: f64) {
        let mut direction = self.copy();
        direction.sub(base);
        let new_heading = direction.heading() + angle;
        let magnitude = direction.mag();
        self.x = base.x + new_heading.cos() * magnitude;
        self.y = base.y + new_heading.sin() * magnitude;
    }

    /// Same rotation as [`Vector2::rotate`], computed with the 2x2 rotation
    /// matrix. Results agree up to rounding.
    pub fn rotate_matrix(&mut self, base: &Vector2, angle: f64) {
        let mut direction = self.copy();
        direction.sub(base);
        let (sin, cos) = angle.sin_cos();
        let x = direction.x * cos - direction.y * sin;
        let y = direction.x * sin + direction.y * cos;
        self.x = x + base.x;
        self.y = y + base.y;
    }

    /// Unsigned angle in `[0, π]` between `self` and `v`.
    pub fn angle_between(&self, v: &Vector2) -> f64 {
        let dotmagmag = self.dot(v) / (self.mag() * v.mag());
        dotmagmag.clamp(-1.0, 1.0).acos()
    }

    /// `self` turned a quarter turn counter-clockwise.
    pub fn perp(&self) -> Vector2 {
        Vector2 { x: -self.y, y: self.x }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(xy: [f64; 2]) -> Vector2 {
        Vector2::from_array(xy)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> [f64; 2] {
        v.to_array()
    }
}

impl ops::Add for Vector2 {
    type Output = Vector2;

    fn add(mut self, rhs: Vector2) -> Vector2 {
        Vector2::add(&mut self, &rhs);
        self
    }
}

impl ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        Vector2::add(self, &rhs);
    }
}

impl ops::Sub for Vector2 {
    type Output = Vector2;

    fn sub(mut self, rhs: Vector2) -> Vector2 {
        Vector2::sub(&mut self, &rhs);
        self
    }
}

impl ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        Vector2::sub(self, &rhs);
    }
}

impl ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(mut self, n: f64) -> Vector2 {
        self.mult(n);
        self
    }
}

impl ops::MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, n: f64) {
        self.mult(n);
    }
}

impl ops::Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(mut self, n: f64) -> Vector2 {
        Vector2::div(&mut self, n);
        self
    }
}

impl ops::DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, n: f64) {
        Vector2::div(self, n);
    }
}

impl ops::Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2 { x: -self.x, y: -self.y }
    }
}
