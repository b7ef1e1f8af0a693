//! 2D and homogeneous 4D vector types
//!
//! `Vector4` carries a `w` component so the same type can hold points (`w = 1`)
//! and directions (`w = 0`). The arithmetic only works on `x`, `y`, `z`:
//!
//! - `+` and `-` keep the `w` of the left operand
//! - `* f32` and unary `-` produce `w = 0`
//! - the in-place operators never touch `w`
//! - [`Vector4::normalise`] sets `w = 0`
//!
//! None of the operations validate their input. Normalising a zero vector
//! yields NaN components, exactly like the division it performs.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by [`equal_within_tolerance`] callers that have no better value.
pub const DEFAULT_TOLERANCE: f32 = 0.0001;

/// Operations shared by [`Vector2`] and [`Vector4`]
pub trait Vector: Copy + Sub<Output = Self> {
    fn dot(&self, other: &Self) -> f32;

    fn magnitude_sqr(&self) -> f32 {
        self.dot(self)
    }

    fn magnitude(&self) -> f32 {
        self.magnitude_sqr().sqrt()
    }
}

/// A 2D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Vector2 {
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub x: f32,
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scales the vector to unit length. A zero vector turns into NaN.
    pub fn normalise(&mut self) {
        let mag = self.magnitude();
        self.x /= mag;
        self.y /= mag;
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    pub fn magnitude(&self) -> f32 {
        Vector::magnitude(self)
    }

    pub fn magnitude_sqr(&self) -> f32 {
        Vector::magnitude_sqr(self)
    }

    pub fn dot(&self, other: &Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// The components as a flat array, ready for a uniform upload.
    pub fn as_slice(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32; 2] {
        bytemuck::cast_mut(self)
    }
}

impl Vector for Vector2 {
    fn dot(&self, other: &Self) -> f32 {
        Vector2::dot(self, other)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }
}

/// A homogeneous 3D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Vector4 {
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub x: f32,
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub y: f32,
    #[cfg_attr(test, dummy(faker = "-100.0..100.0"))]
    pub z: f32,
    #[cfg_attr(test, dummy(faker = "0.0..1.0"))]
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A position, `w = 1`
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// A direction, `w = 0`
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Scales `x`, `y`, `z` to unit length and clears `w`.
    /// A zero vector turns into NaN.
    pub fn normalise(&mut self) {
        let mag = self.magnitude();
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
        self.w = 0.0;
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    pub fn magnitude(&self) -> f32 {
        Vector::magnitude(self)
    }

    pub fn magnitude_sqr(&self) -> f32 {
        Vector::magnitude_sqr(self)
    }

    /// Dot product of the `x`, `y`, `z` parts
    pub fn dot(&self, other: &Vector4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product of the `x`, `y`, `z` parts, the result is a direction
    pub fn cross(&self, other: &Vector4) -> Vector4 {
        Vector4::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
            0.0,
        )
    }

    /// Negates `x`, `y`, `z`, leaving `w` alone
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// The components in `x, y, z, w` order, ready for a uniform upload.
    pub fn as_slice(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }
}

impl Vector for Vector4 {
    fn dot(&self, other: &Self) -> f32 {
        Vector4::dot(self, other)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

impl Add for Vector4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector4::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w)
    }
}

impl Sub for Vector4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector4::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vector4::new(self.x * s, self.y * s, self.z * s, 0.0)
    }
}

impl Neg for Vector4 {
    type Output = Self;
    fn neg(self) -> Self {
        Vector4::new(-self.x, -self.y, -self.z, 0.0)
    }
}

impl AddAssign for Vector4 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vector4 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

pub fn dot<V: Vector>(a: &V, b: &V) -> f32 {
    a.dot(b)
}

pub fn cross(a: &Vector4, b: &Vector4) -> Vector4 {
    a.cross(b)
}

/// `|a - b|²`, ignoring `w`
pub fn distance_squared<V: Vector>(a: &V, b: &V) -> f32 {
    (*a - *b).magnitude_sqr()
}

/// True when `a` and `b` are at most `tolerance` apart.
///
/// Compares squared distances, so no square root is taken.
pub fn equal_within_tolerance<V: Vector>(a: &V, b: &V, tolerance: f32) -> bool {
    distance_squared(a, b) <= tolerance * tolerance
}
