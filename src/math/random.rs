//! Uniform random scalars and vectors
//!
//! All functions take the generator explicitly so callers can seed it.

use super::vec::{Vector2, Vector4};
use rand::Rng;

/// A value in `[min, max]`, `min` when the range is empty
pub fn rand_f32<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    let unit: f32 = rng.random_range(0.0..=1.0);
    min + unit * range
}

/// Each component drawn independently between the matching components of `min` and `max`
pub fn rand_vector2<R: Rng + ?Sized>(rng: &mut R, min: Vector2, max: Vector2) -> Vector2 {
    Vector2::new(rand_f32(rng, min.x, max.x), rand_f32(rng, min.y, max.y))
}

/// Like [`rand_vector2`], `w` included
pub fn rand_vector4<R: Rng + ?Sized>(rng: &mut R, min: Vector4, max: Vector4) -> Vector4 {
    Vector4::new(
        rand_f32(rng, min.x, max.x),
        rand_f32(rng, min.y, max.y),
        rand_f32(rng, min.z, max.z),
        rand_f32(rng, min.w, max.w),
    )
}
