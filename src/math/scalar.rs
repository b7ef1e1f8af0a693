//! Scalar constants and helpers

pub const PI: f32 = std::f32::consts::PI;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
pub const THREE_HALF_PI: f32 = 3.0 * std::f32::consts::FRAC_PI_2;

pub const EPSILON: f32 = 0.00000000001;
pub const DEG2RAD: f32 = PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / PI;

#[inline]
pub fn recip(x: f32) -> f32 {
    1.0 / x
}

/// Clamp to `[0, 1]`
#[inline]
pub fn clamp01(x: f32) -> f32 {
    clampf(x, 0.0, 1.0)
}

/// Unlike [`f32::clamp`] this never panics, `min > max` just yields `max`.
#[inline]
pub fn clampf(x: f32, min: f32, max: f32) -> f32 {
    if x > max {
        max
    } else if x < min {
        min
    } else {
        x
    }
}

#[inline]
pub fn clamp(x: i32, min: i32, max: i32) -> i32 {
    if x > max {
        max
    } else if x < min {
        min
    } else {
        x
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a) * t + a
}

/// Hermite `t² (3 - 2t)`, expects `t` in `[0, 1]`
#[inline]
pub fn smooth_step(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
