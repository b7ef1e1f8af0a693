//! 4x4 matrix for frames, views and projections
//!
//! The matrix is stored as four row vectors. When it describes an object
//! frame the rows are, in order, right, up, forward and position:
//!
//! ```text
//! [ _11 _12 _13 _14 ]   row 0   right
//! [ _21 _22 _23 _24 ]   row 1   up
//! [ _31 _32 _33 _34 ]   row 2   forward
//! [ _41 _42 _43 _44 ]   row 3   position / translation
//! ```
//!
//! The frame, view and projection builders are laid out for row vectors
//! (`v * M`, translation in row 3). `M * v` is also available and multiplies
//! rows with the vector, which is the same as `v * M.transpose()`.
//!
//! The builders overwrite the whole matrix. `rotate_x` on a matrix holding a
//! translation discards the translation; combine with `*` instead.

use super::vec::{Vector2, Vector4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Mul};

/// Row-major 4x4 matrix
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub rows: [Vector4; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4x4 {
    /// Create a new matrix with explicit values (row-major order)
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self {
            rows: [
                Vector4::new(m11, m12, m13, m14),
                Vector4::new(m21, m22, m23, m24),
                Vector4::new(m31, m32, m33, m34),
                Vector4::new(m41, m42, m43, m44),
            ],
        }
    }

    pub const fn from_rows(rows: [Vector4; 4]) -> Self {
        Self { rows }
    }

    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    pub const fn zero() -> Self {
        Self {
            rows: [Vector4::ZERO; 4],
        }
    }

    pub fn row(&self, index: usize) -> Vector4 {
        self.rows[index]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.rows[index]
    }

    pub fn set_row(&mut self, index: usize, row: Vector4) {
        self.rows[index] = row;
    }

    pub fn right(&self) -> Vector4 {
        self.rows[0]
    }

    pub fn up(&self) -> Vector4 {
        self.rows[1]
    }

    pub fn forward(&self) -> Vector4 {
        self.rows[2]
    }

    pub fn position(&self) -> Vector4 {
        self.rows[3]
    }

    pub fn set_right(&mut self, right: Vector4) {
        self.rows[0] = right;
    }

    pub fn set_up(&mut self, up: Vector4) {
        self.rows[1] = up;
    }

    pub fn set_forward(&mut self, forward: Vector4) {
        self.rows[2] = forward;
    }

    pub fn set_position(&mut self, position: Vector4) {
        self.rows[3] = position;
    }

    /// The sixteen values in row-major order (`_11, _12, .., _44`).
    ///
    /// This is the layout a uniform upload expects.
    pub fn as_slice(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Builds an orthonormal frame looking along `forward`.
    ///
    /// `right = up × forward` and `up' = forward × right`, so with `up = +Y`
    /// and `forward = +Z` the right axis is `+X`.
    pub fn set_frame(&mut self, position: Vector4, forward: Vector4, up: Vector4) {
        let forward = forward.normalised();
        let right = up.cross(&forward).normalised();
        let up = forward.cross(&right).normalised();

        self.rows = [right, up, forward, position];
    }

    /// Inverse of a rigid frame (rows right/up/forward/position), usable as view matrix.
    pub fn to_view_matrix(&self) -> Matrix4x4 {
        Self::view_from_axes(self.rows[0], self.rows[1], self.rows[2], self.rows[3])
    }

    /// Overwrites this matrix with a view matrix at `eye` looking at `target`.
    pub fn view_look_at(&mut self, eye: Vector4, target: Vector4, up: Vector4) {
        let forward = (target - eye).normalised();
        let left = up.cross(&forward).normalised();
        // not renormalised
        let up = forward.cross(&left);

        *self = Self::view_from_axes(left, up, forward, eye);
    }

    fn view_from_axes(x: Vector4, y: Vector4, z: Vector4, eye: Vector4) -> Matrix4x4 {
        Matrix4x4::new(
            x.x,
            y.x,
            z.x,
            0.0,
            x.y,
            y.y,
            z.y,
            0.0,
            x.z,
            y.z,
            z.z,
            0.0,
            -x.dot(&eye),
            -y.dot(&eye),
            -z.dot(&eye),
            1.0,
        )
    }

    /// Off-center orthographic projection, depth mapped to `[-1, 1]`.
    pub fn orthographic(
        &mut self,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) {
        let delta_x = right - left;
        let delta_y = top - bottom;
        let delta_z = far - near;

        *self = Matrix4x4::new(
            2.0 / delta_x,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 / delta_y,
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 / delta_z,
            0.0,
            -((right + left) / delta_x),
            -((top + bottom) / delta_y),
            -((far + near) / delta_z),
            1.0,
        );
    }

    /// Orthographic projection centered on the origin, depth mapped to `[0, 1]`.
    ///
    /// This is a different convention than [`Matrix4x4::orthographic`], not a shorthand for it.
    pub fn orthographic_centered(&mut self, width: f32, height: f32, near: f32, far: f32) {
        *self = Matrix4x4::new(
            2.0 / width,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 / height,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0 / (far - near),
            0.0,
            0.0,
            0.0,
            near / (near - far),
            1.0,
        );
    }

    /// Perspective projection with a vertical field of view in radians.
    ///
    /// `_34 = 1` copies view space z into w for the perspective divide.
    pub fn perspective(&mut self, fov_y: f32, aspect_ratio: f32, near: f32, far: f32) {
        let half_angle = 0.5 * fov_y;
        let cot = 1.0 / half_angle.tan();

        *self = Matrix4x4::new(
            cot / aspect_ratio,
            0.0,
            0.0,
            0.0,
            0.0,
            cot,
            0.0,
            0.0,
            0.0,
            0.0,
            far / (far - near),
            1.0,
            0.0,
            0.0,
            near * far / (near - far),
            0.0,
        );
    }

    pub fn transpose(&self) -> Matrix4x4 {
        let [r0, r1, r2, r3] = self.rows;
        Matrix4x4::new(
            r0.x, r1.x, r2.x, r3.x, r0.y, r1.y, r2.y, r3.y, r0.z, r1.z, r2.z, r3.z, r0.w, r1.w,
            r2.w, r3.w,
        )
    }

    pub fn rotate_x(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();
        *self = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
    }

    pub fn rotate_y(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();
        *self = Matrix4x4::new(
            cos, 0.0, -sin, 0.0, 0.0, 1.0, 0.0, 0.0, sin, 0.0, cos, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
    }

    pub fn rotate_z(&mut self, rad: f32) {
        let (sin, cos) = rad.sin_cos();
        *self = Matrix4x4::new(
            cos, -sin, 0.0, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
    }

    /// Rotation of `rad` around `axis` (Rodrigues). The axis must be normalised.
    pub fn rotate_axis(&mut self, rad: f32, axis: Vector4) {
        let (sin, cos) = rad.sin_cos();

        let a = 1.0 - cos;
        let ax = a * axis.x;
        let ay = a * axis.y;
        let az = a * axis.z;

        *self = Matrix4x4::new(
            ax * axis.x + cos,
            ax * axis.y + axis.z * sin,
            ax * axis.z - axis.y * sin,
            0.0,
            ay * axis.x - axis.z * sin,
            ay * axis.y + cos,
            ay * axis.z + axis.x * sin,
            0.0,
            az * axis.x + axis.y * sin,
            az * axis.y - axis.x * sin,
            az * axis.z + cos,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        );
    }

    /// `Rx(bank) * Ry(heading) * Rz(attitude)`
    pub fn rotation_euler(&mut self, bank: f32, heading: f32, attitude: f32) {
        let mut x = Matrix4x4::identity();
        let mut y = Matrix4x4::identity();
        let mut z = Matrix4x4::identity();
        x.rotate_x(bank);
        y.rotate_y(heading);
        z.rotate_z(attitude);

        *self = x * y * z;
    }

    pub fn scale(&mut self, scale: Vector4) {
        *self = Matrix4x4::new(
            scale.x, 0.0, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, 0.0, scale.z, 0.0, 0.0, 0.0, 0.0,
            1.0,
        );
    }

    /// Like [`Matrix4x4::scale`] with a z scale of 1
    pub fn scale_2d(&mut self, scale: Vector2) {
        self.scale(Vector4::new(scale.x, scale.y, 1.0, 0.0));
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row].as_slice()[col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row].as_mut_slice()[col]
    }
}

/// `result[i][j] = Σ self[i][k] * rhs[k][j]`
impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        &self * &rhs
    }
}

impl Mul for &Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: &Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::zero();
        for i in 0..4 {
            for j in 0..4 {
                result[(i, j)] = self[(i, 0)] * rhs[(0, j)]
                    + self[(i, 1)] * rhs[(1, j)]
                    + self[(i, 2)] * rhs[(2, j)]
                    + self[(i, 3)] * rhs[(3, j)];
            }
        }
        result
    }
}

/// `result[i] = Σ self[i][k] * v[k]`, each row dotted with the full vector
impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let [r0, r1, r2, r3] = self.rows;
        let row_dot = |r: Vector4| r.x * v.x + r.y * v.y + r.z * v.z + r.w * v.w;
        Vector4::new(row_dot(r0), row_dot(r1), row_dot(r2), row_dot(r3))
    }
}

/// Row vector times matrix, `result[j] = Σ v[k] * m[k][j]`
impl Mul<Matrix4x4> for Vector4 {
    type Output = Vector4;

    fn mul(self, m: Matrix4x4) -> Vector4 {
        let [r0, r1, r2, r3] = m.rows;
        Vector4::new(
            self.x * r0.x + self.y * r1.x + self.z * r2.x + self.w * r3.x,
            self.x * r0.y + self.y * r1.y + self.z * r2.y + self.w * r3.y,
            self.x * r0.z + self.y * r1.z + self.z * r2.z + self.w * r3.z,
            self.x * r0.w + self.y * r1.w + self.z * r2.w + self.w * r3.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec::{DEFAULT_TOLERANCE, equal_within_tolerance};
    use pretty_assertions::assert_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_matrix_approx_eq(actual: &Matrix4x4, expected: &Matrix4x4) {
        for (i, (a, e)) in actual
            .as_slice()
            .iter()
            .zip(expected.as_slice().iter())
            .enumerate()
        {
            assert!(
                approx_eq(*a, *e),
                "entry _{}{}: expected {e}, got {a}\n{actual:?}",
                i / 4 + 1,
                i % 4 + 1
            );
        }
    }

    fn sample_matrix() -> Matrix4x4 {
        Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        )
    }

    #[test]
    fn test_views_alias_the_same_values() {
        let mut m = sample_matrix();
        assert_eq!(m[(2, 1)], 10.0);
        assert_eq!(m.as_slice()[9], 10.0);
        assert_eq!(m.row(2).y, 10.0);

        m.row_mut(2).y = -1.0;
        assert_eq!(m[(2, 1)], -1.0);
        assert_eq!(m.as_slice()[9], -1.0);

        m.as_mut_slice()[15] = 42.0;
        assert_eq!(m.position().w, 42.0);

        m[(0, 0)] = 7.0;
        assert_eq!(m.right().x, 7.0);
        assert_eq!(std::mem::size_of::<Matrix4x4>(), 64);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Matrix4x4::default(), Matrix4x4::identity());
    }

    #[test]
    fn test_rotate_x_zero_is_identity() {
        let mut m = sample_matrix();
        m.rotate_x(0.0);
        assert_eq!(m, Matrix4x4::identity());
    }

    #[test]
    fn test_rotations_overwrite() {
        let mut m = Matrix4x4::identity();
        m.set_position(Vector4::point(10.0, 20.0, 30.0));
        m.rotate_y(0.0);
        assert_eq!(m, Matrix4x4::identity());
        m.set_position(Vector4::point(10.0, 20.0, 30.0));
        m.rotate_z(0.0);
        assert_eq!(m, Matrix4x4::identity());
    }

    #[test]
    fn test_rotate_entries() {
        let mut m = Matrix4x4::zero();
        m.rotate_x(FRAC_PI_2);
        assert_matrix_approx_eq(
            &m,
            &Matrix4x4::new(
                1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
        );
        m.rotate_y(FRAC_PI_2);
        assert_matrix_approx_eq(
            &m,
            &Matrix4x4::new(
                0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
        );
        m.rotate_z(FRAC_PI_2);
        assert_matrix_approx_eq(
            &m,
            &Matrix4x4::new(
                0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
        );
    }

    #[test]
    fn test_rotate_axis_matches_axis_rotations() {
        let angle = 0.7;
        let mut axis = Matrix4x4::zero();
        let mut expected = Matrix4x4::zero();

        // opposite sense to rotate_x and rotate_z, same sense as rotate_y
        axis.rotate_axis(angle, Vector4::direction(1.0, 0.0, 0.0));
        expected.rotate_x(-angle);
        assert_matrix_approx_eq(&axis, &expected);

        axis.rotate_axis(angle, Vector4::direction(0.0, 0.0, 1.0));
        expected.rotate_z(-angle);
        assert_matrix_approx_eq(&axis, &expected);

        axis.rotate_axis(angle, Vector4::direction(0.0, 1.0, 0.0));
        expected.rotate_y(angle);
        assert_matrix_approx_eq(&axis, &expected);
    }

    #[test]
    fn test_rotate_axis_keeps_axis_and_length() {
        let axis = Vector4::direction(1.0, 2.0, 3.0).normalised();
        let mut m = Matrix4x4::zero();
        m.rotate_axis(1.3, axis);

        let rotated_axis = m * axis;
        assert!(equal_within_tolerance(&rotated_axis, &axis, DEFAULT_TOLERANCE));

        let v = Vector4::direction(-4.0, 0.5, 2.0);
        let rotated = m * v;
        assert!(approx_eq(rotated.magnitude() / v.magnitude(), 1.0));
        assert_eq!(m.position(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_euler_composes() {
        let (bank, heading, attitude) = (0.3, -1.1, 2.0);
        let mut x = Matrix4x4::identity();
        let mut y = Matrix4x4::identity();
        let mut z = Matrix4x4::identity();
        x.rotate_x(bank);
        y.rotate_y(heading);
        z.rotate_z(attitude);

        let mut m = sample_matrix();
        m.rotation_euler(bank, heading, attitude);
        assert_eq!(m, x * y * z);

        let mut only_bank = Matrix4x4::zero();
        only_bank.rotation_euler(bank, 0.0, 0.0);
        assert_eq!(only_bank, x);
    }

    #[test]
    fn test_scale() {
        let mut m = sample_matrix();
        m.scale(Vector4::new(2.0, 3.0, 4.0, 9.0));
        assert_eq!(
            m,
            Matrix4x4::new(
                2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 1.0
            )
        );
        m.scale_2d(Vector2::new(5.0, 6.0));
        assert_eq!(
            m,
            Matrix4x4::new(
                5.0, 0.0, 0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0
            )
        );
        assert_eq!(m * Vector4::point(1.0, 1.0, 1.0), Vector4::point(5.0, 6.0, 1.0));
    }

    #[test]
    fn test_transpose() {
        let m = sample_matrix();
        let t = m.transpose();
        assert_eq!(
            t,
            Matrix4x4::new(
                1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0,
                16.0
            )
        );
        assert_eq!(t.transpose(), m);
        // pure
        assert_eq!(m, sample_matrix());
    }

    #[test]
    fn test_matrix_product() {
        let a = sample_matrix();
        let b = Matrix4x4::new(
            2.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(
            a * b,
            Matrix4x4::new(
                6.0, 2.0, 3.0, 5.0, 18.0, 6.0, 7.0, 13.0, 30.0, 10.0, 11.0, 21.0, 42.0, 14.0, 15.0,
                29.0
            )
        );
        assert_eq!(a * Matrix4x4::identity(), a);
        assert_eq!(Matrix4x4::identity() * a, a);
        assert_eq!(&a * &b, a * b);
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = sample_matrix();
        let v = Vector4::new(1.0, 0.0, -1.0, 2.0);
        assert_eq!(m * v, Vector4::new(6.0, 14.0, 22.0, 30.0));
        assert_eq!(v * m, Vector4::new(18.0, 20.0, 22.0, 24.0));
        assert_eq!(v * m, m.transpose() * v);
    }

    #[test]
    fn test_set_frame() {
        let mut frame = Matrix4x4::zero();
        frame.set_frame(
            Vector4::point(1.0, 2.0, 3.0),
            Vector4::direction(0.0, 0.0, 5.0),
            Vector4::direction(0.0, 1.0, 0.0),
        );
        assert_eq!(frame.right(), Vector4::direction(1.0, 0.0, 0.0));
        assert_eq!(frame.up(), Vector4::direction(0.0, 1.0, 0.0));
        assert_eq!(frame.forward(), Vector4::direction(0.0, 0.0, 1.0));
        assert_eq!(frame.position(), Vector4::point(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_set_frame_is_orthonormal() {
        let mut frame = Matrix4x4::identity();
        frame.set_frame(
            Vector4::point(0.0, 0.0, 0.0),
            Vector4::direction(1.0, -2.0, 0.5),
            Vector4::direction(0.2, 1.0, 0.0),
        );
        let (r, u, f) = (frame.right(), frame.up(), frame.forward());
        assert!(approx_eq(r.magnitude(), 1.0));
        assert!(approx_eq(u.magnitude(), 1.0));
        assert!(approx_eq(f.magnitude(), 1.0));
        assert!(approx_eq(r.dot(&u), 0.0));
        assert!(approx_eq(r.dot(&f), 0.0));
        assert!(approx_eq(u.dot(&f), 0.0));
        // right = up × forward ordering
        assert!(equal_within_tolerance(&u.cross(&f), &r, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_view_matrix_maps_frame_position_to_origin() {
        let position = Vector4::point(3.0, -2.0, 7.5);
        let mut frame = Matrix4x4::identity();
        frame.set_frame(
            position,
            Vector4::direction(-1.0, 0.5, 2.0),
            Vector4::direction(0.0, 1.0, 0.0),
        );
        let view = frame.to_view_matrix();

        let in_view = position * view;
        assert!(equal_within_tolerance(
            &in_view,
            &Vector4::ZERO,
            DEFAULT_TOLERANCE
        ));
        assert!(approx_eq(in_view.w, 1.0));

        // a point one unit ahead ends up on the view z axis
        let ahead = (position + frame.forward()) * view;
        assert!(equal_within_tolerance(
            &ahead,
            &Vector4::direction(0.0, 0.0, 1.0),
            DEFAULT_TOLERANCE
        ));

        assert_eq!(view.right().w, 0.0);
        assert_eq!(view.up().w, 0.0);
        assert_eq!(view.forward().w, 0.0);
        assert_eq!(view.position().w, 1.0);
    }

    #[test]
    fn test_view_matrix_of_identity_frame() {
        let mut frame = Matrix4x4::identity();
        frame.set_position(Vector4::point(1.0, 2.0, 3.0));
        let view = frame.to_view_matrix();
        assert_eq!(
            view,
            Matrix4x4::new(
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -2.0, -3.0, 1.0
            )
        );
    }

    #[test]
    fn test_view_look_at() {
        let eye = Vector4::point(0.0, 0.0, -10.0);
        let mut view = sample_matrix();
        view.view_look_at(
            eye,
            Vector4::point(0.0, 0.0, 0.0),
            Vector4::direction(0.0, 1.0, 0.0),
        );
        assert_eq!(
            view,
            Matrix4x4::new(
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 10.0, 1.0
            )
        );
        let target = Vector4::point(0.0, 0.0, 0.0) * view;
        assert_eq!(target, Vector4::new(0.0, 0.0, 10.0, 1.0));
    }

    #[test]
    fn test_view_look_at_matches_frame_view() {
        let eye = Vector4::point(4.0, 3.0, -2.0);
        let target = Vector4::point(-1.0, 0.0, 5.0);
        let up = Vector4::direction(0.0, 1.0, 0.0);

        let mut look_at = Matrix4x4::identity();
        look_at.view_look_at(eye, target, up);

        let mut frame = Matrix4x4::identity();
        frame.set_frame(eye, target - eye, up);
        assert_matrix_approx_eq(&look_at, &frame.to_view_matrix());
    }

    #[test]
    fn test_orthographic() {
        let mut m = Matrix4x4::zero();
        m.orthographic(-1.0, 1.0, 1.0, -1.0, 0.0, 10.0);
        assert_eq!(
            m,
            Matrix4x4::new(
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -0.2, 0.0, -0.0, -0.0, -1.0, 1.0
            )
        );
        let origin = Vector4::point(0.0, 0.0, 0.0);
        assert_eq!(m * origin, origin);
    }

    #[test]
    fn test_orthographic_off_center() {
        let mut m = Matrix4x4::zero();
        m.orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
        let top_right = Vector4::point(800.0, 0.0, 0.0) * m;
        assert!(approx_eq(top_right.x, 1.0));
        assert!(approx_eq(top_right.y, 1.0));
        let bottom_left = Vector4::point(0.0, 600.0, 0.0) * m;
        assert!(approx_eq(bottom_left.x, -1.0));
        assert!(approx_eq(bottom_left.y, -1.0));
    }

    #[test]
    fn test_orthographic_centered() {
        let mut m = Matrix4x4::zero();
        m.orthographic_centered(4.0, 2.0, 1.0, 11.0);
        assert_eq!(
            m,
            Matrix4x4::new(
                0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, -0.1, 1.0
            )
        );
        let near = Vector4::point(0.0, 0.0, 1.0) * m;
        let far = Vector4::point(2.0, 1.0, 11.0) * m;
        assert!(approx_eq(near.z, 0.0));
        assert!(approx_eq(far.z, 1.0));
        assert!(approx_eq(far.x, 1.0));
        assert!(approx_eq(far.y, 1.0));
    }

    #[test]
    fn test_perspective() {
        let (near, far) = (1.0, 100.0);
        let mut m = Matrix4x4::zero();
        m.perspective(FRAC_PI_2, 1.0, near, far);

        assert!(approx_eq(m[(0, 0)], 1.0));
        assert!(approx_eq(m[(1, 1)], 1.0));
        assert_eq!(m[(2, 2)], far / (far - near));
        assert_eq!(m[(2, 3)], 1.0);
        assert_eq!(m[(3, 2)], near * far / (near - far));
        assert_eq!(m[(3, 3)], 0.0);

        let on_near_plane = Vector4::point(0.0, 0.0, 1.0) * m;
        assert_eq!(on_near_plane.z, m[(2, 2)] + m[(3, 2)]);
        assert!(on_near_plane.z.abs() < EPSILON);
        assert_eq!(on_near_plane.w, 1.0);

        let on_far_plane = Vector4::point(0.0, 0.0, far) * m;
        assert!(approx_eq(on_far_plane.z / on_far_plane.w, 1.0));
    }

    #[test]
    fn test_perspective_aspect() {
        let mut m = Matrix4x4::zero();
        m.perspective(PI / 3.0, 2.0, 0.1, 10.0);
        assert!(approx_eq(m[(1, 1)], 3.0f32.sqrt()));
        assert!(approx_eq(m[(0, 0)], 3.0f32.sqrt() / 2.0));
    }

    #[test]
    fn test_json_is_row_vectors() {
        let json = serde_json::to_value(Matrix4x4::identity()).unwrap();
        assert_eq!(json["rows"][3]["w"], 1.0);
        let back: Matrix4x4 = serde_json::from_value(json).unwrap();
        assert_eq!(back, Matrix4x4::identity());
    }
}
