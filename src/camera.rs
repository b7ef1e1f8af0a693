//! Free-fly camera controller
//!
//! [`FreeMovement`] moves and turns a camera frame (a [`Matrix4x4`] whose rows
//! are right, up, forward and position) from a snapshot of the input state
//! taken once per frame. W/S move along forward, D/A along right, Q/E along up
//! and the mouse wheel along forward. Holding the rotate button (right mouse
//! button) and dragging pitches around the camera's right axis and yaws
//! around the world up axis.

use crate::math::{Matrix4x4, Vector4};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// W
    Forward,
    /// S
    Back,
    /// D
    Right,
    /// A
    Left,
    /// Q
    Up,
    /// E
    Down,
    /// Left shift
    Sprint,
}

impl Key {
    /// Maps the default letter bindings, case insensitive.
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_uppercase() {
            'W' => Some(Key::Forward),
            'S' => Some(Key::Back),
            'D' => Some(Key::Right),
            'A' => Some(Key::Left),
            'Q' => Some(Key::Up),
            'E' => Some(Key::Down),
            _ => None,
        }
    }
}

/// Input state for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Keys currently held
    pub keys: Vec<Key>,
    /// Cursor position in window pixels
    pub mouse_position: (i32, i32),
    /// Absolute wheel position, not a delta
    pub mouse_wheel: i32,
    pub rotate_button: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: Key) -> Self {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    pub fn with_mouse(mut self, x: i32, y: i32) -> Self {
        self.mouse_position = (x, y);
        self
    }

    pub fn with_wheel(mut self, wheel: i32) -> Self {
        self.mouse_wheel = wheel;
        self
    }

    pub fn with_rotate_button(mut self, down: bool) -> Self {
        self.rotate_button = down;
        self
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeMovementOptions {
    /// Units per second
    pub speed: f32,
    /// Speed factor while [`Key::Sprint`] is held
    pub sprint_multiplier: f32,
    /// Pixels of mouse travel per radian of rotation
    pub mouse_sensitivity: f32,
    /// Axis used for yaw, normalised
    pub world_up: Vector4,
}

impl Default for FreeMovementOptions {
    fn default() -> Self {
        FreeMovementOptions {
            speed: 10.0,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 150.0,
            world_up: Vector4::direction(0.0, 1.0, 0.0),
        }
    }
}

impl FreeMovementOptions {
    /// Defaults:
    /// - `speed`: 10
    /// - `sprint_multiplier`: 2
    /// - `mouse_sensitivity`: 150
    /// - `world_up`: (0, 1, 0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sprint_multiplier(mut self, multiplier: f32) -> Self {
        self.sprint_multiplier = multiplier;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn with_world_up(mut self, up: Vector4) -> Self {
        self.world_up = up;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FreeMovement {
    pub options: FreeMovementOptions,
    prev_mouse_wheel: i32,
    prev_mouse_position: (i32, i32),
    rotating: bool,
}

impl FreeMovement {
    pub fn new(options: FreeMovementOptions) -> Self {
        FreeMovement {
            options,
            ..Default::default()
        }
    }

    /// Applies one frame of input to `frame`.
    pub fn update(&mut self, delta_time: f32, frame: &mut Matrix4x4, input: &InputSnapshot) {
        let wheel_delta = input.mouse_wheel - self.prev_mouse_wheel;
        self.prev_mouse_wheel = input.mouse_wheel;

        let mut right = frame.right();
        let mut up = frame.up();
        let mut forward = frame.forward();
        let mut translation = frame.position();

        let speed = if input.is_down(Key::Sprint) {
            self.options.speed * self.options.sprint_multiplier
        } else {
            self.options.speed
        };
        let step = delta_time * speed;

        if input.is_down(Key::Forward) {
            translation += forward * step;
        }
        if input.is_down(Key::Back) {
            translation -= forward * step;
        }
        if input.is_down(Key::Right) {
            translation += right * step;
        }
        if input.is_down(Key::Left) {
            translation -= right * step;
        }
        if input.is_down(Key::Up) {
            translation += up * step;
        }
        if input.is_down(Key::Down) {
            translation -= up * step;
        }
        if wheel_delta != 0 {
            translation += forward * (step * wheel_delta as f32);
        }
        frame.set_position(translation);

        if !input.rotate_button {
            self.rotating = false;
            return;
        }
        if !self.rotating {
            self.rotating = true;
            self.prev_mouse_position = input.mouse_position;
        }

        let (x, y) = input.mouse_position;
        let (prev_x, prev_y) = self.prev_mouse_position;
        let (delta_x, delta_y) = (x - prev_x, y - prev_y);
        self.prev_mouse_position = input.mouse_position;

        let mut rotation = Matrix4x4::identity();
        if delta_y != 0 {
            rotation.rotate_axis(-delta_y as f32 / self.options.mouse_sensitivity, right);
            forward = rotation * forward;
            up = rotation * up;
            right = rotation * right;
        }
        if delta_x != 0 {
            rotation.rotate_axis(
                -delta_x as f32 / self.options.mouse_sensitivity,
                self.options.world_up,
            );
            forward = rotation * forward;
            up = rotation * up;
            right = rotation * right;
        }

        frame.set_right(right);
        frame.set_up(up);
        frame.set_forward(forward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{DEFAULT_TOLERANCE, equal_within_tolerance};
    use pretty_assertions::assert_eq;

    fn assert_vec_approx(actual: Vector4, expected: Vector4) {
        assert!(
            equal_within_tolerance(&actual, &expected, DEFAULT_TOLERANCE),
            "{actual} != {expected}"
        );
    }

    fn camera() -> FreeMovement {
        FreeMovement::new(FreeMovementOptions::new().with_speed(10.0))
    }

    #[test]
    fn test_forward_moves_along_frame_forward() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        camera.update(0.5, &mut frame, &InputSnapshot::new().with_key(Key::Forward));
        assert_eq!(frame.position(), Vector4::new(0.0, 0.0, 5.0, 1.0));
        assert_eq!(frame.forward(), Vector4::direction(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut frame = Matrix4x4::identity();
        let input = InputSnapshot::new()
            .with_key(Key::Up)
            .with_key(Key::Down)
            .with_key(Key::Left);
        camera().update(1.0, &mut frame, &input);
        assert_eq!(frame.position(), Vector4::new(-10.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_sprint_doubles_speed() {
        let mut frame = Matrix4x4::identity();
        let input = InputSnapshot::new()
            .with_key(Key::Right)
            .with_key(Key::Sprint);
        camera().update(0.5, &mut frame, &input);
        assert_eq!(frame.position(), Vector4::new(10.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mouse_wheel_uses_delta() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        let input = InputSnapshot::new().with_wheel(3);
        camera.update(0.1, &mut frame, &input);
        assert_vec_approx(frame.position(), Vector4::new(0.0, 0.0, 3.0, 1.0));
        // wheel did not move since the last frame
        camera.update(0.1, &mut frame, &input);
        assert_vec_approx(frame.position(), Vector4::new(0.0, 0.0, 3.0, 1.0));
        camera.update(0.1, &mut frame, &InputSnapshot::new().with_wheel(2));
        assert_vec_approx(frame.position(), Vector4::new(0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_drag_yaws_around_world_up() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        let held = InputSnapshot::new().with_rotate_button(true);

        // first held frame only records the cursor
        camera.update(0.016, &mut frame, &held.clone().with_mouse(100, 100));
        assert_eq!(frame, Matrix4x4::identity());

        camera.update(0.016, &mut frame, &held.clone().with_mouse(250, 100));
        let (sin, cos) = 1.0f32.sin_cos();
        assert_vec_approx(frame.forward(), Vector4::direction(sin, 0.0, cos));
        assert_vec_approx(frame.right(), Vector4::direction(cos, 0.0, -sin));
        assert_vec_approx(frame.up(), Vector4::direction(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_drag_pitches_around_right() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        let held = InputSnapshot::new().with_rotate_button(true);
        camera.update(0.016, &mut frame, &held.clone().with_mouse(0, 0));
        camera.update(0.016, &mut frame, &held.clone().with_mouse(0, 75));

        let (sin, cos) = 0.5f32.sin_cos();
        assert_vec_approx(frame.forward(), Vector4::direction(0.0, -sin, cos));
        assert_vec_approx(frame.up(), Vector4::direction(0.0, cos, sin));
        assert_vec_approx(frame.right(), Vector4::direction(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_keeps_frame_orthonormal() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        for (i, position) in [(0, 0), (40, -25), (-30, 60), (90, 10)].iter().enumerate() {
            let input = InputSnapshot::new()
                .with_rotate_button(true)
                .with_mouse(position.0, position.1);
            camera.update(0.016 * i as f32, &mut frame, &input);
        }
        let (right, up, forward) = (frame.right(), frame.up(), frame.forward());
        for axis in [right, up, forward] {
            assert!((axis.magnitude() - 1.0).abs() < 1e-4, "{axis}");
            assert_eq!(axis.w, 0.0);
        }
        assert!(right.dot(&up).abs() < 1e-4);
        assert!(up.dot(&forward).abs() < 1e-4);
        assert!(forward.dot(&right).abs() < 1e-4);
    }

    #[test]
    fn test_release_resets_drag() {
        let mut frame = Matrix4x4::identity();
        let mut camera = camera();
        let held = InputSnapshot::new().with_rotate_button(true);
        camera.update(0.016, &mut frame, &held.clone().with_mouse(0, 0));
        camera.update(0.016, &mut frame, &InputSnapshot::new().with_mouse(500, 500));
        camera.update(0.016, &mut frame, &held.clone().with_mouse(500, 500));
        assert_eq!(frame, Matrix4x4::identity());
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Key::from_char('w'), Some(Key::Forward));
        assert_eq!(Key::from_char('E'), Some(Key::Down));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_options_from_json() {
        let options: FreeMovementOptions =
            serde_json::from_str(r#"{"speed": 25.0, "mouse_sensitivity": 300.0}"#).unwrap();
        assert_eq!(
            options,
            FreeMovementOptions::new()
                .with_speed(25.0)
                .with_mouse_sensitivity(300.0)
        );
        assert_eq!(options.sprint_multiplier, 2.0);
        assert_eq!(options.world_up, Vector4::direction(0.0, 1.0, 0.0));
    }
}
