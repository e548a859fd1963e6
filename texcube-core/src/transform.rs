/// Model-view transform and rotation state
use nalgebra::{Matrix4, Vector3};

use crate::config::DemoConfig;

/// Accumulated cube rotation, in radians.
///
/// A single scalar driven by wall-clock time. It is never wrapped; the
/// rotation matrices are periodic so the value only grows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    angle: f64,
}

impl RotationState {
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance by `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        self.angle += delta;
    }
}

/// Transform builder for the cube's model-view matrix
pub struct Transform;

impl Transform {
    /// Rotation about the z, y and x axes, applied in that order, with each
    /// angle scaled by the matching factor.
    pub fn rotation_matrix(rotation: &RotationState, factors: [f32; 3]) -> Matrix4<f32> {
        let [fz, fy, fx] = factors;
        let angle = rotation.angle();
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, (angle * fz as f64) as f32));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, (angle * fy as f64) as f32, 0.0));
        let rx = Matrix4::new_rotation(Vector3::new((angle * fx as f64) as f32, 0.0, 0.0));

        rz * ry * rx
    }

    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Push the cube back along the view axis, then spin it in place.
    pub fn model_view(rotation: &RotationState, config: &DemoConfig) -> Matrix4<f32> {
        Self::translation_matrix(0.0, 0.0, -config.camera_distance)
            * Self::rotation_matrix(rotation, config.rotation_factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot_z(a: f32) -> Matrix4<f32> {
        let (s, c) = a.sin_cos();
        Matrix4::new(
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rot_y(a: f32) -> Matrix4<f32> {
        let (s, c) = a.sin_cos();
        Matrix4::new(
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rot_x(a: f32) -> Matrix4<f32> {
        let (s, c) = a.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.angle(), 0.0);

        state.advance(0.25);
        state.advance(0.5);
        assert!((state.angle() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation, [1.0, 0.7, 0.3]);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_order_is_z_then_y_then_x() {
        let rotation = RotationState::new(1.3);
        let matrix = Transform::rotation_matrix(&rotation, [1.0, 0.7, 0.3]);
        let expected = rot_z(1.3) * rot_y(1.3 * 0.7) * rot_x(1.3 * 0.3);
        assert!((matrix - expected).norm() < 1e-5);

        let reversed = rot_x(1.3 * 0.3) * rot_y(1.3 * 0.7) * rot_z(1.3);
        assert!((matrix - reversed).norm() > 1e-3);
    }

    #[test]
    fn test_model_view_translates_after_rotating() {
        let config = DemoConfig::default();
        let rotation = RotationState::new(2.0);
        let mv = Transform::model_view(&rotation, &config);

        // The cube center ends up six units in front of the camera.
        let center = mv.transform_point(&nalgebra::Point3::origin());
        assert!((center.coords - Vector3::new(0.0, 0.0, -6.0)).norm() < 1e-6);

        // Rotation keeps every corner at the same distance from the center.
        let corner = mv.transform_point(&nalgebra::Point3::new(1.0, 1.0, 1.0));
        assert!(((corner - center).norm() - 3.0f32.sqrt()).abs() < 1e-5);
    }
}
