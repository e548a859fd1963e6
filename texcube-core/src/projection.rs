/// Perspective projection
use nalgebra::Matrix4;

use crate::config::DemoConfig;

/// Perspective frustum for the demo camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Frustum for a drawing surface of the given size.
    ///
    /// A zero height would make the aspect infinite; it is treated as square.
    pub fn for_surface(config: &DemoConfig, width: f32, height: f32) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self::new(config.fov_y, aspect, config.near, config.far)
    }

    /// Standard OpenGL right-handed perspective matrix, clip z in -1..1.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov_y, self.near, self.far)
    }
}

impl Default for Perspective {
    fn default() -> Self {
        let config = DemoConfig::default();
        Self::new(config.fov_y, 1.0, config.near, config.far)
    }
}
