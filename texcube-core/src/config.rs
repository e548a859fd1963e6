/// Fixed demo parameters
use std::f32::consts::PI;

/// Everything the demo needs to know before it starts.
///
/// `Default` carries the values the demo always runs with; the web entry point
/// only lets the canvas id and texture URL be overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Element id of the canvas to render into.
    pub canvas_id: String,
    /// URL of the cube's texture image, relative to the page.
    pub texture_url: String,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// How far the cube sits in front of the camera along -z.
    pub camera_distance: f32,
    /// Multipliers applied to the rotation accumulator for the z, y and x
    /// axes, in that order.
    pub rotation_factors: [f32; 3],
    pub clear_color: [f32; 4],
}

impl DemoConfig {
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    pub fn with_texture_url(mut self, texture_url: impl Into<String>) -> Self {
        self.texture_url = texture_url.into();
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glcanvas".to_string(),
            texture_url: "../images/texture.png".to_string(),
            fov_y: 45.0 * PI / 180.0,
            near: 0.1,
            far: 100.0,
            camera_distance: 6.0,
            rotation_factors: [1.0, 0.7, 0.3],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
