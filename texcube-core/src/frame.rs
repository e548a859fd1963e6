/// Per-frame state for the render loop
use nalgebra::Matrix4;

use crate::config::DemoConfig;
use crate::projection::Perspective;
use crate::transform::{RotationState, Transform};

/// Turns animation-frame timestamps into frame deltas.
///
/// Timestamps are in milliseconds, deltas in seconds. The previous timestamp
/// starts at zero, so the first delta is the time since the page's time
/// origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    then: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let now = now_ms * 0.001;
        let delta = now - self.then;
        self.then = now;
        delta
    }
}

/// Everything one draw call needs from the frame state.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Seconds since the previous frame.
    pub delta: f64,
    /// Rotation the frame is drawn with.
    pub rotation: RotationState,
    pub projection: Matrix4<f32>,
    pub model_view: Matrix4<f32>,
}

/// The demo's single steady state: every tick draws the cube with the current
/// rotation, then advances the rotation by the elapsed time.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    config: DemoConfig,
    clock: FrameClock,
    rotation: RotationState,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            clock: FrameClock::new(),
            rotation: RotationState::zero(),
            frames: 0,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Compute the matrices for the frame stamped `now_ms` on a surface of
    /// `width` x `height` CSS pixels.
    pub fn tick(&mut self, now_ms: f64, width: f32, height: f32) -> Frame {
        let delta = self.clock.tick(now_ms);
        let rotation = self.rotation;

        let frame = Frame {
            delta,
            rotation,
            projection: Perspective::for_surface(&self.config, width, height).matrix(),
            model_view: Transform::model_view(&rotation, &self.config),
        };

        self.rotation.advance(delta);
        self.frames += 1;
        if self.frames == 1 {
            log::debug!("first frame at {:.1} ms", now_ms);
        }
        log::trace!("frame {} delta {:.4}s", self.frames, delta);

        frame
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}
