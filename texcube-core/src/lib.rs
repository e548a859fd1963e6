/// texcube Core Library - Target-independent logic for the textured cube demo
///
/// This library holds everything that does not need a browser: the cube's
/// constant geometry, the rotation accumulator and frame clock, projection and
/// model-view math, the texture sampling policy, and shader build sequencing
/// behind the [`ShaderBackend`] trait.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod projection;
pub mod shader;
pub mod texture;
pub mod transform;

// Re-export commonly used types
pub use config::DemoConfig;
pub use error::{SetupError, ShaderError};
pub use frame::{Frame, FrameClock, FrameDriver};
pub use projection::Perspective;
pub use shader::{build_program, ShaderBackend, ShaderStage};
pub use texture::{SamplingPolicy, TextureState};
pub use transform::{RotationState, Transform};
