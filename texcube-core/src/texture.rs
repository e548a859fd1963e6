/// Texture sampling policy and load state
///
/// The texture starts as a single opaque blue pixel so the cube can be drawn
/// right away. When the real image arrives its dimensions decide how it is
/// sampled.

/// RGBA bytes of the 1x1 placeholder uploaded before the image loads.
pub const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 255, 255];

/// `true` for 1, 2, 4, 8, ... Zero is not a power of two.
pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// How a loaded image is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// Both dimensions are powers of two: generate mipmaps, keep the default
    /// wrap and filter parameters.
    Mipmapped,
    /// Anything else: wrap S and T clamped to the edge, linear minification,
    /// no mipmaps.
    ClampLinear,
}

impl SamplingPolicy {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        if is_power_of_two(width) && is_power_of_two(height) {
            SamplingPolicy::Mipmapped
        } else {
            SamplingPolicy::ClampLinear
        }
    }

    pub fn generates_mipmaps(&self) -> bool {
        matches!(self, SamplingPolicy::Mipmapped)
    }
}

/// What the bound texture currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureState {
    #[default]
    Placeholder,
    Loaded {
        width: u32,
        height: u32,
        sampling: SamplingPolicy,
    },
}

impl TextureState {
    /// Record a finished image upload and return the policy to apply.
    ///
    /// Every load replaces whatever was there before.
    pub fn finish_load(&mut self, width: u32, height: u32) -> SamplingPolicy {
        let sampling = SamplingPolicy::for_dimensions(width, height);
        *self = TextureState::Loaded {
            width,
            height,
            sampling,
        };
        sampling
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TextureState::Placeholder)
    }

    /// Texel dimensions of the current contents.
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            TextureState::Placeholder => (1, 1),
            TextureState::Loaded { width, height, .. } => (width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two() {
        for v in [1, 2, 4, 64, 256, 1024, 1 << 31] {
            assert!(is_power_of_two(v), "{}", v);
        }
        for v in [0, 3, 100, 255, 257, 1000] {
            assert!(!is_power_of_two(v), "{}", v);
        }
    }

    #[test]
    fn test_power_of_two_image_gets_mipmaps() {
        let policy = SamplingPolicy::for_dimensions(256, 256);
        assert_eq!(policy, SamplingPolicy::Mipmapped);
        assert!(policy.generates_mipmaps());
    }

    #[test]
    fn test_npot_image_clamps() {
        let policy = SamplingPolicy::for_dimensions(100, 100);
        assert_eq!(policy, SamplingPolicy::ClampLinear);
        assert!(!policy.generates_mipmaps());
    }

    #[test]
    fn test_one_npot_dimension_is_enough_to_clamp() {
        assert_eq!(SamplingPolicy::for_dimensions(256, 100), SamplingPolicy::ClampLinear);
        assert_eq!(SamplingPolicy::for_dimensions(100, 256), SamplingPolicy::ClampLinear);
        assert_eq!(SamplingPolicy::for_dimensions(512, 128), SamplingPolicy::Mipmapped);
    }

    #[test]
    fn test_placeholder_is_opaque_blue() {
        assert_eq!(PLACEHOLDER_PIXEL, [0, 0, 255, 255]);
        let state = TextureState::default();
        assert!(state.is_placeholder());
        assert_eq!(state.dimensions(), (1, 1));
    }

    #[test]
    fn test_last_load_wins() {
        let mut state = TextureState::default();
        assert_eq!(state.finish_load(256, 256), SamplingPolicy::Mipmapped);
        assert_eq!(state.finish_load(100, 60), SamplingPolicy::ClampLinear);
        assert_eq!(
            state,
            TextureState::Loaded {
                width: 100,
                height: 60,
                sampling: SamplingPolicy::ClampLinear,
            }
        );
        assert!(!state.is_placeholder());
    }
}
