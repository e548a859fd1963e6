/// Shader sources and program build sequencing
///
/// The GPU calls live behind [`ShaderBackend`] so the build order and its
/// failure paths do not depend on a browser.
use std::fmt;

use crate::error::ShaderError;

/// Vertex shader: transforms positions to clip space and passes the texture
/// coordinate through.
pub const VERTEX_SHADER: &str = r#"
    attribute vec4 aVertexPosition;
    attribute vec2 aTextureCoord;

    uniform mat4 uModelViewMatrix;
    uniform mat4 uProjectionMatrix;

    varying highp vec2 vTextureCoord;

    void main(void) {
      gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
      vTextureCoord = aTextureCoord;
    }
"#;

/// Fragment shader: one texture lookup per pixel.
pub const FRAGMENT_SHADER: &str = r#"
    varying highp vec2 vTextureCoord;

    uniform sampler2D uSampler;

    void main(void) {
      gl_FragColor = texture2D(uSampler, vTextureCoord);
    }
"#;

pub const ATTRIB_POSITION: &str = "aVertexPosition";
pub const ATTRIB_TEXTURE_COORD: &str = "aTextureCoord";
pub const UNIFORM_PROJECTION: &str = "uProjectionMatrix";
pub const UNIFORM_MODEL_VIEW: &str = "uModelViewMatrix";
pub const UNIFORM_SAMPLER: &str = "uSampler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The handful of GL calls needed to compile and link a program.
pub trait ShaderBackend {
    type Shader;
    type Program;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    /// Upload `source`, compile, and report the compile status.
    fn compile_shader(&self, shader: &Self::Shader, source: &str) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> String;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    /// Link and report the link status.
    fn link_program(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> String;
}

fn non_empty(log: String) -> String {
    if log.trim().is_empty() {
        "(no info log)".to_string()
    } else {
        log
    }
}

fn compile<B: ShaderBackend>(
    backend: &B,
    stage: ShaderStage,
    source: &str,
) -> Result<B::Shader, ShaderError> {
    let shader = backend
        .create_shader(stage)
        .ok_or(ShaderError::Create("shader"))?;

    if !backend.compile_shader(&shader, source) {
        let log = non_empty(backend.shader_info_log(&shader));
        backend.delete_shader(&shader);
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(shader)
}

/// Compile both stages and link them into one program.
///
/// The first failure ends the build; nothing is retried.
pub fn build_program<B: ShaderBackend>(
    backend: &B,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<B::Program, ShaderError> {
    let vertex = compile(backend, ShaderStage::Vertex, vertex_source)?;
    let fragment = compile(backend, ShaderStage::Fragment, fragment_source)?;

    let program = backend
        .create_program()
        .ok_or(ShaderError::Create("program"))?;
    backend.attach_shader(&program, &vertex);
    backend.attach_shader(&program, &fragment);

    if !backend.link_program(&program) {
        let log = non_empty(backend.program_info_log(&program));
        return Err(ShaderError::Link { log });
    }

    log::debug!("shader program linked");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Stand-in compiler: a source "compiles" when its braces balance, and the
    /// program links unless told otherwise.
    #[derive(Default)]
    struct FakeBackend {
        fail_link: bool,
        next_id: RefCell<u32>,
        sources: RefCell<Vec<(u32, String)>>,
        deleted: RefCell<Vec<u32>>,
        attached: RefCell<Vec<u32>>,
        linked: RefCell<bool>,
    }

    impl FakeBackend {
        fn alloc(&self) -> u32 {
            let mut id = self.next_id.borrow_mut();
            *id += 1;
            *id
        }

        fn source_of(&self, shader: u32) -> String {
            self.sources
                .borrow()
                .iter()
                .find(|(id, _)| *id == shader)
                .map(|(_, s)| s.clone())
                .unwrap_or_default()
        }
    }

    impl ShaderBackend for FakeBackend {
        type Shader = u32;
        type Program = u32;

        fn create_shader(&self, _stage: ShaderStage) -> Option<u32> {
            Some(self.alloc())
        }

        fn compile_shader(&self, shader: &u32, source: &str) -> bool {
            self.sources.borrow_mut().push((*shader, source.to_string()));
            source.matches('{').count() == source.matches('}').count()
        }

        fn shader_info_log(&self, shader: &u32) -> String {
            if self.compile_shader(shader, &self.source_of(*shader)) {
                String::new()
            } else {
                "ERROR: 0:10: '' : syntax error".to_string()
            }
        }

        fn delete_shader(&self, shader: &u32) {
            self.deleted.borrow_mut().push(*shader);
        }

        fn create_program(&self) -> Option<u32> {
            Some(self.alloc())
        }

        fn attach_shader(&self, _program: &u32, shader: &u32) {
            self.attached.borrow_mut().push(*shader);
        }

        fn link_program(&self, _program: &u32) -> bool {
            *self.linked.borrow_mut() = true;
            !self.fail_link
        }

        fn program_info_log(&self, _program: &u32) -> String {
            if self.fail_link {
                "ERROR: varying vTextureCoord not written".to_string()
            } else {
                String::new()
            }
        }
    }

    #[test]
    fn test_fixed_sources_build() {
        let backend = FakeBackend::default();
        let program = build_program(&backend, VERTEX_SHADER, FRAGMENT_SHADER);
        assert!(program.is_ok());
        assert_eq!(backend.attached.borrow().len(), 2);
        assert!(backend.deleted.borrow().is_empty());
    }

    #[test]
    fn test_syntax_error_surfaces_log() {
        let backend = FakeBackend::default();
        let broken = FRAGMENT_SHADER.replacen('}', "", 1);

        let err = build_program(&backend, VERTEX_SHADER, &broken).unwrap_err();
        match &err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(*stage, ShaderStage::Fragment);
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // The failed shader is released and nothing is linked.
        assert_eq!(backend.deleted.borrow().as_slice(), &[2]);
        assert!(!*backend.linked.borrow());
    }

    #[test]
    fn test_vertex_failure_stops_before_fragment() {
        let backend = FakeBackend::default();
        let err = build_program(&backend, "void main( {", FRAGMENT_SHADER).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: ShaderStage::Vertex, .. }));
        assert_eq!(backend.sources.borrow().iter().filter(|(id, _)| *id == 2).count(), 0);
    }

    #[test]
    fn test_link_failure_surfaces_log() {
        let backend = FakeBackend {
            fail_link: true,
            ..Default::default()
        };
        let err = build_program(&backend, VERTEX_SHADER, FRAGMENT_SHADER).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().is_some_and(|log| log.contains("vTextureCoord")));
    }

    #[test]
    fn test_empty_log_is_replaced() {
        assert_eq!(non_empty("  \n".to_string()), "(no info log)");
        assert_eq!(non_empty("bad".to_string()), "bad");
    }

    #[test]
    fn test_sources_declare_expected_names() {
        for name in [ATTRIB_POSITION, ATTRIB_TEXTURE_COORD, UNIFORM_PROJECTION, UNIFORM_MODEL_VIEW] {
            assert!(VERTEX_SHADER.contains(name), "{}", name);
        }
        assert!(FRAGMENT_SHADER.contains(UNIFORM_SAMPLER));
    }
}
