/// Shader program creation on a WebGL context
use texcube_core::shader::{
    self, ShaderBackend, ShaderStage, ATTRIB_POSITION, ATTRIB_TEXTURE_COORD, UNIFORM_MODEL_VIEW,
    UNIFORM_PROJECTION, UNIFORM_SAMPLER,
};
use texcube_core::{SetupError, ShaderError};
use web_sys::{WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation};

/// [`ShaderBackend`] over a borrowed WebGL context.
pub struct WebGlBackend<'a> {
    gl: &'a GL,
}

impl<'a> WebGlBackend<'a> {
    pub fn new(gl: &'a GL) -> Self {
        Self { gl }
    }
}

impl ShaderBackend for WebGlBackend<'_> {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        self.gl.create_shader(kind)
    }

    fn compile_shader(&self, shader: &WebGlShader, source: &str) -> bool {
        self.gl.shader_source(shader, source);
        self.gl.compile_shader(shader);
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.gl.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) -> bool {
        self.gl.link_program(program);
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.gl.get_program_info_log(program).unwrap_or_default()
    }
}

/// Linked program plus the locations the draw call binds every frame.
pub struct ProgramInfo {
    pub program: WebGlProgram,
    pub vertex_position: u32,
    pub texture_coord: u32,
    pub projection_matrix: Option<WebGlUniformLocation>,
    pub model_view_matrix: Option<WebGlUniformLocation>,
    pub sampler: Option<WebGlUniformLocation>,
}

impl ProgramInfo {
    /// Build the demo's program and look up its attributes and uniforms.
    pub fn new(gl: &GL) -> Result<Self, SetupError> {
        let program = shader::build_program(
            &WebGlBackend::new(gl),
            shader::VERTEX_SHADER,
            shader::FRAGMENT_SHADER,
        )?;

        let attrib = |name: &str| -> Result<u32, SetupError> {
            let location = gl.get_attrib_location(&program, name);
            u32::try_from(location).map_err(|_| {
                SetupError::Shader(ShaderError::Link {
                    log: format!("attribute `{}` is not active", name),
                })
            })
        };
        let vertex_position = attrib(ATTRIB_POSITION)?;
        let texture_coord = attrib(ATTRIB_TEXTURE_COORD)?;

        Ok(Self {
            vertex_position,
            texture_coord,
            projection_matrix: gl.get_uniform_location(&program, UNIFORM_PROJECTION),
            model_view_matrix: gl.get_uniform_location(&program, UNIFORM_MODEL_VIEW),
            sampler: gl.get_uniform_location(&program, UNIFORM_SAMPLER),
            program,
        })
    }
}
