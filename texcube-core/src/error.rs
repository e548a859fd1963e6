/// Startup errors
use crate::shader::ShaderStage;

/// Failure while turning the fixed shader sources into a program.
///
/// Any of these is fatal: the caller reports it and never enters the render
/// loop.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("could not create {0} object")]
    Create(&'static str),
    #[error("An error occurred compiling the {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("Unable to initialize the shader program: {log}")]
    Link { log: String },
}

impl ShaderError {
    /// Compiler or linker output attached to the failure, if any.
    pub fn log(&self) -> Option<&str> {
        match self {
            ShaderError::Create(_) => None,
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => Some(log.as_str()),
        }
    }
}

/// Errors that abort demo startup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no global window available")]
    NoWindow,
    #[error("no document on the window")]
    NoDocument,
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),
    #[error("Unable to initialize WebGL. Your browser or machine may not support it.")]
    NoContext,
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("could not allocate {0}")]
    Allocation(&'static str),
    #[error("browser call failed: {0}")]
    Browser(String),
}

impl SetupError {
    /// Whether this failure is one the user is told about with an alert.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, SetupError::NoContext | SetupError::Shader(_))
    }
}
