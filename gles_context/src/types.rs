/// Scalar aliases and enumerants of the fixed API surface
///
/// Values match the OpenGL ES 2.0 headers so that handles, enumerants and
/// error codes round-trip unchanged through an FFI layer.

pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLboolean = u8;
pub type GLchar = u8;

// ===== BOOLEANS =====

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

// ===== ERRORS =====

pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_ENUM: GLenum = 0x0500;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;

// ===== SHADER KINDS =====

pub const GL_FRAGMENT_SHADER: GLenum = 0x8B30;
pub const GL_VERTEX_SHADER: GLenum = 0x8B31;

// ===== SHADER / PROGRAM QUERIES =====

pub const GL_SHADER_TYPE: GLenum = 0x8B4F;
pub const GL_DELETE_STATUS: GLenum = 0x8B80;
pub const GL_COMPILE_STATUS: GLenum = 0x8B81;
pub const GL_LINK_STATUS: GLenum = 0x8B82;
pub const GL_INFO_LOG_LENGTH: GLenum = 0x8B84;
pub const GL_ATTACHED_SHADERS: GLenum = 0x8B85;
pub const GL_SHADER_SOURCE_LENGTH: GLenum = 0x8B88;

// ===== PRECISION TYPES =====

pub const GL_LOW_FLOAT: GLenum = 0x8DF0;
pub const GL_MEDIUM_FLOAT: GLenum = 0x8DF1;
pub const GL_HIGH_FLOAT: GLenum = 0x8DF2;
pub const GL_LOW_INT: GLenum = 0x8DF3;
pub const GL_MEDIUM_INT: GLenum = 0x8DF4;
pub const GL_HIGH_INT: GLenum = 0x8DF5;

// ===== CAPABILITIES =====

pub const GL_SHADER_BINARY_FORMATS: GLenum = 0x8DF8;
pub const GL_NUM_SHADER_BINARY_FORMATS: GLenum = 0x8DF9;
pub const GL_SHADER_COMPILER: GLenum = 0x8DFA;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderKind {
    /// Map an API enumerant to a shader stage, `None` if unrecognised
    pub fn from_gl(kind: GLenum) -> Option<Self> {
        match kind {
            GL_VERTEX_SHADER => Some(ShaderKind::Vertex),
            GL_FRAGMENT_SHADER => Some(ShaderKind::Fragment),
            _ => None,
        }
    }

    /// API enumerant for this stage
    pub fn to_gl(self) -> GLenum {
        match self {
            ShaderKind::Vertex => GL_VERTEX_SHADER,
            ShaderKind::Fragment => GL_FRAGMENT_SHADER,
        }
    }
}

pub(crate) fn gl_bool(value: bool) -> GLboolean {
    if value { GL_TRUE } else { GL_FALSE }
}
