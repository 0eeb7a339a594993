/// Shader entry points
///
/// Each public entry point logs a trace line, runs a `Result`-returning
/// body, and folds any failure into the error slot. Bodies validate every
/// argument before the first mutation.

use super::Context;
use crate::error::{Error, Result};
use crate::query::{self, PrecisionFormat};
use crate::resource::{Shader, ShaderKey, ShadingObjectKind, SourceFragment};
use crate::types::*;

impl Context {
    /// glCreateShader: returns 0 and records `GL_INVALID_ENUM` for an unknown kind
    pub fn create_shader(&mut self, kind: GLenum) -> GLuint {
        crate::gl_trace!("gles::Context", "glCreateShader(0x{:04X})", kind);

        let Some(kind) = ShaderKind::from_gl(kind) else {
            self.record_error(Error::InvalidEnum);
            return 0;
        };

        let handle = self
            .resources
            .register_shader(Shader::new(kind, self.compiler.current()));
        crate::gl_debug!("gles::Context", "Created {:?} shader {}", kind, handle);
        handle
    }

    /// glDeleteShader: frees the shader now, or parks it in the purge list
    /// while a program still has it attached
    pub fn delete_shader(&mut self, shader: GLuint) {
        crate::gl_trace!("gles::Context", "glDeleteShader({})", shader);
        let result = self.try_delete_shader(shader);
        self.record(result);
    }

    fn try_delete_shader(&mut self, shader: GLuint) -> Result<()> {
        if shader == 0 {
            return Ok(());
        }

        let key = self.resources.resolve_shader(shader)?;
        let free = {
            let entity = self.resources.shader_mut(key).ok_or(Error::InvalidValue)?;
            entity.mark_for_deletion();
            entity.is_free_for_deletion()
        };

        if free {
            self.flush_if_drawing();
            self.resources.erase_shading_object(shader);
            self.resources.deallocate_shader(key);
            crate::gl_debug!("gles::Context", "Shader {} freed", shader);
        } else {
            self.resources.add_to_purge_list(key);
        }
        Ok(())
    }

    /// glShaderSource
    ///
    /// `lengths[i] < 0` (or no `lengths` at all) means fragment `i` is read
    /// up to its NUL terminator.
    pub fn shader_source(
        &mut self,
        shader: GLuint,
        count: GLsizei,
        strings: &[&[GLchar]],
        lengths: Option<&[GLint]>,
    ) {
        crate::gl_trace!("gles::Context", "glShaderSource({}, {})", shader, count);
        let result = self.try_shader_source(shader, count, strings, lengths);
        self.record(result);
    }

    fn try_shader_source(
        &mut self,
        shader: GLuint,
        count: GLsizei,
        strings: &[&[GLchar]],
        lengths: Option<&[GLint]>,
    ) -> Result<()> {
        self.require_shader_compiler()?;
        let key = self.resources.resolve_shader(shader)?;

        let Ok(count) = usize::try_from(count) else {
            crate::gl_bail!(Error::InvalidValue, "Negative source fragment count {}", count);
        };
        if strings.len() < count || lengths.is_some_and(|l| l.len() < count) {
            crate::gl_bail!(Error::InvalidValue, "Fewer source fragments supplied than count {}", count);
        }

        let fragments: Vec<SourceFragment<'_>> = strings[..count]
            .iter()
            .copied()
            .enumerate()
            .map(|(i, text)| match lengths.map(|l| l[i]) {
                Some(len) if len >= 0 => SourceFragment::with_length(text, len as usize),
                _ => SourceFragment::terminated(text),
            })
            .collect();

        if let Some(entity) = self.resources.shader_mut(key) {
            entity.set_source(&fragments);
        }
        Ok(())
    }

    /// glCompileShader
    ///
    /// Creates the compiler on first use, rebinding every existing shader
    /// and program before compiling. A shader without source is left alone.
    pub fn compile_shader(&mut self, shader: GLuint) {
        crate::gl_trace!("gles::Context", "glCompileShader({})", shader);
        let result = self.try_compile_shader(shader);
        self.record(result);
    }

    fn try_compile_shader(&mut self, shader: GLuint) -> Result<()> {
        self.require_shader_compiler()?;
        let key = self.resources.resolve_shader(shader)?;

        if !self.resources.shader(key).is_some_and(Shader::has_source) {
            return Ok(());
        }

        self.compiler.ensure_created(&mut self.resources);
        if let Some(entity) = self.resources.shader_mut(key) {
            entity.compile();
        }
        Ok(())
    }

    /// glGetShaderiv
    pub fn get_shaderiv(&mut self, shader: GLuint, pname: GLenum, params: &mut GLint) {
        crate::gl_trace!("gles::Context", "glGetShaderiv({}, 0x{:04X})", shader, pname);
        let result = self.try_get_shaderiv(shader, pname);
        if let Some(value) = self.record(result) {
            *params = value;
        }
    }

    fn try_get_shaderiv(&self, shader: GLuint, pname: GLenum) -> Result<GLint> {
        let key = self.resources.resolve_shader(shader)?;
        let entity = self.resources.shader(key).ok_or(Error::InvalidValue)?;

        match pname {
            GL_COMPILE_STATUS => Ok(gl_bool(entity.is_compiled()) as GLint),
            GL_DELETE_STATUS => Ok(gl_bool(entity.is_marked_for_deletion()) as GLint),
            GL_INFO_LOG_LENGTH => Ok(entity.info_log_length()),
            GL_SHADER_SOURCE_LENGTH => Ok(entity.source_length()),
            GL_SHADER_TYPE => Ok(entity.kind().to_gl() as GLint),
            _ => crate::gl_bail!(Error::InvalidEnum, "Unknown shader parameter 0x{:04X}", pname),
        }
    }

    /// glGetShaderInfoLog
    pub fn get_shader_info_log(
        &mut self,
        shader: GLuint,
        bufsize: GLsizei,
        length: Option<&mut GLsizei>,
        infolog: &mut [GLchar],
    ) {
        crate::gl_trace!("gles::Context", "glGetShaderInfoLog({}, {})", shader, bufsize);
        let result = self.resolve_for_string_query(shader, bufsize);
        if let Some(key) = self.record(result) {
            let text = self.resources.shader(key).and_then(Shader::info_log).map(str::as_bytes);
            query::write_terminated(text, bufsize, length, infolog);
        }
    }

    /// glGetShaderSource
    pub fn get_shader_source(
        &mut self,
        shader: GLuint,
        bufsize: GLsizei,
        length: Option<&mut GLsizei>,
        source: &mut [GLchar],
    ) {
        crate::gl_trace!("gles::Context", "glGetShaderSource({}, {})", shader, bufsize);
        let result = self.resolve_for_string_query(shader, bufsize);
        if let Some(key) = self.record(result) {
            let text = self.resources.shader(key).and_then(Shader::source);
            query::write_terminated(text, bufsize, length, source);
        }
    }

    fn resolve_for_string_query(&self, shader: GLuint, bufsize: GLsizei) -> Result<ShaderKey> {
        if bufsize < 0 {
            crate::gl_bail!(Error::InvalidValue, "Negative buffer size {}", bufsize);
        }
        self.resources.resolve_shader(shader)
    }

    /// glGetShaderPrecisionFormat
    pub fn get_shader_precision_format(
        &mut self,
        shadertype: GLenum,
        precisiontype: GLenum,
        range: &mut [GLint; 2],
        precision: &mut GLint,
    ) {
        crate::gl_trace!(
            "gles::Context",
            "glGetShaderPrecisionFormat(0x{:04X}, 0x{:04X})",
            shadertype,
            precisiontype
        );
        let result = self.try_shader_precision_format(shadertype, precisiontype);
        if let Some(format) = self.record(result) {
            *range = format.range;
            *precision = format.precision;
        }
    }

    fn try_shader_precision_format(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
    ) -> Result<PrecisionFormat> {
        self.require_shader_compiler()?;
        if ShaderKind::from_gl(shadertype).is_none() {
            crate::gl_bail!(Error::InvalidEnum, "Unknown shader type 0x{:04X}", shadertype);
        }
        query::precision_format(precisiontype)
    }

    /// glIsShader: true for any registered shader handle, including
    /// shaders waiting in the purge list
    pub fn is_shader(&self, shader: GLuint) -> GLboolean {
        crate::gl_trace!("gles::Context", "glIsShader({})", shader);
        gl_bool(self.resources.is_shading_object(shader, ShadingObjectKind::Shader))
    }

    /// glShaderBinary
    ///
    /// No binary formats are advertised (`GL_NUM_SHADER_BINARY_FORMATS` is
    /// 0), so uploads are accepted and ignored without touching any shader.
    pub fn shader_binary(&mut self, shaders: &[GLuint], binaryformat: GLenum, binary: &[u8]) {
        crate::gl_trace!(
            "gles::Context",
            "glShaderBinary({} shaders, 0x{:04X}, {} bytes)",
            shaders.len(),
            binaryformat,
            binary.len()
        );
        crate::gl_warn!("gles::Context", "glShaderBinary is not implemented, upload ignored");
    }

    /// glReleaseShaderCompiler
    ///
    /// Destroys the compiler; the next compile creates and rebinds a new one.
    pub fn release_shader_compiler(&mut self) {
        crate::gl_trace!("gles::Context", "glReleaseShaderCompiler()");
        let result = self.require_shader_compiler();
        if self.record(result).is_some() {
            self.compiler.release();
        }
    }
}
