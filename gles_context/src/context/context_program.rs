/// Program entry points
///
/// Programs are the only holders of shader references: attaching keeps a
/// deleted shader alive, and detaching (directly or by deleting the
/// program) is what lets a purged shader be reclaimed.

use super::Context;
use crate::error::{Error, Result};
use crate::query;
use crate::resource::{ProgramKey, ShaderProgram, ShadingObjectKind};
use crate::types::*;

impl Context {
    /// glCreateProgram
    pub fn create_program(&mut self) -> GLuint {
        crate::gl_trace!("gles::Context", "glCreateProgram()");
        let handle = self
            .resources
            .register_program(ShaderProgram::new(self.compiler.current()));
        crate::gl_debug!("gles::Context", "Created program {}", handle);
        handle
    }

    /// glDeleteProgram: detaches every shader, then frees the program
    pub fn delete_program(&mut self, program: GLuint) {
        crate::gl_trace!("gles::Context", "glDeleteProgram({})", program);
        let result = self.try_delete_program(program);
        self.record(result);
    }

    fn try_delete_program(&mut self, program: GLuint) -> Result<()> {
        if program == 0 {
            return Ok(());
        }

        let key = self.resources.resolve_program(program)?;
        self.flush_if_drawing();

        let detached = {
            let entity = self.resources.program_mut(key).ok_or(Error::InvalidValue)?;
            entity.mark_for_deletion();
            entity.detach_all()
        };
        for shader in detached {
            self.resources.release_shader_reference(shader);
        }

        self.resources.erase_shading_object(program);
        self.resources.deallocate_program(key);
        crate::gl_debug!("gles::Context", "Program {} freed", program);
        Ok(())
    }

    /// glAttachShader
    pub fn attach_shader(&mut self, program: GLuint, shader: GLuint) {
        crate::gl_trace!("gles::Context", "glAttachShader({}, {})", program, shader);
        let result = self.try_attach_shader(program, shader);
        self.record(result);
    }

    fn try_attach_shader(&mut self, program: GLuint, shader: GLuint) -> Result<()> {
        let program_key = self.resources.resolve_program(program)?;
        let shader_key = self.resources.resolve_shader(shader)?;
        let kind = self
            .resources
            .shader(shader_key)
            .ok_or(Error::InvalidValue)?
            .kind();

        let entity = self.resources.program_mut(program_key).ok_or(Error::InvalidValue)?;
        if entity.is_attached(shader_key) || !entity.attach(kind, shader_key) {
            crate::gl_bail!(
                Error::InvalidOperation,
                "Program {} already has a {:?} shader attached",
                program,
                kind
            );
        }

        self.resources.add_shader_reference(shader_key);
        Ok(())
    }

    /// glDetachShader: may reclaim a shader that was deleted while attached
    pub fn detach_shader(&mut self, program: GLuint, shader: GLuint) {
        crate::gl_trace!("gles::Context", "glDetachShader({}, {})", program, shader);
        let result = self.try_detach_shader(program, shader);
        self.record(result);
    }

    fn try_detach_shader(&mut self, program: GLuint, shader: GLuint) -> Result<()> {
        let program_key = self.resources.resolve_program(program)?;
        let shader_key = self.resources.resolve_shader(shader)?;

        let entity = self.resources.program_mut(program_key).ok_or(Error::InvalidValue)?;
        if !entity.detach(shader_key) {
            crate::gl_bail!(
                Error::InvalidOperation,
                "Shader {} is not attached to program {}",
                shader,
                program
            );
        }

        if self.resources.release_reclaims_shader(shader_key) {
            self.flush_if_drawing();
        }
        self.resources.release_shader_reference(shader_key);
        Ok(())
    }

    /// glLinkProgram
    ///
    /// Like compilation, linking brings the compiler up on first use.
    pub fn link_program(&mut self, program: GLuint) {
        crate::gl_trace!("gles::Context", "glLinkProgram({})", program);
        let result = self.resources.resolve_program(program);
        if let Some(key) = self.record(result) {
            if self.config.shader_compiler {
                self.compiler.ensure_created(&mut self.resources);
            }
            let linked = self.resources.link_program(key);
            crate::gl_debug!("gles::Context", "Program {} link status: {}", program, linked);
        }
    }

    /// glIsProgram
    pub fn is_program(&self, program: GLuint) -> GLboolean {
        crate::gl_trace!("gles::Context", "glIsProgram({})", program);
        gl_bool(self.resources.is_shading_object(program, ShadingObjectKind::Program))
    }

    /// glGetProgramiv
    pub fn get_programiv(&mut self, program: GLuint, pname: GLenum, params: &mut GLint) {
        crate::gl_trace!("gles::Context", "glGetProgramiv({}, 0x{:04X})", program, pname);
        let result = self.try_get_programiv(program, pname);
        if let Some(value) = self.record(result) {
            *params = value;
        }
    }

    fn try_get_programiv(&self, program: GLuint, pname: GLenum) -> Result<GLint> {
        let key = self.resources.resolve_program(program)?;
        let entity = self.resources.program(key).ok_or(Error::InvalidValue)?;

        match pname {
            GL_LINK_STATUS => Ok(gl_bool(entity.is_linked()) as GLint),
            GL_DELETE_STATUS => Ok(gl_bool(entity.is_marked_for_deletion()) as GLint),
            GL_ATTACHED_SHADERS => Ok(entity.attached_count()),
            GL_INFO_LOG_LENGTH => Ok(entity.info_log_length()),
            _ => crate::gl_bail!(Error::InvalidEnum, "Unknown program parameter 0x{:04X}", pname),
        }
    }

    /// glGetProgramInfoLog
    pub fn get_program_info_log(
        &mut self,
        program: GLuint,
        bufsize: GLsizei,
        length: Option<&mut GLsizei>,
        infolog: &mut [GLchar],
    ) {
        crate::gl_trace!("gles::Context", "glGetProgramInfoLog({}, {})", program, bufsize);
        let result = self.resolve_program_for_log(program, bufsize);
        if let Some(key) = self.record(result) {
            let text = self
                .resources
                .program(key)
                .and_then(ShaderProgram::info_log)
                .map(str::as_bytes);
            query::write_terminated(text, bufsize, length, infolog);
        }
    }

    fn resolve_program_for_log(&self, program: GLuint, bufsize: GLsizei) -> Result<ProgramKey> {
        if bufsize < 0 {
            crate::gl_bail!(Error::InvalidValue, "Negative buffer size {}", bufsize);
        }
        self.resources.resolve_program(program)
    }
}
