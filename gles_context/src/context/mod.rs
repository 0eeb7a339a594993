//! GLES context
//!
//! Owns the shading-object store, the compiler binding and the last-error
//! slot. Entry points never return errors to the application: failures are
//! recorded and a neutral value is returned, as the API requires.
//! Entry points are split by object family across the submodules.

mod context_shader;
mod context_program;

use crate::compiler::CompilerBinding;
use crate::config::ContextConfig;
use crate::error::{Error, Result};
use crate::resource::ResourceManager;
use crate::submission::{CommandSubmitter, NullSubmitter};
use crate::types::{
    GLboolean, GLenum, GLint, gl_bool,
    GL_NO_ERROR, GL_NUM_SHADER_BINARY_FORMATS, GL_SHADER_BINARY_FORMATS, GL_SHADER_COMPILER,
};

pub struct Context {
    config: ContextConfig,
    resources: ResourceManager,
    compiler: CompilerBinding,
    submitter: Box<dyn CommandSubmitter>,
    error: Option<Error>,
}

impl Context {
    /// Create a context without a rendering backend
    pub fn new(config: ContextConfig) -> Self {
        Self::with_submitter(config, Box::new(NullSubmitter))
    }

    /// Create a context whose deletions synchronise with `submitter`
    pub fn with_submitter(config: ContextConfig, submitter: Box<dyn CommandSubmitter>) -> Self {
        crate::gl_info!(
            "gles::Context",
            "Context created (shader compiler {})",
            if config.shader_compiler { "supported" } else { "unsupported" }
        );
        Self {
            compiler: CompilerBinding::new(config.compiler_factory.clone()),
            config,
            resources: ResourceManager::new(),
            submitter,
            error: None,
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Read-only view of the object store
    pub fn resource_manager(&self) -> &ResourceManager {
        &self.resources
    }

    /// Whether a compiler instance currently exists
    pub fn has_compiler_instance(&self) -> bool {
        self.compiler.is_created()
    }

    // ===== ERRORS =====

    /// Return and clear the recorded error (`GL_NO_ERROR` if none)
    pub fn get_error(&mut self) -> GLenum {
        self.error.take().map_or(GL_NO_ERROR, Error::code)
    }

    /// Keep the first error until it is read back
    pub(crate) fn record_error(&mut self, error: Error) {
        crate::gl_warn!("gles::Context", "Recorded {}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Run an entry point body, folding a failure into the error slot
    pub(crate) fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.record_error(error);
                None
            }
        }
    }

    // ===== STATE QUERIES =====

    /// Boolean state query; only `GL_SHADER_COMPILER` is served here
    pub fn get_booleanv(&mut self, pname: GLenum, params: &mut GLboolean) {
        crate::gl_trace!("gles::Context", "glGetBooleanv(0x{:04X})", pname);
        match pname {
            GL_SHADER_COMPILER => *params = gl_bool(self.config.shader_compiler),
            _ => self.record_error(Error::InvalidEnum),
        }
    }

    /// Integer state query for the shader binary capability
    ///
    /// No binary formats are supported, so `GL_SHADER_BINARY_FORMATS`
    /// writes nothing.
    pub fn get_integerv(&mut self, pname: GLenum, params: &mut [GLint]) {
        crate::gl_trace!("gles::Context", "glGetIntegerv(0x{:04X})", pname);
        match pname {
            GL_NUM_SHADER_BINARY_FORMATS => {
                if let Some(first) = params.first_mut() {
                    *first = 0;
                }
            }
            GL_SHADER_BINARY_FORMATS => {}
            _ => self.record_error(Error::InvalidEnum),
        }
    }

    /// Capability gate for compiler-dependent entry points
    ///
    /// Pure check: the caller records the error and stops before mutating.
    pub(crate) fn require_shader_compiler(&self) -> Result<()> {
        if !self.config.shader_compiler {
            crate::gl_bail!(Error::InvalidOperation, "No shader compiler support in this context");
        }
        Ok(())
    }

    /// Flush pending rendering if a draw is being recorded
    pub(crate) fn flush_if_drawing(&mut self) {
        if self.submitter.is_in_draw_state() {
            crate::gl_debug!("gles::Context", "Flushing in-flight draws before object deletion");
            self.submitter.flush();
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(ContextConfig::default())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
