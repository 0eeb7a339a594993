/// Context configuration

use std::fmt;
use std::sync::Arc;
use crate::compiler::{CompilerFactory, ReferenceCompiler, ShaderCompiler};

/// Creation-time settings of a [`Context`](crate::context::Context)
#[derive(Clone)]
pub struct ContextConfig {
    /// Value reported for `GL_SHADER_COMPILER`. When false, every entry
    /// point that needs the compiler fails with `GL_INVALID_OPERATION`.
    pub shader_compiler: bool,

    /// Builds the compiler the first time one is needed
    pub compiler_factory: CompilerFactory,
}

impl ContextConfig {
    /// Default configuration with a custom compiler
    pub fn with_compiler<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn ShaderCompiler> + Send + Sync + 'static,
    {
        Self {
            compiler_factory: Arc::new(factory),
            ..Self::default()
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            shader_compiler: true,
            compiler_factory: Arc::new(|| Arc::new(ReferenceCompiler::new()) as Arc<dyn ShaderCompiler>),
        }
    }
}

impl fmt::Debug for ContextConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextConfig")
            .field("shader_compiler", &self.shader_compiler)
            .finish_non_exhaustive()
    }
}
