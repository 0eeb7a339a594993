//! Shader compiler capability
//!
//! The context owns at most one compiler instance. Shaders and programs only
//! hold `Weak` references to it, so releasing the compiler silently turns
//! their compile requests into no-ops until a new instance is created and
//! pushed back out to every live object by [`CompilerBinding::rebind_all`].

mod reference_compiler;
#[cfg(test)]
pub(crate) mod mock_compiler;

pub use reference_compiler::{ReferenceCompiler, REFERENCE_BINARY_MAGIC};

use std::fmt;
use std::sync::{Arc, Weak};
use crate::resource::ResourceManager;
use crate::types::ShaderKind;

/// Outcome of a single compilation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    /// Whether translation produced a usable binary
    pub success: bool,
    /// Backend binary (present on success)
    pub binary: Option<Vec<u8>>,
    /// Diagnostics, if the translator produced any
    pub info_log: Option<String>,
}

/// Source-to-binary translator
///
/// Implemented by backend translators (e.g. a GLSL ES to SPIR-V front end).
/// The context treats it as an opaque capability.
pub trait ShaderCompiler: Send + Sync {
    /// Translate `source` for the given stage
    fn compile(&self, kind: ShaderKind, source: &str) -> CompileOutput;
}

/// Weak handle to the current compiler held by shaders and programs
pub type CompilerRef = Weak<dyn ShaderCompiler>;

/// Builds a fresh compiler instance on demand
pub type CompilerFactory = Arc<dyn Fn() -> Arc<dyn ShaderCompiler> + Send + Sync>;

/// Context-owned compiler slot
pub struct CompilerBinding {
    instance: Option<Arc<dyn ShaderCompiler>>,
    factory: CompilerFactory,
}

impl CompilerBinding {
    /// Create an empty binding; no compiler exists until `ensure_created`
    pub fn new(factory: CompilerFactory) -> Self {
        Self {
            instance: None,
            factory,
        }
    }

    /// Whether a compiler instance is currently alive
    pub fn is_created(&self) -> bool {
        self.instance.is_some()
    }

    /// Weak reference to the current instance, if any
    pub fn current(&self) -> Option<CompilerRef> {
        self.instance.as_ref().map(Arc::downgrade)
    }

    /// Create the compiler if needed and rebind every live shader and program
    ///
    /// Returns true if a new instance was created by this call.
    pub fn ensure_created(&mut self, resources: &mut ResourceManager) -> bool {
        if self.instance.is_some() {
            return false;
        }

        self.instance = Some((self.factory)());
        self.rebind_all(resources);
        crate::gl_debug!(
            "gles::Compiler",
            "Shader compiler created, rebound {} shaders and {} programs",
            resources.shader_count(),
            resources.program_count()
        );
        true
    }

    /// Point every live shader and program at the current instance
    pub fn rebind_all(&self, resources: &mut ResourceManager) {
        let current = self.current();
        for (_, shader) in resources.shaders_mut() {
            shader.set_compiler(current.clone());
        }
        for (_, program) in resources.programs_mut() {
            program.set_compiler(current.clone());
        }
    }

    /// Destroy the compiler instance
    ///
    /// Objects are not rebound; their weak references simply stop upgrading.
    pub fn release(&mut self) {
        if self.instance.take().is_some() {
            crate::gl_debug!("gles::Compiler", "Shader compiler released");
        }
    }
}

impl fmt::Debug for CompilerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilerBinding")
            .field("created", &self.is_created())
            .finish()
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
