/// Shader program object
///
/// Only the parts that interact with shader lifetimes live here: stage
/// attachments (which hold shaders alive past deletion), the compiler
/// reference, and a structural link check.

use crate::compiler::CompilerRef;
use crate::types::{GLint, GLuint, ShaderKind};
use super::shader::{terminated_length, Shader};
use super::ShaderKey;

pub struct ShaderProgram {
    name: GLuint,
    vertex: Option<ShaderKey>,
    fragment: Option<ShaderKey>,
    linked: bool,
    info_log: Option<String>,
    marked_for_deletion: bool,
    compiler: Option<CompilerRef>,
}

impl ShaderProgram {
    pub fn new(compiler: Option<CompilerRef>) -> Self {
        Self {
            name: 0,
            vertex: None,
            fragment: None,
            linked: false,
            info_log: None,
            marked_for_deletion: false,
            compiler,
        }
    }

    pub fn name(&self) -> GLuint {
        self.name
    }

    pub(crate) fn set_name(&mut self, name: GLuint) {
        self.name = name;
    }

    pub(crate) fn set_compiler(&mut self, compiler: Option<CompilerRef>) {
        self.compiler = compiler;
    }

    pub fn has_compiler(&self) -> bool {
        self.compiler.as_ref().is_some_and(|c| c.strong_count() > 0)
    }

    // ===== ATTACHMENTS =====

    /// Shader attached to the given stage
    pub fn attached(&self, kind: ShaderKind) -> Option<ShaderKey> {
        match kind {
            ShaderKind::Vertex => self.vertex,
            ShaderKind::Fragment => self.fragment,
        }
    }

    /// All attached shaders
    pub fn attached_shaders(&self) -> impl Iterator<Item = ShaderKey> + '_ {
        self.vertex.iter().chain(self.fragment.iter()).copied()
    }

    pub fn attached_count(&self) -> GLint {
        self.attached_shaders().count() as GLint
    }

    pub fn is_attached(&self, key: ShaderKey) -> bool {
        self.vertex == Some(key) || self.fragment == Some(key)
    }

    /// Attach `key` to `kind`'s slot; false if the slot is taken
    pub(crate) fn attach(&mut self, kind: ShaderKind, key: ShaderKey) -> bool {
        let slot = match kind {
            ShaderKind::Vertex => &mut self.vertex,
            ShaderKind::Fragment => &mut self.fragment,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(key);
        true
    }

    /// Detach `key`; false if it was not attached
    pub(crate) fn detach(&mut self, key: ShaderKey) -> bool {
        if self.vertex == Some(key) {
            self.vertex = None;
            true
        } else if self.fragment == Some(key) {
            self.fragment = None;
            true
        } else {
            false
        }
    }

    /// Remove every attachment, returning the detached keys
    pub(crate) fn detach_all(&mut self) -> Vec<ShaderKey> {
        let keys: Vec<ShaderKey> = self.attached_shaders().collect();
        self.vertex = None;
        self.fragment = None;
        keys
    }

    // ===== LINKING =====

    /// Check that both stages are attached and compiled
    ///
    /// Interface matching and backend pipeline creation happen elsewhere.
    pub(crate) fn link(&mut self, vertex: Option<&Shader>, fragment: Option<&Shader>) {
        let mut problems = Vec::new();

        if !self.has_compiler() {
            problems.push("no shader compiler bound".to_string());
        }
        for (stage, shader) in [("vertex", vertex), ("fragment", fragment)] {
            match shader {
                None => problems.push(format!("missing {} shader", stage)),
                Some(s) if !s.is_compiled() => {
                    problems.push(format!("{} shader {} is not compiled", stage, s.name()))
                }
                Some(_) => {}
            }
        }

        self.linked = problems.is_empty();
        self.info_log = if self.linked {
            None
        } else {
            Some(
                problems
                    .iter()
                    .map(|p| format!("ERROR: Linking: {}\n", p))
                    .collect(),
            )
        };
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn info_log(&self) -> Option<&str> {
        self.info_log.as_deref()
    }

    pub fn info_log_length(&self) -> GLint {
        terminated_length(self.info_log.as_deref().map(str::as_bytes))
    }

    // ===== DELETION =====

    pub(crate) fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
