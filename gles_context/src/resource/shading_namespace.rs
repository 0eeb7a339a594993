/// Shared handle space for shaders and programs
///
/// Both object kinds draw their handles from one numeric space, so every
/// lookup checks the entry's tag against the kind the caller expects.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::types::GLuint;
use crate::utils::HandleAllocator;
use super::{ProgramKey, ShaderKey};

/// Kind of object a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingObjectKind {
    Shader,
    Program,
}

/// Namespace entry: the object's kind together with its storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingObject {
    Shader(ShaderKey),
    Program(ProgramKey),
}

impl ShadingObject {
    pub fn kind(&self) -> ShadingObjectKind {
        match self {
            ShadingObject::Shader(_) => ShadingObjectKind::Shader,
            ShadingObject::Program(_) => ShadingObjectKind::Program,
        }
    }
}

#[derive(Default)]
pub struct ShadingNamespace {
    entries: FxHashMap<GLuint, ShadingObject>,
    handles: HandleAllocator,
}

impl ShadingNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object and return its new handle (never 0)
    pub fn push(&mut self, object: ShadingObject) -> GLuint {
        let handle = self.handles.alloc();
        self.entries.insert(handle, object);
        handle
    }

    /// Remove the entry; storage is not touched
    pub fn erase(&mut self, handle: GLuint) -> Option<ShadingObject> {
        let object = self.entries.remove(&handle)?;
        self.handles.free(handle);
        Some(object)
    }

    pub fn get(&self, handle: GLuint) -> Option<ShadingObject> {
        self.entries.get(&handle).copied()
    }

    pub fn exists(&self, handle: GLuint) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Upper bound of the handle range ever handed out
    pub fn count(&self) -> GLuint {
        self.handles.high_water_mark()
    }

    /// Number of registered handles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `handle` is registered with the given kind
    pub fn is_kind(&self, handle: GLuint, kind: ShadingObjectKind) -> bool {
        self.get(handle).is_some_and(|object| object.kind() == kind)
    }

    /// Resolve `handle`, requiring it to be of kind `expected`
    ///
    /// Unknown handles (0, never allocated, or erased) fail with
    /// `InvalidValue`; a handle of the other kind fails with
    /// `InvalidOperation`.
    pub fn resolve(&self, handle: GLuint, expected: ShadingObjectKind) -> Result<ShadingObject> {
        if handle == 0 || handle >= self.count() {
            crate::gl_bail!(Error::InvalidValue, "Handle {} is outside the allocated range", handle);
        }
        let Some(object) = self.get(handle) else {
            crate::gl_bail!(Error::InvalidValue, "Handle {} is not a live object", handle);
        };
        if object.kind() != expected {
            crate::gl_bail!(
                Error::InvalidOperation,
                "Handle {} is a {:?}, expected a {:?}",
                handle,
                object.kind(),
                expected
            );
        }
        Ok(object)
    }
}

#[cfg(test)]
#[path = "shading_namespace_tests.rs"]
mod tests;
