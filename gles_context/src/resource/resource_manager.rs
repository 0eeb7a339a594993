/// Central store for shading objects.
///
/// Owns shader and program storage (slot maps with stable keys), the shared
/// handle namespace, and the purge list. Storage and namespace are managed
/// separately: a purged shader keeps its handle and storage until the last
/// program referencing it lets go.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::types::{GLuint, ShaderKind};
use super::{
    ProgramKey, ShaderKey, Shader, ShaderProgram,
    ShadingNamespace, ShadingObject, ShadingObjectKind,
};

pub struct ResourceManager {
    shaders: SlotMap<ShaderKey, Shader>,
    programs: SlotMap<ProgramKey, ShaderProgram>,
    namespace: ShadingNamespace,
    /// Shaders marked for deletion but still attached to a program
    purge_list: FxHashSet<ShaderKey>,
}

impl ResourceManager {
    /// Create a new empty resource manager
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            namespace: ShadingNamespace::new(),
            purge_list: FxHashSet::default(),
        }
    }

    // ===== SHADER STORAGE =====

    /// Store a shader and register it in the namespace, returning its handle
    pub fn register_shader(&mut self, shader: Shader) -> GLuint {
        let key = self.allocate_shader(shader);
        let handle = self.push_shading_object(ShadingObject::Shader(key));
        if let Some(shader) = self.shaders.get_mut(key) {
            shader.set_name(handle);
        }
        handle
    }

    pub fn allocate_shader(&mut self, shader: Shader) -> ShaderKey {
        self.shaders.insert(shader)
    }

    /// Free shader storage (the namespace entry must be erased separately)
    pub fn deallocate_shader(&mut self, key: ShaderKey) -> Option<Shader> {
        self.purge_list.remove(&key);
        self.shaders.remove(key)
    }

    pub fn shader(&self, key: ShaderKey) -> Option<&Shader> {
        self.shaders.get(key)
    }

    pub fn shader_mut(&mut self, key: ShaderKey) -> Option<&mut Shader> {
        self.shaders.get_mut(key)
    }

    /// Iterate over all live shaders (including purged ones)
    pub fn shaders_mut(&mut self) -> impl Iterator<Item = (ShaderKey, &mut Shader)> {
        self.shaders.iter_mut()
    }

    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    // ===== PROGRAM STORAGE =====

    /// Store a program and register it in the namespace, returning its handle
    pub fn register_program(&mut self, program: ShaderProgram) -> GLuint {
        let key = self.allocate_program(program);
        let handle = self.push_shading_object(ShadingObject::Program(key));
        if let Some(program) = self.programs.get_mut(key) {
            program.set_name(handle);
        }
        handle
    }

    pub fn allocate_program(&mut self, program: ShaderProgram) -> ProgramKey {
        self.programs.insert(program)
    }

    pub fn deallocate_program(&mut self, key: ProgramKey) -> Option<ShaderProgram> {
        self.programs.remove(key)
    }

    pub fn program(&self, key: ProgramKey) -> Option<&ShaderProgram> {
        self.programs.get(key)
    }

    pub fn program_mut(&mut self, key: ProgramKey) -> Option<&mut ShaderProgram> {
        self.programs.get_mut(key)
    }

    pub fn programs_mut(&mut self) -> impl Iterator<Item = (ProgramKey, &mut ShaderProgram)> {
        self.programs.iter_mut()
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Link a program against its currently attached shaders
    ///
    /// Returns the resulting link status, false for an unknown key.
    pub fn link_program(&mut self, key: ProgramKey) -> bool {
        let Some(program) = self.programs.get_mut(key) else {
            return false;
        };
        let vertex = program.attached(ShaderKind::Vertex).and_then(|k| self.shaders.get(k));
        let fragment = program.attached(ShaderKind::Fragment).and_then(|k| self.shaders.get(k));
        program.link(vertex, fragment);
        program.is_linked()
    }

    // ===== NAMESPACE =====

    pub fn push_shading_object(&mut self, object: ShadingObject) -> GLuint {
        self.namespace.push(object)
    }

    pub fn erase_shading_object(&mut self, handle: GLuint) -> Option<ShadingObject> {
        self.namespace.erase(handle)
    }

    pub fn shading_object(&self, handle: GLuint) -> Option<ShadingObject> {
        self.namespace.get(handle)
    }

    pub fn shading_object_exists(&self, handle: GLuint) -> bool {
        self.namespace.exists(handle)
    }

    pub fn shading_object_count(&self) -> GLuint {
        self.namespace.count()
    }

    pub fn is_shading_object(&self, handle: GLuint, kind: ShadingObjectKind) -> bool {
        self.namespace.is_kind(handle, kind)
    }

    /// Resolve a handle that must name a shader
    pub fn resolve_shader(&self, handle: GLuint) -> Result<ShaderKey> {
        match self.namespace.resolve(handle, ShadingObjectKind::Shader)? {
            ShadingObject::Shader(key) if self.shaders.contains_key(key) => Ok(key),
            _ => Err(Error::InvalidValue),
        }
    }

    /// Resolve a handle that must name a program
    pub fn resolve_program(&self, handle: GLuint) -> Result<ProgramKey> {
        match self.namespace.resolve(handle, ShadingObjectKind::Program)? {
            ShadingObject::Program(key) if self.programs.contains_key(key) => Ok(key),
            _ => Err(Error::InvalidValue),
        }
    }

    // ===== PURGE LIST =====

    /// Park a deletion-marked shader until its last program releases it
    pub fn add_to_purge_list(&mut self, key: ShaderKey) {
        if self.purge_list.insert(key) {
            crate::gl_debug!("gles::ResourceManager", "Shader {} deferred to purge list", self.shader_name(key));
        }
    }

    pub fn is_purged(&self, key: ShaderKey) -> bool {
        self.purge_list.contains(&key)
    }

    pub fn purge_list_len(&self) -> usize {
        self.purge_list.len()
    }

    /// Record that a program has attached `key`
    pub fn add_shader_reference(&mut self, key: ShaderKey) {
        if let Some(shader) = self.shaders.get_mut(key) {
            shader.add_reference();
        }
    }

    /// Whether releasing one reference to `key` would reclaim it
    ///
    /// True for a purged shader held by exactly one program. Callers use it
    /// to flush in-flight draws before the release frees the shader.
    pub fn release_reclaims_shader(&self, key: ShaderKey) -> bool {
        self.purge_list.contains(&key)
            && self
                .shaders
                .get(key)
                .is_some_and(|s| s.is_marked_for_deletion() && s.attach_count() == 1)
    }

    /// Record that a program has let go of `key`
    ///
    /// If this was the last reference to a purged shader, its handle is
    /// erased and its storage freed. Returns true when that happened.
    pub fn release_shader_reference(&mut self, key: ShaderKey) -> bool {
        let Some(shader) = self.shaders.get_mut(key) else {
            return false;
        };
        shader.release_reference();

        if !shader.is_free_for_deletion() || !self.purge_list.contains(&key) {
            return false;
        }

        let name = shader.name();
        self.erase_shading_object(name);
        self.deallocate_shader(key);
        crate::gl_debug!("gles::ResourceManager", "Purged shader {} reclaimed", name);
        true
    }

    fn shader_name(&self, key: ShaderKey) -> GLuint {
        self.shaders.get(key).map_or(0, Shader::name)
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
