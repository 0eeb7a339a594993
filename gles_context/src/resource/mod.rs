//! Resource management module
//!
//! Storage for shader and program objects, the shared handle namespace, and
//! the purge list of deletion-marked shaders still held by programs.

mod resource_manager;
pub mod shading_namespace;
pub mod shader;
pub mod program;

use slotmap::new_key_type;

new_key_type! {
    /// Storage key of a shader inside the resource manager
    pub struct ShaderKey;

    /// Storage key of a program inside the resource manager
    pub struct ProgramKey;
}

pub use resource_manager::ResourceManager;
pub use shading_namespace::{ShadingNamespace, ShadingObject, ShadingObjectKind};
pub use shader::{Shader, SourceFragment};
pub use program::ShaderProgram;
