/*!
# GLES Context

Shader object lifecycle for an OpenGL ES 2.0 style context.

This crate implements the shader half of a GLES front end: creating,
sourcing, compiling, querying and deleting shader objects inside a handle
namespace shared with programs. The shader compiler is a pluggable
capability that is created on first use, can be released at any time, and
is rebound to every live object whenever it is recreated.

## Architecture

- **Context**: GL-style entry points, error slot, capability gating
- **ResourceManager**: slot-map storage, shared handle namespace, purge list
- **Shader / ShaderProgram**: per-object state and attachment counting
- **ShaderCompiler**: translator trait, with `ReferenceCompiler` as default
- **CommandSubmitter**: backend hook used to flush in-flight draws before
  an object is destroyed

Entry points never fail loudly: errors are recorded and read back through
`Context::get_error`, exactly as a GL application expects.
*/

// Internal modules
mod error;
pub mod log;
pub mod types;
pub mod utils;
pub mod resource;
pub mod compiler;
pub mod config;
pub mod context;
pub mod query;
pub mod submission;

// Main gles namespace module
pub mod gles {
    // Error types
    pub use crate::error::{Error, Result};

    // Context and its configuration
    pub use crate::context::Context;
    pub use crate::config::ContextConfig;

    // Compiler capability
    pub use crate::compiler::{
        CompileOutput, CompilerFactory, CompilerRef, ReferenceCompiler, ShaderCompiler,
        REFERENCE_BINARY_MAGIC,
    };

    // API scalar types and enumerants
    pub use crate::types::*;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Backend submission sub-module
    pub mod submission {
        pub use crate::submission::{CommandSubmitter, NullSubmitter};
    }
}
