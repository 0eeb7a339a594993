/// Shader object
///
/// Compilation axis: no source -> source attached -> compiled / compile
/// failed. Any `set_source` drops back to "source attached" and discards the
/// previous binary and log.
///
/// Deletion axis: live -> marked for deletion -> freed (or parked in the
/// purge list while a program still has it attached). The mark is never
/// cleared, and a marked shader stays fully usable until it is freed.

use crate::compiler::CompilerRef;
use crate::types::{GLchar, GLint, GLuint, ShaderKind};

/// One fragment of a multi-part source upload
#[derive(Debug, Clone, Copy)]
pub struct SourceFragment<'a> {
    /// Raw fragment bytes
    pub text: &'a [u8],
    /// Byte count to take, or `None` to read up to the first NUL
    pub length: Option<usize>,
}

impl<'a> SourceFragment<'a> {
    /// Fragment read up to its terminator (or the end of `text`)
    pub fn terminated(text: &'a [u8]) -> Self {
        Self { text, length: None }
    }

    /// Fragment with an explicit byte count (clamped to `text`)
    pub fn with_length(text: &'a [u8], length: usize) -> Self {
        Self { text, length: Some(length) }
    }

    fn bytes(&self) -> &'a [u8] {
        match self.length {
            Some(len) => &self.text[..len.min(self.text.len())],
            None => {
                let end = self.text.iter().position(|&b| b == 0).unwrap_or(self.text.len());
                &self.text[..end]
            }
        }
    }
}

pub struct Shader {
    name: GLuint,
    kind: ShaderKind,
    /// Raw source bytes, kept exactly as uploaded
    source: Option<Vec<GLchar>>,
    binary: Option<Vec<u8>>,
    info_log: Option<String>,
    compiled: bool,
    marked_for_deletion: bool,
    /// Number of programs this shader is attached to
    attach_count: u32,
    compiler: Option<CompilerRef>,
}

impl Shader {
    /// Create a shader with no source
    pub fn new(kind: ShaderKind, compiler: Option<CompilerRef>) -> Self {
        Self {
            name: 0,
            kind,
            source: None,
            binary: None,
            info_log: None,
            compiled: false,
            marked_for_deletion: false,
            attach_count: 0,
            compiler,
        }
    }

    /// Handle this shader is registered under (0 until registered)
    pub fn name(&self) -> GLuint {
        self.name
    }

    pub(crate) fn set_name(&mut self, name: GLuint) {
        self.name = name;
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub(crate) fn set_compiler(&mut self, compiler: Option<CompilerRef>) {
        self.compiler = compiler;
    }

    /// Whether the compiler this shader points at is still alive
    pub fn has_compiler(&self) -> bool {
        self.compiler.as_ref().is_some_and(|c| c.strong_count() > 0)
    }

    // ===== SOURCE =====

    /// Replace the source with the concatenation of `fragments`
    pub fn set_source(&mut self, fragments: &[SourceFragment<'_>]) {
        let mut bytes = Vec::new();
        for fragment in fragments {
            bytes.extend_from_slice(fragment.bytes());
        }

        self.source = Some(bytes);
        self.compiled = false;
        self.binary = None;
        self.info_log = None;
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&[GLchar]> {
        self.source.as_deref()
    }

    /// Source length including the terminator, 0 without source
    pub fn source_length(&self) -> GLint {
        terminated_length(self.source.as_deref())
    }

    // ===== COMPILATION =====

    /// Run the bound compiler over the current source
    ///
    /// No-op without a live compiler or without source. Translation failure
    /// is recorded in the info log, not reported to the caller.
    pub fn compile(&mut self) {
        let Some(compiler) = self.compiler.as_ref().and_then(|c| c.upgrade()) else {
            crate::gl_debug!("gles::Shader", "Shader {} has no compiler bound, compile skipped", self.name);
            return;
        };
        let Some(source) = self.source.as_deref() else {
            return;
        };

        // Translators work on text; invalid UTF-8 is replaced only for them
        let output = {
            let text = String::from_utf8_lossy(source);
            compiler.compile(self.kind, &text)
        };
        self.compiled = output.success;
        self.binary = if output.success { output.binary } else { None };
        self.info_log = output.info_log;

        crate::gl_debug!(
            "gles::Shader",
            "Shader {} compiled: {}",
            self.name,
            if self.compiled { "ok" } else { "failed" }
        );
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    pub fn binary(&self) -> Option<&[u8]> {
        self.binary.as_deref()
    }

    pub fn info_log(&self) -> Option<&str> {
        self.info_log.as_deref()
    }

    /// Info log length including the terminator, 0 without a log
    pub fn info_log_length(&self) -> GLint {
        terminated_length(self.info_log.as_deref().map(str::as_bytes))
    }

    // ===== DELETION =====

    /// Flag the shader for deletion (idempotent, never reset)
    pub fn mark_for_deletion(&mut self) {
        self.marked_for_deletion = true;
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }

    /// Marked for deletion and not attached to any program
    pub fn is_free_for_deletion(&self) -> bool {
        self.marked_for_deletion && self.attach_count == 0
    }

    pub fn attach_count(&self) -> u32 {
        self.attach_count
    }

    pub(crate) fn add_reference(&mut self) {
        self.attach_count += 1;
    }

    pub(crate) fn release_reference(&mut self) {
        debug_assert!(self.attach_count > 0, "shader {} has no references to release", self.name);
        self.attach_count = self.attach_count.saturating_sub(1);
    }
}

pub(crate) fn terminated_length(text: Option<&[u8]>) -> GLint {
    text.map_or(0, |t| GLint::try_from(t.len() + 1).unwrap_or(GLint::MAX))
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
