/// Built-in stand-in translator
///
/// Performs the structural checks a GLSL ES front end would reject first
/// (unbalanced brackets, unterminated comments, missing `main` entry point)
/// and reports them in glslang's `ERROR: 0:<line>: ...` log format. Accepted
/// sources are wrapped into a tagged blob rather than real backend code.

use super::{CompileOutput, ShaderCompiler};
use crate::types::ShaderKind;

/// Magic prefix of binaries produced by [`ReferenceCompiler`]
pub const REFERENCE_BINARY_MAGIC: &[u8; 4] = b"GLSB";

#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceCompiler;

impl ReferenceCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl ShaderCompiler for ReferenceCompiler {
    fn compile(&self, kind: ShaderKind, source: &str) -> CompileOutput {
        let (code, mut errors) = strip_comments(source);
        errors.extend(check_brackets(&code));

        if errors.is_empty() && !has_entry_point(&code) {
            let stage = match kind {
                ShaderKind::Vertex => "vertex",
                ShaderKind::Fragment => "fragment",
            };
            errors.push(format!(
                "ERROR: Linking {} stage: Missing entry point: Each stage requires one entry point",
                stage
            ));
        }

        if !errors.is_empty() {
            let mut log = String::new();
            for error in &errors {
                log.push_str(error);
                log.push('\n');
            }
            log.push_str(&format!(
                "ERROR: {} compilation errors.  No code generated.\n",
                errors.len()
            ));
            return CompileOutput {
                success: false,
                binary: None,
                info_log: Some(log),
            };
        }

        let mut binary = Vec::with_capacity(REFERENCE_BINARY_MAGIC.len() + 1 + source.len());
        binary.extend_from_slice(REFERENCE_BINARY_MAGIC);
        binary.push(match kind {
            ShaderKind::Vertex => 0,
            ShaderKind::Fragment => 1,
        });
        binary.extend_from_slice(source.as_bytes());

        CompileOutput {
            success: true,
            binary: Some(binary),
            info_log: None,
        }
    }
}

/// Replace comments with spaces (keeping newlines so line numbers survive)
fn strip_comments(source: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(source.len());
    let mut errors = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
                out.push(' ');
            }
            ('/', Some('*')) => {
                chars.next();
                let start_line = line;
                let mut closed = false;
                while let Some(next) = chars.next() {
                    if next == '\n' {
                        line += 1;
                        out.push('\n');
                    } else if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    errors.push(format!("ERROR: 0:{}: '/*' : unterminated comment", start_line));
                }
                out.push(' ');
            }
            _ => {
                if c == '\n' {
                    line += 1;
                }
                out.push(c);
            }
        }
    }

    (out, errors)
}

fn check_brackets(code: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1;

    for c in code.chars() {
        match c {
            '\n' => line += 1,
            '(' | '{' | '[' => stack.push((c, line)),
            ')' | '}' | ']' => {
                let expected = match c {
                    ')' => '(',
                    '}' => '{',
                    _ => '[',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => {
                        errors.push(format!("ERROR: 0:{}: '{}' : syntax error, unexpected token", line, c));
                        return errors;
                    }
                }
            }
            _ => {}
        }
    }

    if let Some((open, open_line)) = stack.last() {
        errors.push(format!(
            "ERROR: 0:{}: '{}' : syntax error, unexpected end of file",
            open_line, open
        ));
    }
    errors
}

/// Whether `main` appears as an identifier followed by `(`
fn has_entry_point(code: &str) -> bool {
    let bytes = code.as_bytes();
    let is_ident = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    let mut search = 0;
    while let Some(offset) = code[search..].find("main") {
        let start = search + offset;
        let end = start + 4;
        let before_ok = start == 0 || !is_ident(bytes[start - 1]);
        let after_ok = end == bytes.len() || !is_ident(bytes[end]);
        if before_ok && after_ok {
            let rest = code[end..].trim_start();
            if rest.starts_with('(') {
                return true;
            }
        }
        search = end;
    }
    false
}

#[cfg(test)]
#[path = "reference_compiler_tests.rs"]
mod tests;
