//! Integration tests for the context logging system
//!
//! These tests replace the process-wide logger and must run serially.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use gles_context::gles::*;
use gles_context::gles::log::{set_logger, reset_logger, DefaultLogger, Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn messages(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<String> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.severity == severity)
        .map(|e| e.message.clone())
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_entry_points_are_traced() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let mut ctx = Context::default();
    let shader = ctx.create_shader(GL_VERTEX_SHADER);
    ctx.compile_shader(shader);
    ctx.delete_shader(shader);

    reset_logger();

    let traces = messages(&entries, LogSeverity::Trace);
    assert!(traces.iter().any(|m| m.starts_with("glCreateShader")));
    assert!(traces.iter().any(|m| m == &format!("glCompileShader({})", shader)));
    assert!(traces.iter().any(|m| m == &format!("glDeleteShader({})", shader)));

    let captured = entries.lock().unwrap();
    assert!(captured.iter().all(|e| e.source.starts_with("gles::")));
}

#[test]
#[serial]
fn test_integration_recorded_errors_are_warned() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let mut ctx = Context::default();
    ctx.compile_shader(42);
    ctx.shader_binary(&[], 0, &[]);

    reset_logger();

    let warnings = messages(&entries, LogSeverity::Warn);
    assert!(warnings.iter().any(|m| m.contains("GL_INVALID_VALUE")), "{:?}", warnings);
    assert!(warnings.iter().any(|m| m.contains("glShaderBinary")), "{:?}", warnings);
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
}

#[test]
#[serial]
fn test_integration_compiler_lifecycle_logged() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let mut ctx = Context::default();
    let shader = ctx.create_shader(GL_FRAGMENT_SHADER);
    ctx.shader_source(shader, 1, &[b"void main() {}\0"], None);
    ctx.compile_shader(shader);
    ctx.release_shader_compiler();

    reset_logger();

    let debug = messages(&entries, LogSeverity::Debug);
    assert!(debug.iter().any(|m| m.starts_with("Shader compiler created")), "{:?}", debug);
    assert!(debug.iter().any(|m| m == "Shader compiler released"), "{:?}", debug);
}

#[test]
#[serial]
fn test_integration_default_logger_filters_quietly() {
    set_logger(DefaultLogger { min_severity: LogSeverity::Error });

    let mut ctx = Context::default();
    let shader = ctx.create_shader(GL_VERTEX_SHADER);
    ctx.delete_shader(shader);

    reset_logger();
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}
