/// Mock compiler for unit tests (no translator required)
///
/// Every factory call builds a fresh instance so that releasing the
/// binding really drops it, while the counters stay shared with the test
/// through a [`MockCompilerProbe`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use super::{CompileOutput, CompilerFactory, ShaderCompiler};
use crate::types::ShaderKind;

#[derive(Debug)]
pub struct MockCompiler {
    calls: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl ShaderCompiler for MockCompiler {
    fn compile(&self, _kind: ShaderKind, source: &str) -> CompileOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            CompileOutput {
                success: false,
                binary: None,
                info_log: Some("mock failure".to_string()),
            }
        } else {
            CompileOutput {
                success: true,
                binary: Some(source.as_bytes().to_vec()),
                info_log: None,
            }
        }
    }
}

/// Test-side view of the counters shared with every mock instance
#[derive(Debug, Clone, Default)]
pub struct MockCompilerProbe {
    calls: Arc<AtomicUsize>,
    created: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl MockCompilerProbe {
    /// Total compile calls across all instances
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of instances the factory produced
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Make subsequent compiles fail
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

pub fn mock_factory() -> (CompilerFactory, MockCompilerProbe) {
    let probe = MockCompilerProbe::default();
    let factory: CompilerFactory = {
        let probe = probe.clone();
        Arc::new(move || {
            probe.created.fetch_add(1, Ordering::SeqCst);
            Arc::new(MockCompiler {
                calls: probe.calls.clone(),
                fail: probe.fail.clone(),
            }) as Arc<dyn ShaderCompiler>
        })
    };
    (factory, probe)
}
