// File: crates/epichart-core/src/diag.rs
// Summary: Injectable diagnostics sink for soft-failure warnings.

/// Warning channel for partial-failure paths (see the value scaler). The core
/// never writes to stdout/stderr on its own; callers choose a sink.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Default sink: drops all warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warn(&self, _message: &str) {}
}

/// Sink forwarding warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Test sink collecting warnings in memory.
#[derive(Debug, Default)]
pub struct CollectDiagnostics {
    messages: std::cell::RefCell<Vec<String>>,
}

impl CollectDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Diagnostics for CollectDiagnostics {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
