//! Destinations for non-fatal warnings raised while writing.

use std::cell::RefCell;

/// Receives warnings that do not stop the operation that raised them.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// TracingSink: forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "fieldpath", "{}", message);
    }
}

/// WarningBuffer: collects warnings in memory for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct WarningBuffer {
    messages: RefCell<Vec<String>>,
}

impl WarningBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl WarningSink for WarningBuffer {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
