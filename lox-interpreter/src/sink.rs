//! Output sink abstraction for interpreter side effects.
//!
//! The interpreter is agnostic about where `print` output goes; it only
//! requires a construction-time injected capability with a single `send`
//! operation.

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for `print` statement output
pub trait OutputSink {
    /// Deliver one line of program output
    fn send(&mut self, text: &str);
}

/// Sink that writes each line to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn send(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Sink that accumulates output lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// interpreter owns the other.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl OutputSink for BufferSink {
    fn send(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
