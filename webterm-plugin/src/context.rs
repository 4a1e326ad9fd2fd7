//! Execution Context

use webterm_core::DisplaySink;

/// Context passed to a command while it executes
pub struct ShellContext<'a> {
    sink: &'a mut dyn DisplaySink,
    emitted: usize,
}

impl<'a> ShellContext<'a> {
    pub fn new(sink: &'a mut dyn DisplaySink) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Emit one output line. Content is rendered as markup, so escape user text first.
    pub fn emit_line(&mut self, content: &str) {
        self.sink.emit_line(content);
        self.emitted += 1;
    }

    /// Clear the display
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    /// Number of lines emitted through this context
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}
