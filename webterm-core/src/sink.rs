//! Display sinks

/// Where output lines go.
///
/// `emit_line` must accept any string without failing; a sink that can hit
/// I/O errors reports them itself.
pub trait DisplaySink {
    /// Append one rendered line to the visible log.
    fn emit_line(&mut self, content: &str);

    /// Remove every previously emitted line.
    fn clear(&mut self);
}

/// In-memory sink that keeps every emitted line
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    /// True if any line contains `fragment`
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.iter().any(|l| l.contains(fragment))
    }
}

impl DisplaySink for Transcript {
    fn emit_line(&mut self, content: &str) {
        self.lines.push(content.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}
