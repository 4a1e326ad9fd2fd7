//! Input history with up/down recall

/// Submitted lines plus a recall cursor.
///
/// The cursor ranges over `0..=len`; `len` means "composing a new line".
/// Growth is unbounded for the lifetime of the terminal.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor to the composing position.
    ///
    /// Blank lines and repeats of the previous entry are not stored.
    pub fn record(&mut self, line: &str) {
        if !line.trim().is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.cursor = self.entries.len();
    }

    /// Step back one entry, stopping at the oldest.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).cloned()
    }

    /// Step forward one entry. Stepping past the newest yields `""` once.
    pub fn recall_next(&mut self) -> Option<String> {
        let len = self.entries.len();
        if len == 0 || self.cursor >= len {
            return None;
        }
        if self.cursor < len - 1 {
            self.cursor += 1;
            self.entries.get(self.cursor).cloned()
        } else {
            self.cursor = len;
            Some(String::new())
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
