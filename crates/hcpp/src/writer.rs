//! Line-oriented output sink for the generated C++ source.

use std::fmt;

use ecow::EcoString;

/// Append-only text buffer that writes whole lines.
///
/// The nesting depth is always passed in by the caller; the writer keeps no
/// indentation state of its own.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    /// The text written so far.
    buffer: EcoString,
    /// The unit repeated once per nesting level.
    indent: EcoString,
}

impl SourceWriter {
    /// Creates a writer with the given indent unit.
    pub fn new(indent: impl Into<EcoString>) -> Self {
        Self {
            buffer: EcoString::new(),
            indent: indent.into(),
        }
    }

    /// Writes `content` prefixed by the indent unit repeated `depth` times.
    pub fn line(&mut self, depth: usize, content: impl fmt::Display) {
        for _ in 0..depth {
            self.buffer.push_str(&self.indent);
        }
        self.raw_line(content);
    }

    /// Writes `content` as a line without indentation.
    pub fn raw_line(&mut self, content: impl fmt::Display) {
        use fmt::Write;
        // Writing into an `EcoString` cannot fail.
        let _ = write!(self.buffer, "{content}");
        self.buffer.push('\n');
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Get the text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the generated source text.
    pub fn into_string(self) -> EcoString {
        self.buffer
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new("    ")
    }
}
