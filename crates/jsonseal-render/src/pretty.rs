use crate::formatter::AsciiFormatter;
use jsonseal_core::{JsonsealError, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Serializer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Spaces per nesting level unless overridden.
pub const DEFAULT_INDENT: usize = 4;

/// Parse raw JSON text into a generic value, keeping object keys in the
/// order they appear and numbers as their exact source text.
pub fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| JsonsealError::Parse(e.to_string()))
}

/// Writes JSON values as indented, ASCII-only text.
#[derive(Debug, Clone)]
pub struct PrettyJsonWriter {
    indent: usize,
}

impl Default for PrettyJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyJsonWriter {
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }

    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Render a value as pretty JSON text, without a trailing newline.
    pub fn render(&self, value: &Value) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| JsonsealError::Render(e.to_string()))
    }

    /// Parse `content` and render it back as pretty JSON text.
    pub fn normalize(&self, content: &str) -> Result<String> {
        let value = parse(content)?;
        self.render(&value)
    }

    /// Write a value as pretty JSON to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, value: &Value) -> Result<()> {
        let indent = vec![b' '; self.indent];
        let formatter = AsciiFormatter::with_indent(&indent);
        let mut ser = Serializer::with_formatter(&mut *writer, formatter);
        value
            .serialize(&mut ser)
            .map_err(|e| JsonsealError::Render(e.to_string()))
    }

    /// Normalize `content` and write it to `path`, creating or truncating the
    /// file. Returns the number of bytes written.
    ///
    /// The content is parsed and rendered before the file is opened, so a
    /// parse failure leaves any existing file untouched and creates nothing.
    pub fn write_file(&self, path: &Path, content: &str) -> Result<u64> {
        let text = self.normalize(content)?;

        let mut file = File::create(path).map_err(|e| JsonsealError::file_access(path, e))?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| JsonsealError::file_access(path, e))?;

        let written = text.len() as u64;
        tracing::debug!(path = %path.display(), bytes = written, "wrote normalized JSON");
        Ok(written)
    }
}
