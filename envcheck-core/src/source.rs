//! Line-by-line view of a `KEY=VALUE` configuration source.

use std::{fmt, fs, io, path::Path};

use crate::{
    error::{InspectError, Result},
    redact::redact,
};

pub const COMMENT_MARKER: char = '#';
pub const ASSIGNMENT: char = '=';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Assignment { key: String, value: String },
    /// Neither comment nor assignment; echoed verbatim.
    Malformed,
}

/// One physical line of the configuration source, trimmed and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub line_number: usize,
    pub raw_text: String,
    pub kind: LineKind,
}

impl ConfigLine {
    pub fn classify(line_number: usize, raw: &str) -> Self {
        let raw_text = raw.trim().to_string();

        let kind = if raw_text.is_empty() {
            LineKind::Blank
        } else if raw_text.starts_with(COMMENT_MARKER) {
            LineKind::Comment
        } else if let Some((key, value)) = raw_text.split_once(ASSIGNMENT) {
            LineKind::Assignment { key: key.trim().to_string(), value: value.trim().to_string() }
        } else {
            LineKind::Malformed
        };

        Self { line_number, raw_text, kind }
    }

    pub fn is_blank_or_comment(&self) -> bool {
        matches!(self.kind, LineKind::Blank | LineKind::Comment)
    }

    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Assignment { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Assignment { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Text shown in the transcript, after the line number.
    pub fn display_text(&self) -> String {
        match &self.kind {
            LineKind::Assignment { key, value } => format!("{key}={}", redact(key, Some(value))),
            _ => self.raw_text.clone(),
        }
    }
}

impl fmt::Display for ConfigLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3}: {}", self.line_number, self.display_text())
    }
}

/// Classify every line of `contents`, numbering from 1.
pub fn parse_lines(contents: &str) -> Vec<ConfigLine> {
    contents.lines().enumerate().map(|(idx, line)| ConfigLine::classify(idx + 1, line)).collect()
}

/// Read and classify the configuration source at `path`.
pub fn read_source(path: &Path) -> Result<Vec<ConfigLine>> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InspectError::SourceNotFound { path: path.to_path_buf() },
        _ => InspectError::UnexpectedIo { path: path.to_path_buf(), source },
    })?;

    let lines = parse_lines(&contents);
    tracing::debug!(path = %path.display(), lines = lines.len(), "classified configuration source");
    Ok(lines)
}
