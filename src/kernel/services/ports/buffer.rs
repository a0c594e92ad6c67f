use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    OutOfRange {
        offset: usize,
        len: usize,
        doc_len: usize,
    },
    InvalidLine {
        line: usize,
        len_lines: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfRange {
                offset,
                len,
                doc_len,
            } => write!(
                f,
                "range {offset}..{} is outside document of {doc_len} chars",
                offset.saturating_add(*len)
            ),
            BufferError::InvalidLine { line, len_lines } => {
                write!(f, "line {line} is outside document of {len_lines} lines")
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Text the completion controller reads and splices.
///
/// Offsets are absolute char offsets into the document unless the method
/// name says they are line-relative. Line text never includes the line break.
pub trait EditorBuffer {
    fn line_text(&self, line: usize) -> Option<String>;

    fn line_start_offset(&self, line: usize) -> Option<usize>;

    fn caret_line(&self) -> usize;

    fn caret_offset(&self) -> usize;

    fn len_chars(&self) -> usize;

    fn delete_range(&mut self, start: usize, len: usize) -> Result<(), BufferError>;

    fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), BufferError>;

    fn set_caret_offset(&mut self, offset: usize) -> Result<(), BufferError>;

    fn caret_offset_in_line(&self) -> usize {
        let line_start = self.line_start_offset(self.caret_line()).unwrap_or(0);
        self.caret_offset().saturating_sub(line_start)
    }
}
