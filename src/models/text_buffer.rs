//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标（绝对字符偏移）
//! - 行 ↔ 字符偏移映射

use crate::kernel::services::ports::{BufferError, EditorBuffer};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    caret: usize,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: 0,
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Types `text` at the caret, the way a keystroke would.
    pub fn type_text(&mut self, text: &str) {
        self.rope.insert(self.caret, text);
        self.caret += text.chars().count();
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<(), BufferError> {
        let doc_len = self.rope.len_chars();
        match offset.checked_add(len) {
            Some(end) if end <= doc_len => Ok(()),
            _ => Err(BufferError::OutOfRange {
                offset,
                len,
                doc_len,
            }),
        }
    }
}

impl EditorBuffer for TextBuffer {
    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        let text = slice_to_cow(slice);
        Some(strip_line_ending(&text).to_string())
    }

    fn line_start_offset(&self, line: usize) -> Option<usize> {
        (line < self.rope.len_lines()).then(|| self.rope.line_to_char(line))
    }

    fn caret_line(&self) -> usize {
        self.rope.char_to_line(self.caret)
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn delete_range(&mut self, start: usize, len: usize) -> Result<(), BufferError> {
        self.check_range(start, len)?;
        let end = start + len;
        self.rope.remove(start..end);

        if self.caret >= end {
            self.caret -= len;
        } else if self.caret > start {
            self.caret = start;
        }
        Ok(())
    }

    fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), BufferError> {
        self.check_range(offset, 0)?;
        self.rope.insert(offset, text);

        // 光标在插入点或之后时随文本后移
        if self.caret >= offset {
            self.caret += text.chars().count();
        }
        Ok(())
    }

    fn set_caret_offset(&mut self, offset: usize) -> Result<(), BufferError> {
        self.check_range(offset, 0)?;
        self.caret = offset;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
