//! Recovers the partial identifier left of the caret.
//!
//! Only the trailing simple-name fragment is returned (`a.b|` gives `b`),
//! since that fragment is all a completion ever replaces.

use crate::kernel::services::ports::config::DEFAULT_MAX_SUBWORD_SCAN;
use crate::kernel::services::ports::EditorBuffer;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn strip_trailing_dot(word: &str) -> &str {
    word.strip_suffix('.').unwrap_or(word)
}

/// Subword ending at `caret` (a char offset into `line`), walking at most
/// [`DEFAULT_MAX_SUBWORD_SCAN`] chars to the left.
pub fn current_subword(line: &str, caret: usize) -> Option<String> {
    current_subword_bounded(line, caret, DEFAULT_MAX_SUBWORD_SCAN)
}

pub fn current_subword_bounded(line: &str, caret: usize, max_scan: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let x = caret.checked_sub(1)?;
    let last = *chars.get(x)?;

    // A line holding a single visible char skips the walk entirely.
    if line.trim().chars().count() == 1 {
        let word = last.to_string();
        return Some(strip_trailing_dot(word.trim()).to_string());
    }

    if last == '.' {
        return None;
    }

    let start = chars[..x]
        .iter()
        .rev()
        .take(max_scan)
        .take_while(|ch| is_word_char(**ch))
        .count();
    let word: String = chars[x - start..=x].iter().collect();

    if word.chars().next().is_some_and(char::is_numeric) {
        return None;
    }

    Some(strip_trailing_dot(word.trim()).to_string())
}

/// Subword at the buffer's live caret.
pub fn subword_at_caret(buffer: &dyn EditorBuffer, max_scan: usize) -> Option<String> {
    let line = buffer.line_text(buffer.caret_line())?;
    current_subword_bounded(&line, buffer.caret_offset_in_line(), max_scan)
}

/// Drops a qualifying prefix from a trigger word: `foo.ba` becomes `ba`.
///
/// A word whose only dot is its last char (`foo.`) is kept as is.
pub fn strip_qualifier(subword: &str) -> &str {
    match (subword.find('.'), subword.rfind('.')) {
        (Some(first), Some(last)) if first + 1 != subword.len() => &subword[last + 1..],
        _ => subword,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/subword.rs"]
mod tests;
