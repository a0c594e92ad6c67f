use crate::models::CompletionCandidate;
use serde::{Deserialize, Serialize};

use super::error::CompletionError;

/// Single-parameter placeholder, e.g. `bar( )`.
const SINGLE_ARG_PLACEHOLDER: &str = " )";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptSource {
    Mouse,
    #[default]
    Keyboard,
}

/// Text to splice for an accepted candidate, relative to the live subword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionInsertion {
    /// Full text inserted where the subword started.
    pub text: String,
    /// Part of the completion string not already typed.
    pub tail: String,
    /// Chars of live subword to delete before the anchor.
    pub remove_len: usize,
    /// Mouse pick of an overloaded group (`foo(`); the host should rescan.
    pub overloaded_mouse_click: bool,
}

impl CompletionInsertion {
    pub fn resolve(
        candidate: &CompletionCandidate,
        current_subword: Option<&str>,
        source: AcceptSource,
    ) -> Result<Self, CompletionError> {
        let malformed = || CompletionError::MalformedCandidate {
            label: candidate.label.clone(),
        };
        if !candidate.is_well_formed() {
            return Err(malformed());
        }

        let full = candidate.completion_string.as_str();
        let remove_len = current_subword.map_or(0, |word| word.chars().count());
        let tail: String = match current_subword {
            Some(_) => {
                if remove_len > full.chars().count() {
                    return Err(malformed());
                }
                full.chars().skip(remove_len).collect()
            }
            None => full.to_string(),
        };

        let mut text = full.to_string();
        if tail.ends_with(SINGLE_ARG_PLACEHOLDER) {
            if let Some(head) = full.strip_suffix(SINGLE_ARG_PLACEHOLDER) {
                text = format!("{head})");
            }
        }

        let overloaded_mouse_click = source == AcceptSource::Mouse && text.ends_with('(');

        Ok(Self {
            text,
            tail,
            remove_len,
            overloaded_mouse_click,
        })
    }

    /// Where the caret goes once `text` is in the buffer, if not left alone.
    ///
    /// Calls with arguments put the caret inside the parentheses: before `)`
    /// for one argument, at the first `,` for several.
    pub fn caret_target(&self, anchor: usize, caret_after_insert: usize) -> Option<usize> {
        if !self.tail.ends_with(')') || self.tail.ends_with("()") {
            return None;
        }
        match self.tail.chars().position(|ch| ch == ',') {
            None => Some(caret_after_insert.saturating_sub(1)),
            Some(comma) => Some(anchor + comma),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/insertion.rs"]
mod tests;
