use serde::Serialize;
use std::fmt;

use crate::models::CompletionCandidate;

use super::subword::strip_qualifier;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the popup should do with its scroll position after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSignal {
    StepUp,
    StepDown,
    ToTop,
    ToBottom,
}

/// One popup lifetime: fixed candidates plus the highlighted row.
#[derive(Debug, Clone)]
pub struct CompletionSession {
    pub id: SessionId,
    pub candidates: Vec<CompletionCandidate>,
    pub selected: usize,
    pub trigger_subword: String,
    pub insertion_position: usize,
    pub visible: bool,
}

impl CompletionSession {
    /// `candidates` must be non-empty; the controller checks before calling.
    pub fn new(
        id: SessionId,
        insertion_position: usize,
        subword: &str,
        candidates: Vec<CompletionCandidate>,
    ) -> Self {
        debug_assert!(!candidates.is_empty(), "completion session without candidates");
        Self {
            id,
            candidates,
            selected: 0,
            trigger_subword: strip_qualifier(subword).to_string(),
            insertion_position,
            visible: true,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn selected_candidate(&self) -> Option<&CompletionCandidate> {
        self.candidates.get(self.selected)
    }

    pub fn move_up(&mut self) -> ScrollSignal {
        if self.selected == 0 {
            self.selected = self.len().saturating_sub(1);
            ScrollSignal::ToBottom
        } else {
            self.selected -= 1;
            ScrollSignal::StepUp
        }
    }

    pub fn move_down(&mut self) -> ScrollSignal {
        if self.selected + 1 >= self.len() {
            self.selected = 0;
            ScrollSignal::ToTop
        } else {
            self.selected += 1;
            ScrollSignal::StepDown
        }
    }
}
