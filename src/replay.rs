//! Scripted sessions: replays trigger/navigate/accept events against a
//! [`TextBuffer`] and reports what happened at each step.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::kernel::completion::{
    subword_at_caret, AcceptOutcome, AcceptSource, CompletionController, ScrollSignal,
};
use crate::kernel::services::adapters::{TracingDocumentation, TracingHost};
use crate::kernel::services::ports::{CompletionConfig, EditorBuffer, SharedDocumentation};
use crate::models::{CompletionCandidate, TextBuffer};

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    pub text: String,
    /// Initial caret; defaults to the end of `text`.
    #[serde(default)]
    pub caret: Option<usize>,
    #[serde(default)]
    pub config: Option<PathBuf>,
    pub events: Vec<ReplayEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Type {
        text: String,
    },
    MoveCaret {
        offset: usize,
    },
    Trigger {
        /// Defaults to the caret at the time of the event.
        #[serde(default)]
        position: Option<usize>,
        /// Defaults to the subword left of the caret.
        #[serde(default)]
        subword: Option<String>,
        candidates: Vec<CompletionCandidate>,
    },
    Up,
    Down,
    Accept {
        #[serde(default)]
        source: AcceptSource,
    },
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StepOutcome {
    Edited { caret: usize },
    Triggered { session: u64 },
    Moved { selected: usize, scroll: ScrollSignal },
    Ignored,
    Accepted { caret: usize, popup_open: bool },
    Rejected,
    Failed { error: String },
    Dismissed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub text: String,
    pub caret: usize,
    pub visible: bool,
    pub selected: Option<usize>,
    pub doc_refreshes: usize,
    pub rescans: usize,
    pub steps: Vec<StepOutcome>,
}

pub struct Replay {
    buffer: TextBuffer,
    controller: CompletionController,
    docs: Arc<Mutex<TracingDocumentation>>,
    host: TracingHost,
}

impl Replay {
    pub fn new(text: &str, caret: Option<usize>, config: Arc<CompletionConfig>) -> Self {
        let mut buffer = TextBuffer::from_text(text);
        let caret = caret.unwrap_or_else(|| buffer.len_chars()).min(buffer.len_chars());
        // clamped above, cannot fail
        let _ = buffer.set_caret_offset(caret);

        let docs = Arc::new(Mutex::new(TracingDocumentation::default()));
        let shared: SharedDocumentation = docs.clone();
        Self {
            buffer,
            controller: CompletionController::new(config, shared),
            docs,
            host: TracingHost::default(),
        }
    }

    pub fn step(&mut self, event: ReplayEvent) -> StepOutcome {
        match event {
            ReplayEvent::Type { text } => {
                self.buffer.type_text(&text);
                StepOutcome::Edited {
                    caret: self.buffer.caret_offset(),
                }
            }
            ReplayEvent::MoveCaret { offset } => match self.buffer.set_caret_offset(offset) {
                Ok(()) => StepOutcome::Edited { caret: offset },
                Err(err) => StepOutcome::Failed {
                    error: err.to_string(),
                },
            },
            ReplayEvent::Trigger {
                position,
                subword,
                candidates,
            } => {
                let position = position.unwrap_or_else(|| self.buffer.caret_offset());
                let subword = subword.unwrap_or_else(|| {
                    subword_at_caret(&self.buffer, self.controller.config().max_subword_scan)
                        .unwrap_or_default()
                });
                match self.controller.on_trigger(position, &subword, candidates) {
                    Ok(id) => StepOutcome::Triggered { session: id.raw() },
                    Err(err) => StepOutcome::Failed {
                        error: err.to_string(),
                    },
                }
            }
            ReplayEvent::Up => self.moved(CompletionController::on_navigate_up),
            ReplayEvent::Down => self.moved(CompletionController::on_navigate_down),
            ReplayEvent::Accept { source } => {
                match self
                    .controller
                    .on_accept(source, &mut self.buffer, &mut self.host)
                {
                    Ok(AcceptOutcome::Accepted { caret, popup_open }) => {
                        StepOutcome::Accepted { caret, popup_open }
                    }
                    Ok(AcceptOutcome::Rejected) => StepOutcome::Rejected,
                    Err(err) => StepOutcome::Failed {
                        error: err.to_string(),
                    },
                }
            }
            ReplayEvent::Dismiss => {
                self.controller.on_dismiss();
                StepOutcome::Dismissed
            }
        }
    }

    fn moved(
        &mut self,
        navigate: fn(&mut CompletionController) -> Option<ScrollSignal>,
    ) -> StepOutcome {
        match (navigate(&mut self.controller), self.controller.selected_index()) {
            (Some(scroll), Some(selected)) => StepOutcome::Moved { selected, scroll },
            _ => StepOutcome::Ignored,
        }
    }

    pub fn report(&self, steps: Vec<StepOutcome>) -> ReplayReport {
        let doc_refreshes = match self.docs.lock() {
            Ok(docs) => docs.refreshes(),
            Err(poisoned) => poisoned.into_inner().refreshes(),
        };
        ReplayReport {
            text: self.buffer.text(),
            caret: self.buffer.caret_offset(),
            visible: self.controller.is_visible(),
            selected: self.controller.selected_index(),
            doc_refreshes,
            rescans: self.host.rescans,
            steps,
        }
    }
}

/// Runs every event of `script` in order.
pub fn run_script(script: ReplayScript, config: Arc<CompletionConfig>) -> ReplayReport {
    let mut replay = Replay::new(&script.text, script.caret, config);
    let steps = script
        .events
        .into_iter()
        .map(|event| replay.step(event))
        .collect();
    replay.report(steps)
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
