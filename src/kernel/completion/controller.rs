use std::sync::Arc;

use crate::kernel::services::ports::{
    BufferError, CompletionConfig, DocumentationRequest, EditorBuffer, EditorHost,
    SharedDocumentation,
};
use crate::models::CompletionCandidate;

use super::error::CompletionError;
use super::insertion::{AcceptSource, CompletionInsertion};
use super::session::{CompletionSession, ScrollSignal, SessionId};
use super::subword::subword_at_caret;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    Accepted { caret: usize, popup_open: bool },
    /// Nothing was selected; the buffer is untouched.
    Rejected,
}

/// Drives one completion popup: trigger, navigation, acceptance, dismissal.
///
/// Every entry point takes `&mut self`, so events are handled one at a time.
/// The documentation provider is the only shared piece and is always called
/// with its lock held.
pub struct CompletionController {
    config: Arc<CompletionConfig>,
    docs: SharedDocumentation,
    session: Option<CompletionSession>,
    next_session: u64,
}

impl CompletionController {
    pub fn new(config: Arc<CompletionConfig>, docs: SharedDocumentation) -> Self {
        Self {
            config,
            docs,
            session: None,
            next_session: 1,
        }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&CompletionSession> {
        self.session.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.visible)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.selected)
    }

    pub fn selected_candidate(&self) -> Option<&CompletionCandidate> {
        self.session.as_ref()?.selected_candidate()
    }

    /// Opens a fresh session, replacing any popup already showing.
    pub fn on_trigger(
        &mut self,
        position: usize,
        subword: &str,
        candidates: Vec<CompletionCandidate>,
    ) -> Result<SessionId, CompletionError> {
        if candidates.is_empty() {
            self.close();
            return Err(CompletionError::NoCandidates);
        }

        let id = SessionId::new(self.next_session);
        self.next_session = self.next_session.wrapping_add(1);

        let session = CompletionSession::new(id, position, subword, candidates);
        tracing::debug!(
            session = %id,
            position,
            subword = %session.trigger_subword,
            candidates = session.len(),
            "completion triggered"
        );
        self.session = Some(session);

        if self.config.refresh_docs_on_trigger {
            self.refresh_documentation();
        }
        Ok(id)
    }

    pub fn on_navigate_up(&mut self) -> Option<ScrollSignal> {
        self.navigate(CompletionSession::move_up)
    }

    pub fn on_navigate_down(&mut self) -> Option<ScrollSignal> {
        self.navigate(CompletionSession::move_down)
    }

    fn navigate(
        &mut self,
        step: impl FnOnce(&mut CompletionSession) -> ScrollSignal,
    ) -> Option<ScrollSignal> {
        let session = self.session.as_mut().filter(|session| session.visible)?;
        let signal = step(session);
        tracing::debug!(session = %session.id, selected = session.selected, ?signal, "completion moved");
        self.refresh_documentation();
        Some(signal)
    }

    pub fn on_dismiss(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = %session.id, "completion dismissed");
        }
    }

    fn close(&mut self) {
        self.session = None;
    }

    /// Replaces the live subword with the selected candidate.
    ///
    /// On error the popup is closed and nothing is retried; the caller has to
    /// trigger completion again.
    pub fn on_accept(
        &mut self,
        source: AcceptSource,
        buffer: &mut dyn EditorBuffer,
        host: &mut dyn EditorHost,
    ) -> Result<AcceptOutcome, CompletionError> {
        let Some(session) = self.session.as_ref().filter(|session| session.visible) else {
            return Ok(AcceptOutcome::Rejected);
        };
        let Some(candidate) = session.selected_candidate().cloned() else {
            return Ok(AcceptOutcome::Rejected);
        };
        let id = session.id;
        let anchor = session.insertion_position;

        match self.splice(&candidate, anchor, source, buffer) {
            Ok(insertion) => {
                let popup_open = candidate.has_more_choices(&self.config.ellipsis_marker);
                if !popup_open {
                    self.close();
                }
                if insertion.overloaded_mouse_click {
                    host.rescan_phrase_at_caret();
                }

                let caret = buffer.caret_offset();
                tracing::debug!(
                    session = %id,
                    inserted = %insertion.text,
                    removed = insertion.remove_len,
                    caret,
                    popup_open,
                    "completion accepted"
                );
                Ok(AcceptOutcome::Accepted { caret, popup_open })
            }
            Err(err) => {
                tracing::error!(session = %id, label = %candidate.label, error = %err, "completion splice failed");
                self.close();
                Err(err)
            }
        }
    }

    fn splice(
        &self,
        candidate: &CompletionCandidate,
        anchor: usize,
        source: AcceptSource,
        buffer: &mut dyn EditorBuffer,
    ) -> Result<CompletionInsertion, CompletionError> {
        let current = subword_at_caret(buffer, self.config.max_subword_scan);
        let insertion = CompletionInsertion::resolve(candidate, current.as_deref(), source)?;

        if self.config.validate_anchor {
            check_anchor_at_caret(buffer, anchor)?;
        }
        let start = anchor
            .checked_sub(insertion.remove_len)
            .ok_or_else(|| BufferError::OutOfRange {
                offset: anchor,
                len: insertion.remove_len,
                doc_len: buffer.len_chars(),
            })?;

        if insertion.remove_len > 0 {
            buffer.delete_range(start, insertion.remove_len)?;
        }
        buffer.insert_text(start, &insertion.text)?;

        if let Some(caret) = insertion.caret_target(anchor, buffer.caret_offset()) {
            buffer.set_caret_offset(caret)?;
        }
        Ok(insertion)
    }

    fn refresh_documentation(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(candidate) = session.selected_candidate() else {
            return;
        };
        let request = DocumentationRequest {
            session: session.id,
            index: session.selected,
            candidate,
        };

        match self.docs.lock() {
            Ok(mut docs) => docs.refresh(&request),
            Err(poisoned) => {
                tracing::warn!(session = %session.id, "documentation provider lock poisoned");
                poisoned.into_inner().refresh(&request);
            }
        }
    }
}

/// The caret must still sit on the trigger anchor; anything typed or moved
/// since makes the anchored span point at the wrong text.
fn check_anchor_at_caret(buffer: &dyn EditorBuffer, anchor: usize) -> Result<(), CompletionError> {
    let caret = buffer.caret_offset();
    if caret != anchor {
        return Err(CompletionError::StaleAnchor { anchor, caret });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/controller.rs"]
mod tests;
