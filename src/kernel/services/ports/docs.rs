use std::sync::{Arc, Mutex};

use crate::kernel::completion::SessionId;
use crate::models::CompletionCandidate;

/// A "show docs for this candidate" notification. Fire-and-forget.
#[derive(Debug, Clone, Copy)]
pub struct DocumentationRequest<'a> {
    pub session: SessionId,
    pub index: usize,
    pub candidate: &'a CompletionCandidate,
}

/// The documentation generator behind the popup.
///
/// Implementations hold state shared with the rest of the analyzer and are
/// not reentrant; callers always go through [`SharedDocumentation`].
pub trait DocumentationProvider {
    fn refresh(&mut self, request: &DocumentationRequest<'_>);
}

pub type SharedDocumentation = Arc<Mutex<dyn DocumentationProvider + Send>>;

pub fn shared_documentation<P>(provider: P) -> SharedDocumentation
where
    P: DocumentationProvider + Send + 'static,
{
    Arc::new(Mutex::new(provider))
}
