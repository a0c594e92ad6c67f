//! 文档刷新与宿主回调的日志实现

use crate::kernel::completion::SessionId;
use crate::kernel::services::ports::{DocumentationProvider, DocumentationRequest, EditorHost};
use compact_str::CompactString;

/// Documentation provider that only records what it was asked for.
#[derive(Debug, Default, Clone)]
pub struct TracingDocumentation {
    refreshes: usize,
    last: Option<(SessionId, usize, CompactString)>,
}

impl TracingDocumentation {
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn last_label(&self) -> Option<&str> {
        self.last.as_ref().map(|(_, _, label)| label.as_str())
    }
}

impl DocumentationProvider for TracingDocumentation {
    fn refresh(&mut self, request: &DocumentationRequest<'_>) {
        self.refreshes += 1;
        tracing::info!(
            session = %request.session,
            index = request.index,
            label = %request.candidate.label,
            "documentation refresh"
        );
        self.last = Some((
            request.session,
            request.index,
            request.candidate.label.clone(),
        ));
    }
}

/// Host that logs rescan requests and counts them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHost {
    pub rescans: usize,
}

impl EditorHost for TracingHost {
    fn rescan_phrase_at_caret(&mut self) {
        self.rescans += 1;
        tracing::info!(rescans = self.rescans, "rescan phrase at caret");
    }
}
