//! 补全候选项

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Where a candidate came from. Only renderers care about the distinction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    LocalVariable,
    LocalField,
    PredefinedField,
    LocalMethod,
    PredefinedMethod,
    LocalClass,
    PredefinedClass,
}

/// Icon bucket a popup renderer draws next to the label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CandidateIcon {
    Variable,
    Field,
    Method,
    Class,
}

impl CandidateKind {
    pub fn icon(self) -> CandidateIcon {
        match self {
            CandidateKind::LocalVariable => CandidateIcon::Variable,
            CandidateKind::LocalField | CandidateKind::PredefinedField => CandidateIcon::Field,
            CandidateKind::LocalMethod | CandidateKind::PredefinedMethod => CandidateIcon::Method,
            CandidateKind::LocalClass | CandidateKind::PredefinedClass => CandidateIcon::Class,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    pub label: CompactString,
    #[serde(rename = "completion")]
    pub completion_string: CompactString,
    pub kind: CandidateKind,
}

impl CompletionCandidate {
    pub fn new(
        label: impl Into<CompactString>,
        completion_string: impl Into<CompactString>,
        kind: CandidateKind,
    ) -> Self {
        Self {
            label: label.into(),
            completion_string: completion_string.into(),
            kind,
        }
    }

    /// Overloaded groups are labelled `foo(...)` and stay open after acceptance.
    pub fn has_more_choices(&self, ellipsis_marker: &str) -> bool {
        !ellipsis_marker.is_empty() && self.label.contains(ellipsis_marker)
    }

    pub fn is_well_formed(&self) -> bool {
        !self.completion_string.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/candidate.rs"]
mod tests;
