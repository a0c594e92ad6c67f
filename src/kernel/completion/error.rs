use std::fmt;

use compact_str::CompactString;

use crate::kernel::services::ports::BufferError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    NoCandidates,
    MalformedCandidate {
        label: CompactString,
    },
    InvalidBufferOffset(BufferError),
    StaleAnchor {
        anchor: usize,
        caret: usize,
    },
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::NoCandidates => write!(f, "completion triggered without candidates"),
            CompletionError::MalformedCandidate { label } => {
                write!(f, "candidate {label:?} cannot replace the current word")
            }
            CompletionError::InvalidBufferOffset(err) => write!(f, "invalid buffer offset: {err}"),
            CompletionError::StaleAnchor { anchor, caret } => {
                write!(f, "insertion anchor {anchor} no longer matches caret {caret}")
            }
        }
    }
}

impl std::error::Error for CompletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompletionError::InvalidBufferOffset(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for CompletionError {
    fn from(err: BufferError) -> Self {
        CompletionError::InvalidBufferOffset(err)
    }
}
