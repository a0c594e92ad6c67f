//! 数据模型层

pub mod candidate;
pub mod text_buffer;

pub use candidate::{CandidateIcon, CandidateKind, CompletionCandidate};
pub use text_buffer::{slice_to_cow, TextBuffer};
