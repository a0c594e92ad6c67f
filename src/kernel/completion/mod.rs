//! Completion popup core: subword extraction, session state, acceptance.

pub mod controller;
pub mod error;
pub mod insertion;
pub mod session;
pub mod subword;

pub use controller::{AcceptOutcome, CompletionController};
pub use error::CompletionError;
pub use insertion::{AcceptSource, CompletionInsertion};
pub use session::{CompletionSession, ScrollSignal, SessionId};
pub use subword::{current_subword, current_subword_bounded, strip_qualifier, subword_at_caret};
