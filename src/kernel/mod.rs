//! Kernel: completion core plus the service seams around it.

pub mod completion;
pub mod services;

pub use completion::{
    AcceptOutcome, AcceptSource, CompletionController, CompletionError, CompletionSession,
    ScrollSignal, SessionId,
};
