//! Service ports: traits + data contracts.

pub mod buffer;
pub mod config;
pub mod docs;
pub mod host;

pub use buffer::{BufferError, EditorBuffer};
pub use config::CompletionConfig;
pub use docs::{
    shared_documentation, DocumentationProvider, DocumentationRequest, SharedDocumentation,
};
pub use host::{EditorHost, NoopHost};
