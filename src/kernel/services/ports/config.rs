use serde::{Deserialize, Serialize};

pub const DEFAULT_ELLIPSIS_MARKER: &str = "...";
pub const DEFAULT_MAX_SUBWORD_SCAN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Label fragment marking an overloaded group, e.g. `print(...)`.
    pub ellipsis_marker: String,
    /// Upper bound on chars walked left of the caret when extracting a subword.
    pub max_subword_scan: usize,
    /// Refuse to splice unless the caret still sits on the trigger anchor.
    pub validate_anchor: bool,
    pub refresh_docs_on_trigger: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            ellipsis_marker: DEFAULT_ELLIPSIS_MARKER.to_string(),
            max_subword_scan: DEFAULT_MAX_SUBWORD_SCAN,
            validate_anchor: true,
            refresh_docs_on_trigger: true,
        }
    }
}
