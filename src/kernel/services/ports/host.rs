/// Editor-side hooks the controller may poke after acceptance.
pub trait EditorHost {
    /// Re-evaluate the phrase under the caret, typically reopening completion
    /// with narrowed candidates.
    fn rescan_phrase_at_caret(&mut self);
}

/// Host for callers with nothing to rescan.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl EditorHost for NoopHost {
    fn rescan_phrase_at_caret(&mut self) {}
}
