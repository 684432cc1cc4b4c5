//! Configuration for the recognizer.

/// Configuration options for the [`Recognizer`](crate::recognizer::Recognizer)
///
/// The one knob is how terminal rules are handled, selectable at
/// construction time rather than compile time so both modes stay testable
/// side by side.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecognizerConfig {
    /// Allow terminal rules (`A --> a` with `a` a lexicon word) in the
    /// grammar.
    ///
    /// When set, prediction filters out rules whose first RHS symbol is a
    /// known word, so the cells are not flooded with lexical productions;
    /// the grammar's lexicon must have been injected. When unset (the
    /// default), the grammar must not contain terminal rules and prediction
    /// skips items whose next symbol is a POS tag, as there is nothing to
    /// predict from a tag.
    pub lexical_rules: bool,
}

impl RecognizerConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable terminal rules in the grammar
    #[must_use]
    pub fn with_lexical_rules(mut self, enabled: bool) -> Self {
        self.lexical_rules = enabled;
        self
    }
}
