//! # Error Types
//!
//! Errors raised while constructing a grammar or loading the lexicon files.
//!
//! Construction is all-or-nothing: the first malformed line aborts the load
//! and nothing of the partially built state is exposed. A sentence that
//! cannot be derived is *not* an error — recognition returns `false`.
//! Out-of-range chart indices and foreign symbol ids are programmer bugs and
//! panic instead of surfacing here.

use std::io;
use thiserror::Error;

/// Errors during grammar construction
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A line that cannot become a rule: separator missing, misplaced or
    /// duplicated, or too few tokens.
    #[error("malformed grammar rule at line {line}: '{text}'")]
    MalformedRule { line: usize, text: String },

    #[error("failed to read grammar")]
    Io(#[from] io::Error),
}

/// Errors while loading the tag or word files
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A tag line must hold exactly one token.
    #[error("malformed tag entry at line {line}: '{text}'")]
    MalformedTagEntry { line: usize, text: String },

    /// A word line must hold at least one word token followed by a tag.
    #[error("malformed word entry at line {line}: '{text}'")]
    MalformedWordEntry { line: usize, text: String },

    #[error("failed to read lexicon")]
    Io(#[from] io::Error),
}
