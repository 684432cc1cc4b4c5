//! # Earlix
//!
//! An Earley recognizer for context-free grammars over string tokens.
//!
//! ## Overview
//!
//! Given a grammar, a set of POS tags and a tag-to-word lexicon, earlix
//! decides for each input sentence whether it is derivable from the
//! grammar's start symbol. It is a recognizer, not a parser: the answer is
//! a boolean plus the filled chart as a diagnostic, and no parse trees are
//! built.
//!
//! - [`grammar`] — rules and the LHS-indexed rule sets
//! - [`intern`] — dense symbol ids shared by categories, tags and words
//! - [`lexicon`] — tag and word file loading
//! - [`recognizer`] — the Predict/Scan/Complete chart engine
//! - [`error`] — construction-time error types
//!
//! ## Quick Start
//!
//! ```rust
//! use earlix::{Grammar, GrammarOptions, Recognizer, read_tags, read_words};
//!
//! let mut grammar = Grammar::from_reader(
//!     "S --> NP VP\nNP --> Det N\nVP --> V NP\n".as_bytes(),
//!     GrammarOptions::default(),
//! )?;
//! let tags = read_tags("Det\nN\nV\n".as_bytes(), &mut grammar)?;
//! let words = read_words(
//!     "the Det\ndog N\ncat N\nsees V\n".as_bytes(),
//!     &mut grammar,
//! )?;
//!
//! let mut recognizer = Recognizer::new(grammar, tags, words);
//! assert!(recognizer.parse(&["the", "dog", "sees", "the", "cat"]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod grammar;
pub mod intern;
pub mod lexicon;
pub mod recognizer;

// Re-export commonly used types
pub use error::{GrammarError, LexiconError};
pub use grammar::{Grammar, GrammarOptions, Rule, RuleSet};
pub use intern::{Sym, SymbolTable};
pub use lexicon::{read_tags, read_words, TagSet, WordTable};
pub use recognizer::{BusyIndicator, Chart, Item, ItemSet, Recognizer, RecognizerConfig};
