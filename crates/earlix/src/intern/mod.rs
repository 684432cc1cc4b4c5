//! # Symbol Interning
//!
//! Bidirectional mapping between external string symbols and dense ids.
//!
//! ## Overview
//!
//! Every grammar symbol — syntactic categories, POS tags and words alike —
//! is stored once and referred to by a small copyable key. This provides:
//!
//! - **O(1) comparison**: compare keys instead of string contents
//! - **Cheap hashing**: items and rules hash over dense ids, not strings
//! - **Single storage**: the string lives in one place for printing
//!
//! There is no separate id space for terminals and non-terminals; whether a
//! symbol denotes a word or a category is decided by lexicon and tag-set
//! membership, never by the id itself.
//!
//! The table is append-only: symbols are added during grammar and lexicon
//! construction, and scanning may add previously unseen input tokens, but a
//! symbol is never forgotten. Should recognition ever be parallelised across
//! sentences, each sentence needs a scratch table layered over the shared one
//! (or the backing store swapped for `lasso::ThreadedRodeo`).
//!
//! ## Usage
//!
//! ```rust
//! use earlix::intern::SymbolTable;
//!
//! let mut symbols = SymbolTable::new();
//!
//! let np1 = symbols.intern("NP");
//! let np2 = symbols.intern("NP");
//! let vp = symbols.intern("VP");
//!
//! assert_eq!(np1, np2);
//! assert_ne!(np1, vp);
//! assert_eq!(symbols.resolve(np1), "NP");
//! ```

use lasso::{Rodeo, Spur};
use std::fmt;

/// An interned symbol id.
///
/// A lightweight handle to a string held by a [`SymbolTable`]. It can be
/// cheaply copied, compared and hashed; resolve it through the table that
/// issued it to get the string back.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sym(Spur);

impl fmt::Debug for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sym({:?})", self.0)
    }
}

/// A string interner issuing dense [`Sym`] ids.
pub struct SymbolTable {
    rodeo: Rodeo,
}

impl SymbolTable {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::new(),
        }
    }

    /// Intern a string, returning its id
    ///
    /// If the string has already been interned, returns the existing id.
    /// Otherwise, stores the string and returns the next ascending id.
    pub fn intern(&mut self, s: &str) -> Sym {
        Sym(self.rodeo.get_or_intern(s))
    }

    /// Get the id for an already-interned string, if it exists
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Sym> {
        self.rodeo.get(s).map(Sym)
    }

    /// Resolve an id to its string content
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this table.
    #[must_use]
    pub fn resolve(&self, sym: Sym) -> &str {
        self.rodeo.resolve(&sym.0)
    }

    /// Try to resolve an id
    ///
    /// Returns `None` if the id was not issued by this table.
    #[must_use]
    pub fn try_resolve(&self, sym: Sym) -> Option<&str> {
        self.rodeo.try_resolve(&sym.0)
    }

    /// Get the number of interned symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }

    /// Check if the table contains a string
    #[must_use]
    pub fn contains(&self, s: &str) -> bool {
        self.rodeo.contains(s)
    }

    /// Iterate over all interned symbols
    pub fn iter(&self) -> impl Iterator<Item = (Sym, &str)> {
        self.rodeo.iter().map(|(k, v)| (Sym(k), v))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.rodeo.len())
            .finish()
    }
}
