//! # Grammar Module
//!
//! Context-free grammars over interned string symbols.
//!
//! ## Overview
//!
//! A [`Grammar`] owns the symbol table, a synthetic start rule and an index
//! of all productions keyed by their left-hand-side symbol. It supports:
//!
//! - **Line-based construction**: one `LHS --> RHS` rule per line
//! - **LHS-indexed lookup**: all rules for a symbol in one probe, the
//!   tightest inner loop of prediction
//! - **Lexicon membership**: which symbols denote input words
//!
//! The index is keyed by a single symbol: the left side of a context-free
//! rule is one non-terminal, and that assumption is baked into the map. The
//! start rule `$ --> S` is built before any input rule, so `$` and `S` are
//! always the first interned symbols.
//!
//! ## Usage
//!
//! ```rust
//! use earlix::grammar::{Grammar, GrammarOptions};
//!
//! let grammar = Grammar::from_reader(
//!     "S --> NP VP\nNP --> Det N\n".as_bytes(),
//!     GrammarOptions::default(),
//! )?;
//!
//! let np = grammar.symbols().get("NP").unwrap();
//! assert_eq!(grammar.rules_with_lhs(np).len(), 1);
//! # Ok::<(), earlix::GrammarError>(())
//! ```

pub mod rule;

pub use rule::{Rule, RuleDisplay, Side};

use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::io::BufRead;

use crate::error::GrammarError;
use crate::intern::{Sym, SymbolTable};

/// Set of rules sharing a left-hand side.
pub type RuleSet = HashSet<Rule, ahash::RandomState>;

/// Construction options for a [`Grammar`]
#[derive(Debug, Clone)]
pub struct GrammarOptions {
    /// Super-start symbol of the synthetic start rule
    pub super_start: CompactString,
    /// User start symbol
    pub start: CompactString,
    /// Token separating rule sides in textual rules
    pub separator: CompactString,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            super_start: "$".into(),
            start: "S".into(),
            separator: "-->".into(),
        }
    }
}

impl GrammarOptions {
    /// Create options with the default `$`, `S` and `-->`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the super-start symbol
    #[must_use]
    pub fn with_super_start(mut self, super_start: &str) -> Self {
        self.super_start = super_start.into();
        self
    }

    /// Set the user start symbol
    #[must_use]
    pub fn with_start(mut self, start: &str) -> Self {
        self.start = start.into();
        self
    }

    /// Set the rule-side separator
    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.into();
        self
    }
}

/// A context-free grammar: symbol table, start rule, LHS-indexed rule sets
/// and lexicon membership.
pub struct Grammar {
    symbols: SymbolTable,
    separator: CompactString,
    start: Rule,
    rules: HashMap<Sym, RuleSet, ahash::RandomState>,
    lexicon: HashSet<Sym, ahash::RandomState>,
    /// Returned by [`rules_with_lhs`](Self::rules_with_lhs) for unknown
    /// symbols; keeps the miss path allocation-free.
    empty: RuleSet,
}

impl Grammar {
    /// Create a grammar holding only the start rule
    #[must_use]
    pub fn new(options: GrammarOptions) -> Self {
        let mut symbols = SymbolTable::new();
        let super_start = symbols.intern(&options.super_start);
        let start_sym = symbols.intern(&options.start);
        let start = Rule::new(smallvec![smallvec![super_start], smallvec![start_sym]], 1);

        let mut rules: HashMap<Sym, RuleSet, ahash::RandomState> = HashMap::default();
        rules.entry(super_start).or_default().insert(start.clone());

        Self {
            symbols,
            separator: options.separator,
            start,
            rules,
            lexicon: HashSet::default(),
            empty: RuleSet::default(),
        }
    }

    /// Read a grammar from a stream of rules, one per line
    ///
    /// Blank lines are skipped. The stream is consumed in one forward pass,
    /// so non-seekable inputs (stdin, pipes) are fine.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::MalformedRule`] for the first line that cannot
    /// become a rule, or [`GrammarError::Io`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R, options: GrammarOptions) -> Result<Self, GrammarError> {
        let mut grammar = Self::new(options);
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let rule = grammar.make_rule(idx + 1, &line)?;
            grammar.insert(rule);
        }
        Ok(grammar)
    }

    /// Build a rule from one textual line, interning its symbols
    fn make_rule(&mut self, line: usize, text: &str) -> Result<Rule, GrammarError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if !valid_rule(&tokens, &self.separator) {
            return Err(GrammarError::MalformedRule {
                line,
                text: text.to_string(),
            });
        }

        let mut sides: SmallVec<[Side; 2]> = SmallVec::new();
        let mut current: Side = SmallVec::new();
        for token in &tokens {
            if *token == self.separator.as_str() {
                sides.push(std::mem::take(&mut current));
            } else {
                current.push(self.symbols.intern(token));
            }
        }
        sides.push(current);
        Ok(Rule::new(sides, 1))
    }

    fn insert(&mut self, rule: Rule) {
        self.rules.entry(rule.lhs_sym()).or_default().insert(rule);
    }

    /// All rules whose left-hand side is `lhs`
    ///
    /// Unknown symbols yield a reference to an empty set; nothing is
    /// allocated on that path.
    #[must_use]
    pub fn rules_with_lhs(&self, lhs: Sym) -> &RuleSet {
        self.rules.get(&lhs).unwrap_or(&self.empty)
    }

    /// Replace the lexicon; idempotent per grammar
    pub fn inject_lexicon(&mut self, lexicon: HashSet<Sym, ahash::RandomState>) {
        self.lexicon = lexicon;
    }

    /// Whether `sym` denotes a lexicon word
    #[must_use]
    pub fn is_word(&self, sym: Sym) -> bool {
        self.lexicon.contains(&sym)
    }

    /// Intern a symbol through the grammar's table
    pub fn intern(&mut self, text: &str) -> Sym {
        self.symbols.intern(text)
    }

    /// Resolve a symbol id to its string
    ///
    /// # Panics
    ///
    /// Panics if `sym` was not issued by this grammar's table.
    #[must_use]
    pub fn resolve(&self, sym: Sym) -> &str {
        self.symbols.resolve(sym)
    }

    /// The grammar's symbol table
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The rule-side separator
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The synthetic start rule
    #[must_use]
    pub fn start(&self) -> &Rule {
        &self.start
    }

    /// Iterate over every rule, the start rule included
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values().flatten()
    }

    /// Total number of rules
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(HashSet::len).sum()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.rules() {
            writeln!(f, "{}", rule.display(self))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("symbols", &self.symbols)
            .field("rules", &self.rule_count())
            .field("lexicon", &self.lexicon.len())
            .finish()
    }
}

/// A token line can become a CFG rule iff it has at least three tokens, the
/// second is the separator, no other token is, and the first is non-empty.
fn valid_rule(tokens: &[&str], separator: &str) -> bool {
    tokens.len() > 2
        && !tokens[0].is_empty()
        && tokens[1] == separator
        && tokens.iter().filter(|t| **t == separator).count() == 1
}
