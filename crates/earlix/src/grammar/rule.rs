//! Production rules.

use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::grammar::Grammar;
use crate::intern::Sym;

/// One side of a production rule.
pub type Side = SmallVec<[Sym; 4]>;

/// An immutable production rule `LHS --> RHS`.
///
/// Storage is a vector of sides plus the index where the right-hand side
/// begins. A context-free rule has exactly two sides — a single-symbol left
/// side and the right side — but the layout leaves room for richer rule
/// shapes. `rhs_begin` is a layout hint only: two rules are equal iff their
/// sides are elementwise equal.
#[derive(Debug, Clone)]
pub struct Rule {
    sides: SmallVec<[Side; 2]>,
    rhs_begin: usize,
}

impl Rule {
    /// Create a rule from its sides and the index of the first RHS side
    #[must_use]
    pub fn new(sides: SmallVec<[Side; 2]>, rhs_begin: usize) -> Self {
        debug_assert!(rhs_begin > 0 && rhs_begin < sides.len());
        Self { sides, rhs_begin }
    }

    /// The left-hand side
    #[must_use]
    pub fn lhs(&self) -> &[Sym] {
        &self.sides[0]
    }

    /// The single left-hand-side symbol (the CFG common case)
    #[must_use]
    pub fn lhs_sym(&self) -> Sym {
        self.sides[0][0]
    }

    /// The right-hand side
    #[must_use]
    pub fn rhs(&self) -> &[Sym] {
        &self.sides[self.rhs_begin]
    }

    /// All sides
    #[must_use]
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Render the rule through the grammar that owns its symbols
    #[must_use]
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> RuleDisplay<'a> {
        RuleDisplay {
            rule: self,
            grammar,
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides
    }
}

impl Eq for Rule {}

// Order-sensitive over every symbol of every side; rhs_begin stays out of
// the hash, as it does for equality.
impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for side in &self.sides {
            for sym in side {
                sym.hash(state);
            }
        }
    }
}

/// Borrowing `Display` adaptor for [`Rule`].
///
/// Rules store interned ids and carry no reference back to their grammar;
/// printing takes the grammar explicitly.
pub struct RuleDisplay<'a> {
    rule: &'a Rule,
    grammar: &'a Grammar,
}

impl fmt::Display for RuleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in self.rule.lhs() {
            write!(f, "{} ", self.grammar.resolve(*sym))?;
        }
        write!(f, "{}", self.grammar.separator())?;
        for (i, side) in self.rule.sides[self.rule.rhs_begin..].iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            for sym in side {
                write!(f, " {}", self.grammar.resolve(*sym))?;
            }
        }
        Ok(())
    }
}
