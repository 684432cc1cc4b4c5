//! Items and the recognition chart.

use compact_str::CompactString;
use hashbrown::HashSet;
use std::fmt;

use crate::grammar::{Grammar, Rule};
use crate::intern::Sym;

/// Token placed after the last input token so that the token buffer and the
/// cell vector have the same length.
pub const EOS: &str = "$";

/// A dotted rule with a span.
///
/// `rule` with the dot before `rhs()[dot]`, covering input positions
/// `[from, to)`. Items are value types: two items are equal iff rule, dot
/// and both span borders are equal, and that identity is what the chart
/// cells deduplicate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub rule: Rule,
    pub dot: usize,
    pub from: usize,
    pub to: usize,
}

impl Item {
    /// Create an item
    #[must_use]
    pub fn new(rule: Rule, dot: usize, from: usize, to: usize) -> Self {
        Self {
            rule,
            dot,
            from,
            to,
        }
    }

    /// Whether the dot is past the last RHS symbol
    #[must_use]
    pub fn complete(&self) -> bool {
        self.dot >= self.rule.rhs().len()
    }

    /// The symbol after the dot
    ///
    /// Precondition: the item is not complete.
    #[must_use]
    pub fn next(&self) -> Sym {
        debug_assert!(!self.complete());
        self.rule.rhs()[self.dot]
    }

    /// The rule's left-hand-side symbol
    #[must_use]
    pub fn lhs(&self) -> Sym {
        self.rule.lhs_sym()
    }

    /// Render the dotted rule through the grammar that owns its symbols
    #[must_use]
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> ItemDisplay<'a> {
        ItemDisplay {
            item: self,
            grammar,
        }
    }
}

/// Borrowing `Display` adaptor for [`Item`]: `LHS --> a • b`.
pub struct ItemDisplay<'a> {
    item: &'a Item,
    grammar: &'a Grammar,
}

impl fmt::Display for ItemDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.grammar.resolve(self.item.lhs()),
            self.grammar.separator()
        )?;
        for (i, sym) in self.item.rule.rhs().iter().enumerate() {
            if i == self.item.dot {
                write!(f, " •")?;
            }
            write!(f, " {}", self.grammar.resolve(*sym))?;
        }
        if self.item.complete() {
            write!(f, " •")?;
        }
        Ok(())
    }
}

/// Set of items forming one chart cell.
pub type ItemSet = HashSet<Item, ahash::RandomState>;

/// The recognition chart: one item set per input position, the token buffer
/// and the distinguished final item.
///
/// A chart is cleared and re-initialised per sentence; after a parse
/// returns it is read-only until the next one. For a sentence of `n` tokens
/// there are `n + 1` cells, and the token buffer carries the [`EOS`]
/// sentinel at index `n` so both have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chart {
    cells: Vec<ItemSet>,
    tokens: Vec<CompactString>,
    final_item: Option<Item>,
}

impl Chart {
    /// Create an empty chart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and re-initialise for a sentence
    ///
    /// Sizes the chart to `tokens.len() + 1` empty cells, copies the tokens
    /// and appends the end-of-stream sentinel, seeds cell 0 with the start
    /// item, and derives the final item — the start rule completed over the
    /// whole input.
    pub fn initialise<S: AsRef<str>>(&mut self, tokens: &[S], start_rule: Rule) {
        self.cells.clear();
        self.tokens.clear();

        let n = tokens.len();
        self.cells.resize_with(n + 1, ItemSet::default);
        self.tokens
            .extend(tokens.iter().map(|t| CompactString::from(t.as_ref())));
        self.tokens.push(CompactString::from(EOS));

        let rhs_len = start_rule.rhs().len();
        self.final_item = Some(Item::new(start_rule.clone(), rhs_len, 0, n));
        self.insert(0, Item::new(start_rule, 0, 0, 0));
    }

    /// Idempotent insertion into cell `index`
    ///
    /// The cell vector grows to `index + 1` cells when `index` is past the
    /// end, so the target cell always exists.
    pub fn insert(&mut self, index: usize, item: Item) {
        if index >= self.cells.len() {
            self.cells.resize_with(index + 1, ItemSet::default);
        }
        self.cells[index].insert(item);
    }

    /// Whether cell `index` holds `item`
    #[must_use]
    pub fn contains(&self, index: usize, item: &Item) -> bool {
        self.cells[index].contains(item)
    }

    /// The item set at `index`
    #[must_use]
    pub fn cell(&self, index: usize) -> &ItemSet {
        &self.cells[index]
    }

    /// Mutable item set at `index`; recognition only
    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut ItemSet {
        &mut self.cells[index]
    }

    /// The token at position `index`
    #[must_use]
    pub fn word(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    /// The completed start item whose presence in the last cell means the
    /// input was recognised; `None` before the first `initialise`
    #[must_use]
    pub fn final_item(&self) -> Option<&Item> {
        self.final_item.as_ref()
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.cells.len(), self.tokens.len());
        self.cells.len()
    }

    /// Whether the chart has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The token buffer, sentinel included
    #[must_use]
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// Render every cell through the grammar that owns the symbols
    #[must_use]
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> ChartDisplay<'a> {
        ChartDisplay {
            chart: self,
            grammar,
        }
    }
}

/// Borrowing `Display` adaptor for [`Chart`].
pub struct ChartDisplay<'a> {
    chart: &'a Chart,
    grammar: &'a Grammar,
}

impl fmt::Display for ChartDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.chart.cells.iter().enumerate() {
            writeln!(f, "CHART[{i}] ('{}')", self.chart.tokens[i])?;
            writeln!(f)?;
            for item in cell {
                writeln!(f, "{}", item.display(self.grammar))?;
            }
            writeln!(f, "{}", "_".repeat(72))?;
        }
        Ok(())
    }
}
