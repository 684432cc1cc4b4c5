//! # Earley Recognizer
//!
//! The Predict/Scan/Complete fixpoint driver.
//!
//! ## Overview
//!
//! For each sentence the recognizer builds a fresh chart of `n + 1` cells,
//! seeds cell 0 with the start item, then sweeps the cells left to right.
//! Within a cell it applies the three inference rules to a working set until
//! a full pass adds nothing new:
//!
//! - **Predict**: an incomplete item whose next symbol is a category pulls
//!   in every rule with that symbol as its left-hand side, dot at zero,
//!   span collapsed at the current position.
//! - **Scan**: an incomplete item whose next symbol is a POS tag consumes
//!   the current token when the tag covers it, synthesizing a terminal rule
//!   on the fly and placing the advanced item directly into the *next*
//!   cell — the only cross-cell write of the sweep.
//! - **Complete**: a complete item advances every item in its origin cell
//!   that was waiting for its left-hand side.
//!
//! Newly inferred items go through an unseen gate (cell, working set and
//! buffer) before entering the buffers, so each cell grows monotonically and
//! the fixpoint terminates. The input is recognised iff the completed start
//! item spanning the whole sentence ends up in the last cell.
//!
//! Scanning interns tokens the grammar has never seen, which is the one
//! place recognition writes to the symbol table; everything else is
//! read-only over the grammar.
//!
//! ## Usage
//!
//! ```rust
//! use earlix::grammar::{Grammar, GrammarOptions};
//! use earlix::lexicon::{read_tags, read_words};
//! use earlix::recognizer::Recognizer;
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
//! assert!(!recognizer.parse(&["dog", "the", "sees", "cat", "the"]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chart;
mod config;

pub use chart::{Chart, ChartDisplay, Item, ItemDisplay, ItemSet, EOS};
pub use config::RecognizerConfig;

use smallvec::smallvec;

use crate::grammar::{Grammar, Rule};
use crate::lexicon::{TagSet, WordTable};

/// Cosmetic sign of life for long derivations.
///
/// The recognizer pulses the indicator once per processed item and cancels
/// it when a parse returns. Implementations must stay silent when output is
/// not a terminal; the library ships no renderer.
pub trait BusyIndicator {
    /// Called once per processed item
    fn pulse(&mut self);

    /// Called when a parse finishes; implementations clear their output
    fn cancel(&mut self) {}
}

/// The Earley recognizer
///
/// Owns the grammar (scanning may intern new tokens through it), the POS-tag
/// set, the tag-to-word table and the chart of the most recent parse.
pub struct Recognizer {
    grammar: Grammar,
    tags: TagSet,
    words: WordTable,
    config: RecognizerConfig,
    chart: Chart,
    predict_buffer: ItemSet,
    complete_buffer: ItemSet,
    indicator: Option<Box<dyn BusyIndicator>>,
}

impl Recognizer {
    /// Create a recognizer with the default configuration
    #[must_use]
    pub fn new(grammar: Grammar, tags: TagSet, words: WordTable) -> Self {
        Self::with_config(grammar, tags, words, RecognizerConfig::default())
    }

    /// Create a recognizer with an explicit configuration
    #[must_use]
    pub fn with_config(
        grammar: Grammar,
        tags: TagSet,
        words: WordTable,
        config: RecognizerConfig,
    ) -> Self {
        Self {
            grammar,
            tags,
            words,
            config,
            chart: Chart::new(),
            predict_buffer: ItemSet::default(),
            complete_buffer: ItemSet::default(),
            indicator: None,
        }
    }

    /// Install a busy indicator
    pub fn set_indicator(&mut self, indicator: Box<dyn BusyIndicator>) {
        self.indicator = Some(indicator);
    }

    /// The grammar, as grown by scanning
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The POS-tag set
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The tag-to-word table
    #[must_use]
    pub fn words(&self) -> &WordTable {
        &self.words
    }

    /// The chart of the most recent parse; empty before the first one
    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Decide whether `sentence` is derivable from the grammar's start
    /// symbol
    ///
    /// Rejection is a plain `false`, never an error. Repeated calls with the
    /// same sentence are idempotent and leave equal charts behind.
    pub fn parse<S: AsRef<str>>(&mut self, sentence: &[S]) -> bool {
        self.chart.initialise(sentence, self.grammar.start().clone());
        self.predict_buffer.clear();
        self.complete_buffer.clear();

        for index in 0..self.chart.len() {
            // Seed the working set with the cell: the start item for cell 0,
            // scanned items for the others.
            let mut work: ItemSet = self.chart.cell(index).iter().cloned().collect();
            loop {
                let mut predicted = false;
                let mut completed = false;

                for item in &work {
                    self.pulse();

                    if item.complete() {
                        completed |= self.complete(item, &work);
                        continue;
                    }

                    // A grammar may use one symbol both as a POS tag and as
                    // a category with rules of its own ('A --> A' next to
                    // the lexical 'A --> a'), so a tag at the dot still goes
                    // through prediction when terminal rules are allowed;
                    // the terminal filter inside predict() keeps the cells
                    // clean. Without terminal rules there is nothing to
                    // predict from a tag at all.
                    let is_tag = self.tags.contains(&item.next());
                    if self.config.lexical_rules || !is_tag {
                        predicted |= self.predict(item, &work);
                    }
                    if is_tag {
                        self.scan(item);
                    }
                }

                // Fold the processed items into the cell, then work on
                // whatever the pass inferred.
                self.chart.cell_mut(index).extend(work.drain());
                work.extend(self.predict_buffer.drain());
                work.extend(self.complete_buffer.drain());

                if !(predicted || completed) {
                    break;
                }
            }
        }

        if let Some(indicator) = self.indicator.as_mut() {
            indicator.cancel();
        }

        let last = self.chart.len() - 1;
        self.chart
            .final_item()
            .is_some_and(|item| self.chart.cell(last).contains(item))
    }

    /// Predict: buffer `(r, 0, it.to, it.to)` for every rule `r` whose LHS
    /// is the symbol after the dot
    fn predict(&mut self, item: &Item, work: &ItemSet) -> bool {
        let mut any_new = false;
        for rule in self.grammar.rules_with_lhs(item.next()) {
            // Terminal rules stay out of the cells; scanning covers them.
            if self.config.lexical_rules && self.grammar.is_word(rule.rhs()[0]) {
                continue;
            }
            let predicted = Item::new(rule.clone(), 0, item.to, item.to);
            if !self.chart.contains(item.to, &predicted)
                && !work.contains(&predicted)
                && !self.predict_buffer.contains(&predicted)
            {
                self.predict_buffer.insert(predicted);
                any_new = true;
            }
        }
        any_new
    }

    /// Scan: when the tag after the dot covers the current token, place the
    /// completed terminal item directly into the next cell
    ///
    /// Scanned items bypass the buffers: they belong to cell `to + 1` and
    /// are never re-examined by the current cell's fixpoint loop.
    fn scan(&mut self, item: &Item) {
        let tag = item.next();
        let covered = self
            .words
            .words_for(tag)
            .is_some_and(|words| words.contains(self.chart.word(item.to)));
        if !covered {
            return;
        }

        let word = self.grammar.intern(self.chart.word(item.to));
        let rule = Rule::new(smallvec![smallvec![tag], smallvec![word]], 1);
        self.chart
            .insert(item.to + 1, Item::new(rule, 1, item.to, item.to + 1));
    }

    /// Complete: buffer an advanced copy of every item in the origin cell
    /// that was waiting for this item's LHS
    fn complete(&mut self, item: &Item, work: &ItemSet) -> bool {
        let mut any_new = false;
        for waiting in self.chart.cell(item.from) {
            if waiting.complete() || waiting.next() != item.lhs() {
                continue;
            }
            let advanced = Item::new(
                waiting.rule.clone(),
                waiting.dot + 1,
                waiting.from,
                item.to,
            );
            if !self.chart.contains(item.to, &advanced)
                && !work.contains(&advanced)
                && !self.complete_buffer.contains(&advanced)
            {
                self.complete_buffer.insert(advanced);
                any_new = true;
            }
        }
        any_new
    }

    fn pulse(&mut self) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.pulse();
        }
    }
}
