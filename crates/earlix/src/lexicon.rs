//! # Lexicon Loading
//!
//! POS-tag sets and tag-to-word tables, read from plain-text files.
//!
//! Two inputs feed the recognizer besides the grammar:
//!
//! - a **tag file** with one POS tag per line, and
//! - a **word file** with one `token₁ [token₂ …] TAG` entry per line, where
//!   the last token is the tag and everything before it — joined by single
//!   spaces — is the word. Multi-word lexical entries are allowed.
//!
//! Both are interned through the grammar's symbol table so that tags and
//! words share the id space with the grammar symbols.

use compact_str::CompactString;
use hashbrown::{HashMap, HashSet};
use std::io::BufRead;

use crate::error::LexiconError;
use crate::grammar::Grammar;
use crate::intern::Sym;

/// Set of POS-tag symbols.
pub type TagSet = HashSet<Sym, ahash::RandomState>;

/// Set of words that can bear one tag.
pub type WordSet = HashSet<CompactString, ahash::RandomState>;

/// The word file contents: which words each tag covers, plus the interned
/// word ids for lexicon injection.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    by_tag: HashMap<Sym, WordSet, ahash::RandomState>,
    lexicon: HashSet<Sym, ahash::RandomState>,
}

impl WordTable {
    /// The words that can bear `tag`, if any
    #[must_use]
    pub fn words_for(&self, tag: Sym) -> Option<&WordSet> {
        self.by_tag.get(&tag)
    }

    /// Whether `word` can bear `tag`
    #[must_use]
    pub fn tagged(&self, tag: Sym, word: &str) -> bool {
        self.by_tag.get(&tag).is_some_and(|words| words.contains(word))
    }

    /// Interned ids of every word in the table, for
    /// [`Grammar::inject_lexicon`]
    #[must_use]
    pub fn lexicon(&self) -> &HashSet<Sym, ahash::RandomState> {
        &self.lexicon
    }

    /// Number of tags with at least one word
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Read a tag file: one tag per line, blank lines skipped
///
/// # Errors
///
/// Returns [`LexiconError::MalformedTagEntry`] for a line with more than one
/// token, or [`LexiconError::Io`] if reading fails.
pub fn read_tags<R: BufRead>(reader: R, grammar: &mut Grammar) -> Result<TagSet, LexiconError> {
    let mut tags = TagSet::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [tag] => {
                tags.insert(grammar.intern(tag));
            }
            _ => {
                return Err(LexiconError::MalformedTagEntry {
                    line: idx + 1,
                    text: line.clone(),
                });
            }
        }
    }
    Ok(tags)
}

/// Read a word file: `token₁ [token₂ …] TAG` per line, blank lines skipped
///
/// # Errors
///
/// Returns [`LexiconError::MalformedWordEntry`] for a line with fewer than
/// two tokens, or [`LexiconError::Io`] if reading fails.
pub fn read_words<R: BufRead>(reader: R, grammar: &mut Grammar) -> Result<WordTable, LexiconError> {
    let mut table = WordTable::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let Some((tag, word_tokens)) = tokens.split_last() else {
            continue;
        };
        if word_tokens.is_empty() {
            return Err(LexiconError::MalformedWordEntry {
                line: idx + 1,
                text: line.clone(),
            });
        }
        let word: CompactString = word_tokens.join(" ").into();
        let tag = grammar.intern(tag);
        table.lexicon.insert(grammar.intern(&word));
        table.by_tag.entry(tag).or_default().insert(word);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarOptions;

    fn grammar() -> Grammar {
        Grammar::new(GrammarOptions::default())
    }

    #[test]
    fn test_read_tags() {
        let mut grammar = grammar();
        let tags = read_tags("Det\nN\n\nV\n".as_bytes(), &mut grammar).expect("tags");
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&grammar.symbols().get("Det").unwrap()));
        assert!(tags.contains(&grammar.symbols().get("V").unwrap()));
    }

    #[test]
    fn test_multi_token_tag_line_rejected() {
        let mut grammar = grammar();
        let err = read_tags("Det N\n".as_bytes(), &mut grammar).expect_err("reject");
        match err {
            LexiconError::MalformedTagEntry { line, text } => {
                assert_eq!(line, 1);
                assert_eq!(text, "Det N");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_words() {
        let mut grammar = grammar();
        let table =
            read_words("the Det\ndog N\ncat N\n".as_bytes(), &mut grammar).expect("words");

        let n = grammar.symbols().get("N").unwrap();
        let det = grammar.symbols().get("Det").unwrap();
        assert!(table.tagged(n, "dog"));
        assert!(table.tagged(n, "cat"));
        assert!(table.tagged(det, "the"));
        assert!(!table.tagged(n, "the"));
        assert_eq!(table.words_for(n).map(WordSet::len), Some(2));
    }

    #[test]
    fn test_multi_word_entry() {
        let mut grammar = grammar();
        let table = read_words("New York NP\n".as_bytes(), &mut grammar).expect("words");

        let np = grammar.symbols().get("NP").unwrap();
        assert!(table.tagged(np, "New York"));
        assert!(grammar.symbols().contains("New York"));
        assert_eq!(table.lexicon().len(), 1);
    }

    #[test]
    fn test_single_token_word_line_rejected() {
        let mut grammar = grammar();
        let err = read_words("dog\n".as_bytes(), &mut grammar).expect_err("reject");
        assert!(matches!(
            err,
            LexiconError::MalformedWordEntry { line: 1, .. }
        ));
    }

    #[test]
    fn test_lexicon_ids_cover_all_words() {
        let mut grammar = grammar();
        let table =
            read_words("the Det\ndog N\nsees V\n".as_bytes(), &mut grammar).expect("words");
        for word in ["the", "dog", "sees"] {
            let sym = grammar.symbols().get(word).unwrap();
            assert!(table.lexicon().contains(&sym));
        }
    }
}
