//! Tests for grammar construction and the lexicon files.

use earlix::{read_tags, read_words, Grammar, GrammarError, GrammarOptions};

const TOY_GRAMMAR: &str = "\
S --> NP VP

NP --> Det N
NP --> N
VP --> V NP
VP --> V
";

fn load(text: &str) -> Grammar {
    Grammar::from_reader(text.as_bytes(), GrammarOptions::default()).expect("grammar should load")
}

#[test]
fn test_load_skips_blank_lines() {
    let grammar = load(TOY_GRAMMAR);
    // start rule + 5 loaded rules
    assert_eq!(grammar.rule_count(), 6);

    let np = grammar.symbols().get("NP").unwrap();
    let vp = grammar.symbols().get("VP").unwrap();
    assert_eq!(grammar.rules_with_lhs(np).len(), 2);
    assert_eq!(grammar.rules_with_lhs(vp).len(), 2);
}

#[test]
fn test_super_start_and_start_exist_before_any_rule() {
    let grammar = load("");
    assert!(grammar.symbols().get("$").is_some());
    assert!(grammar.symbols().get("S").is_some());
    assert_eq!(grammar.rule_count(), 1);
}

#[test]
fn test_display_lists_every_rule() {
    let grammar = load(TOY_GRAMMAR);
    let printed = grammar.to_string();
    for rule in ["$ --> S", "S --> NP VP", "NP --> Det N", "VP --> V"] {
        assert!(printed.lines().any(|l| l == rule), "missing '{rule}'");
    }
}

#[test]
fn test_malformed_rule_aborts_load() {
    let text = "S --> NP VP\nVP V NP\n";
    let err = Grammar::from_reader(text.as_bytes(), GrammarOptions::default())
        .expect_err("should reject");
    assert!(matches!(err, GrammarError::MalformedRule { line: 2, .. }));
}

#[test]
fn test_tags_and_words_share_the_grammar_table() {
    let mut grammar = load(TOY_GRAMMAR);
    let tags = read_tags("Det\nN\nV\n".as_bytes(), &mut grammar).expect("tags");
    let words =
        read_words("the Det\ndog N\nsees V\n".as_bytes(), &mut grammar).expect("words");

    let det = grammar.symbols().get("Det").expect("Det interned");
    assert!(tags.contains(&det));
    assert!(words.tagged(det, "the"));

    // words are interned through the same table as grammar symbols
    let dog = grammar.symbols().get("dog").expect("dog interned");
    assert!(words.lexicon().contains(&dog));
}

#[test]
fn test_inject_lexicon_is_idempotent() {
    let mut grammar = load(TOY_GRAMMAR);
    let words = read_words("the Det\ndog N\n".as_bytes(), &mut grammar).expect("words");

    grammar.inject_lexicon(words.lexicon().clone());
    grammar.inject_lexicon(words.lexicon().clone());

    let dog = grammar.symbols().get("dog").unwrap();
    let the = grammar.symbols().get("the").unwrap();
    assert!(grammar.is_word(dog));
    assert!(grammar.is_word(the));

    let s = grammar.symbols().get("S").unwrap();
    assert!(!grammar.is_word(s));
}
