//! End-to-end recognition scenarios.

use earlix::recognizer::EOS;
use earlix::{
    read_tags, read_words, Grammar, GrammarOptions, Recognizer, RecognizerConfig,
};

const ARITHMETIC_GRAMMAR: &str = "\
S --> S + S
S --> S * S
S --> ( S )
S --> a
";
// Each literal terminal tags itself so scanning can consume it.
const ARITHMETIC_TAGS: &str = "a\n+\n*\n(\n)\n";
const ARITHMETIC_WORDS: &str = "a a\n+ +\n* *\n( (\n) )\n";

const TOY_GRAMMAR: &str = "S --> NP VP\nNP --> Det N\nVP --> V NP\n";
const TOY_TAGS: &str = "Det\nN\nV\n";
const TOY_WORDS: &str = "the Det\ndog N\ncat N\nsees V\n";

fn recognizer_for(grammar_text: &str, tag_text: &str, word_text: &str) -> Recognizer {
    let mut grammar = Grammar::from_reader(grammar_text.as_bytes(), GrammarOptions::default())
        .expect("grammar should load");
    let tags = read_tags(tag_text.as_bytes(), &mut grammar).expect("tags should load");
    let words = read_words(word_text.as_bytes(), &mut grammar).expect("words should load");
    Recognizer::new(grammar, tags, words)
}

fn arithmetic_recognizer() -> Recognizer {
    recognizer_for(ARITHMETIC_GRAMMAR, ARITHMETIC_TAGS, ARITHMETIC_WORDS)
}

fn toy_recognizer() -> Recognizer {
    recognizer_for(TOY_GRAMMAR, TOY_TAGS, TOY_WORDS)
}

/// The toy grammar with its terminal rules spelled out, run in lexical mode.
fn lexical_toy_recognizer() -> Recognizer {
    let grammar_text = "\
S --> NP VP
NP --> Det N
VP --> V NP
Det --> the
N --> dog
N --> cat
V --> sees
";
    let mut grammar = Grammar::from_reader(grammar_text.as_bytes(), GrammarOptions::default())
        .expect("grammar should load");
    let tags = read_tags(TOY_TAGS.as_bytes(), &mut grammar).expect("tags should load");
    let words = read_words(TOY_WORDS.as_bytes(), &mut grammar).expect("words should load");
    grammar.inject_lexicon(words.lexicon().clone());
    Recognizer::with_config(
        grammar,
        tags,
        words,
        RecognizerConfig::new().with_lexical_rules(true),
    )
}

fn assert_chart_invariants(recognizer: &Recognizer) {
    let chart = recognizer.chart();
    let n = chart.len() - 1;
    assert_eq!(chart.tokens().len(), chart.len());
    assert_eq!(chart.tokens().last().map(|t| t.as_str()), Some(EOS));
    for k in 0..chart.len() {
        for item in chart.cell(k) {
            assert_eq!(item.to, k, "item parked in the wrong cell");
            assert!(item.from <= item.to);
            assert!(item.to <= n);
            assert!(item.dot <= item.rule.rhs().len());
        }
    }
}

#[test]
fn test_accepts_single_operand() {
    assert!(arithmetic_recognizer().parse(&["a"]));
}

#[test]
fn test_accepts_sum() {
    assert!(arithmetic_recognizer().parse(&["a", "+", "a"]));
}

#[test]
fn test_accepts_mixed_operators() {
    assert!(arithmetic_recognizer().parse(&["a", "+", "a", "*", "a"]));
}

#[test]
fn test_accepts_parenthesised_expression() {
    assert!(arithmetic_recognizer().parse(&["(", "a", "+", "a", ")", "*", "a"]));
}

#[test]
fn test_rejects_dangling_operator() {
    assert!(!arithmetic_recognizer().parse(&["a", "+"]));
}

#[test]
fn test_rejects_leading_operator() {
    assert!(!arithmetic_recognizer().parse(&["+", "a"]));
}

#[test]
fn test_accepts_toy_sentence() {
    assert!(toy_recognizer().parse(&["the", "dog", "sees", "the", "cat"]));
}

#[test]
fn test_rejects_scrambled_toy_sentence() {
    assert!(!toy_recognizer().parse(&["dog", "the", "sees", "cat", "the"]));
}

#[test]
fn test_lexical_mode_accepts_toy_sentence() {
    assert!(lexical_toy_recognizer().parse(&["the", "dog", "sees", "the", "cat"]));
}

#[test]
fn test_lexical_mode_keeps_terminal_rules_out_of_cells() {
    let mut recognizer = lexical_toy_recognizer();
    assert!(recognizer.parse(&["the", "dog", "sees", "the", "cat"]));

    let grammar = recognizer.grammar();
    let chart = recognizer.chart();
    for k in 0..chart.len() {
        for item in chart.cell(k) {
            let predicted_terminal = item.dot == 0 && grammar.is_word(item.rule.rhs()[0]);
            assert!(
                !predicted_terminal,
                "terminal rule predicted into cell {k}: {}",
                item.display(grammar)
            );
        }
    }
}

// One symbol doubling as POS tag and category: 'A --> A A' next to the
// lexical entry for A. Only lexical mode predicts from the tag, so only it
// derives multi-token input.
#[test]
fn test_overloaded_tag_symbol_needs_lexical_mode() {
    let grammar_text = "S --> A\nA --> A A\n";
    let tag_text = "A\n";
    let word_text = "x A\n";

    let mut tag_filtered = recognizer_for(grammar_text, tag_text, word_text);
    assert!(tag_filtered.parse(&["x"]));
    assert!(!tag_filtered.parse(&["x", "x"]));

    let mut grammar = Grammar::from_reader(grammar_text.as_bytes(), GrammarOptions::default())
        .expect("grammar should load");
    let tags = read_tags(tag_text.as_bytes(), &mut grammar).expect("tags");
    let words = read_words(word_text.as_bytes(), &mut grammar).expect("words");
    grammar.inject_lexicon(words.lexicon().clone());
    let mut lexical = Recognizer::with_config(
        grammar,
        tags,
        words,
        RecognizerConfig::new().with_lexical_rules(true),
    );
    assert!(lexical.parse(&["x"]));
    assert!(lexical.parse(&["x", "x"]));
    assert!(lexical.parse(&["x", "x", "x"]));
}

#[test]
fn test_empty_sentence_rejected_without_epsilon_rules() {
    let mut recognizer = arithmetic_recognizer();
    assert!(!recognizer.parse::<&str>(&[]));
    assert_eq!(recognizer.chart().len(), 1);
    assert_chart_invariants(&recognizer);
}

#[test]
fn test_unknown_token_rejected() {
    assert!(!arithmetic_recognizer().parse(&["b"]));
    assert!(!toy_recognizer().parse(&["the", "dog", "greets", "the", "cat"]));
}

#[test]
fn test_unreachable_rules_do_not_affect_acceptance() {
    let extended = format!("{ARITHMETIC_GRAMMAR}X --> Y Z\n");
    let mut recognizer = recognizer_for(&extended, ARITHMETIC_TAGS, ARITHMETIC_WORDS);
    assert!(recognizer.parse(&["a", "+", "a"]));
    assert!(!recognizer.parse(&["a", "+"]));
}

#[test]
fn test_adding_a_rule_is_monotone() {
    let extended = format!("{ARITHMETIC_GRAMMAR}S --> S S\n");
    let mut recognizer = recognizer_for(&extended, ARITHMETIC_TAGS, ARITHMETIC_WORDS);
    for accepted in [
        vec!["a"],
        vec!["a", "+", "a"],
        vec!["a", "+", "a", "*", "a"],
        vec!["(", "a", "+", "a", ")", "*", "a"],
    ] {
        assert!(recognizer.parse(&accepted), "lost '{}'", accepted.join(" "));
    }
}

#[test]
fn test_acceptance_is_final_item_membership() {
    let mut recognizer = arithmetic_recognizer();

    assert!(recognizer.parse(&["a", "+", "a"]));
    let chart = recognizer.chart();
    let final_item = chart.final_item().expect("chart initialised");
    assert!(chart.cell(chart.len() - 1).contains(final_item));

    assert!(!recognizer.parse(&["+", "a"]));
    let chart = recognizer.chart();
    let final_item = chart.final_item().expect("chart initialised");
    assert!(!chart.cell(chart.len() - 1).contains(final_item));
}

#[test]
fn test_repeated_parse_leaves_equal_charts() {
    let mut recognizer = arithmetic_recognizer();
    let sentence = ["a", "+", "a", "*", "a"];

    assert!(recognizer.parse(&sentence));
    let first = recognizer.chart().clone();
    assert!(recognizer.parse(&sentence));
    assert_eq!(&first, recognizer.chart());
}

#[test]
fn test_chart_invariants_hold_after_parse() {
    let mut recognizer = arithmetic_recognizer();
    recognizer.parse(&["(", "a", "+", "a", ")", "*", "a"]);
    assert_chart_invariants(&recognizer);

    recognizer.parse(&["a", "+"]);
    assert_chart_invariants(&recognizer);
}

#[test]
fn test_consecutive_sentences_are_independent() {
    let mut recognizer = toy_recognizer();
    assert!(recognizer.parse(&["the", "dog", "sees", "the", "cat"]));
    assert!(!recognizer.parse(&["dog"]));
    assert!(recognizer.parse(&["the", "cat", "sees", "the", "dog"]));
    assert_eq!(recognizer.chart().len(), 6);
}
