//! Earlix CLI
//!
//! Loads a grammar, a tag set and a word table, then recognises sentences
//! from a file, a command-line string or stdin.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use earlix::{read_tags, read_words, Grammar, GrammarOptions, Recognizer, RecognizerConfig};
use earlix_tools::cli::Cli;
use earlix_tools::input;
use earlix_tools::spinner::Spinner;

fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    Ok(BufReader::new(file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut grammar = Grammar::from_reader(open(&cli.grammar)?, GrammarOptions::default())
        .with_context(|| format!("failed to load grammar '{}'", cli.grammar.display()))?;
    let tags = read_tags(open(&cli.tags)?, &mut grammar)
        .with_context(|| format!("failed to load tags '{}'", cli.tags.display()))?;
    let words = read_words(open(&cli.words)?, &mut grammar)
        .with_context(|| format!("failed to load words '{}'", cli.words.display()))?;

    if cli.lexical_rules {
        grammar.inject_lexicon(words.lexicon().clone());
    }

    let sentences = if let Some(text) = &cli.sentence {
        vec![input::sentence_from_str(text)]
    } else if let Some(path) = &cli.file {
        input::sentences(open(path)?)
            .with_context(|| format!("failed to read input '{}'", path.display()))?
    } else if !io::stdin().is_terminal() {
        input::sentences(io::stdin().lock()).context("failed to read stdin")?
    } else {
        bail!("no input: pass -f or -s, or pipe sentences on stdin");
    };

    let config = RecognizerConfig::new().with_lexical_rules(cli.lexical_rules);
    let mut recognizer = Recognizer::with_config(grammar, tags, words, config);
    recognizer.set_indicator(Box::new(Spinner::new()));

    for sentence in &sentences {
        if cli.verbosity >= 2 {
            println!("'{}'", sentence.join(" "));
        }

        let recognised = recognizer.parse(sentence);

        if cli.verbosity >= 3 {
            println!("{}", recognizer.chart().display(recognizer.grammar()));
        }
        if cli.verbosity >= 1 {
            println!("input recognised: {recognised}");
        } else {
            println!("{}", u8::from(recognised));
        }
    }

    Ok(())
}
