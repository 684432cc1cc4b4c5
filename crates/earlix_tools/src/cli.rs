//! CLI surface for the recognizer driver.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "earlix")]
#[command(about = "Earley recognizer for context-free grammars")]
#[command(version)]
pub struct Cli {
    /// Grammar (CFG) file; one rule per line
    #[arg(short = 'g', long)]
    pub grammar: PathBuf,

    /// POS-tag file; one tag per line
    #[arg(short = 't', long)]
    pub tags: PathBuf,

    /// Word file; one 'word ... TAG' entry per line
    #[arg(short = 'w', long)]
    pub words: PathBuf,

    /// File with text to recognise; blank lines separate sentences
    #[arg(short = 'f', long, conflicts_with = "sentence")]
    pub file: Option<PathBuf>,

    /// Single sentence to recognise; tokens separated by whitespace
    #[arg(short = 's', long)]
    pub sentence: Option<String>,

    /// Verbosity: 0 prints 0/1, 1 adds phrases, 2 echoes sentences, 3 dumps the chart
    #[arg(short = 'v', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub verbosity: u8,

    /// Allow terminal rules in the grammar (filtered during prediction)
    #[arg(long)]
    pub lexical_rules: bool,
}
