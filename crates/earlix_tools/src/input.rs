//! Sentence splitting for the input sources.
//!
//! File and stdin input is whitespace-tokenized with blank lines separating
//! sentences; a command-line string is one sentence. Stray blank lines never
//! produce empty sentences.

use std::io::BufRead;

/// Split a stream into whitespace-tokenized sentences
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub fn sentences<R: BufRead>(reader: R) -> std::io::Result<Vec<Vec<String>>> {
    let mut all = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            if !current.is_empty() {
                all.push(std::mem::take(&mut current));
            }
        } else {
            current.extend(line.split_whitespace().map(str::to_owned));
        }
    }
    if !current.is_empty() {
        all.push(current);
    }
    Ok(all)
}

/// Tokenize a single command-line sentence
#[must_use]
pub fn sentence_from_str(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_separate_sentences() {
        let text = "the dog\nsleeps\n\nthe cat sleeps\n";
        let sentences = sentences(text.as_bytes()).expect("read");
        assert_eq!(
            sentences,
            vec![
                vec!["the", "dog", "sleeps"],
                vec!["the", "cat", "sleeps"],
            ]
        );
    }

    #[test]
    fn test_stray_blank_lines_are_dropped() {
        let text = "\n\nthe dog sleeps\n\n\n";
        let sentences = sentences(text.as_bytes()).expect("read");
        assert_eq!(sentences, vec![vec!["the", "dog", "sleeps"]]);
    }

    #[test]
    fn test_empty_input() {
        let sentences = sentences("".as_bytes()).expect("read");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_sentence_from_str() {
        assert_eq!(
            sentence_from_str("  the   dog sleeps "),
            vec!["the", "dog", "sleeps"]
        );
        assert!(sentence_from_str("").is_empty());
    }
}
