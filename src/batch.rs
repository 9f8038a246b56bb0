use rayon::prelude::*;
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// Splits text into lines, dropping the `\r` of CRLF endings.
fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Tokenizes every line of `text` one after another.
///
/// Returns one token list per line, in line order.
pub fn tokenize_lines(text: &str, tokenizer: &Tokenizer) -> Vec<Vec<String>> {
    lines(text)
        .into_iter()
        .map(|line| tokenizer.tokenize(line))
        .collect()
}

/// Tokenizes every line of `text` across Rayon's thread pool.
///
/// Output is identical to [`tokenize_lines`]; line order is preserved.
pub fn tokenize_lines_parallel(text: &str, tokenizer: &Tokenizer) -> Vec<Vec<String>> {
    let lines = lines(text);
    debug!(lines = lines.len(), "tokenizing lines in parallel");

    lines
        .par_iter()
        .map(|line| tokenizer.tokenize(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_list_per_line() {
        let tokens = tokenize_lines("hi!\nA  B\n", &Tokenizer::new());
        assert_eq!(tokens, vec![vec!["HI", "!"], vec!["A", "  ", "B"]]);
    }

    #[test]
    fn test_crlf_lines() {
        let tokens = tokenize_lines("one\r\ntwo 2", &Tokenizer::new());
        assert_eq!(tokens, vec![vec!["ONE"], vec!["TWO", " ", "2"]]);
    }

    #[test]
    fn test_blank_line_yields_no_tokens() {
        let tokens = tokenize_lines("A\n\nB", &Tokenizer::new());
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize_lines("", &Tokenizer::new()).is_empty());
        assert!(tokenize_lines_parallel("", &Tokenizer::new()).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text: String = (0..500)
            .map(|i| format!("Line {} says hello, world #{}!\n", i, i * 7))
            .collect();
        let tokenizer = Tokenizer::preserving_case();

        let sequential = tokenize_lines(&text, &tokenizer);
        let parallel = tokenize_lines_parallel(&text, &tokenizer);

        assert_eq!(sequential.len(), 500);
        assert_eq!(sequential, parallel, "Parallel output must match sequential");
    }
}
