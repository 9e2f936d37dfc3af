//! Splits raw quiz text into candidate question blocks.
//!
//! Segmentation is a pure numbering heuristic: any line opening with a
//! number and a `.`, `)` or `-` starts a new block. The digit value is
//! discarded, so documents with restarted or repeated numbering segment
//! the same as well-numbered ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// A question-start line: leading digits followed by `.`, `)` or `-`.
pub(crate) static QUESTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+[.)\-]\s*").unwrap());

/// Normalizes the document into trimmed lines: CRLF becomes LF and
/// non-breaking spaces become ordinary spaces before trimming.
fn normalize_lines(raw: &str) -> Vec<String> {
    raw.replace("\r\n", "\n")
        .split('\n')
        .map(|line| line.replace('\u{00A0}', " ").trim().to_string())
        .collect()
}

/// Splits the input into blocks, one per suspected question.
///
/// Each question-start line closes the block in progress and opens a new
/// one. Blank lines before a block's first line are dropped; blank lines
/// inside a block are kept so multi-line text survives intact. The final
/// open block is flushed at end of input.
pub fn split_blocks(raw: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in normalize_lines(raw) {
        if QUESTION_START.is_match(&line) {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
            }
            current = vec![line];
        } else {
            if line.is_empty() && current.is_empty() {
                continue;
            }
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1. first")]
    #[case("12) first")]
    #[case("3- first")]
    #[case("  7.   first")]
    fn question_start_accepts_numbering_punctuation(#[case] line: &str) {
        assert!(QUESTION_START.is_match(line));
    }

    #[test]
    fn question_start_rejects_plain_text() {
        assert!(!QUESTION_START.is_match("What is 2+2?"));
        assert!(!QUESTION_START.is_match("A. option"));
    }

    #[test]
    fn splits_on_each_numbered_line() {
        let blocks = split_blocks("1. one\nA. x\nB. y\n2. two\nA. p\nB. q");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "1. one\nA. x\nB. y");
        assert_eq!(blocks[1], "2. two\nA. p\nB. q");
    }

    #[test]
    fn numbering_may_restart_or_repeat() {
        let blocks = split_blocks("1. one\n1. again\n9. nine");
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn leading_blank_lines_are_dropped_and_interior_ones_kept() {
        let blocks = split_blocks("\n\n1. one\n\ncontinued\n\n2. two");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "1. one\n\ncontinued");
    }

    #[test]
    fn normalizes_crlf_and_nbsp() {
        let blocks = split_blocks("1.\u{00A0}one\r\nA. x\r\nB. y");
        assert_eq!(blocks, vec!["1. one\nA. x\nB. y".to_string()]);
    }

    #[test]
    fn text_before_first_number_forms_its_own_block() {
        let blocks = split_blocks("preamble\n1. one");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "preamble");
    }

    #[test]
    fn covers_every_non_blank_input_line_exactly_once() {
        let input = "intro\n1. one\nA. x\n\nB. y\n2. two\nA. p\nB. q ✓\n";
        let mut from_blocks: Vec<String> = split_blocks(input)
            .iter()
            .flat_map(|b| b.lines())
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .collect();
        let mut from_input: Vec<String> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .collect();
        from_blocks.sort();
        from_input.sort();
        assert_eq!(from_blocks, from_input);
    }
}
