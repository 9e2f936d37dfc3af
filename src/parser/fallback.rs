//! Stricter re-scan strategies for input the primary pass rejects.
//!
//! Both tiers assume the canonical `N. question` / `A. option` layout
//! with check-mark style correct answers and no multi-line or
//! `Answer:`-line support. The per-block tier retries a single rejected
//! block; the whole-document tier ignores segmentation entirely and is
//! the last chance for legacy documents whose numbering confuses the
//! block heuristic.

use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::QUESTION_START;
use crate::models::{Choice, Question};

/// Gate for the strict per-block tier: a numbered question followed by
/// an `A.` option (or end of block).
static CANON_GATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)\d+\.\s*.*?\s*(?:A\.|$)").unwrap());

/// Canonical single-line option.
static CANON_OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([A-D])\.\s*([^\n]+)").unwrap());

/// Marks the strict tier recognizes; no bare-word form here.
static CANON_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)✔|✓|\(correct\)|\(answer\)").unwrap());

/// Boundary between question text and the first canonical option line.
static FIRST_OPTION_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\nA\.").unwrap());

/// Canonical question-start line for the whole-document scan.
static DOC_QUESTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s").unwrap());

/// Re-scans a single rejected block against the canonical layout.
pub fn parse_block_strict(block: &str) -> Option<Question> {
    if !CANON_GATE.is_match(block) {
        return None;
    }

    let body = QUESTION_START.replace(block, "");
    let question_text = FIRST_OPTION_BREAK
        .splitn(&body, 2)
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let mut choices = Vec::new();
    let mut correct = None;
    for caps in CANON_OPTION.captures_iter(block) {
        let label = caps[1]
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A');
        let mut text = caps[2].trim().to_string();
        if CANON_MARK.is_match(&text) {
            if correct.is_none() {
                correct = Some(label);
            }
            text = CANON_MARK.replace_all(&text, "").trim().to_string();
        }
        choices.push(Choice { label, text });
    }

    Question::checked(question_text, choices, correct?)
}

/// Re-scans the original raw text with the canonical pattern, ignoring
/// block segmentation. Questions are delimited by `N.` lines; only
/// check-mark symbols designate the correct option.
pub fn parse_document_strict(raw: &str) -> Vec<Question> {
    let starts: Vec<usize> = DOC_QUESTION_LINE.find_iter(raw).map(|m| m.start()).collect();

    let mut questions = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(raw.len());
        let body = QUESTION_START.replace(raw[start..end].trim(), "");

        let question_text = body.split("A.").next().unwrap_or("").trim().to_string();

        let mut choices = Vec::new();
        let mut correct = None;
        for caps in CANON_OPTION.captures_iter(&body) {
            let label = caps[1]
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('A');
            let mut text = caps[2].trim().to_string();
            if text.contains('✔') || text.contains('✓') {
                if correct.is_none() {
                    correct = Some(label);
                }
                text = text.replace(['✔', '✓'], "").trim().to_string();
            }
            choices.push(Choice { label, text });
        }

        if let Some(correct) = correct {
            if let Some(q) = Question::checked(question_text, choices, correct) {
                questions.push(q);
            }
        }
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_block_parses_canonical_layout() {
        let q = parse_block_strict("1. Capital of France?\nA. Lyon\nB. Paris ✔\nC. Nice").unwrap();
        assert_eq!(q.text, "Capital of France?");
        assert_eq!(q.choices.len(), 3);
        assert_eq!(q.correct, 'B');
        assert_eq!(q.choices[1].text, "Paris");
    }

    #[test]
    fn strict_block_accepts_parenthetical_marks() {
        let q = parse_block_strict("2. Q?\nA. one (correct)\nB. two").unwrap();
        assert_eq!(q.correct, 'A');
        assert_eq!(q.choices[0].text, "one");
    }

    #[test]
    fn strict_block_ignores_bare_word_correct() {
        assert!(parse_block_strict("1. Q?\nA. the correct one\nB. two").is_none());
    }

    #[test]
    fn strict_block_first_mark_wins() {
        let q = parse_block_strict("1. Q?\nA. one ✔\nB. two ✔").unwrap();
        assert_eq!(q.correct, 'A');
    }

    #[test]
    fn strict_block_rejects_markless_input() {
        assert!(parse_block_strict("1. Q?\nA. one\nB. two").is_none());
    }

    #[test]
    fn document_scan_recovers_legacy_text() {
        let raw = "1. First?\nA. yes ✔\nB. no\n2. Second?\nA. up\nB. down ✓\n";
        let questions = parse_document_strict(raw);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "First?");
        assert_eq!(questions[0].correct, 'A');
        assert_eq!(questions[1].correct, 'B');
        assert_eq!(questions[1].choices[1].text, "down");
    }

    #[test]
    fn document_scan_drops_markless_questions() {
        let raw = "1. First?\nA. yes ✔\nB. no\n2. Second?\nA. up\nB. down\n";
        let questions = parse_document_strict(raw);
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn document_scan_of_empty_input_is_empty() {
        assert!(parse_document_strict("").is_empty());
    }
}
