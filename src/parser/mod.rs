//! Text-to-question parsing.
//!
//! Three strategies of decreasing tolerance are tried in order:
//!
//! 1. the primary per-block strategy ([`block`]), over blocks produced
//!    by the numbering-heuristic segmenter ([`segment`]);
//! 2. a strict canonical re-scan of each rejected block;
//! 3. a strict canonical re-scan of the whole raw document, run only
//!    when the first two strategies accept nothing at all.
//!
//! Malformed blocks are dropped silently; the caller sees at most a
//! shorter result. An empty result is the "no questions detected"
//! condition and must be reported to the user by the caller, never
//! raised as an error here.

mod block;
mod fallback;
mod segment;

use log::{debug, info};

pub use segment::split_blocks;

use crate::models::Question;

/// Parses a whole document into its accepted questions.
pub fn parse_questions(raw: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    for candidate in segment::split_blocks(raw) {
        if let Some(question) = block::parse_block(&candidate) {
            questions.push(question);
        } else if let Some(question) = fallback::parse_block_strict(&candidate) {
            debug!("block accepted by strict re-scan: {:?}", first_line(&candidate));
            questions.push(question);
        } else {
            debug!("block rejected: {:?}", first_line(&candidate));
        }
    }

    if questions.is_empty() {
        info!("no questions from block parsing, re-scanning whole document");
        questions = fallback::parse_document_strict(raw);
    }

    info!("parsed {} questions", questions.len());
    questions
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_check_marked_question() {
        let questions = parse_questions("1. What is 2+2?\nA. 3\nB. 4 ✔\nC. 5\nD. 6");
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.text, "What is 2+2?");
        let rendered: Vec<(char, &str)> = q
            .choices
            .iter()
            .map(|c| (c.label, c.text.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![('A', "3"), ('B', "4"), ('C', "5"), ('D', "6")]
        );
        assert_eq!(q.correct, 'B');
    }

    #[test]
    fn answer_line_variant_of_the_same_document() {
        let questions = parse_questions("1. What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\nAnswer: C");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, 'C');
        assert_eq!(questions[0].choices[2].text, "5");
    }

    #[test]
    fn malformed_block_is_dropped_without_error() {
        let raw = "1. Good?\nA. yes ✓\nB. no\n2. Only one option\nA. lonely ✓";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Good?");
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("   \n\n  ").is_empty());
    }

    #[test]
    fn unparseable_input_yields_empty_set() {
        assert!(parse_questions("just some prose\nwith no questions at all").is_empty());
    }

    #[test]
    fn parsing_twice_yields_identical_content() {
        let raw = "1. One?\nA. a ✓\nB. b\n\n2. Two?\nA. c\nB. d\nAnswer: B\n";
        assert_eq!(parse_questions(raw), parse_questions(raw));
    }

    #[test]
    fn document_fallback_not_used_when_any_block_parses() {
        // The second question is recoverable only by the whole-document
        // scan (a stray "4)" line splits it mid-options); since the
        // first block parses, the scan never runs and it stays dropped.
        let raw = "1. Good?\nA. yes ✓\nB. no\n2. Tricky?\nA. x\n4) B. y ✓\nC. z";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Good?");
    }

    #[test]
    fn document_fallback_used_when_blocks_yield_nothing() {
        // A stray "4)" line splits the only question so that no fragment
        // has both two options and a mark; the canonical whole-document
        // scan does not split there and recovers it.
        let raw = "1. What is 2+2?\nA. 3\n4) B. 4 ✓\nC. 5";
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "What is 2+2?");
        assert_eq!(questions[0].correct, 'B');
        assert_eq!(questions[0].choices.len(), 3);
    }

    #[test]
    fn numbering_restarts_do_not_merge_questions() {
        let raw = "1. One?\nA. a ✓\nB. b\n1. Two?\nA. c\nB. d ✓";
        assert_eq!(parse_questions(raw).len(), 2);
    }

    #[test]
    fn every_accepted_question_is_well_formed() {
        let raw = concat!(
            "1. One?\nA. a ✓\nB. b\n",
            "2. Two?\nA. c\nB. d\nC. e\nAnswer: C\n",
            "3. Broken\n",
            "4. Three?\na) f\nb) g (correct)\nc) h\nd) i\n",
        );
        let questions = parse_questions(raw);
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert!((2..=4).contains(&q.choices.len()));
            let mut labels: Vec<char> = q.choices.iter().map(|c| c.label).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), q.choices.len());
            assert!(q.choices.iter().any(|c| c.label == q.correct));
        }
    }
}
