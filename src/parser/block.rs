//! Primary per-block parsing strategy.
//!
//! Tolerates most of the formatting variation seen in the wild: multi-line
//! question and option text, `A)` / `a.` / `B-` option labels, inline
//! correct-answer marks, and standalone `Answer: B` lines. A block that
//! still cannot be shaped into a valid question is rejected with `None`,
//! leaving it to the stricter fallback pass.

use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::QUESTION_START;
use crate::models::{Choice, Question};

/// An option line: a letter `A`-`D`, optional `.`, `)` or `-`, then text.
static OPTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([A-D])[.)\-]?\s*(.*)$").unwrap());

/// A standalone designation line such as `Answer: B` or `Correct: B`.
/// Tested before [`OPTION_START`]: `Answer: B` would otherwise be
/// consumed as an option labeled `A`.
static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:answer|correct)[:\s]*([A-D])$").unwrap());

/// Prefix that ends question-text accumulation without being an option.
static ANSWER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:answer|correct)[:\s]").unwrap());

/// Every recognized correct-answer mark.
static MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)✔|✓|\(correct\)|\(answer\)|\bcorrect\b").unwrap());

/// Last-resort patterns: a letter next to a check mark anywhere in the
/// block, in either order.
static LETTER_THEN_CHECK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([A-D])\s*(?:[:\-)]\s*)?.*?[✔✓]").unwrap());
static CHECK_THEN_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[✔✓].{0,6}([A-D])").unwrap());

/// One accumulated option, marks already detected and stripped.
struct ParsedOption {
    label: char,
    text: String,
    marked: bool,
    /// Produced by an `Answer:`/`Correct:` line; resolves the correct
    /// label but is not a real option.
    sentinel: bool,
}

/// Lines of the option currently being accumulated.
struct OptionDraft {
    label: char,
    lines: Vec<String>,
}

impl OptionDraft {
    /// Joins the accumulated lines, records whether a mark was present
    /// and strips every occurrence from the visible text.
    fn finish(self) -> ParsedOption {
        let joined = self.lines.join(" ").trim().to_string();
        let marked = MARK.is_match(&joined);
        let text = MARK.replace_all(&joined, "").trim().to_string();
        ParsedOption {
            label: self.label,
            text,
            marked,
            sentinel: false,
        }
    }
}

fn flush(draft: &mut Option<OptionDraft>, options: &mut Vec<ParsedOption>) {
    if let Some(open) = draft.take() {
        options.push(open.finish());
    }
}

fn capture_label(caps: &regex::Captures<'_>) -> char {
    caps[1]
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('A')
}

/// Parses one segmented block into a question.
///
/// Returns `None` for blocks that end up with fewer than two real
/// options, duplicate labels, or no resolvable correct label.
pub fn parse_block(block: &str) -> Option<Question> {
    let lines: Vec<&str> = block.lines().map(str::trim).collect();
    if lines.is_empty() {
        return None;
    }

    // The segmenter guarantees a question-start line, but a block handed
    // in directly may lack one; line 0 then plays that role.
    let start = lines
        .iter()
        .position(|l| QUESTION_START.is_match(l))
        .unwrap_or(0);
    let mut question_text = QUESTION_START.replace(lines[start], "").trim().to_string();

    let mut ptr = start + 1;
    while ptr < lines.len()
        && !OPTION_START.is_match(lines[ptr])
        && !ANSWER_PREFIX.is_match(lines[ptr])
    {
        question_text.push(' ');
        question_text.push_str(lines[ptr]);
        ptr += 1;
    }

    let mut options: Vec<ParsedOption> = Vec::new();
    let mut draft: Option<OptionDraft> = None;

    for line in &lines[ptr..] {
        if let Some(caps) = ANSWER_LINE.captures(line) {
            flush(&mut draft, &mut options);
            options.push(ParsedOption {
                label: capture_label(&caps),
                text: String::new(),
                marked: true,
                sentinel: true,
            });
            continue;
        }
        if let Some(caps) = OPTION_START.captures(line) {
            flush(&mut draft, &mut options);
            draft = Some(OptionDraft {
                label: capture_label(&caps),
                lines: vec![caps[2].trim().to_string()],
            });
            continue;
        }
        match draft.as_mut() {
            Some(open) => open.lines.push((*line).to_string()),
            None => {
                question_text.push(' ');
                question_text.push_str(line);
            }
        }
    }
    flush(&mut draft, &mut options);

    // First occurrence wins at every tier: inline marks beat sentinel
    // lines, which beat the loose whole-block scan.
    let correct = options
        .iter()
        .find(|o| o.marked && !o.sentinel)
        .map(|o| o.label)
        .or_else(|| options.iter().find(|o| o.sentinel).map(|o| o.label))
        .or_else(|| loose_scan(block))?;

    let choices: Vec<Choice> = options
        .into_iter()
        .filter(|o| !o.sentinel)
        .map(|o| Choice {
            label: o.label,
            text: o.text,
        })
        .collect();

    Question::checked(question_text.trim().to_string(), choices, correct)
}

/// Scans the raw block for a letter adjacent to a check-mark symbol.
fn loose_scan(block: &str) -> Option<char> {
    LETTER_THEN_CHECK
        .captures(block)
        .or_else(|| CHECK_THEN_LETTER.captures(block))
        .and_then(|caps| caps[1].chars().next())
        .map(|c| c.to_ascii_uppercase())
}
