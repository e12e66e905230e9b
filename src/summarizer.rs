//! Extractive "summary" heuristic.
//!
//! Picks the longest newline-delimited paragraph whose trimmed length exceeds
//! [`MIN_PARAGRAPH_LEN`] and keeps its first two `.`-delimited segments.
//! Output is consumed downstream as a fixed contract, so the rules here are
//! literal: no sentence-boundary detection, no whitespace cleanup.
//!
//! Lengths are measured in UTF-16 code units so results match summaries
//! produced by earlier deployments for non-ASCII text.

/// Paragraphs must be strictly longer than this (after trimming) to qualify.
pub const MIN_PARAGRAPH_LEN: usize = 50;

const MAX_SEGMENTS: usize = 2;

pub fn summarize(full_text: &str) -> String {
    let best = best_paragraph(full_text);
    let mut summary = best
        .split('.')
        .take(MAX_SEGMENTS)
        .collect::<Vec<_>>()
        .join(".");
    summary.push('.');
    summary
}

/// Longest qualifying paragraph, earliest on ties; `""` when none qualify.
fn best_paragraph(full_text: &str) -> &str {
    let mut best: Option<(&str, usize)> = None;

    for paragraph in full_text.split('\n') {
        if text_len(paragraph.trim()) <= MIN_PARAGRAPH_LEN {
            continue;
        }
        let len = text_len(paragraph);
        match best {
            Some((_, best_len)) if best_len >= len => {}
            _ => best = Some((paragraph, len)),
        }
    }

    best.map(|(paragraph, _)| paragraph).unwrap_or("")
}

fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}
