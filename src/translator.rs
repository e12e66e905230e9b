use crate::lexicon::Lexicon;

/// Substitute every space-separated token found in `lexicon`.
///
/// Tokens are split on single spaces only, so punctuation stays attached
/// ("blog." is not "blog") and runs of spaces survive as empty tokens.
/// Unknown tokens pass through with their original casing.
pub fn translate(text: &str, lexicon: &Lexicon) -> String {
    text.split(' ')
        .map(|token| lexicon.lookup(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}
