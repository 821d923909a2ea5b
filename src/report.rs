//! Command-line report rendering.
//!
//! Turns raw process arguments into words and renders one `<word>\t<score>`
//! line per word, followed by a `total\t<sum>` line when more than one word
//! was scored.

use crate::scoring::WordScorer;
use std::ffi::OsString;
use tracing::warn;

/// Convert raw arguments into words.
///
/// Arguments that are not valid UTF-8 are decoded lossily, with each invalid
/// sequence replaced by U+FFFD. The replacement character is not alphabetic,
/// so it scores nothing.
pub fn words_from_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(word) => word,
            Err(raw) => {
                warn!(arg = ?raw, "Argument is not valid UTF-8, decoding lossily");
                raw.to_string_lossy().into_owned()
            }
        })
        .collect()
}

/// Render the report lines for a list of words.
pub fn render_lines(scorer: &WordScorer, words: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = words
        .iter()
        .map(|word| format!("{}\t{}", word, scorer.score(word)))
        .collect();

    if words.len() > 1 {
        lines.push(format!("total\t{}", scorer.score_words(words)));
    }

    lines
}
