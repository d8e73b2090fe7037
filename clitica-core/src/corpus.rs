//! Sentence extraction from transcript files
//!
//! Transcripts interleave several tiers; only lines starting with the rule
//! set's prefix (`%pos:` for the embedded rules) carry tagged sentences.

/// A tagged sentence line pulled out of a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceLine<'a> {
    /// 1-based line number in the source text
    pub line_number: usize,
    /// Line content with prefix and surrounding whitespace removed
    pub text: &'a str,
}

/// Iterate the non-empty sentence lines of `text` in order
pub fn sentence_lines<'a>(
    text: &'a str,
    prefix: &'a str,
) -> impl Iterator<Item = SentenceLine<'a>> + 'a {
    text.lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            line.strip_prefix(prefix).map(|rest| SentenceLine {
                line_number: index + 1,
                text: rest.trim(),
            })
        })
        .filter(|line| !line.text.is_empty())
}
