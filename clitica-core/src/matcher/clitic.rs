//! Clitic detection
//!
//! Single left-to-right scan. A clitic pronoun is only reported as proclitic
//! if it is reached before any verb carrying an enclitic suffix; a pronoun
//! after the first such verb is never considered.

use crate::finding::CliticPosition;
use crate::rules::CliticRules;
use crate::token::TaggedSentence;

/// A detected clitic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliticMatch<'a> {
    /// Token index of the matched word
    pub index: usize,
    /// The pronoun (proclitic) or the whole verb form (enclitic)
    pub word: &'a str,
    /// Proclitic or enclitic
    pub position: CliticPosition,
    /// Matched clitic suffix, for enclitics
    pub suffix: Option<&'a str>,
}

impl<'a> CliticMatch<'a> {
    pub(crate) fn proclitic(index: usize, word: &'a str) -> Self {
        Self {
            index,
            word,
            position: CliticPosition::Proclitic,
            suffix: None,
        }
    }

    pub(crate) fn enclitic(index: usize, word: &'a str, suffix: &'a str) -> Self {
        Self {
            index,
            word,
            position: CliticPosition::Enclitic,
            suffix: Some(suffix),
        }
    }
}

/// Find the first clitic in `sentence`.
///
/// A `PRON` token whose form is a known clitic yields a proclitic match; a
/// `VERB` token ending in a clitic (or two stacked clitics) yields an enclitic
/// match. The first token satisfying either wins.
pub fn find_clitic<'a>(
    sentence: &'a TaggedSentence,
    rules: &'a CliticRules,
) -> Option<CliticMatch<'a>> {
    let clitics = rules.clitics();

    sentence
        .tokens()
        .iter()
        .enumerate()
        .find_map(|(index, token)| {
            if token.is_pronoun() && clitics.is_clitic(token.form()) {
                return Some(CliticMatch::proclitic(index, token.form()));
            }
            if token.is_verb() {
                return clitics
                    .enclitic_suffix(token.form())
                    .map(|suffix| CliticMatch::enclitic(index, token.form(), suffix));
            }
            None
        })
}
