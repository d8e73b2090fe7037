//! Adjacent verb detection
//!
//! Independent of the gap filter: looks only at verbs in immediate sequence
//! (`quiero hacer`) and checks for a clitic on either side of the pair.

use crate::matcher::clitic::CliticMatch;
use crate::rules::CliticRules;
use crate::token::TaggedSentence;

/// A clitic attached to a pair of directly adjacent verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentMatch<'a> {
    /// Token index of the first verb
    pub first: usize,
    /// Token index of the second verb
    pub second: usize,
    /// The clitic found around the pair
    pub clitic: CliticMatch<'a>,
}

/// Collect clitics around every directly adjacent verb pair.
///
/// For each pair a clitic pronoun right before the first verb yields a
/// proclitic match, and a clitic suffix on the second verb yields an enclitic
/// match. Both may fire for the same pair, proclitic first.
pub fn adjacent_matches<'a>(
    sentence: &'a TaggedSentence,
    rules: &'a CliticRules,
) -> Vec<AdjacentMatch<'a>> {
    let clitics = rules.clitics();
    let verbs = sentence.verb_positions();
    let mut matches = Vec::new();

    for pair in verbs.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if second - first != 1 {
            continue;
        }
        log::trace!("adjacent verbs at {first} and {second}");

        if let Some(before) = first.checked_sub(1).and_then(|i| sentence.get(i)) {
            if before.is_pronoun() && clitics.is_clitic(before.form()) {
                matches.push(AdjacentMatch {
                    first,
                    second,
                    clitic: CliticMatch::proclitic(first - 1, before.form()),
                });
            }
        }

        if let Some(verb) = sentence.get(second) {
            if let Some(suffix) = clitics.enclitic_suffix(verb.form()) {
                matches.push(AdjacentMatch {
                    first,
                    second,
                    clitic: CliticMatch::enclitic(second, verb.form(), suffix),
                });
            }
        }
    }

    matches
}
