//! Verb gap detection
//!
//! Restricts the clitic search to periphrasis-like sentences: two verbs
//! separated only by an allowed connective (`voy a comer`, `tengo que ir`).

use crate::rules::CliticRules;
use crate::token::TaggedSentence;

/// Whether some pair of consecutive verbs is separated by an allowed gap.
///
/// Only neighbouring entries of the verb position list are compared, and the
/// scan stops at the first qualifying pair.
pub fn has_verb_gap(sentence: &TaggedSentence, rules: &CliticRules) -> bool {
    let gaps = rules.gaps();
    let verbs = sentence.verb_positions();

    verbs.windows(2).any(|pair| {
        let (current, next) = (pair[0], pair[1]);
        let gap = next - current - 1;
        gaps.has_length(gap) && gaps.permits(gap, &sentence.forms_between(current, next))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::test_support::{sentence, spanish};

    #[test]
    fn test_single_word_gap() {
        let rules = spanish();
        assert!(has_verb_gap(&sentence("ir.VERB a.X comer.VERB"), &rules));
    }

    #[test]
    fn test_two_word_gap_not_allowed() {
        let rules = spanish();
        assert!(!has_verb_gap(
            &sentence("ir.VERB muy.X rapido.X comer.VERB"),
            &rules
        ));
    }

    #[test]
    fn test_two_word_gap_allowed() {
        let rules = spanish();
        assert!(has_verb_gap(
            &sentence("acabo.VERB de.ADP que.SCONJ llegar.VERB"),
            &rules
        ));
    }

    #[test]
    fn test_adjacent_verbs_are_not_a_gap() {
        let rules = spanish();
        assert!(!has_verb_gap(&sentence("quiero.VERB hacer.VERB"), &rules));
    }

    #[test]
    fn test_no_verbs() {
        let rules = spanish();
        assert!(!has_verb_gap(&sentence("la.DET casa.NOUN"), &rules));
        assert!(!has_verb_gap(&sentence("comer.VERB"), &rules));
    }

    #[test]
    fn test_later_pair_can_qualify() {
        let rules = spanish();
        assert!(has_verb_gap(
            &sentence("dijo.VERB muy.ADV bien.ADV que.SCONJ tengo.VERB que.SCONJ ir.VERB"),
            &rules
        ));
    }
}
