//! Pattern matchers over tagged sentences
//!
//! Three heuristics flag sentences of interest:
//! - [`find_clitic`]: first proclitic pronoun or enclitic verb in a sentence
//! - [`has_verb_gap`]: two consecutive verbs separated by an allowed connective
//! - [`adjacent_matches`]: clitics around directly adjacent verb pairs

pub mod adjacent;
pub mod clitic;
pub mod gap;

pub use adjacent::{adjacent_matches, AdjacentMatch};
pub use clitic::{find_clitic, CliticMatch};
pub use gap::has_verb_gap;
