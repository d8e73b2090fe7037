//! Variable clitic placement detection for POS-tagged Spanish transcripts
//!
//! Spanish clitic pronouns can sit before a verb cluster (*lo quiero hacer*,
//! proclitic) or attach to the end of a verb (*quiero hacerlo*, enclitic).
//! This crate scans transcripts whose sentences are already tagged as
//! `form.TAG` tokens and flags sentences showing either placement, so they
//! can be exported for manual review.
//!
//! # Architecture
//!
//! - [`token`]: typed tokens and sentences, parsed once at ingestion
//! - [`rules`]: clitic inventory, allowed verb gaps and corpus layout,
//!   embedded or loaded from TOML
//! - [`matcher`]: the clitic, verb-gap and adjacent-verb heuristics
//! - [`corpus`]: sentence line extraction from transcript text
//! - [`analyzer`]: per-file passes and ordered report assembly
//!
//! # Example
//!
//! ```rust
//! use clitica_core::{Analyzer, CliticPosition};
//!
//! let analyzer = Analyzer::spanish().unwrap();
//! let report = analyzer.analyze_document(
//!     "session01",
//!     "%pos:\tlo.PRON quiero.VERB hacer.VERB\n",
//! );
//!
//! assert_eq!(report.adjacent.len(), 1);
//! assert_eq!(report.adjacent[0].clitic, "lo");
//! assert_eq!(report.adjacent[0].position, CliticPosition::Proclitic);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod finding;
pub mod matcher;
pub mod rules;
pub mod token;

pub use analyzer::{source_id, Analyzer, CorpusReport, FileReport};
pub use error::{CoreError, Result};
pub use finding::{CliticPosition, Finding, Pass};
pub use rules::{get_rules, CliticRules, DEFAULT_RULES};
pub use token::{untag, PosTag, TaggedSentence, TaggedToken};
