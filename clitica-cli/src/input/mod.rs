//! Input handling module

pub mod corpus_resolver;

pub use corpus_resolver::resolve_corpus;
