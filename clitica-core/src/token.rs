//! Tagged token model
//!
//! Corpus sentences arrive as whitespace-separated `form<DELIM>TAG` tokens,
//! e.g. `quiero.VERB hacerlo.VERB`. This module turns them into typed values
//! once, at the ingestion boundary, so the matchers never split strings.

use crate::error::{CoreError, Result};
use smallvec::SmallVec;
use std::fmt;

/// Verb positions inside a sentence; most sentences hold only a few verbs
pub type VerbPositions = SmallVec<[usize; 8]>;

/// Part-of-speech tag attached to a token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// `VERB`
    Verb,
    /// `PRON`
    Pron,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PosTag {
    /// Parse a tag field
    pub fn parse(tag: &str) -> Self {
        match tag {
            "VERB" => PosTag::Verb,
            "PRON" => PosTag::Pron,
            other => PosTag::Other(other.to_string()),
        }
    }

    /// Tag text as it appears in the corpus
    pub fn as_str(&self) -> &str {
        match self {
            PosTag::Verb => "VERB",
            PosTag::Pron => "PRON",
            PosTag::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface form paired with its POS tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    form: String,
    tag: PosTag,
}

impl TaggedToken {
    /// Create a token from already separated parts
    pub fn new(form: impl Into<String>, tag: PosTag) -> Self {
        Self {
            form: form.into(),
            tag,
        }
    }

    /// Split a raw token on the first occurrence of `delimiter`.
    ///
    /// Anything after the first delimiter belongs to the tag, so `..PUNCT`
    /// yields an empty form and the tag `.PUNCT`. A token without the
    /// delimiter is rejected.
    pub fn parse(raw: &str, delimiter: char) -> Result<Self> {
        let (form, tag) = raw
            .split_once(delimiter)
            .ok_or_else(|| CoreError::MalformedToken {
                token: raw.to_string(),
                delimiter,
            })?;

        Ok(Self::new(form, PosTag::parse(tag)))
    }

    /// Surface form without the tag
    pub fn form(&self) -> &str {
        &self.form
    }

    /// POS tag
    pub fn tag(&self) -> &PosTag {
        &self.tag
    }

    /// Whether this token is tagged `VERB`
    pub fn is_verb(&self) -> bool {
        self.tag == PosTag::Verb
    }

    /// Whether this token is tagged `PRON`
    pub fn is_pronoun(&self) -> bool {
        self.tag == PosTag::Pron
    }
}

/// An ordered, POS-tagged sentence
///
/// Token order is significant: matchers reason about adjacency and the
/// distance between verbs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaggedSentence {
    tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    /// Wrap a token sequence
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Parse a whitespace-delimited tagged line.
    ///
    /// The first malformed token fails the whole sentence.
    pub fn parse(line: &str, delimiter: char) -> Result<Self> {
        let tokens = line
            .split_whitespace()
            .map(|raw| TaggedToken::parse(raw, delimiter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    /// Tokens in sentence order
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, if any
    pub fn get(&self, index: usize) -> Option<&TaggedToken> {
        self.tokens.get(index)
    }

    /// Ordered indices of every `VERB` token
    pub fn verb_positions(&self) -> VerbPositions {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_verb())
            .map(|(index, _)| index)
            .collect()
    }

    /// Surface forms of the tokens strictly between `start` and `end`,
    /// joined by single spaces
    pub fn forms_between(&self, start: usize, end: usize) -> String {
        if end <= start + 1 {
            return String::new();
        }
        self.tokens[start + 1..end.min(self.tokens.len())]
            .iter()
            .map(TaggedToken::form)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Human-readable sentence: surface forms joined by single spaces
    pub fn untagged(&self) -> String {
        self.tokens
            .iter()
            .map(TaggedToken::form)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Strip tags from a raw tagged line.
///
/// Keeps everything before the first `delimiter` of each whitespace token and
/// joins the results with single spaces. Tokens without a delimiter pass
/// through unchanged, so untagged text comes back as-is (modulo spacing).
pub fn untag(line: &str, delimiter: char) -> String {
    line.split_whitespace()
        .map(|raw| raw.split_once(delimiter).map_or(raw, |(form, _)| form))
        .collect::<Vec<_>>()
        .join(" ")
}
