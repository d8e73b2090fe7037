//! Allowed connective gaps between two verbs

use std::collections::{BTreeMap, HashSet};

/// Gap length -> permitted space-joined connective sequences
#[derive(Debug, Clone, Default)]
pub struct GapTable {
    by_length: BTreeMap<usize, HashSet<String>>,
}

impl GapTable {
    /// Build from `(length, sequences)` pairs
    pub fn new(rules: impl IntoIterator<Item = (usize, Vec<String>)>) -> Self {
        let mut by_length: BTreeMap<usize, HashSet<String>> = BTreeMap::new();
        for (length, sequences) in rules {
            by_length
                .entry(length)
                .or_default()
                .extend(sequences.iter().map(|s| normalize(s)));
        }
        Self { by_length }
    }

    /// Whether any sequence is registered for gaps of `length` tokens
    pub fn has_length(&self, length: usize) -> bool {
        self.by_length.contains_key(&length)
    }

    /// Whether `words` may fill a gap of `length` tokens
    pub fn permits(&self, length: usize, words: &str) -> bool {
        self.by_length
            .get(&length)
            .is_some_and(|allowed| allowed.contains(words))
    }

    /// Iterate lengths with their sequences sorted, shortest gap first
    pub fn iter(&self) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
        self.by_length.iter().map(|(length, allowed)| {
            let mut sequences: Vec<&str> = allowed.iter().map(String::as_str).collect();
            sequences.sort_unstable();
            (*length, sequences)
        })
    }

    /// Whether no gap is allowed at all
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

// Rule files may pad sequences with extra spaces; sentences never carry them.
fn normalize(sequence: &str) -> String {
    sequence.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> GapTable {
        GapTable::new([
            (
                1,
                vec!["a".to_string(), "que".to_string(), "dando".to_string()],
            ),
            (2, vec!["a a".to_string(), "de  que".to_string()]),
        ])
    }

    #[test]
    fn test_permits() {
        let table = spanish();
        assert!(table.permits(1, "a"));
        assert!(table.permits(2, "de que"));
        assert!(!table.permits(2, "muy rapido"));
        assert!(!table.permits(1, "de que"));
        assert!(!table.permits(3, "a a a"));
    }

    #[test]
    fn test_has_length() {
        let table = spanish();
        assert!(table.has_length(1));
        assert!(!table.has_length(0));
        assert!(!table.has_length(3));
    }

    #[test]
    fn test_iter_is_ordered() {
        let table = spanish();
        let listed: Vec<_> = table.iter().collect();
        assert_eq!(listed[0], (1, vec!["a", "dando", "que"]));
        assert_eq!(listed[1], (2, vec!["a a", "de que"]));
    }
}
