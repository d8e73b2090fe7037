//! Clitic pronoun inventory and enclitic suffix lookup

use std::collections::HashSet;

/// Known clitic forms plus the suffixes that mark an enclitic verb
#[derive(Debug, Clone)]
pub struct CliticTable {
    /// Clitic forms in configuration order
    forms: Vec<String>,
    /// Membership set over `forms`
    lookup: HashSet<String>,
    /// Single and combined clitics, longest first, ties in lexical order
    suffixes: Vec<String>,
}

impl CliticTable {
    /// Build the table, optionally deriving every two-clitic concatenation
    pub fn new(forms: Vec<String>, combine: bool) -> Self {
        let mut ordered = Vec::with_capacity(forms.len());
        let mut lookup = HashSet::with_capacity(forms.len());
        for form in forms {
            if lookup.insert(form.clone()) {
                ordered.push(form);
            }
        }

        let mut suffixes: HashSet<String> = lookup.clone();
        if combine {
            for first in &ordered {
                for second in &ordered {
                    suffixes.insert(format!("{first}{second}"));
                }
            }
        }

        let mut suffixes: Vec<String> = suffixes.into_iter().collect();
        suffixes.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self {
            forms: ordered,
            lookup,
            suffixes,
        }
    }

    /// Whether `word` is a free-standing clitic form
    pub fn is_clitic(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Longest clitic suffix `form` ends with, if any
    pub fn enclitic_suffix(&self, form: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|suffix| form.ends_with(suffix.as_str()))
            .map(String::as_str)
    }

    /// Clitic forms in configuration order
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Number of combined (two-clitic) suffixes
    pub fn combined_count(&self) -> usize {
        self.suffixes.len() - self.forms.len()
    }
}
