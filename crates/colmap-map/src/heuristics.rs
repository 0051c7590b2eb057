//! Domain keyword hints that boost a source/target pair.
//!
//! A [`DomainHintTable`] associates a key (a substring expected in a source
//! column name) with hint substrings expected in a matching target name.
//! Every key found in the lower-cased source and every hint of that key found
//! in the lower-cased target adds [`HINT_BOOST`]. All entries fire
//! independently, so several weak signals accumulate.

use serde::{Deserialize, Serialize};

/// Score added per matching (key, hint) pair.
pub const HINT_BOOST: f64 = 0.3;

/// One key and the target-name hints associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintEntry {
    pub key: String,
    pub hints: Vec<String>,
}

impl HintEntry {
    pub fn new<K, I, H>(key: K, hints: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = H>,
        H: Into<String>,
    {
        Self {
            key: key.into().trim().to_lowercase(),
            hints: hints
                .into_iter()
                .map(|h| h.into().trim().to_lowercase())
                .collect(),
        }
    }
}

/// A (key, hint) pair that fired for a source/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintMatch<'a> {
    pub key: &'a str,
    pub hint: &'a str,
}

/// Ordered, immutable keyword-to-hint table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainHintTable {
    #[serde(rename = "hint")]
    entries: Vec<HintEntry>,
}

impl DomainHintTable {
    /// Builds a table; keys and hints are trimmed and lower-cased, order is kept.
    pub fn new(entries: Vec<HintEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| HintEntry::new(entry.key, entry.hints))
            .collect();
        Self { entries }
    }

    /// A table with no entries; every boost is zero.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The insurance-policy hint table used when no configuration is given.
    pub fn builtin() -> Self {
        Self::new(vec![
            HintEntry::new("id", ["id", "holder"]),
            HintEntry::new("gender", ["sex"]),
            HintEntry::new("age", ["age"]),
            HintEntry::new("annual", ["premium"]),
            HintEntry::new("vehicle", ["vehicle", "category"]),
            HintEntry::new("region", ["location", "state", "city"]),
            HintEntry::new("response", ["claim", "flag"]),
        ])
    }

    pub fn entries(&self) -> &[HintEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every (key, hint) pair that fires for `source` and `target`, in table order.
    pub fn matches(&self, source: &str, target: &str) -> Vec<HintMatch<'_>> {
        let source = source.to_lowercase();
        let target = target.to_lowercase();
        let mut fired = Vec::new();
        for entry in &self.entries {
            if !source.contains(entry.key.as_str()) {
                continue;
            }
            for hint in &entry.hints {
                if target.contains(hint.as_str()) {
                    fired.push(HintMatch {
                        key: &entry.key,
                        hint,
                    });
                }
            }
        }
        fired
    }

    /// Additive boost: [`HINT_BOOST`] per fired (key, hint) pair.
    pub fn boost(&self, source: &str, target: &str) -> f64 {
        self.matches(source, target).len() as f64 * HINT_BOOST
    }
}

impl Default for DomainHintTable {
    fn default() -> Self {
        Self::builtin()
    }
}
