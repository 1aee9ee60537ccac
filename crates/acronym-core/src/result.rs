// Generation results and summary statistics

use serde::{Deserialize, Serialize};

use crate::company::AssignmentEntry;

/// Summary statistics of a single generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Number of letters in the normalized word.
    pub total_letters: usize,
    /// Number of distinct real companies consumed by the pass.
    pub unique_companies_used: usize,
    /// Number of placeholder entries.
    pub placeholder_count: usize,
    /// Letters whose pool ran dry, in the order they were exhausted.
    /// Never contains the same letter twice.
    pub duplicate_letters: Vec<char>,
}

/// Output of `generate`: the per-letter assignment plus bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// One entry per normalized letter, index-aligned with the word.
    pub assignment: Vec<AssignmentEntry>,
    pub stats: GenerationStats,
    /// `true` if at least one letter has unused alternatives in the table.
    pub can_regenerate: bool,
}

impl GenerationResult {
    /// Result for a word with no letters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the word produced no entries.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Names of the real (non-placeholder) companies, in word order.
    pub fn company_names(&self) -> impl Iterator<Item = &str> {
        self.assignment.iter().filter_map(AssignmentEntry::company_name)
    }

    /// The normalized word as a string.
    pub fn letters(&self) -> String {
        self.assignment.iter().map(|e| e.letter).collect()
    }
}
