// Candidate table: uppercase letter -> ordered list of companies

use std::collections::BTreeMap;

use acronym_core::Company;
use hashbrown::HashSet;

/// Built-in table compiled into the crate.
const BUILTIN_TABLE_JSON: &str = include_str!("../data/companies.json");

/// Error type for candidate table loading.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The input is not valid table JSON.
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A table key is not a single ASCII letter.
    #[error("invalid letter key {0:?}: expected a single ASCII letter")]
    InvalidLetter(String),

    /// A company record has an empty name.
    #[error("empty company name under letter {letter}")]
    EmptyCompanyName { letter: char },

    /// The same company name appears twice under one letter.
    #[error("duplicate company {name:?} under letter {letter}")]
    DuplicateCompany { letter: char, name: String },
}

/// Read-only mapping from uppercase letter to candidate companies.
///
/// List order is preserved; it is the order the weighted roulette walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTable {
    entries: BTreeMap<char, Vec<Company>>,
}

impl CandidateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON of the form
    /// `{"A": [{"name": "Apple", "logo": "apple.svg"}, ...], ...}`.
    ///
    /// Keys are case-insensitive and stored uppercase. Two keys that differ
    /// only in case are merged in key order.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: BTreeMap<String, Vec<Company>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (key, companies) in raw {
            let letter = parse_letter(&key)?;
            let mut merged = table.entries.remove(&letter).unwrap_or_default();
            merged.extend(companies);
            table.insert(letter, merged)?;
        }
        Ok(table)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_TABLE_JSON)
    }

    /// Set the candidate list for a letter, replacing any previous list.
    pub fn insert(&mut self, letter: char, companies: Vec<Company>) -> Result<(), TableError> {
        if !letter.is_ascii_alphabetic() {
            return Err(TableError::InvalidLetter(letter.to_string()));
        }
        let letter = letter.to_ascii_uppercase();
        {
            let mut seen = HashSet::with_capacity(companies.len());
            for company in &companies {
                if company.name.trim().is_empty() {
                    return Err(TableError::EmptyCompanyName { letter });
                }
                if !seen.insert(company.name.as_str()) {
                    return Err(TableError::DuplicateCompany {
                        letter,
                        name: company.name.clone(),
                    });
                }
            }
        }
        self.entries.insert(letter, companies);
        Ok(())
    }

    /// Candidates for a letter, in table order. Letters missing from the
    /// table have no candidates.
    pub fn candidates(&self, letter: char) -> &[Company] {
        self.entries.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of candidates for a letter.
    pub fn pool_size(&self, letter: char) -> usize {
        self.candidates(letter).len()
    }

    /// Letters present in the table, in ascending order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Number of letters in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of company records across all letters.
    pub fn company_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

fn parse_letter(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(TableError::InvalidLetter(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_small_table() {
        let t = CandidateTable::from_json(
            r#"{"G": [{"name": "G1", "logo": "g1.svg"}, {"name": "G2", "logo": "g2.svg"}],
                "o": [{"name": "O1", "logo": "o1.svg"}]}"#,
        )
        .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.pool_size('G'), 2);
        assert_eq!(t.pool_size('O'), 1);
        assert_eq!(t.candidates('O')[0].name, "O1");
        assert_eq!(t.letters().collect::<Vec<_>>(), vec!['G', 'O']);
    }

    #[test]
    fn missing_letter_has_empty_pool() {
        let t = CandidateTable::new();
        assert!(t.candidates('Z').is_empty());
        assert_eq!(t.pool_size('Z'), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn rejects_multi_char_key() {
        let err = CandidateTable::from_json(r#"{"AB": []}"#).unwrap_err();
        assert!(matches!(err, TableError::InvalidLetter(k) if k == "AB"));
    }

    #[test]
    fn rejects_non_letter_key() {
        let err = CandidateTable::from_json(r#"{"1": []}"#).unwrap_err();
        assert!(matches!(err, TableError::InvalidLetter(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = CandidateTable::from_json(r#"{"A": [{"name": " ", "logo": "x.svg"}]}"#)
            .unwrap_err();
        assert!(matches!(err, TableError::EmptyCompanyName { letter: 'A' }));
    }

    #[test]
    fn rejects_duplicate_within_letter() {
        let err = CandidateTable::from_json(
            r#"{"A": [{"name": "A1", "logo": "a.svg"}, {"name": "A1", "logo": "b.svg"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateCompany { letter: 'A', ref name } if name == "A1"));
    }

    #[test]
    fn merges_keys_differing_in_case() {
        let t = CandidateTable::from_json(
            r#"{"A": [{"name": "A1", "logo": "a1.svg"}], "a": [{"name": "A2", "logo": "a2.svg"}]}"#,
        )
        .unwrap();
        let names: Vec<_> = t.candidates('A').iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A1", "A2"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CandidateTable::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    #[test]
    fn builtin_table_covers_alphabet() {
        let t = CandidateTable::builtin().unwrap();
        assert_eq!(t.len(), 26);
        for letter in 'A'..='Z' {
            assert!(t.pool_size(letter) >= 2, "letter {letter} has too few candidates");
        }
        assert!(t.candidates('A').iter().any(|c| c.name == "Apple"));
    }

    #[test]
    fn insert_uppercases_letter() {
        let mut t = CandidateTable::new();
        t.insert('q', vec![Company::new("Quora", "quora.svg")]).unwrap();
        assert_eq!(t.pool_size('Q'), 1);
        assert_eq!(t.company_count(), 1);
    }

    #[test]
    fn insert_replaces_previous_list() {
        let mut t = CandidateTable::new();
        t.insert('B', vec![Company::new("B1", "b1.svg")]).unwrap();
        t.insert('B', vec![Company::new("B2", "b2.svg"), Company::new("B3", "b3.svg")])
            .unwrap();
        let names: Vec<_> = t.candidates('B').iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B2", "B3"]);
        assert_eq!(t.company_count(), 2);
    }

    #[test]
    fn rejected_insert_leaves_table_unchanged() {
        let mut t = CandidateTable::new();
        t.insert('C', vec![Company::new("C1", "c1.svg")]).unwrap();
        let dup = vec![Company::new("C2", "a.svg"), Company::new("C2", "b.svg")];
        assert!(t.insert('C', dup).is_err());
        assert_eq!(t.candidates('C')[0].name, "C1");
    }
}
