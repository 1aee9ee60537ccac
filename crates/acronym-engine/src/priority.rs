// Letter grouping and service order

use hashbrown::HashMap;

use crate::table::CandidateTable;

/// All occurrences of one letter in the normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    pub letter: char,
    /// Positions of the letter in the word, ascending.
    pub indices: Vec<usize>,
}

impl LetterGroup {
    /// How many times the letter occurs.
    pub fn occurrences(&self) -> usize {
        self.indices.len()
    }
}

/// Count occurrences of each letter.
pub fn letter_frequencies(letters: &[char]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Group the word's letters and order the groups for servicing.
///
/// Groups start in first-appearance order and are then stable-sorted:
/// fewer occurrences first, and among equal counts, larger table pools
/// first.
pub fn prioritize(letters: &[char], table: &CandidateTable) -> Vec<LetterGroup> {
    let mut groups: Vec<LetterGroup> = Vec::new();
    let mut slot: HashMap<char, usize> = HashMap::new();
    for (index, &letter) in letters.iter().enumerate() {
        let g = *slot.entry(letter).or_insert_with(|| {
            groups.push(LetterGroup {
                letter,
                indices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[g].indices.push(index);
    }

    groups.sort_by(|a, b| {
        a.occurrences()
            .cmp(&b.occurrences())
            .then_with(|| table.pool_size(b.letter).cmp(&table.pool_size(a.letter)))
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use acronym_core::Company;

    fn table(sizes: &[(char, usize)]) -> CandidateTable {
        let mut t = CandidateTable::new();
        for &(letter, n) in sizes {
            let companies = (0..n)
                .map(|i| Company::new(format!("{letter}{i}"), format!("{letter}{i}.svg")))
                .collect();
            t.insert(letter, companies).unwrap();
        }
        t
    }

    #[test]
    fn frequencies() {
        let counts = letter_frequencies(&['B', 'A', 'N', 'A', 'N', 'A']);
        assert_eq!(counts[&'A'], 3);
        assert_eq!(counts[&'N'], 2);
        assert_eq!(counts[&'B'], 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn groups_collect_indices() {
        let t = table(&[]);
        let groups = prioritize(&['B', 'A', 'N', 'A', 'N', 'A'], &t);
        let a = groups.iter().find(|g| g.letter == 'A').unwrap();
        assert_eq!(a.indices, vec![1, 3, 5]);
        let n = groups.iter().find(|g| g.letter == 'N').unwrap();
        assert_eq!(n.indices, vec![2, 4]);
    }

    #[test]
    fn rare_letters_first() {
        let t = table(&[('A', 9), ('B', 1), ('N', 5)]);
        let order: Vec<char> = prioritize(&['B', 'A', 'N', 'A', 'N', 'A'], &t)
            .iter()
            .map(|g| g.letter)
            .collect();
        assert_eq!(order, vec!['B', 'N', 'A']);
    }

    #[test]
    fn ties_prefer_larger_pools() {
        let t = table(&[('G', 2), ('O', 1), ('X', 4)]);
        let order: Vec<char> = prioritize(&['G', 'O', 'X'], &t)
            .iter()
            .map(|g| g.letter)
            .collect();
        assert_eq!(order, vec!['X', 'G', 'O']);
    }

    #[test]
    fn full_ties_keep_first_appearance() {
        let t = table(&[('C', 3), ('A', 3), ('B', 3)]);
        let order: Vec<char> = prioritize(&['C', 'A', 'B'], &t)
            .iter()
            .map(|g| g.letter)
            .collect();
        assert_eq!(order, vec!['C', 'A', 'B']);
    }

    #[test]
    fn empty_word_has_no_groups() {
        assert!(prioritize(&[], &table(&[('A', 1)])).is_empty());
    }
}
