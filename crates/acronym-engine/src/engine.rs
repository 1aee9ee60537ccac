// AcronymEngine: top-level entry point for letter-to-company assignment.
//
// The engine owns the candidate table and its options. All bookkeeping for
// one pass (consumed companies, result slots, exhausted letters) lives in a
// `PassState` built at the start of each call, so a shared engine can serve
// any number of independent requests.

use acronym_core::normalize::normalize_word;
use acronym_core::{AssignmentEntry, GenerationResult, GenerationStats};
use hashbrown::HashSet;

use crate::priority::{letter_frequencies, prioritize};
use crate::rng::{occurrence_seed, string_seed};
use crate::select::WeightedPool;
use crate::table::{CandidateTable, TableError};

/// Default number of re-roll attempts in `regenerate_with_alternatives`.
pub const DEFAULT_MAX_REGENERATE_ATTEMPTS: usize = 10;

/// Tunable engine options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Upper bound on perturbed passes tried before giving up on a re-roll.
    pub max_regenerate_attempts: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_regenerate_attempts: DEFAULT_MAX_REGENERATE_ATTEMPTS,
        }
    }
}

/// Working state of a single generation pass.
struct PassState<'t> {
    /// Names of companies consumed so far in this pass.
    used: HashSet<&'t str>,
    /// Result slots, indexed by letter position.
    slots: Vec<Option<AssignmentEntry>>,
    /// Letters that ran out of candidates, first-exhausted order.
    duplicate_letters: Vec<char>,
}

impl<'t> PassState<'t> {
    fn new(len: usize) -> Self {
        Self {
            used: HashSet::new(),
            slots: vec![None; len],
            duplicate_letters: Vec::new(),
        }
    }

    fn mark_exhausted(&mut self, letter: char) {
        if !self.duplicate_letters.contains(&letter) {
            self.duplicate_letters.push(letter);
        }
    }
}

/// Deterministic letter-to-company assignment engine.
#[derive(Debug, Clone)]
pub struct AcronymEngine {
    table: CandidateTable,
    options: EngineOptions,
}

impl AcronymEngine {
    /// Create an engine over the given table with default options.
    pub fn new(table: CandidateTable) -> Self {
        Self::with_options(table, EngineOptions::default())
    }

    pub fn with_options(table: CandidateTable, options: EngineOptions) -> Self {
        Self { table, options }
    }

    /// Create an engine over the built-in table.
    pub fn builtin() -> Result<Self, TableError> {
        Ok(Self::new(CandidateTable::builtin()?))
    }

    pub fn table(&self) -> &CandidateTable {
        &self.table
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn set_max_regenerate_attempts(&mut self, attempts: usize) {
        self.options.max_regenerate_attempts = attempts;
    }

    /// Assign one company per letter of `word`.
    ///
    /// The word is uppercased and stripped of non-alphabetic characters
    /// first. Never fails: letters with no unused candidates get
    /// placeholders, and a word without letters gives an empty result.
    pub fn generate(&self, word: &str) -> GenerationResult {
        self.run_pass(&normalize_word(word), None)
    }

    /// Whether some letter of `word` has more candidates than occurrences,
    /// i.e. a re-roll could pick something different.
    pub fn can_regenerate(&self, word: &str) -> bool {
        self.has_alternatives(&normalize_word(word))
    }

    /// Re-roll `word` looking for a company not already shown.
    ///
    /// Tries up to `max_regenerate_attempts` passes, each on a stream
    /// perturbed by the word and attempt number, and returns the first
    /// assignment containing a real company absent from `current`'s real
    /// companies. `None` means no attempt found one.
    pub fn regenerate_with_alternatives(
        &self,
        word: &str,
        current: &[AssignmentEntry],
    ) -> Option<Vec<AssignmentEntry>> {
        let letters = normalize_word(word);
        if letters.is_empty() {
            return None;
        }
        let shown: HashSet<&str> = current
            .iter()
            .filter_map(AssignmentEntry::company_name)
            .collect();
        let normalized: String = letters.iter().collect();

        for attempt in 0..self.options.max_regenerate_attempts {
            let perturbation = string_seed(&format!("{normalized}{attempt}"));
            let result = self.run_pass(&letters, Some(perturbation));
            if result.company_names().any(|name| !shown.contains(name)) {
                log::debug!("re-roll of {normalized:?} found an alternative on attempt {attempt}");
                return Some(result.assignment);
            }
        }
        log::debug!(
            "re-roll of {normalized:?} found no alternative in {} attempts",
            self.options.max_regenerate_attempts
        );
        None
    }

    fn has_alternatives(&self, letters: &[char]) -> bool {
        letter_frequencies(letters)
            .iter()
            .any(|(&letter, &count)| self.table.pool_size(letter) > count)
    }

    /// One full assignment pass over normalized letters.
    fn run_pass(&self, letters: &[char], perturbation: Option<u32>) -> GenerationResult {
        if letters.is_empty() {
            return GenerationResult::empty();
        }

        let mut state = PassState::new(letters.len());
        let groups = prioritize(letters, &self.table);
        log::trace!(
            "service order: {}",
            groups.iter().map(|g| g.letter).collect::<String>()
        );

        for group in &groups {
            let letter = group.letter;
            let mut pool = WeightedPool::new(
                self.table
                    .candidates(letter)
                    .iter()
                    .filter(|c| !state.used.contains(c.name.as_str())),
            );
            if pool.len() < group.occurrences() {
                log::debug!(
                    "letter {letter}: {} candidates left for {} occurrences, using placeholders",
                    pool.len(),
                    group.occurrences()
                );
            }

            for (occurrence, &index) in group.indices.iter().enumerate() {
                let seed = occurrence_seed(letter, occurrence, perturbation);
                let entry = match pool.draw(seed) {
                    Some(company) => {
                        state.used.insert(company.name.as_str());
                        AssignmentEntry::assigned(letter, company.clone())
                    }
                    None => {
                        state.mark_exhausted(letter);
                        AssignmentEntry::placeholder(letter)
                    }
                };
                state.slots[index] = Some(entry);
            }
        }

        // Every position belongs to exactly one group, so no slot is empty.
        let assignment: Vec<AssignmentEntry> = state.slots.into_iter().flatten().collect();
        let stats = GenerationStats {
            total_letters: letters.len(),
            unique_companies_used: state.used.len(),
            placeholder_count: assignment.iter().filter(|e| e.is_placeholder).count(),
            duplicate_letters: state.duplicate_letters,
        };

        GenerationResult {
            assignment,
            stats,
            can_regenerate: self.has_alternatives(letters),
        }
    }
}
