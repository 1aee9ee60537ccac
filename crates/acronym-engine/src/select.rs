// Weighted roulette selection without replacement

use acronym_core::Company;

use crate::rng::next_random;
use crate::weight::company_weight;

/// A shrinking pool of candidates with their roulette weights.
///
/// Every draw removes the chosen candidate together with its weight, so a
/// pool never yields the same company twice.
#[derive(Debug, Clone)]
pub struct WeightedPool<'t> {
    candidates: Vec<&'t Company>,
    weights: Vec<u32>,
}

impl<'t> WeightedPool<'t> {
    /// Build a pool from candidates in table order.
    pub fn new(candidates: impl IntoIterator<Item = &'t Company>) -> Self {
        let candidates: Vec<&'t Company> = candidates.into_iter().collect();
        let weights = candidates.iter().map(|c| company_weight(&c.name)).collect();
        Self {
            candidates,
            weights,
        }
    }

    /// Number of candidates left.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sum of the remaining weights.
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Draw one candidate using the stream at `seed`.
    ///
    /// Walks the cumulative weights until the scaled random value is used
    /// up; the last candidate absorbs rounding. Returns `None` for an empty
    /// pool. Every draw takes a fresh seed.
    pub fn draw(&mut self, seed: u32) -> Option<&'t Company> {
        if self.candidates.is_empty() {
            return None;
        }
        let (value, _) = next_random(seed);
        let mut remaining = value * f64::from(self.total_weight());
        let mut pick = self.candidates.len() - 1;
        for (i, &w) in self.weights.iter().enumerate() {
            remaining -= f64::from(w);
            if remaining <= 0.0 {
                pick = i;
                break;
            }
        }
        self.weights.remove(pick);
        Some(self.candidates.remove(pick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::string_seed;

    fn companies(names: &[&str]) -> Vec<Company> {
        names
            .iter()
            .map(|n| Company::new(*n, format!("{}.svg", n.to_lowercase())))
            .collect()
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut pool = WeightedPool::new(std::iter::empty());
        assert_eq!(pool.draw(42), None);
    }

    #[test]
    fn single_candidate_always_drawn() {
        let cs = companies(&["Solo"]);
        for seed in [0, 1, 2063, u32::MAX] {
            let mut pool = WeightedPool::new(&cs);
            let picked = pool.draw(seed);
            assert_eq!(picked.map(|c| c.name.as_str()), Some("Solo"));
            assert!(pool.is_empty());
        }
    }

    #[test]
    fn weights_follow_popularity() {
        let cs = companies(&["Apple", "Uber", "Acme"]);
        let pool = WeightedPool::new(&cs);
        assert_eq!(pool.total_weight(), 5 + 3 + 1);
    }

    #[test]
    fn low_value_picks_first() {
        // Seed 0 draws 49297 / 233280 ≈ 0.211; with weights [5, 1, 1] the
        // scaled value ≈ 1.48 lands in the first bucket.
        let cs = companies(&["Apple", "B", "C"]);
        let mut pool = WeightedPool::new(&cs);
        let picked = pool.draw(0);
        assert_eq!(picked.map(|c| c.name.as_str()), Some("Apple"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn draws_without_replacement() {
        let cs = companies(&["A1", "A2", "A3", "A4"]);
        let mut pool = WeightedPool::new(&cs);
        let mut seen = Vec::new();
        // Same seed every time: removal alone must keep picks distinct.
        while let Some(c) = pool.draw(string_seed("A0")) {
            assert!(!seen.contains(&c.name), "{} drawn twice", c.name);
            seen.push(c.name.clone());
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(pool.total_weight(), 0);
    }

    #[test]
    fn same_seed_same_pick() {
        let cs = companies(&["Google", "GitHub", "GitLab", "Grab"]);
        let seed = string_seed("G0");
        let a = WeightedPool::new(&cs).draw(seed).map(|c| c.name.clone());
        let b = WeightedPool::new(&cs).draw(seed).map(|c| c.name.clone());
        assert_eq!(a, b);
    }
}
