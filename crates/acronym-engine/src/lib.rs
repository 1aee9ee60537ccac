//! Letter-to-company assignment engine.
//!
//! Given a word and a static table of candidate companies per letter, the
//! engine picks one company per letter occurrence. Selection is weighted
//! toward well-known companies, never reuses a company within one result,
//! and falls back to `"<letter>-Company"` placeholders when a letter runs
//! out of candidates. The same word always yields the same assignment.
//!
//! # Architecture
//!
//! - [`table`] -- Candidate table loading and validation
//! - [`weight`] -- Popularity tiers and selection weights
//! - [`rng`] -- String hashing and the seeded linear-congruential stream
//! - [`priority`] -- Letter grouping and service order
//! - [`select`] -- Weighted roulette selection without replacement
//! - [`engine`] -- `generate` / `regenerate_with_alternatives`

pub mod engine;
pub mod priority;
pub mod rng;
pub mod select;
pub mod table;
pub mod weight;

pub use engine::{AcronymEngine, DEFAULT_MAX_REGENERATE_ATTEMPTS, EngineOptions};
pub use table::{CandidateTable, TableError};
pub use weight::Popularity;
