//! Shared types and utilities for the logo acronym engine.
//!
//! - [`company`] -- Company records and per-letter assignment entries
//! - [`result`] -- Generation results and summary statistics
//! - [`normalize`] -- Word normalization, input sanitizing, share links
//! - [`logo`] -- Logo asset path resolution

pub mod company;
pub mod logo;
pub mod normalize;
pub mod result;

pub use company::{AssignmentEntry, Company, PLACEHOLDER_LOGO};
pub use result::{GenerationResult, GenerationStats};
