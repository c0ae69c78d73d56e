//! `rstest-bdd` behavioural suite for `outcome_chain`.
//!
//! Fixtures hold the outcome threaded between steps, the step module
//! registers the Gherkin vocabulary, and `scenarios` binds the feature files
//! under `tests/features/`.

mod fixtures;
mod scenarios;
mod steps;
