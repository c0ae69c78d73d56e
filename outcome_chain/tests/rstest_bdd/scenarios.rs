//! Binds the chaining feature file to the step registry.

use crate::fixtures::{ChainContext, chain_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome_chain.feature",
    fixtures = [chain_context: ChainContext]
);
