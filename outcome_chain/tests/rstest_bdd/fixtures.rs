//! Scenario state shared between chain steps.

use outcome_chain::Outcome;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::log::LogSink;

/// Outcome under construction plus the observations steps make about it.
#[derive(Debug, Default, ScenarioState)]
pub struct ChainContext {
    /// The chain's current outcome; each `when` step takes and replaces it.
    pub outcome: Slot<Outcome<String>>,
    /// Stands in for the application logger a `catch` handler writes to.
    pub log: Slot<LogSink>,
    /// Number of `then` callbacks that actually ran.
    pub then_runs: Slot<u8>,
    /// Number of `catch`/`finally` callbacks that ran.
    pub always_runs: Slot<u8>,
}

impl ChainContext {
    /// Removes the current outcome so a step can extend the chain.
    pub fn take_outcome(&self) -> anyhow::Result<Outcome<String>> {
        self.outcome
            .take()
            .ok_or_else(|| anyhow::anyhow!("no outcome has been seeded"))
    }

    /// Returns the sink, creating it on first use.
    pub fn log(&self) -> LogSink {
        if let Some(sink) = self.log.with_ref(Clone::clone) {
            return sink;
        }
        let sink = LogSink::default();
        self.log.set(sink.clone());
        sink
    }
}

/// Increments a step counter held in `slot`.
pub fn bump(slot: &Slot<u8>, by: u8) {
    let current = slot.take().unwrap_or(0);
    slot.set(current + by);
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn chain_context() -> ChainContext {
    ChainContext::default()
}
