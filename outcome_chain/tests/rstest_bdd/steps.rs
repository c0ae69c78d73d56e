//! Step definitions for the chaining scenarios.

use anyhow::{Result, anyhow, ensure};
use outcome_chain::Outcome;
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{append_line, lines, unquote};

use crate::fixtures::{ChainContext, bump};

#[given("a successful outcome holding the line {line}")]
fn seed_success(chain_context: &ChainContext, line: String) {
    let mut text = String::new();
    append_line(&mut text, unquote(&line));
    chain_context.outcome.set(Outcome::ok(text));
}

#[given("a failed outcome with the message {message}")]
fn seed_failure(chain_context: &ChainContext, message: String) -> Result<()> {
    let outcome = Outcome::try_fail(unquote(&message))?;
    chain_context.outcome.set(outcome);
    Ok(())
}

#[when("the line {line} is appended with then")]
fn append_with_then(chain_context: &ChainContext, line: String) -> Result<()> {
    let next = chain_context.take_outcome()?.then(|mut text: String| {
        bump(&chain_context.then_runs, 1);
        append_line(&mut text, unquote(&line));
        Outcome::ok(text)
    });
    chain_context.outcome.set(next);
    Ok(())
}

#[when("a then step fails with {message}")]
fn fail_in_then(chain_context: &ChainContext, message: String) -> Result<()> {
    let next = chain_context.take_outcome()?.then(|text: String| {
        bump(&chain_context.then_runs, 1);
        Outcome::fail_with(unquote(&message), text)
    });
    chain_context.outcome.set(next);
    Ok(())
}

#[when("a catch step logs the failure and fails with {replacement}")]
fn log_in_catch(chain_context: &ChainContext, replacement: String) -> Result<()> {
    let sink = chain_context.log();
    let next = chain_context.take_outcome()?.catch(|input| {
        if input.is_successful() {
            return input;
        }
        sink.record(input.message().unwrap_or_default());
        Outcome::fail_with(unquote(&replacement), input.into_value())
    });
    chain_context.outcome.set(next);
    Ok(())
}

#[when("a counting catch step passes the outcome on")]
fn count_catch(chain_context: &ChainContext) -> Result<()> {
    let next = chain_context.take_outcome()?.catch(|input| {
        bump(&chain_context.always_runs, 1);
        input
    });
    chain_context.outcome.set(next);
    Ok(())
}

#[when("a counting finally step passes the outcome on")]
fn count_finally(chain_context: &ChainContext) -> Result<()> {
    let next = chain_context.take_outcome()?.finally(|input| {
        bump(&chain_context.always_runs, 1);
        input
    });
    chain_context.outcome.set(next);
    Ok(())
}

#[then("the outcome is successful")]
fn assert_success(chain_context: &ChainContext) -> Result<()> {
    let (successful, message) = chain_context
        .outcome
        .with_ref(|outcome| (outcome.is_successful(), outcome.message().map(str::to_owned)))
        .ok_or_else(|| anyhow!("no outcome has been seeded"))?;
    ensure!(successful, "expected success, got failure {message:?}");
    Ok(())
}

#[then("the outcome fails with {message}")]
fn assert_failure(chain_context: &ChainContext, message: String) -> Result<()> {
    let (failed, actual) = chain_context
        .outcome
        .with_ref(|outcome| (outcome.is_failure(), outcome.message().map(str::to_owned)))
        .ok_or_else(|| anyhow!("no outcome has been seeded"))?;
    ensure!(failed, "expected a failure, got success");
    let expected = unquote(&message);
    ensure!(
        actual.as_deref() == Some(expected),
        "expected message {expected:?}, got {actual:?}"
    );
    Ok(())
}

#[then("the outcome holds the lines {expected}")]
fn assert_lines(chain_context: &ChainContext, expected: String) -> Result<()> {
    let parts: Vec<&str> = unquote(&expected).split('|').collect();
    let actual = chain_context
        .outcome
        .with_ref(|outcome| outcome.value().clone())
        .ok_or_else(|| anyhow!("no outcome has been seeded"))?;
    ensure!(actual == lines(&parts), "unexpected text {actual:?}");
    Ok(())
}

#[then("the log records {entry}")]
fn assert_logged(chain_context: &ChainContext, entry: String) -> Result<()> {
    let expected = unquote(&entry);
    let sink = chain_context.log();
    ensure!(
        sink.entries() == [expected],
        "expected only {expected:?} in the log, got {:?}",
        sink.entries()
    );
    Ok(())
}

#[then("the log is empty")]
fn assert_log_empty(chain_context: &ChainContext) -> Result<()> {
    let sink = chain_context.log();
    ensure!(sink.is_empty(), "unexpected log entries {:?}", sink.entries());
    Ok(())
}

#[then("{count:u8} then steps ran")]
fn assert_then_runs(chain_context: &ChainContext, count: u8) -> Result<()> {
    let runs = chain_context.then_runs.with_ref(|runs| *runs).unwrap_or(0);
    ensure!(runs == count, "expected {count} then steps, {runs} ran");
    Ok(())
}

#[then("{count:u8} always-run callbacks ran")]
fn assert_always_runs(chain_context: &ChainContext, count: u8) -> Result<()> {
    let runs = chain_context.always_runs.with_ref(|runs| *runs).unwrap_or(0);
    ensure!(runs == count, "expected {count} catch/finally calls, {runs} ran");
    Ok(())
}
