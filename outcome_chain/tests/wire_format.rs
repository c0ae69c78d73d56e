//! Serialisation tests, compiled only with the `serde` feature.
#![cfg(feature = "serde")]

use anyhow::{Result, ensure};
use outcome_chain::Outcome;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn failing_outcome_serialises_every_field() -> Result<()> {
    let outcome = Outcome::fail_with("quota exceeded", 3_u32);
    let value = serde_json::to_value(&outcome)?;
    ensure!(
        value == json!({"successful": false, "message": "quota exceeded", "value": 3}),
        "unexpected wire form: {value}"
    );
    Ok(())
}

#[rstest]
fn successful_outcome_deserialises_without_message() -> Result<()> {
    let outcome: Outcome<String> =
        serde_json::from_value(json!({"successful": true, "value": "ready"}))?;
    ensure!(outcome == Outcome::ok(String::from("ready")), "got {outcome:?}");
    Ok(())
}

#[rstest]
#[case::absent(json!({"successful": false, "value": 1}))]
#[case::blank(json!({"successful": false, "message": "  ", "value": 1}))]
#[case::null(json!({"successful": false, "message": null, "value": 1}))]
fn failure_without_message_is_rejected(#[case] payload: serde_json::Value) -> Result<()> {
    let Err(err) = serde_json::from_value::<Outcome<u8>>(payload) else {
        anyhow::bail!("a failure without a message must not deserialise");
    };
    ensure!(
        err.to_string()
            .contains("no error message provided for a non-successful outcome"),
        "unexpected error: {err}"
    );
    Ok(())
}
