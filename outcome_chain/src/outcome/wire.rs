//! Serialisation support, enabled by the `serde` feature.
//!
//! Outcomes serialise as `{ "successful": bool, "message": string|null,
//! "value": T }`. Deserialisation goes through [`RawOutcome`] so a payload
//! describing a failure without a message is rejected rather than admitted.

use serde::Deserialize;

use super::Outcome;
use crate::error::OutcomeError;

/// Unvalidated wire form of an [`Outcome`].
#[derive(Deserialize)]
pub(super) struct RawOutcome<T> {
    successful: bool,
    #[serde(default)]
    message: Option<String>,
    value: T,
}

impl<T> TryFrom<RawOutcome<T>> for Outcome<T> {
    type Error = OutcomeError;

    fn try_from(raw: RawOutcome<T>) -> Result<Self, Self::Error> {
        Self::try_new(raw.successful, raw.message, raw.value)
    }
}
