//! Session merge contract
//!
//! The merge engine itself lives outside this workspace. This module only
//! fixes the shape of the call and of its result, so that any implementation
//! can be plugged in and smoke-checked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub const STATUS_KEY: &str = "status";
pub const STATUS_OK: &str = "ok";

/// Result mapping returned by a merge. Always expected to carry `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeOutcome {
    fields: BTreeMap<String, Value>,
}

impl MergeOutcome {
    /// Outcome with only `status` set
    pub fn with_status(status: impl Into<String>) -> Self {
        Self::default().with_field(STATUS_KEY, Value::String(status.into()))
    }

    pub fn ok() -> Self {
        Self::with_status(STATUS_OK)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `status` field, if present and a string
    pub fn status(&self) -> Option<&str> {
        self.get(STATUS_KEY).and_then(Value::as_str)
    }

    /// Parse an outcome from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The external merge collaborator
pub trait SessionMerger {
    /// Merge the sessions named by `identifiers`
    fn merge_session(
        &self,
        identifiers: &[String],
        numeric_parameter: u32,
    ) -> Result<MergeOutcome>;
}

impl<F> SessionMerger for F
where
    F: Fn(&[String], u32) -> Result<MergeOutcome>,
{
    fn merge_session(
        &self,
        identifiers: &[String],
        numeric_parameter: u32,
    ) -> Result<MergeOutcome> {
        self(identifiers, numeric_parameter)
    }
}

/// Call `merger` with a single known identifier and require `status == "ok"`.
pub fn smoke_check<M: SessionMerger + ?Sized>(merger: &M) -> Result<MergeOutcome> {
    let outcome = merger.merge_session(&["lumbar_left".to_string()], 20)?;

    match outcome.status() {
        Some(STATUS_OK) => Ok(outcome),
        Some(other) => Err(Error::UnexpectedStatus(other.to_string())),
        None => Err(Error::MissingStatus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        assert_eq!(MergeOutcome::ok().status(), Some("ok"));
        assert_eq!(MergeOutcome::default().status(), None);

        let numeric = MergeOutcome::default().with_field(STATUS_KEY, 200);
        assert_eq!(numeric.status(), None);
    }

    #[test]
    fn test_from_json() {
        let outcome = MergeOutcome::from_json(r#"{"status": "ok", "exercises": []}"#).unwrap();

        assert_eq!(outcome.status(), Some("ok"));
        assert_eq!(outcome.get("exercises"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MergeOutcome::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let outcome = MergeOutcome::ok().with_field("total_duration", 60);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "ok", "total_duration": 60 })
        );
    }
}
