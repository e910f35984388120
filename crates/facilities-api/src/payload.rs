// Buildings document normalization
//
// The upstream document has no fixed envelope. It may be a bare array of
// buildings, or an object carrying the array under `buildings`, `data`, or
// any other key. Everything is funneled into a single `BuildingsPayload`
// before it reaches the transform engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Error;

/// Normalized buildings document. Each entry is an untyped building node;
/// `facilities-core` converts them into its domain model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingsPayload {
    pub buildings: Vec<Value>,
}

impl BuildingsPayload {
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

/// Parse a raw response body and normalize it.
pub fn parse_document(body: &str) -> Result<BuildingsPayload, Error> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::Parse {
        message: e.to_string(),
        body: body.to_owned(),
    })?;
    Ok(normalize_payload(value))
}

/// Normalize any JSON document into a list of building nodes.
///
/// Resolution order:
/// 1. a bare array is the list itself;
/// 2. a truthy `buildings` property wins;
/// 3. otherwise a truthy `data` property;
/// 4. otherwise the first array-valued property, in document order.
///
/// A winning property that is not an array yields zero buildings, as does
/// any other document shape.
pub fn normalize_payload(value: Value) -> BuildingsPayload {
    match value {
        Value::Array(buildings) => BuildingsPayload { buildings },
        Value::Object(mut map) => {
            let picked = ["buildings", "data"]
                .into_iter()
                .find(|key| map.get(*key).is_some_and(is_truthy))
                .and_then(|key| map.shift_remove(key))
                .or_else(|| {
                    let key = map
                        .iter()
                        .find(|(_, v)| v.is_array())
                        .map(|(k, _)| k.clone())?;
                    debug!(key = %key, "using first array-valued property as buildings");
                    map.shift_remove(&key)
                });

            match picked {
                Some(Value::Array(buildings)) => BuildingsPayload { buildings },
                Some(other) => {
                    warn!(kind = json_kind(&other), "buildings property is not an array");
                    BuildingsPayload::default()
                }
                None => {
                    warn!("no buildings array found in document");
                    BuildingsPayload::default()
                }
            }
        }
        other => {
            warn!(kind = json_kind(&other), "unexpected document shape");
            BuildingsPayload::default()
        }
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0`, `NaN`, and `""` are
/// falsy. Decides whether an envelope key counts as present, and how
/// boolean-ish telemetry is read.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
