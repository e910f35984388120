// ── Node identity ──
//
// Identifiers in the buildings document are opaque and only unique within
// their building. The upstream emits both strings and numbers, so NodeId
// accepts either and always displays as text. Any JSON number is kept as
// written, floats and ids above `i64::MAX` included.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::num::FpCategory;
use std::str::FromStr;

/// Identifier of a building, floor, space, room, or device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(Number),
    Text(String),
}

impl NodeId {
    /// An id that would be falsy upstream (`""` or `0`) cannot serve as a key.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
            Self::Text(s) => s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for NodeId {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Text(s) => s == other,
            Self::Number(n) => n.to_string() == other,
        }
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
