use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// A one-level mapping from dot-path string to leaf value.
///
/// Keys encode the traversal route to each leaf (`"c.e[0]"`), values are the
/// leaves themselves. A `BTreeMap` keeps iteration sorted, so downstream
/// output is deterministic.
pub type FlatMap = BTreeMap<String, Value>;

/// Runtime classification of a nested value.
///
/// `serde_json::Value` already encodes the full union; `ValueKind` collapses
/// it to the three cases traversal dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A string-keyed mapping (`Value::Object`).
    Map,
    /// A positionally indexed sequence (`Value::Array`).
    Seq,
    /// Anything else: null, booleans, numbers, and strings.
    Leaf,
}

impl ValueKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Map,
            Value::Array(_) => Self::Seq,
            _ => Self::Leaf,
        }
    }

    /// Returns `true` for kinds a flattener descends into.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Map | Self::Seq)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Map => "map",
            Self::Seq => "seq",
            Self::Leaf => "leaf",
        };
        write!(f, "{name}")
    }
}

/// Count the leaves reachable in a nested value.
///
/// Empty containers contribute nothing; a bare leaf counts as one. Absent
/// path collisions this equals the entry count of the flattened value.
pub fn leaf_count(value: &Value) -> usize {
    let mut count = 0;
    let mut stack = vec![value];

    while let Some(value) = stack.pop() {
        match value {
            Value::Object(entries) => stack.extend(entries.values()),
            Value::Array(items) => stack.extend(items.iter()),
            _ => count += 1,
        }
    }

    count
}
