//! Change records keyed by dot-path.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a single path changed between two flat maps.
///
/// The serialized spelling (`"added"`, `"modified"`, `"removed"`) is part of
/// the wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// The path exists only in the second map.
    Added,
    /// The path exists in both maps with unequal values.
    Modified,
    /// The path exists only in the first map.
    Removed,
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
        };
        write!(f, "{name}")
    }
}

/// The change recorded for a single path.
///
/// `first` and `second` carry the leaf values from each side; the side a
/// path is missing from is `None` and serializes as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// The value in the first map, if the path was present there.
    pub first: Option<Value>,
    /// The value in the second map, if the path was present there.
    pub second: Option<Value>,
    /// The change classification.
    pub diff_type: DiffKind,
}

impl DiffRecord {
    /// A path present only in the second map.
    pub fn added(second: Value) -> Self {
        Self {
            first: None,
            second: Some(second),
            diff_type: DiffKind::Added,
        }
    }

    /// A path present in both maps with unequal values.
    pub fn modified(first: Value, second: Value) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            diff_type: DiffKind::Modified,
        }
    }

    /// A path present only in the first map.
    pub fn removed(first: Value) -> Self {
        Self {
            first: Some(first),
            second: None,
            diff_type: DiffKind::Removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DiffKind::Added).unwrap(), "\"added\"");
        assert_eq!(
            serde_json::to_string(&DiffKind::Modified).unwrap(),
            "\"modified\""
        );
        assert_eq!(
            serde_json::to_string(&DiffKind::Removed).unwrap(),
            "\"removed\""
        );
    }

    #[test]
    fn display_matches_wire_spelling() {
        for kind in [DiffKind::Added, DiffKind::Modified, DiffKind::Removed] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{kind}\""));
        }
    }

    #[test]
    fn added_record_has_null_first_side() {
        let record = DiffRecord::added(json!(9));
        let wire = serde_json::to_string(&record).unwrap();
        assert_eq!(wire, r#"{"first":null,"second":9,"diff_type":"added"}"#);
    }

    #[test]
    fn removed_record_has_null_second_side() {
        let record = DiffRecord::removed(json!(3));
        let wire = serde_json::to_string(&record).unwrap();
        assert_eq!(wire, r#"{"first":3,"second":null,"diff_type":"removed"}"#);
    }

    #[test]
    fn modified_record_carries_both_sides() {
        let record = DiffRecord::modified(json!(2), json!(8));
        let wire = serde_json::to_string(&record).unwrap();
        assert_eq!(wire, r#"{"first":2,"second":8,"diff_type":"modified"}"#);
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = DiffRecord::modified(json!("old"), json!("new"));
        let wire = serde_json::to_string(&record).unwrap();
        let parsed: DiffRecord = serde_json::from_str(&wire).unwrap();
        assert_eq!(record, parsed);
    }
}
