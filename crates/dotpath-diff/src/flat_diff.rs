//! Flat map diff: compare two dot-path keyed maps.
//!
//! The diff walks the key union of both maps and classifies each path as
//! added, removed, or modified. Values are compared by structural equality;
//! flat map values are leaves by construction, so no deep comparison is
//! involved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use dotpath_types::FlatMap;

use crate::error::{DiffError, DiffResult};
use crate::record::{DiffKind, DiffRecord};

/// The result of comparing two flat maps.
///
/// Serializes transparently as a mapping from dot-path to [`DiffRecord`], so
/// the wire shape is exactly
/// `{"<path>": {"first": .., "second": .., "diff_type": ..}}`. Records are
/// keyed in sorted path order for reproducible output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatDiff {
    /// Change records keyed by dot-path.
    pub records: BTreeMap<String, DiffRecord>,
}

impl FlatDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of changed paths.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The record for a path, if it changed.
    pub fn get(&self, path: &str) -> Option<&DiffRecord> {
        self.records.get(path)
    }

    /// Number of added paths.
    pub fn additions(&self) -> usize {
        self.count_kind(DiffKind::Added)
    }

    /// Number of removed paths.
    pub fn removals(&self) -> usize {
        self.count_kind(DiffKind::Removed)
    }

    /// Number of modified paths.
    pub fn modifications(&self) -> usize {
        self.count_kind(DiffKind::Modified)
    }

    fn count_kind(&self, kind: DiffKind) -> usize {
        self.records
            .values()
            .filter(|r| r.diff_type == kind)
            .count()
    }

    /// Serialize to the JSON wire shape.
    pub fn to_json(&self) -> DiffResult<String> {
        serde_json::to_string(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }
}

/// Compute the diff between two flat maps.
///
/// Paths present only in `second` are `Added`, paths present only in `first`
/// are `Removed`, and paths present in both with unequal values are
/// `Modified`. Paths whose values are equal on both sides are omitted.
pub fn diff_flat(first: &FlatMap, second: &FlatMap) -> FlatDiff {
    let mut records = BTreeMap::new();

    // Removed and modified paths.
    for (path, first_val) in first {
        match second.get(path) {
            Some(second_val) => {
                if first_val != second_val {
                    records.insert(
                        path.clone(),
                        DiffRecord::modified(first_val.clone(), second_val.clone()),
                    );
                }
            }
            None => {
                records.insert(path.clone(), DiffRecord::removed(first_val.clone()));
            }
        }
    }

    // Added paths.
    for (path, second_val) in second {
        if !first.contains_key(path) {
            records.insert(path.clone(), DiffRecord::added(second_val.clone()));
        }
    }

    debug!(changes = records.len(), "diffed flat maps");
    FlatDiff { records }
}
