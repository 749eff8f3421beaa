//! Flatten nested values into dot-path keyed maps.
//!
//! One canonical traversal serves every input shape: an explicit work stack
//! dispatching on [`ValueKind`], so nesting depth never grows the program
//! stack. Work items are popped in source iteration order; when two distinct
//! routes produce the same path string (separator characters inside source
//! keys are not escaped) the later entry overwrites the earlier one.

use serde_json::Value;
use tracing::debug;

use dotpath_types::{FlatMap, ValueKind};

use crate::error::{FlattenError, FlattenResult};
use crate::path::{join_index, join_key};

/// Configurable flattening.
///
/// The default configuration walks any nesting depth. `max_depth` bounds the
/// container nesting the walk will enter; exceeding it fails before any
/// output is produced, rather than truncating.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flattener {
    max_depth: Option<usize>,
}

impl Flattener {
    /// Create a flattener with no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the container nesting the walk will enter.
    ///
    /// A value whose root is a container occupies depth one, its container
    /// children depth two, and so on. Leaves are not counted.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Flatten a nested value into a dot-path keyed map.
    pub fn flatten(&self, value: &Value) -> FlattenResult<FlatMap> {
        walk(value, self.max_depth)
    }
}

/// Flatten a nested value into a dot-path keyed map.
///
/// Leaves at the top level of a root mapping keep their bare key; container
/// values are walked with their key as path prefix. A root sequence produces
/// `[0]`, `[1]`, ... paths with an empty prefix. Empty containers contribute
/// no entries. The input is never mutated.
///
/// ```
/// use dotpath_flatten::flatten;
/// use serde_json::json;
///
/// let value = json!({"a": 1, "b": [2, 3, 4], "c": {"d": 5, "e": [6]}});
/// let flat = flatten(&value);
///
/// assert_eq!(flat.len(), 6);
/// assert_eq!(flat["a"], json!(1));
/// assert_eq!(flat["b[2]"], json!(4));
/// assert_eq!(flat["c.e[0]"], json!(6));
/// ```
pub fn flatten(value: &Value) -> FlatMap {
    // Cannot fail without a depth limit.
    walk(value, None).unwrap_or_default()
}

/// A pending traversal step: the path prefix assigned to `value` and the
/// number of containers entered to reach it.
struct WorkItem<'a> {
    path: String,
    value: &'a Value,
    depth: usize,
}

fn walk(root: &Value, max_depth: Option<usize>) -> FlattenResult<FlatMap> {
    let mut out = FlatMap::new();
    let mut stack = vec![WorkItem {
        path: String::new(),
        value: root,
        depth: 0,
    }];

    while let Some(item) = stack.pop() {
        if ValueKind::of(item.value).is_container() {
            if let Some(limit) = max_depth {
                if item.depth >= limit {
                    return Err(FlattenError::DepthLimitExceeded { limit });
                }
            }
        }

        match item.value {
            // Children are pushed in reverse so the stack pops them in
            // source iteration order, preserving overwrite-wins for
            // colliding paths.
            Value::Object(entries) => {
                for (key, child) in entries.iter().rev() {
                    stack.push(WorkItem {
                        path: join_key(&item.path, key),
                        value: child,
                        depth: item.depth + 1,
                    });
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate().rev() {
                    stack.push(WorkItem {
                        path: join_index(&item.path, index),
                        value: child,
                        depth: item.depth + 1,
                    });
                }
            }
            leaf => {
                out.insert(item.path, leaf.clone());
            }
        }
    }

    debug!(paths = out.len(), "flattened value");
    Ok(out)
}
