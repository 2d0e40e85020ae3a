//! Delta construction.

use super::array::diff_arrays;
use super::delta::Delta;
use super::rename::infer_renames;
use crate::error::{DeltaError, DeltaResult};
use crate::path::{traverse, walk, HandledPaths, Path, WalkAction};
use crate::value::{deep_compare, Value};
use indexmap::IndexMap;
use tracing::debug;

/// Computes the delta that turns `original` into `current`.
///
/// Returns `Ok(None)` when the trees are equal. Both trees must be maps.
///
/// Lists present on both sides are reconciled as multisets into `push` and
/// `pull`. Every other divergence is recorded at the shallowest path where it
/// shows, as `unset` when `current` lacks the path and as `set` otherwise.
/// Removed and added leaves holding loosely equal values are then folded
/// into `rename`. No path of the result is equal to, or below, a path of
/// another entry.
pub fn create(original: &Value, current: &Value) -> DeltaResult<Option<Delta>> {
    if !original.is_map() {
        return Err(DeltaError::invalid_argument("original", "map", original.type_name()));
    }
    if !current.is_map() {
        return Err(DeltaError::invalid_argument("current", "map", current.type_name()));
    }

    let mut builder = DeltaBuilder::default();
    walk(original, |value, path| builder.visit_original(value, path, current));
    walk(current, |value, path| builder.visit_current(value, path, original));

    let delta = builder.finish();
    match &delta {
        Some(d) => debug!(
            set = d.set.len(),
            unset = d.unset.len(),
            push = d.push.len(),
            pull = d.pull.len(),
            rename = d.rename.len(),
            "created delta"
        ),
        None => debug!("trees are equal, no delta"),
    }
    Ok(delta)
}

/// Accumulates candidate entries for one `create` call.
#[derive(Debug, Default)]
struct DeltaBuilder {
    set: IndexMap<String, Value>,
    /// Removed paths with the value they held, kept for rename inference.
    unset: IndexMap<String, Value>,
    push: IndexMap<String, Vec<Value>>,
    pull: IndexMap<String, Vec<Value>>,
    handled: HandledPaths,
}

impl DeltaBuilder {
    fn visit_original(&mut self, value: &Value, path: &Path, current: &Value) -> WalkAction {
        if self.handled.covers(path) {
            return WalkAction::Skip;
        }

        match (value, traverse(current, path)) {
            (Value::List(from), Some(Value::List(to))) => {
                let diff = diff_arrays(from, to);
                let key = path.to_string();
                if !diff.pull.is_empty() {
                    self.pull.insert(key.clone(), diff.pull);
                }
                if !diff.push.is_empty() {
                    self.push.insert(key, diff.push);
                }
                self.handled.mark(path);
                WalkAction::Skip
            }
            (Value::Map(_), Some(Value::Map(_))) => WalkAction::Descend,
            (_, Some(other)) if deep_compare(value, other) => WalkAction::Skip,
            (_, None) => {
                self.unset.insert(path.to_string(), value.clone());
                self.handled.mark(path);
                WalkAction::Skip
            }
            (_, Some(other)) => {
                self.set.insert(path.to_string(), other.clone());
                self.handled.mark(path);
                WalkAction::Skip
            }
        }
    }

    fn visit_current(&mut self, value: &Value, path: &Path, original: &Value) -> WalkAction {
        if self.handled.covers(path) {
            return WalkAction::Skip;
        }
        if traverse(original, path).is_some() {
            return WalkAction::Descend;
        }
        self.set.insert(path.to_string(), value.clone());
        self.handled.mark(path);
        WalkAction::Skip
    }

    fn finish(mut self) -> Option<Delta> {
        let rename = infer_renames(&mut self.unset, &mut self.set);
        let delta = Delta {
            set: self.set,
            unset: self.unset.into_keys().collect(),
            push: self.push,
            pull: self.pull,
            rename,
            ..Delta::default()
        };
        (!delta.is_empty()).then_some(delta)
    }
}
