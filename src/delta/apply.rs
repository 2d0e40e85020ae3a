//! Delta application.

use super::delta::{Delta, Operator};
use crate::error::{DeltaError, DeltaResult};
use crate::path::{del, traverse, traverse_mut, traverse_set, Path};
use crate::value::{deep_compare, Value};
use tracing::{debug, trace};

const TREE: &str = "map or list";

/// Applies a delta document to `data` and returns the resulting tree.
///
/// Both arguments must be maps or lists. A list document, or a map holding
/// any key that is not a delta operator, is not a delta but a replacement
/// value: it is returned unchanged. `data` itself is never modified.
pub fn apply(data: &Value, delta: &Value) -> DeltaResult<Value> {
    if !data.is_container() {
        return Err(DeltaError::invalid_argument("data", TREE, data.type_name()));
    }
    if !delta.is_container() {
        return Err(DeltaError::invalid_argument("delta", TREE, delta.type_name()));
    }

    let parsed = match delta {
        Value::Map(_) => Delta::from_value(delta)?,
        _ => None,
    };
    match parsed {
        Some(parsed) => apply_delta(data, &parsed),
        None => {
            debug!("document is not a delta, returning it as the replacement value");
            Ok(delta.clone())
        }
    }
}

/// Applies a parsed delta to a copy of `data`.
///
/// Groups are replayed in the order unset, pull, push, rename, setOnInsert,
/// set, inc.
pub fn apply_delta(data: &Value, delta: &Delta) -> DeltaResult<Value> {
    if !data.is_container() {
        return Err(DeltaError::invalid_argument("data", TREE, data.type_name()));
    }

    let mut target = data.clone();
    for op in Operator::APPLY_ORDER {
        apply_operator(&mut target, delta, op)?;
    }
    debug!(entries = delta.len(), "applied delta");
    Ok(target)
}

fn apply_operator(target: &mut Value, delta: &Delta, op: Operator) -> DeltaResult<()> {
    match op {
        Operator::Unset => {
            for path in &delta.unset {
                if del(target, &Path::parse(path)).is_none() {
                    trace!(path = %path, "unset of a missing path");
                }
            }
        }
        Operator::Pull => {
            for (path, items) in &delta.pull {
                pull(target, path, items)?;
            }
        }
        Operator::Push => {
            for (path, items) in &delta.push {
                push(target, path, items)?;
            }
        }
        Operator::Rename => {
            for (from, to) in &delta.rename {
                match del(target, &Path::parse(from)) {
                    Some(value) => traverse_set(target, &Path::parse(to), value)?,
                    None => trace!(from = %from, "rename of a missing path"),
                }
            }
        }
        Operator::SetOnInsert => {
            for (path, value) in &delta.set_on_insert {
                let path = Path::parse(path);
                if traverse(target, &path).is_none() {
                    traverse_set(target, &path, value.clone())?;
                }
            }
        }
        Operator::Set => {
            for (path, value) in &delta.set {
                traverse_set(target, &Path::parse(path), value.clone())?;
            }
        }
        Operator::Inc => {
            for (path, amount) in &delta.inc {
                inc(target, path, amount)?;
            }
        }
    }
    Ok(())
}

fn pull(target: &mut Value, path: &str, items: &[Value]) -> DeltaResult<()> {
    match traverse_mut(target, &Path::parse(path)) {
        Some(Value::List(list)) => {
            for item in items {
                match list.iter().position(|element| deep_compare(element, item)) {
                    Some(index) => {
                        list.remove(index);
                    }
                    None => trace!(path = %path, "pulled element not present"),
                }
            }
            Ok(())
        }
        Some(other) => Err(DeltaError::type_mismatch(path, "list", other.type_name())),
        None => {
            trace!(path = %path, "pull from a missing list");
            Ok(())
        }
    }
}

fn push(target: &mut Value, path: &str, items: &[Value]) -> DeltaResult<()> {
    let path_ref = Path::parse(path);
    match traverse_mut(target, &path_ref) {
        Some(Value::List(list)) => {
            list.extend(items.iter().cloned());
            Ok(())
        }
        Some(other) => Err(DeltaError::type_mismatch(path, "list", other.type_name())),
        None => traverse_set(target, &path_ref, Value::List(items.to_vec())),
    }
}

fn inc(target: &mut Value, path: &str, amount: &Value) -> DeltaResult<()> {
    if !amount.is_number() {
        return Err(DeltaError::malformed_operand(
            Operator::Inc.key(),
            path,
            format!("amount must be a number, got {}", amount.type_name()),
        ));
    }
    let path_ref = Path::parse(path);
    match traverse_mut(target, &path_ref) {
        Some(existing) => {
            let sum = existing
                .checked_add(amount)
                .ok_or_else(|| DeltaError::type_mismatch(path, "number", existing.type_name()))?;
            *existing = sum;
            Ok(())
        }
        None => traverse_set(target, &path_ref, amount.clone()),
    }
}
