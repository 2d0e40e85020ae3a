//! Reading, writing and deleting values at a path.

use super::path::{parse_index, Path};
use crate::error::{DeltaError, DeltaResult};
use crate::value::{Map, Value};

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Map(m) => m.get(segment),
        Value::List(l) => parse_index(segment).and_then(|i| l.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Map(m) => m.get_mut(segment),
        Value::List(l) => parse_index(segment).and_then(|i| l.get_mut(i)),
        _ => None,
    }
}

/// Returns the value at `path`, or None when any segment does not resolve.
pub fn traverse<'a>(tree: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(tree, child)
}

/// Mutable counterpart of [`traverse`].
pub fn traverse_mut<'a>(tree: &'a mut Value, path: &Path) -> Option<&'a mut Value> {
    path.iter().try_fold(tree, child_mut)
}

/// Writes `value` at `path`.
///
/// Missing intermediate segments are created as maps, never as lists, even
/// when the next segment looks like an index. In a list, the terminal index
/// replaces an existing element or extends the list, padding with nulls.
/// Writing the root path replaces the whole tree.
pub fn traverse_set(tree: &mut Value, path: &Path, value: Value) -> DeltaResult<()> {
    let Some((last, parents)) = path.segments().split_last() else {
        *tree = value;
        return Ok(());
    };

    let mut node = tree;
    for (depth, segment) in parents.iter().enumerate() {
        node = match node {
            Value::Map(m) => m
                .fields
                .entry(segment.clone())
                .or_insert_with(|| Value::Map(Map::new())),
            Value::List(l) => {
                let index = parse_index(segment)
                    .ok_or_else(|| DeltaError::invalid_index(path.prefix(depth).to_string(), segment))?;
                if index >= l.len() {
                    l.resize(index, Value::Null);
                    l.push(Value::Map(Map::new()));
                }
                &mut l[index]
            }
            other => {
                return Err(DeltaError::not_a_container(
                    path.prefix(depth).to_string(),
                    other.type_name(),
                ))
            }
        };
    }

    match node {
        Value::Map(m) => {
            m.set(last.clone(), value);
            Ok(())
        }
        Value::List(l) => {
            let index = parse_index(last)
                .ok_or_else(|| DeltaError::invalid_index(path.prefix(parents.len()).to_string(), last))?;
            if index < l.len() {
                l[index] = value;
            } else {
                l.resize(index, Value::Null);
                l.push(value);
            }
            Ok(())
        }
        other => Err(DeltaError::not_a_container(
            path.prefix(parents.len()).to_string(),
            other.type_name(),
        )),
    }
}

/// Removes the entry at `path` from its parent and returns it. Map keys keep
/// their relative order; later list elements shift down. Does nothing when
/// the path does not resolve.
pub fn del(tree: &mut Value, path: &Path) -> Option<Value> {
    let (last, parents) = path.segments().split_last()?;
    let parent = parents.iter().try_fold(tree, |node, segment| child_mut(node, segment))?;
    match parent {
        Value::Map(m) => m.delete(last),
        Value::List(l) => {
            let index = parse_index(last)?;
            (index < l.len()).then(|| l.remove(index))
        }
        _ => None,
    }
}
