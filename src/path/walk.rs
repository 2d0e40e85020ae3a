//! Depth-first walks and leaf flattening.

use super::path::Path;
use crate::value::Value;
use indexmap::IndexMap;

/// WalkAction tells [`walk`] whether to visit the children of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    Descend,
    Skip,
}

/// Visits every node below the root, parents before children, map entries
/// in insertion order and list elements by index. Opaque values are leaves.
pub fn walk<'a, F>(tree: &'a Value, mut visitor: F)
where
    F: FnMut(&'a Value, &Path) -> WalkAction,
{
    let mut path = Path::new();
    walk_children(tree, &mut path, &mut visitor);
}

fn walk_children<'a, F>(node: &'a Value, path: &mut Path, visitor: &mut F)
where
    F: FnMut(&'a Value, &Path) -> WalkAction,
{
    match node {
        Value::Map(m) => {
            for (key, value) in m.iter() {
                visit(value, key.clone(), path, visitor);
            }
        }
        Value::List(l) => {
            for (index, value) in l.iter().enumerate() {
                visit(value, index.to_string(), path, visitor);
            }
        }
        _ => {}
    }
}

fn visit<'a, F>(value: &'a Value, segment: String, path: &mut Path, visitor: &mut F)
where
    F: FnMut(&'a Value, &Path) -> WalkAction,
{
    path.push(segment);
    if visitor(value, path) == WalkAction::Descend {
        walk_children(value, path, visitor);
    }
    path.pop();
}

/// Maps every leaf path of `tree` to its value. Lists are keyed by index and
/// empty containers contribute nothing.
pub fn flatten(tree: &Value) -> IndexMap<String, &Value> {
    let mut flat = IndexMap::new();
    walk(tree, |value, path| {
        if !value.is_container() {
            flat.insert(path.to_string(), value);
        }
        WalkAction::Descend
    });
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;

    #[test]
    fn test_walk_visits_parents_first() {
        let tree = from_json(r#"{"a":{"b":1,"c":[true]},"d":"x"}"#).unwrap();
        let mut visited = Vec::new();
        walk(&tree, |_, path| {
            visited.push(path.to_string());
            WalkAction::Descend
        });
        assert_eq!(visited, vec!["a", "a.b", "a.c", "a.c.0", "d"]);
    }

    #[test]
    fn test_walk_skip_prunes_subtree() {
        let tree = from_json(r#"{"a":{"b":1},"c":{"d":2}}"#).unwrap();
        let mut visited = Vec::new();
        walk(&tree, |_, path| {
            visited.push(path.to_string());
            if path.to_string() == "a" {
                WalkAction::Skip
            } else {
                WalkAction::Descend
            }
        });
        assert_eq!(visited, vec!["a", "c", "c.d"]);
    }

    #[test]
    fn test_flatten() {
        let tree = from_json(r#"{"a":{"b":"c","e":{}},"l":[1,{"x":null}],"z":[]}"#).unwrap();
        let flat = flatten(&tree);
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.b", "l.0", "l.1.x"]);
        assert_eq!(flat["a.b"], &Value::String("c".into()));
        assert_eq!(flat["l.1.x"], &Value::Null);
    }
}
