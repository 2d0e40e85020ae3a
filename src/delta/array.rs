//! Multiset reconciliation of two lists.

use crate::value::{deep_compare, Value};

/// ArrayDiff holds the elements to pull from and push onto a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayDiff {
    /// Elements of the original list with no equal counterpart left in the
    /// current list, in original order.
    pub pull: Vec<Value>,
    /// Elements of the current list left unmatched, in current order.
    pub push: Vec<Value>,
}

impl ArrayDiff {
    pub fn is_empty(&self) -> bool {
        self.pull.is_empty() && self.push.is_empty()
    }
}

/// Reconciles two lists as multisets.
///
/// Each original element, in index order, consumes the first structurally
/// equal element of the current list that has not been consumed yet. The
/// matching is greedy, not globally optimal, and ignores position: a list
/// that was only reordered yields an empty diff.
pub fn diff_arrays(original: &[Value], current: &[Value]) -> ArrayDiff {
    let mut unmatched: Vec<&Value> = current.iter().collect();
    let mut pull = Vec::new();

    for item in original {
        match unmatched.iter().position(|candidate| deep_compare(item, candidate)) {
            Some(index) => {
                unmatched.remove(index);
            }
            None => pull.push(item.clone()),
        }
    }

    ArrayDiff {
        pull,
        push: unmatched.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;
    use pretty_assertions::assert_eq;

    fn list(s: &str) -> Vec<Value> {
        match from_json(s).unwrap() {
            Value::List(l) => l,
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_diff_arrays() {
        let diff = diff_arrays(&list(r#"["i","g","w"]"#), &list(r#"["g","h"]"#));
        assert_eq!(diff.pull, list(r#"["i","w"]"#));
        assert_eq!(diff.push, list(r#"["h"]"#));
    }

    #[test]
    fn test_diff_arrays_counts_duplicates() {
        let diff = diff_arrays(&list("[1,1,2]"), &list("[1,2,2]"));
        assert_eq!(diff.pull, list("[1]"));
        assert_eq!(diff.push, list("[2]"));
    }

    #[test]
    fn test_diff_arrays_compares_structurally() {
        let diff = diff_arrays(
            &list(r#"[{"a":1},[1,2],{"b":2}]"#),
            &list(r#"[[1,2],{"a":1},{"b":3}]"#),
        );
        assert_eq!(diff.pull, list(r#"[{"b":2}]"#));
        assert_eq!(diff.push, list(r#"[{"b":3}]"#));
    }

    #[test]
    fn test_diff_arrays_ignores_reordering() {
        assert!(diff_arrays(&list("[1,2,3]"), &list("[3,1,2]")).is_empty());
        assert!(diff_arrays(&[], &[]).is_empty());
    }
}
