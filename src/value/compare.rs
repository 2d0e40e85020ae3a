//! Structural and loose equality between values.

use super::value::Value;

/// Reports whether two values are structurally equal.
///
/// Maps must have the same key set with recursively equal values, in any
/// order. Lists must have the same length and be pairwise equal in order.
/// Opaque values compare by their string form. Numbers compare numerically,
/// so `Int(1)` equals `Float(1.0)`. Everything else is strict equality.
pub fn deep_compare(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            a.as_number() == b.as_number()
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_compare(l, r))
        }
        (Value::Map(x), Value::Map(y)) => x == y,
        (Value::Opaque(x), Value::Opaque(y)) => x == y,
        _ => false,
    }
}

/// Reports whether two values are equal after coercing scalars to a common
/// form.
///
/// Numbers compare numerically, strings holding a number compare with that
/// number, booleans count as 0 and 1, and opaque values take part through
/// their string form. Null only equals null. Containers are never loosely
/// equal to anything, not even an identical container.
///
/// This is the equality rename inference pairs removed and added leaves by.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (x, y) if x.is_container() || y.is_container() => false,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Opaque(x), Value::Opaque(y)) => x == y,
        (Value::Opaque(x), other) | (other, Value::Opaque(x)) => {
            loose_eq(&Value::String(x.as_str().to_string()), other)
        }
        (x, y) => match (coerce_number(x), coerce_number(y)) {
            (Some(p), Some(q)) => p == q,
            _ => false,
        },
    }
}

fn coerce_number(v: &Value) -> Option<f64> {
    match v {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(_) | Value::Float(_) => v.as_number(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;

    fn json(s: &str) -> Value {
        from_json(s).unwrap()
    }

    #[test]
    fn test_deep_compare_maps_ignore_key_order() {
        assert!(deep_compare(
            &json(r#"{"a":1,"b":{"c":[1,2]}}"#),
            &json(r#"{"b":{"c":[1,2]},"a":1}"#)
        ));
        assert!(!deep_compare(&json(r#"{"a":1}"#), &json(r#"{"a":1,"b":2}"#)));
        assert!(!deep_compare(&json(r#"{"a":1}"#), &json(r#"{"b":1}"#)));
    }

    #[test]
    fn test_deep_compare_lists_are_ordered() {
        assert!(deep_compare(&json("[1,[2,3]]"), &json("[1,[2,3]]")));
        assert!(!deep_compare(&json("[1,2]"), &json("[2,1]")));
        assert!(!deep_compare(&json("[1,2]"), &json("[1,2,3]")));
    }

    #[test]
    fn test_deep_compare_scalars() {
        assert!(deep_compare(&Value::Int(1), &Value::Float(1.0)));
        assert!(!deep_compare(&Value::Int(1), &Value::String("1".into())));
        assert!(!deep_compare(&Value::Null, &Value::Bool(false)));
        assert!(deep_compare(
            &Value::opaque("Date", "2024"),
            &Value::opaque("Timestamp", "2024")
        ));
        assert!(!deep_compare(&Value::opaque("Date", "2024"), &Value::String("2024".into())));
    }

    #[test]
    fn test_loose_eq_coerces_scalars() {
        assert!(loose_eq(&Value::Int(1), &Value::String("1".into())));
        assert!(loose_eq(&Value::Bool(true), &Value::Int(1)));
        assert!(loose_eq(&Value::Float(2.0), &Value::Int(2)));
        assert!(loose_eq(&Value::opaque("Date", "2024"), &Value::String("2024".into())));
        assert!(!loose_eq(&Value::Bool(true), &Value::String("true".into())));
        assert!(!loose_eq(&Value::Null, &Value::Int(0)));
    }

    #[test]
    fn test_loose_eq_never_matches_containers() {
        assert!(!loose_eq(&json(r#"{"a":1}"#), &json(r#"{"a":1}"#)));
        assert!(!loose_eq(&json("[]"), &json("[]")));
    }
}
