//! Tests for delta construction.

#[cfg(test)]
mod tests {
    use crate::delta::create;
    use crate::error::DeltaError;
    use crate::value::{from_json, to_json, Value};
    use pretty_assertions::assert_eq;

    fn json(s: &str) -> Value {
        from_json(s).unwrap()
    }

    /// Creates a delta and renders it in document form.
    fn create_doc(original: &str, current: &str) -> Option<String> {
        create(&json(original), &json(current))
            .unwrap()
            .map(|delta| to_json(&delta.to_value()).unwrap())
    }

    #[test]
    fn test_create_accepts_two_maps() {
        assert!(create(&json("{}"), &json("{}")).is_ok());
    }

    #[test]
    fn test_create_rejects_non_maps() {
        let cases = [("{}", r#""a""#), (r#""a""#, "{}"), ("1", "{}"), ("null", "{}"), ("{}", "[]")];
        for (original, current) in cases {
            let err = create(&json(original), &json(current)).unwrap_err();
            assert!(
                matches!(err, DeltaError::InvalidArgument { .. }),
                "expected invalid argument for {} / {}",
                original,
                current
            );
        }
    }

    #[test]
    fn test_create_equal_trees_is_no_change() {
        assert_eq!(create_doc("{}", "{}"), None);
        assert_eq!(
            create_doc(
                r#"{"a":{"b":[1,{"c":2}]},"d":null}"#,
                r#"{"d":null,"a":{"b":[1,{"c":2}]}}"#
            ),
            None
        );
    }

    #[test]
    fn test_create_added_value_is_set() {
        assert_eq!(create_doc("{}", r#"{"a":true}"#).unwrap(), r#"{"$set":{"a":true}}"#);
    }

    #[test]
    fn test_create_added_subtree_is_set_at_its_root() {
        assert_eq!(
            create_doc("{}", r#"{"a":{"b":"c"}}"#).unwrap(),
            r#"{"$set":{"a":{"b":"c"}}}"#
        );
    }

    #[test]
    fn test_create_removed_value_is_unset() {
        assert_eq!(create_doc(r#"{"a":true}"#, "{}").unwrap(), r#"{"$unset":{"a":1}}"#);
        assert_eq!(
            create_doc(r#"{"a":{"b":"c"}}"#, "{}").unwrap(),
            r#"{"$unset":{"a":1}}"#
        );
        assert_eq!(
            create_doc(r#"{"a":{"b":"c","d":1}}"#, r#"{"a":{"d":1}}"#).unwrap(),
            r#"{"$unset":{"a.b":1}}"#
        );
    }

    #[test]
    fn test_create_changed_value_is_set() {
        assert_eq!(
            create_doc(r#"{"a":{"b":1}}"#, r#"{"a":{"b":2}}"#).unwrap(),
            r#"{"$set":{"a.b":2}}"#
        );
    }

    #[test]
    fn test_create_type_change_is_set_at_shallowest_path() {
        assert_eq!(
            create_doc(r#"{"a":{"b":{"c":1}}}"#, r#"{"a":{"b":"x"}}"#).unwrap(),
            r#"{"$set":{"a.b":"x"}}"#
        );
        assert_eq!(
            create_doc(r#"{"a":1}"#, r#"{"a":{"b":1}}"#).unwrap(),
            r#"{"$set":{"a":{"b":1}}}"#
        );
        assert_eq!(
            create_doc(r#"{"a":[1]}"#, r#"{"a":{"0":1}}"#).unwrap(),
            r#"{"$set":{"a":{"0":1}}}"#
        );
    }

    #[test]
    fn test_create_null_is_a_value() {
        assert_eq!(create_doc("{}", r#"{"a":null}"#).unwrap(), r#"{"$set":{"a":null}}"#);
        assert_eq!(create_doc(r#"{"a":null}"#, "{}").unwrap(), r#"{"$unset":{"a":1}}"#);
    }

    #[test]
    fn test_create_moved_value_is_rename() {
        assert_eq!(
            create_doc(r#"{"a":true}"#, r#"{"b":true}"#).unwrap(),
            r#"{"$rename":{"a":"b"}}"#
        );
        assert_eq!(
            create_doc(r#"{"a":{"b":"c"}}"#, r#"{"a":{"d":"c"}}"#).unwrap(),
            r#"{"$rename":{"a.b":"a.d"}}"#
        );
    }

    #[test]
    fn test_create_moved_subtree_is_not_a_rename() {
        assert_eq!(
            create_doc(r#"{"x":{"b":"c"}}"#, r#"{"y":{"b":"c"}}"#).unwrap(),
            r#"{"$set":{"y":{"b":"c"}},"$unset":{"x":1}}"#
        );
    }

    #[test]
    fn test_create_rename_heuristic_pairs_coincidental_values() {
        // Two unrelated leaves holding the same value read as a move.
        assert_eq!(
            create_doc(r#"{"enabled":true}"#, r#"{"visible":true,"count":3}"#).unwrap(),
            r#"{"$set":{"count":3},"$rename":{"enabled":"visible"}}"#
        );
    }

    #[test]
    fn test_create_arrays() {
        let delta = create(
            &json(r#"{"g":["i","g","w"]}"#),
            &json(r#"{"g":["g","h"]}"#),
        )
        .unwrap()
        .unwrap();

        assert_eq!(delta.push["g"], vec![Value::String("h".into())]);
        assert_eq!(
            delta.pull["g"],
            vec![Value::String("i".into()), Value::String("w".into())]
        );
        assert!(delta.set.is_empty());
        assert!(delta.unset.is_empty());
        assert!(delta.rename.is_empty());
    }

    #[test]
    fn test_create_reordered_array_is_no_change() {
        assert_eq!(create_doc(r#"{"g":[1,2,3]}"#, r#"{"g":[3,2,1]}"#), None);
    }

    #[test]
    fn test_create_array_of_maps() {
        assert_eq!(
            create_doc(
                r#"{"items":[{"id":1},{"id":2}]}"#,
                r#"{"items":[{"id":2},{"id":3}]}"#
            )
            .unwrap(),
            r#"{"$push":{"items":{"$each":[{"id":3}]}},"$pull":{"items":{"$each":[{"id":1}]}}}"#
        );
    }

    #[test]
    fn test_create_nested_arrays() {
        assert_eq!(
            create_doc(r#"{"a":{"l":[[1],[2]]}}"#, r#"{"a":{"l":[[2],[1,1]]}}"#).unwrap(),
            r#"{"$push":{"a.l":{"$each":[[1,1]]}},"$pull":{"a.l":{"$each":[[1]]}}}"#
        );
    }

    #[test]
    fn test_create_mixed() {
        let original = r#"{"a":{"b":{"c":"1"}},"d":"2","e":"3","f":[1,2,3]}"#;
        let current = r#"{"a":{"b":"1"},"c":"2","d":"3","f":[2,5,3]}"#;
        assert_eq!(
            create_doc(original, current).unwrap(),
            concat!(
                r#"{"$set":{"a.b":"1","c":"2"},"#,
                r#""$push":{"f":{"$each":[5]}},"#,
                r#""$pull":{"f":{"$each":[1]}},"#,
                r#""$rename":{"e":"d"}}"#
            )
        );
    }

    #[test]
    fn test_create_opaque_values() {
        let mut original = crate::value::Map::new();
        original.set("at", Value::opaque("Date", "2024-01-01"));
        let mut current = crate::value::Map::new();
        current.set("at", Value::opaque("Date", "2024-01-01"));
        assert_eq!(
            create(&Value::Map(original.clone()), &Value::Map(current)).unwrap(),
            None
        );

        let mut changed = crate::value::Map::new();
        changed.set("at", Value::opaque("Date", "2024-02-01"));
        let delta = create(&Value::Map(original), &Value::Map(changed))
            .unwrap()
            .unwrap();
        assert_eq!(delta.set["at"], Value::opaque("Date", "2024-02-01"));
    }
}
