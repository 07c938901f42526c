//! Flatten, then require every leaf to be numeric.

use crate::error::{StatError, StatResult};
use crate::flatten::leaves;
use crate::number::Number;
use crate::value::Value;

/// Flattens `input` and checks each leaf is a bool, integer or float.
///
/// Errors from flattening come back unchanged. The first non-numeric leaf,
/// in traversal order, is reported in [`StatError::NonNumericValue`]. An
/// empty result is not an error here.
pub fn validate(input: &Value) -> StatResult<Vec<Number>> {
    leaves(input)?
        .map(|leaf| {
            leaf.as_number().ok_or_else(|| StatError::NonNumericValue {
                value: leaf.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    #[test]
    fn numeric_lists_pass_through() {
        assert_eq!(
            validate(&nested![1, 2, 3, 4]).unwrap(),
            vec![Number::Int(1), Number::Int(2), Number::Int(3), Number::Int(4)]
        );
        assert_eq!(
            validate(&nested![1.0, 2.5, 3.25]).unwrap(),
            vec![Number::Float(1.0), Number::Float(2.5), Number::Float(3.25)]
        );
    }

    #[test]
    fn bools_keep_their_variant() {
        let out = validate(&nested![true, false, true]).unwrap();
        assert!(matches!(
            out.as_slice(),
            [Number::Bool(true), Number::Bool(false), Number::Bool(true)]
        ));
    }

    #[test]
    fn mixed_and_nested_inputs_flatten_in_order() {
        let v = Value::List(vec![
            1.into(),
            Value::tuple(vec![Value::Float(2.0), Value::Bool(true)]),
            nested![3, [4]],
        ]);
        let out = validate(&v).unwrap();
        assert_eq!(out.len(), 5);
        assert!(matches!(out[1], Number::Float(_)));
        assert!(matches!(out[2], Number::Bool(true)));
        assert_eq!(out[4], Number::Int(4));
    }

    #[test]
    fn other_collections_are_accepted() {
        assert_eq!(validate(&Value::tuple(vec![1, 2, 3])).unwrap().len(), 3);
        assert_eq!(validate(&Value::set(vec![1, 2, 3])).unwrap().len(), 3);
        assert!(validate(&nested![]).unwrap().is_empty());
    }

    #[test]
    fn first_non_numeric_leaf_is_reported() {
        let cases = [
            (nested![1, "a", 3], Value::from("a")),
            (nested![1, [2, "x"], 4], Value::from("x")),
            (nested![1, "first", "second"], Value::from("first")),
            (Value::List(vec![Value::Null]), Value::Null),
            (Value::List(vec![Value::map(vec![("k", 1)])]), Value::from("k")),
        ];
        for (input, offending) in cases {
            match validate(&input) {
                Err(StatError::NonNumericValue { value }) => assert_eq!(value, offending),
                other => panic!("unexpected result for {input}: {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_top_level_propagates() {
        for bad in [Value::Int(123), Value::Float(2.75), Value::Bool(true), "abc".into()] {
            assert!(matches!(
                validate(&bad),
                Err(StatError::InvalidInput { .. })
            ));
        }
    }
}
