//! Predicates for untyped input.
//!
//! Input that arrives as external text is parsed into a [`Value`] and checked
//! with these predicates before it is converted into a typed input such as
//! [`Numbers`](crate::Numbers). Every predicate is pure and total.

use serde_json::Value;

/// Returns `true` if `value` is the absence-of-value marker (`null`).
#[must_use]
pub fn is_none(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` if `value` is a sequence of length zero.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    value.as_array().is_some_and(Vec::is_empty)
}

/// Returns `true` if `value` is a sequence.
///
/// Scalars and mappings are not sequences.
#[must_use]
pub fn is_list(value: &Value) -> bool {
    value.is_array()
}

/// Returns `true` if `value` is a non-empty sequence of numbers.
///
/// Booleans, strings, nested sequences, and `null` elements are not numbers.
/// Non-sequences and the empty sequence yield `false`.
#[must_use]
pub fn has_only_number(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn none_is_only_null() {
        assert!(is_none(&Value::Null));
        assert!(!is_none(&json!(0)));
        assert!(!is_none(&json!([])));
        assert!(!is_none(&json!("")));
    }

    #[test]
    fn empty_requires_a_sequence() {
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!([1])));
        assert!(!is_empty(&json!({})), "A mapping is not a sequence");
        assert!(!is_empty(&Value::Null));
    }

    #[test]
    fn list_excludes_scalars_and_mappings() {
        assert!(is_list(&json!([1, 2])));
        assert!(is_list(&json!([])));
        assert!(!is_list(&json!("not a list")));
        assert!(!is_list(&json!(42)));
        assert!(!is_list(&json!({ "a": 1 })));
    }

    #[test]
    fn only_numbers() {
        assert!(has_only_number(&json!([1, 2.5, -3])));
        assert!(!has_only_number(&json!([1, "x", 3])));
        assert!(!has_only_number(&json!([1, true])));
        assert!(!has_only_number(&json!([1, null])));
        assert!(!has_only_number(&json!([[1]])));
        assert!(!has_only_number(&json!([])));
        assert!(!has_only_number(&json!(7)));
    }
}
