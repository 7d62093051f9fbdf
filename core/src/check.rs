/*!
Emptiness checks over single values and sequences of values.

A value is empty when it's null, text with a length of zero, a collection with no elements, or a record whose fields are all null or empty text. See [`Value::is_empty`] for details.
*/

use crate::value::{ToValue, Value};

/**
Whether `value` is empty.
*/
pub fn is_empty(value: impl ToValue) -> bool {
    value.to_value().is_empty()
}

/**
Whether at least one of `values` is empty.

An empty sequence of values returns `false`.

Sequences of values with different types can be passed as a `[Value; N]` or `[&dyn ToValue; N]`.
*/
pub fn is_empty_any_of<I, V>(values: I) -> bool
where
    I: IntoIterator<Item = V>,
    V: ToValue,
{
    values.into_iter().any(|value| is_empty(value))
}

/**
Whether all of `values` are empty.

An empty sequence of values returns `true`.

Sequences of values with different types can be passed as a `[Value; N]` or `[&dyn ToValue; N]`.
*/
pub fn is_empty_all_of<I, V>(values: I) -> bool
where
    I: IntoIterator<Item = V>,
    V: ToValue,
{
    values.into_iter().all(|value| is_empty(value))
}

/**
Whether `value` is null or empty text.

This is the shallow check applied to each field of a record.
*/
pub fn is_unset(value: &Value) -> bool {
    value.is_unset()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::empty::Empty;

    #[test]
    fn any_of_empty_sequence_is_false() {
        assert!(!is_empty_any_of::<_, Value>([]));
    }

    #[test]
    fn all_of_empty_sequence_is_true() {
        assert!(is_empty_all_of::<_, Value>([]));
    }

    #[test]
    fn any_of_is_or() {
        assert!(is_empty_any_of(["a", "", "c"]));
        assert!(!is_empty_any_of(["a", "b", "c"]));
        assert!(is_empty_any_of([Some(1), None]));
    }

    #[test]
    fn all_of_is_and() {
        assert!(is_empty_all_of(["", ""]));
        assert!(!is_empty_all_of(["", "b"]));
    }

    #[test]
    fn mixed_values() {
        let text = "";
        let number = 0i32;
        let list: [u8; 0] = [];

        let values: [&dyn ToValue; 4] = [&text, &number, &list, &Empty];

        assert!(is_empty_any_of(values));
        assert!(!is_empty_all_of(values));

        assert!(is_empty_all_of([
            Value::null(),
            text.to_value(),
            list.to_value(),
            Value::from_record(&Empty),
        ]));
    }

    #[test]
    fn any_of_matches_each() {
        let one = 1i32;

        let cases: [[Value; 3]; 3] = [
            ["".to_value(), one.to_value(), Value::null()],
            ["a".to_value(), one.to_value(), Value::from_len(1)],
            [Value::null(), Value::from_len(0), "".to_value()],
        ];

        for values in &cases {
            let or = values.iter().fold(false, |acc, v| acc || v.is_empty());
            let and = values.iter().fold(true, |acc, v| acc && v.is_empty());

            assert_eq!(or, is_empty_any_of(values));
            assert_eq!(and, is_empty_all_of(values));
        }
    }

    #[test]
    fn never_fails() {
        let inner = [("b", Value::from_record(&Empty))];
        let nested = [("a", Value::from_record(&inner))];
        let zero = 0i32;

        for value in [
            Value::null(),
            zero.to_value(),
            "".to_value(),
            Value::from_len(0),
            Value::from_record(&Empty),
            Value::from_record(&nested),
        ] {
            let _ = is_empty(&value);
        }

        assert!(!is_empty(Value::from_record(&nested)));
    }
}
