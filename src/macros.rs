/**
Whether at least one of the given values is empty.

Values can have different types, as long as they implement [`ToValue`](crate::ToValue). With no values this returns `false`.

```
assert!(emptiness::any_empty!("Alice", "", 30));
assert!(!emptiness::any_empty!("Alice", 30));
assert!(!emptiness::any_empty!());
```
*/
#[macro_export]
macro_rules! any_empty {
    ($($value:expr),* $(,)?) => {
        $crate::is_empty_any_of::<_, $crate::Value>([
            $($crate::__private::ToValue::to_value(&$value)),*
        ])
    };
}

/**
Whether all of the given values are empty.

Values can have different types, as long as they implement [`ToValue`](crate::ToValue). With no values this returns `true`.

```
assert!(emptiness::all_empty!("", None::<i32>, Vec::<u8>::new()));
assert!(!emptiness::all_empty!("", 0));
assert!(emptiness::all_empty!());
```
*/
#[macro_export]
macro_rules! all_empty {
    ($($value:expr),* $(,)?) => {
        $crate::is_empty_all_of::<_, $crate::Value>([
            $($crate::__private::ToValue::to_value(&$value)),*
        ])
    };
}
