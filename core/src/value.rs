/*!
The [`Value`] type.

A [`Value`] is a classified view of some input: null, text, a collection, a record, or a scalar. Classification happens when the value is constructed, so checking a [`Value`] for emptiness never needs to know its original type.

Values are usually produced through the [`ToValue`] trait, which is implemented for primitives, strings, standard collections, and anything deriving `Record`.
*/

use core::{fmt, ops::ControlFlow};

use crate::{
    empty::Empty,
    record::{ErasedRecord, Record},
    str::Str,
};

/**
A value classified into one of the categories of [`Kind`].
*/
#[derive(Clone)]
pub struct Value<'v>(Inner<'v>);

#[derive(Clone)]
enum Inner<'v> {
    Null,
    Text(Str<'v>),
    Collection(usize),
    Record(&'v (dyn ErasedRecord + 'v)),
    Scalar(value_bag::ValueBag<'v>),
}

/**
The category a [`Value`] was classified into.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /**
    The absence of a value.
    */
    Null,
    /**
    A string. Empty when it has a length of zero.
    */
    Text,
    /**
    A container of elements. Empty when it has no elements.
    */
    Collection,
    /**
    A structured value with named fields. Empty when all of its fields are null or empty text.
    */
    Record,
    /**
    Any other value. Never empty.
    */
    Scalar,
}

impl Kind {
    /**
    A short lowercase name for the kind.
    */
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Text => "text",
            Kind::Collection => "collection",
            Kind::Record => "record",
            Kind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'v> Value<'v> {
    /**
    The null value.
    */
    pub const fn null() -> Self {
        Value(Inner::Null)
    }

    /**
    A text value.
    */
    pub fn from_text(text: Str<'v>) -> Self {
        Value(Inner::Text(text))
    }

    /**
    A collection with `len` elements.
    */
    pub const fn from_len(len: usize) -> Self {
        Value(Inner::Collection(len))
    }

    /**
    A record.
    */
    pub fn from_record<R: Record>(record: &'v R) -> Self {
        Value(Inner::Record(record))
    }

    /**
    A record that's already been erased.
    */
    pub fn from_dyn_record(record: &'v (dyn ErasedRecord + 'v)) -> Self {
        Value(Inner::Record(record))
    }

    /**
    A scalar formatted through its `Display` implementation.
    */
    pub fn from_display(value: &'v impl fmt::Display) -> Self {
        Value(Inner::Scalar(value_bag::ValueBag::from_display(value)))
    }

    /**
    A scalar formatted through its `Debug` implementation.
    */
    pub fn from_debug(value: &'v impl fmt::Debug) -> Self {
        Value(Inner::Scalar(value_bag::ValueBag::from_debug(value)))
    }

    /**
    A scalar formatted through its `Display` implementation, captured as a primitive where possible.
    */
    pub fn capture_display(value: &'v (impl fmt::Display + 'static)) -> Self {
        Value(Inner::Scalar(value_bag::ValueBag::capture_display(value)))
    }

    /**
    A scalar captured through its `serde::Serialize` implementation.

    This doesn't inspect the shape of the value. Use [`crate::adapt::Serde`] to classify a serializable value.
    */
    #[cfg(feature = "serde")]
    pub fn from_serde(value: &'v impl serde::Serialize) -> Self {
        Value(Inner::Scalar(value_bag::ValueBag::from_serde1(value)))
    }

    /**
    Get a new value, borrowing data from this one.
    */
    pub fn by_ref<'b>(&'b self) -> Value<'b> {
        Value(match self.0 {
            Inner::Null => Inner::Null,
            Inner::Text(ref text) => Inner::Text(text.by_ref()),
            Inner::Collection(len) => Inner::Collection(len),
            Inner::Record(record) => Inner::Record(record),
            Inner::Scalar(ref scalar) => Inner::Scalar(scalar.by_ref()),
        })
    }

    /**
    The category this value was classified into.
    */
    pub fn kind(&self) -> Kind {
        match self.0 {
            Inner::Null => Kind::Null,
            Inner::Text(_) => Kind::Text,
            Inner::Collection(_) => Kind::Collection,
            Inner::Record(_) => Kind::Record,
            Inner::Scalar(_) => Kind::Scalar,
        }
    }

    /**
    Whether this is the null value.
    */
    pub fn is_null(&self) -> bool {
        matches!(self.0, Inner::Null)
    }

    /**
    Whether this value is empty.

    - Null is always empty.
    - Text is empty when it has a length of zero.
    - A collection is empty when it has no elements.
    - A record is empty when every one of its fields is null or empty text. Fields holding records or collections are never empty, even if they have no fields or elements themselves.
    - A scalar is never empty.
    */
    pub fn is_empty(&self) -> bool {
        match self.0 {
            Inner::Null => true,
            Inner::Text(ref text) => text.is_empty(),
            Inner::Collection(len) => len == 0,
            Inner::Record(record) => record
                .for_each(|_, value| {
                    if value.is_unset() {
                        ControlFlow::Continue(())
                    } else {
                        ControlFlow::Break(())
                    }
                })
                .is_continue(),
            Inner::Scalar(_) => false,
        }
    }

    /**
    Whether this value is null or empty text.

    This is the check applied to the fields of a record.
    */
    pub fn is_unset(&self) -> bool {
        match self.0 {
            Inner::Null => true,
            Inner::Text(ref text) => text.is_empty(),
            _ => false,
        }
    }

    /**
    Get the value as text, if it is text.
    */
    pub fn as_text(&self) -> Option<&str> {
        match self.0 {
            Inner::Text(ref text) => Some(text.get()),
            _ => None,
        }
    }

    /**
    Get the number of elements, if the value is a collection.
    */
    pub fn len(&self) -> Option<usize> {
        match self.0 {
            Inner::Collection(len) => Some(len),
            _ => None,
        }
    }

    /**
    Get the value as a record, if it is one.
    */
    pub fn as_record(&self) -> Option<&'v (dyn ErasedRecord + 'v)> {
        match self.0 {
            Inner::Record(record) => Some(record),
            _ => None,
        }
    }

}

impl<'v> Default for Value<'v> {
    fn default() -> Self {
        Value::null()
    }
}

impl<'v> fmt::Debug for Value<'v> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Inner::Null => f.write_str("null"),
            Inner::Text(ref text) => fmt::Debug::fmt(text, f),
            Inner::Collection(len) => f.debug_struct("Collection").field("len", &len).finish(),
            Inner::Record(record) => {
                let mut map = f.debug_map();

                let _ = record.for_each(|name, value| {
                    map.entry(&name, &value);

                    ControlFlow::Continue(())
                });

                map.finish()
            }
            Inner::Scalar(ref scalar) => fmt::Debug::fmt(scalar, f),
        }
    }
}

impl<'v> From<&'v str> for Value<'v> {
    fn from(value: &'v str) -> Self {
        Value::from_text(Str::new_ref(value))
    }
}

impl<'v> From<Str<'v>> for Value<'v> {
    fn from(value: Str<'v>) -> Self {
        Value::from_text(value)
    }
}

/**
Convert a reference to a [`Value`].
*/
pub trait ToValue {
    /**
    Perform the conversion.
    */
    fn to_value(&self) -> Value;
}

impl<'a, T: ToValue + ?Sized> ToValue for &'a T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<'a, T: ToValue + ?Sized> ToValue for &'a mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<'v> ToValue for Value<'v> {
    fn to_value(&self) -> Value {
        self.by_ref()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::null(),
        }
    }
}

impl ToValue for Empty {
    fn to_value(&self) -> Value {
        Value::null()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl<'k> ToValue for Str<'k> {
    fn to_value(&self) -> Value {
        Value::from_text(self.by_ref())
    }
}

impl<T> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::from_len(self.len())
    }
}

impl<T, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::from_len(N)
    }
}

macro_rules! impl_to_value_scalar {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::capture_display(self)
                }
            }
        )*
    };
}

impl_to_value_scalar!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(feature = "alloc")]
mod alloc_support {
    use super::*;

    use alloc::{
        borrow::{Cow, ToOwned},
        boxed::Box,
        collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
        rc::Rc,
        string::String,
        sync::Arc,
        vec::Vec,
    };

    impl ToValue for String {
        fn to_value(&self) -> Value {
            Value::from(self.as_str())
        }
    }

    impl<T: ToValue + ?Sized> ToValue for Box<T> {
        fn to_value(&self) -> Value {
            (**self).to_value()
        }
    }

    impl<T: ToValue + ?Sized> ToValue for Rc<T> {
        fn to_value(&self) -> Value {
            (**self).to_value()
        }
    }

    impl<T: ToValue + ?Sized> ToValue for Arc<T> {
        fn to_value(&self) -> Value {
            (**self).to_value()
        }
    }

    impl<'a, B: ToValue + ToOwned + ?Sized> ToValue for Cow<'a, B> {
        fn to_value(&self) -> Value {
            (**self).to_value()
        }
    }

    macro_rules! impl_to_value_collection {
        ($($ty:ident <$($param:ident),*>),*) => {
            $(
                impl<$($param),*> ToValue for $ty<$($param),*> {
                    fn to_value(&self) -> Value {
                        Value::from_len(self.len())
                    }
                }
            )*
        };
    }

    impl_to_value_collection!(
        Vec<T>,
        VecDeque<T>,
        LinkedList<T>,
        BinaryHeap<T>,
        BTreeSet<T>,
        BTreeMap<K, V>
    );
}

#[cfg(feature = "std")]
mod std_support {
    use super::*;

    use std::collections::{HashMap, HashSet};

    impl<K, V, S> ToValue for HashMap<K, V, S> {
        fn to_value(&self) -> Value {
            Value::from_len(self.len())
        }
    }

    impl<T, S> ToValue for HashSet<T, S> {
        fn to_value(&self) -> Value {
            Value::from_len(self.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(Kind::Null, Value::null().kind());
        assert_eq!(Kind::Null, None::<i32>.to_value().kind());
        assert_eq!(Kind::Null, Empty.to_value().kind());
        assert_eq!(Kind::Text, "".to_value().kind());
        assert_eq!(Kind::Collection, [1, 2, 3].to_value().kind());
        assert_eq!(Kind::Collection, (&[] as &[u8]).to_value().kind());
        assert_eq!(Kind::Record, Value::from_record(&[("a", 1)]).kind());
        assert_eq!(Kind::Scalar, 42i32.to_value().kind());
        assert_eq!(Kind::Scalar, 'a'.to_value().kind());
        assert_eq!(Kind::Scalar, true.to_value().kind());
    }

    #[test]
    fn text_is_empty_iff_zero_length() {
        for (text, expected) in [("", true), (" ", false), ("a", false)] {
            assert_eq!(expected, text.to_value().is_empty(), "{text:?}");
        }
    }

    #[test]
    fn collection_is_empty_iff_zero_len() {
        assert!(Value::from_len(0).is_empty());
        assert!(!Value::from_len(1).is_empty());
        assert!([0u8; 0].to_value().is_empty());
        assert!(![None::<&str>].to_value().is_empty());
    }

    #[test]
    fn scalar_is_never_empty() {
        assert!(!0i32.to_value().is_empty());
        assert!(!0.0f64.to_value().is_empty());
        assert!(!false.to_value().is_empty());
        assert!(!i128::MIN.to_value().is_empty());
    }

    #[test]
    fn null_is_empty() {
        assert!(Value::null().is_empty());
        assert!(Value::default().is_empty());
        assert!(None::<&str>.to_value().is_empty());
        assert!(Some("").to_value().is_empty());
        assert!(!Some("a").to_value().is_empty());
    }

    #[test]
    fn record_is_empty_iff_all_fields_unset() {
        assert!(Value::from_record(&[("a", None::<&str>), ("b", Some(""))]).is_empty());
        assert!(!Value::from_record(&[("a", None), ("b", Some("b"))]).is_empty());

        let age = 30u32;
        let fields: [(&str, Value); 2] = [("name", Value::null()), ("age", age.to_value())];
        assert!(!Value::from_record(&fields).is_empty());
    }

    #[test]
    fn record_without_fields_is_empty() {
        assert!(Value::from_record(&Empty).is_empty());
    }

    #[test]
    fn record_check_is_shallow() {
        let nested = [("inner", Value::null())];
        let empty_list: [u8; 0] = [];

        let fields = [
            ("nested", Value::from_record(&nested)),
            ("list", empty_list.to_value()),
        ];

        // Both fields are empty on their own, but neither is null or empty text
        assert!(Value::from_record(&nested).is_empty());
        assert!(empty_list.to_value().is_empty());
        assert!(!Value::from_record(&fields).is_empty());
    }

    #[test]
    fn unset() {
        assert!(Value::null().is_unset());
        assert!("".to_value().is_unset());
        assert!(!Value::from_len(0).is_unset());
        assert!(!Value::from_record(&Empty).is_unset());
        assert!(!0u8.to_value().is_unset());
    }

    #[test]
    fn inspect() {
        assert_eq!(Some("a"), "a".to_value().as_text());
        assert_eq!(None, 1i32.to_value().as_text());
        assert_eq!(Some(2), [1, 2].to_value().len());
        assert!(Value::from_record(&Empty).as_record().is_some());
    }

    #[test]
    fn from_dyn_record() {
        let fields = [("a", None::<&str>), ("b", Some(""))];
        let erased: &dyn ErasedRecord = &fields;

        let value = Value::from_dyn_record(erased);

        assert_eq!(Kind::Record, value.kind());
        assert!(value.is_empty());
        assert_eq!(2, value.as_record().map(|record| record.count()).unwrap_or(0));
    }

    #[test]
    fn debug() {
        assert_eq!("null", format!("{:?}", Value::null()));
        assert_eq!("\"a\"", format!("{:?}", "a".to_value()));
        assert_eq!("42", format!("{:?}", 42i32.to_value()));
        assert_eq!(
            "{\"a\": 1, \"b\": null}",
            format!(
                "{:?}",
                Value::from_record(&[("a", Some(1)), ("b", None)])
            )
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn alloc_impls() {
        use alloc::{collections::BTreeMap, string::String, vec, vec::Vec};

        assert!(String::new().to_value().is_empty());
        assert!(Vec::<u8>::new().to_value().is_empty());
        assert!(!vec![1].to_value().is_empty());
        assert!(BTreeMap::<String, i32>::new().to_value().is_empty());
        assert_eq!(Kind::Text, alloc::boxed::Box::<str>::from("a").to_value().kind());
    }
}
