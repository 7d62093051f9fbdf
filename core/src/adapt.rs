/*!
Adapters for types that describe themselves through other frameworks.

The [`Serde`] type lets any `serde::Serialize` type be checked as a [`Value`] and inspected as a [`Record`] without implementing either trait directly.
*/

use core::{fmt, ops::ControlFlow};

use alloc::string::{String, ToString};
use serde::ser::{
    Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

use crate::{
    record::Record,
    str::Str,
    value::{ToValue, Value},
};

/**
A `serde::Serialize` type, classified by the shape it serializes as.

As a [`Value`]:

- `None` and `()` are null.
- Strings are text.
- Sequences, tuples, maps, and bytes are collections, counted by their elements.
- Structs and unit structs are records.
- Everything else, including enum variants, is a scalar.

As a [`Record`], the fields of a struct are enumerated in the order they're serialized in. Any other shape has no fields.

If the value fails to serialize then it's treated as a scalar, or a record with no fields.
*/
pub struct Serde<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Serde<'a, T> {
    /**
    Wrap a serializable value.
    */
    pub fn new(value: &'a T) -> Self {
        Serde(value)
    }

    /**
    Get a reference to the underlying value.
    */
    pub fn inner(&self) -> &'a T {
        self.0
    }
}

impl<'a, T: ?Sized> Clone for Serde<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for Serde<'a, T> {}

impl<'a, T: Serialize + ?Sized> Record for Serde<'a, T> {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        match self.0.serialize(Fields {
            for_each: &mut for_each,
        }) {
            Ok(flow) => flow,
            Err(Unsupported) => ControlFlow::Continue(()),
        }
    }
}

impl<'a, T: Serialize + ?Sized> ToValue for Serde<'a, T> {
    fn to_value(&self) -> Value {
        match self.0.serialize(Classify) {
            Ok(Shape::Null) => Value::null(),
            Ok(Shape::Text(text)) => Value::from_text(Str::new_owned(text)),
            Ok(Shape::Collection(len)) => Value::from_len(len),
            Ok(Shape::Record) => Value::from_record(self),
            Ok(Shape::Scalar) | Err(Unsupported) => Value::from_serde(&self.0),
        }
    }
}

impl<'a, T: fmt::Debug + ?Sized> fmt::Debug for Serde<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

/**
Classify a field value and pass it to `f`.

The value only lives for the duration of the call, so nested records can borrow from `value` directly.
*/
fn with_value<V: Serialize + ?Sized, R>(value: &V, f: impl FnOnce(Value) -> R) -> R {
    match value.serialize(Classify) {
        Ok(Shape::Null) => f(Value::null()),
        Ok(Shape::Text(text)) => f(Value::from_text(Str::new_ref(&text))),
        Ok(Shape::Collection(len)) => f(Value::from_len(len)),
        Ok(Shape::Record) => f(Value::from_record(&Serde::new(value))),
        Ok(Shape::Scalar) | Err(Unsupported) => f(Value::from_serde(&value)),
    }
}

#[derive(Debug)]
struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value could not be classified")
    }
}

impl serde::ser::Error for Unsupported {
    fn custom<T>(_: T) -> Self
    where
        T: fmt::Display,
    {
        Unsupported
    }
}

impl serde::ser::StdError for Unsupported {}

/**
The shape of a serialized value.
*/
#[derive(Debug, PartialEq, Eq)]
enum Shape {
    Null,
    Text(String),
    Collection(usize),
    Record,
    Scalar,
}

/**
A serializer that determines the [`Shape`] of a value without inspecting any of its fields or elements.
*/
struct Classify;

/**
Counts the elements of a compound value and ends with a fixed shape.
*/
struct Compound {
    len: usize,
    end: fn(usize) -> Shape,
}

impl Compound {
    fn collection() -> Self {
        Compound {
            len: 0,
            end: Shape::Collection,
        }
    }

    fn record() -> Self {
        Compound {
            len: 0,
            end: |_| Shape::Record,
        }
    }

    fn scalar() -> Self {
        Compound {
            len: 0,
            end: |_| Shape::Scalar,
        }
    }

    fn push(&mut self) -> Result<(), Unsupported> {
        self.len += 1;
        Ok(())
    }

    fn finish(self) -> Result<Shape, Unsupported> {
        Ok((self.end)(self.len))
    }
}

impl Serializer for Classify {
    type Ok = Shape;

    type Error = Unsupported;

    type SerializeSeq = Compound;

    type SerializeTuple = Compound;

    type SerializeTupleStruct = Compound;

    type SerializeTupleVariant = Compound;

    type SerializeMap = Compound;

    type SerializeStruct = Compound;

    type SerializeStructVariant = Compound;

    fn serialize_bool(self, _: bool) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_i8(self, _: i8) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_i16(self, _: i16) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_i32(self, _: i32) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_i64(self, _: i64) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_i128(self, _: i128) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_u8(self, _: u8) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_u16(self, _: u16) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_u32(self, _: u32) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_u64(self, _: u64) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_u128(self, _: u128) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_f32(self, _: f32) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_f64(self, _: f64) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_char(self, _: char) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Collection(v.len()))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Null)
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Null)
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Record)
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(Shape::Scalar)
    }

    fn serialize_newtype_struct<T: ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        Ok(Shape::Scalar)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(Compound::collection())
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(Compound::collection())
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(Compound::collection())
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(Compound::scalar())
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(Compound::collection())
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(Compound::record())
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(Compound::scalar())
    }
}

impl SerializeSeq for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_element<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeTuple for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_element<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeTupleStruct for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_field<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeTupleVariant for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_field<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeMap for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_key<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn serialize_value<T: ?Sized>(&mut self, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeStruct for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_field<T: ?Sized>(&mut self, _: &'static str, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

impl SerializeStructVariant for Compound {
    type Ok = Shape;

    type Error = Unsupported;

    fn serialize_field<T: ?Sized>(&mut self, _: &'static str, _: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        self.push()
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        self.finish()
    }
}

/**
A serializer that passes each field of a struct to a function.

Values that aren't structs produce no fields.
*/
struct Fields<'f, F> {
    for_each: &'f mut F,
}

struct FieldsStruct<'f, F> {
    for_each: &'f mut F,
    flow: ControlFlow<()>,
}

impl<'f, F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>> Serializer for Fields<'f, F> {
    type Ok = ControlFlow<()>;

    type Error = Unsupported;

    type SerializeSeq = Impossible<ControlFlow<()>, Unsupported>;

    type SerializeTuple = Impossible<ControlFlow<()>, Unsupported>;

    type SerializeTupleStruct = Impossible<ControlFlow<()>, Unsupported>;

    type SerializeTupleVariant = Impossible<ControlFlow<()>, Unsupported>;

    type SerializeMap = Impossible<ControlFlow<()>, Unsupported>;

    type SerializeStruct = FieldsStruct<'f, F>;

    type SerializeStructVariant = Impossible<ControlFlow<()>, Unsupported>;

    fn serialize_bool(self, _: bool) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_i8(self, _: i8) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_i16(self, _: i16) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_i32(self, _: i32) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_i64(self, _: i64) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_i128(self, _: i128) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_u8(self, _: u8) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_u16(self, _: u16) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_u32(self, _: u32) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_u64(self, _: u64) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_u128(self, _: u128) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_f32(self, _: f32) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_f64(self, _: f64) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_char(self, _: char) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_str(self, _: &str) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_newtype_struct<T: ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: Serialize,
    {
        Ok(ControlFlow::Continue(()))
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Err(Unsupported)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(Unsupported)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(Unsupported)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(Unsupported)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Err(Unsupported)
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(FieldsStruct {
            for_each: self.for_each,
            flow: ControlFlow::Continue(()),
        })
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(Unsupported)
    }
}

impl<'f, F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>> SerializeStruct for FieldsStruct<'f, F> {
    type Ok = ControlFlow<()>;

    type Error = Unsupported;

    fn serialize_field<T: ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        // Keep accepting fields after a break, they just aren't visited
        if self.flow.is_break() {
            return Ok(());
        }

        let for_each = &mut *self.for_each;
        self.flow = with_value(value, |value| for_each(Str::new(key), value));

        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::{collections::BTreeMap, vec, vec::Vec};

    use crate::{report::describe_empty_properties, value::Kind};

    #[derive(serde::Serialize)]
    struct Person {
        name: Option<String>,
        age: u32,
        email: String,
    }

    #[derive(serde::Serialize)]
    struct Contact {
        person: Person,
        tags: Vec<String>,
        note: &'static str,
    }

    #[derive(serde::Serialize)]
    struct Unit;

    #[derive(serde::Serialize)]
    struct Wrapper(Person);

    #[derive(serde::Serialize)]
    enum Status {
        Active,
    }

    fn kind<T: Serialize + ?Sized>(value: &T) -> Kind {
        Serde::new(value).to_value().kind()
    }

    #[test]
    fn classify() {
        assert_eq!(Kind::Null, kind(&None::<i32>));
        assert_eq!(Kind::Null, kind(&()));
        assert_eq!(Kind::Text, kind("text"));
        assert_eq!(Kind::Text, kind(&Some("text")));
        assert_eq!(Kind::Collection, kind(&vec![1, 2]));
        assert_eq!(Kind::Collection, kind(&(1, 2)));
        assert_eq!(Kind::Collection, kind(&BTreeMap::<String, i32>::new()));
        assert_eq!(Kind::Record, kind(&Unit));
        assert_eq!(Kind::Scalar, kind(&42));
        assert_eq!(Kind::Scalar, kind(&Status::Active));
        assert_eq!(
            Kind::Record,
            kind(&Person {
                name: None,
                age: 1,
                email: String::new(),
            })
        );
    }

    #[test]
    fn collection_len() {
        assert_eq!(Some(3), Serde::new(&vec![1, 2, 3]).to_value().len());
        assert_eq!(Some(0), Serde::new(&Vec::<i32>::new()).to_value().len());

        let mut map = BTreeMap::new();
        map.insert("a", 1);

        assert_eq!(Some(1), Serde::new(&map).to_value().len());
    }

    #[test]
    fn is_empty() {
        assert!(Serde::new("").to_value().is_empty());
        assert!(!Serde::new("a").to_value().is_empty());
        assert!(Serde::new(&None::<Person>).to_value().is_empty());
        assert!(!Serde::new(&0).to_value().is_empty());

        // The age field is a scalar, so the record has a value
        assert!(!Serde::new(&Person {
            name: None,
            age: 0,
            email: String::new(),
        })
        .to_value()
        .is_empty());

        assert!(Serde::new(&Unit).to_value().is_empty());
    }

    #[test]
    fn fields_in_serialization_order() {
        let person = Person {
            name: None,
            age: 30,
            email: String::new(),
        };

        let mut names = Vec::new();
        let _ = Serde::new(&person).for_each(|k, v| {
            names.push((k.to_owned(), v.kind()));

            ControlFlow::Continue(())
        });

        assert_eq!(
            vec![
                (Str::new("name"), Kind::Null),
                (Str::new("age"), Kind::Scalar),
                (Str::new("email"), Kind::Text),
            ],
            names
        );
        assert_eq!(3, Serde::new(&person).count());
    }

    #[test]
    fn describe() {
        let person = Person {
            name: None,
            age: 30,
            email: String::new(),
        };

        assert_eq!(
            Some("Empty or null properties: name, email"),
            describe_empty_properties(Serde::new(&person)).as_deref()
        );
        assert_eq!(
            Some("Empty or null properties: name, email"),
            describe_empty_properties(Serde::new(&Wrapper(person))).as_deref()
        );
        assert_eq!(None, describe_empty_properties(Serde::new(&None::<Person>)));
    }

    #[test]
    fn nested_fields_are_not_inspected() {
        let contact = Contact {
            person: Person {
                name: None,
                age: 0,
                email: String::new(),
            },
            tags: Vec::new(),
            note: "",
        };

        let mut kinds = Vec::new();
        let _ = Serde::new(&contact).for_each(|_, v| {
            kinds.push(v.kind());

            ControlFlow::Continue(())
        });

        assert_eq!(vec![Kind::Record, Kind::Collection, Kind::Text], kinds);
        assert_eq!(
            Some("Empty or null properties: note"),
            describe_empty_properties(Serde::new(&contact)).as_deref()
        );
    }

    #[test]
    fn non_struct_has_no_fields() {
        assert_eq!(0, Serde::new(&42).count());
        assert_eq!(0, Serde::new(&vec![1]).count());
        assert_eq!(0, Serde::new("a").count());
    }

    #[test]
    fn break_stops_visiting() {
        let person = Person {
            name: None,
            age: 30,
            email: String::new(),
        };

        let mut seen = 0;
        let flow = Serde::new(&person).for_each(|_, _| {
            seen += 1;

            ControlFlow::Break(())
        });

        assert!(flow.is_break());
        assert_eq!(1, seen);
    }
}
