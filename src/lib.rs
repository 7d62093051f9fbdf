/*!
Check whether values, collections, and records are null or empty.

`emptiness` gives application code a single "is this thing unset?" predicate that works across types:

- Null (`None`, [`Value::null`], [`Empty`]) is empty.
- Text is empty when it has a length of zero.
- Collections are empty when they have no elements.
- Records are empty when every one of their fields is null or empty text.
- Anything else, like numbers and booleans, is never empty.

```
use emptiness::Record;

#[derive(Record)]
struct Person {
    name: Option<String>,
    age: u32,
    email: String,
}

let person = Person {
    name: None,
    age: 30,
    email: String::new(),
};

assert!(emptiness::is_empty(""));
assert!(emptiness::any_empty!("Alice", Vec::<u8>::new(), 30));
assert!(!emptiness::all_empty!("", None::<&str>, 0));

assert_eq!(
    Some("Empty or null properties: name, email"),
    emptiness::describe_empty_properties(&person).as_deref(),
);
```

Records only look one level deep. A field holding a record or collection is never considered empty itself, even if that record or collection is empty.

Types expose their fields for checking by deriving [`Record`](macro@Record), through lists or maps of names to values, or with the `serde` feature, by wrapping any `serde::Serialize` type in [`Serde`].
*/

mod macros;
mod report;

#[doc(inline)]
pub use emptiness_macros::*;

#[doc(inline)]
pub use emptiness_core::{
    check::{is_empty, is_empty_all_of, is_empty_any_of, is_unset},
    empty::Empty,
    record::{ErasedRecord, Record},
    report::{EmptyProperties, ALL_PROPERTIES_HAVE_VALUES, EMPTY_PROPERTIES_PREFIX},
    str::{Str, ToStr},
    value::{Kind, ToValue, Value},
};

#[cfg(feature = "serde")]
#[doc(inline)]
pub use emptiness_core::adapt::Serde;

pub use self::report::{describe_empty_properties, empty_properties};

#[doc(hidden)]
pub mod __private {
    pub use core::ops::ControlFlow;

    pub use emptiness_core::{
        record::Record,
        str::Str,
        value::{ToValue, Value},
    };
}
