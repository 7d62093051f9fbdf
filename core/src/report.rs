/*!
Reports on the empty fields of a record.

[`empty_properties`] collects the names of a record's fields that are null or empty text. [`describe_empty_properties`] renders the same information as a message:

- `"Empty or null properties: name, email"` when some fields are empty.
- `"All properties have values."` when none are.

Both return `None` when the input itself is null, so a missing record can be told apart from a record with nothing to report.
*/

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, ops::ControlFlow};

use crate::{
    record::Record,
    str::Str,
    value::{ToValue, Value},
};

/**
The message rendered when no fields are empty.
*/
pub const ALL_PROPERTIES_HAVE_VALUES: &str = "All properties have values.";

/**
The prefix of the message rendered when some fields are empty.
*/
pub const EMPTY_PROPERTIES_PREFIX: &str = "Empty or null properties: ";

const SEPARATOR: &str = ", ";

/**
The names of the fields in a record that are null or empty text.

The [`fmt::Display`] implementation renders the report as a message.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyProperties {
    names: Vec<Str<'static>>,
}

impl EmptyProperties {
    /**
    The names of the empty fields, in the order the record enumerated them.
    */
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.get())
    }

    /**
    The number of empty fields.
    */
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /**
    Whether there were no empty fields.
    */
    pub fn all_have_values(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for EmptyProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names.iter();

        let Some(first) = names.next() else {
            return f.write_str(ALL_PROPERTIES_HAVE_VALUES);
        };

        f.write_str(EMPTY_PROPERTIES_PREFIX)?;
        f.write_str(first.get())?;

        for name in names {
            f.write_str(SEPARATOR)?;
            f.write_str(name.get())?;
        }

        Ok(())
    }
}

fn collect(model: &Value) -> Option<EmptyProperties> {
    if model.is_null() {
        return None;
    }

    let mut names = Vec::new();

    // Values that aren't records have no fields to report
    if let Some(record) = model.as_record() {
        let _ = record.for_each(|name, value| {
            if value.is_unset() {
                names.push(name.to_owned());
            }

            ControlFlow::Continue(())
        });
    }

    Some(EmptyProperties { names })
}

/**
Collect the names of the fields in `model` that are null or empty text.

Only the fields of `model` itself are checked. A field holding a record or collection is never reported, even if it has no fields or elements.

If `model` is null then this method returns `None`. If `model` is not a record then it has no fields, and an [`EmptyProperties`] with no names is returned.
*/
pub fn empty_properties(model: impl ToValue) -> Option<EmptyProperties> {
    collect(&model.to_value())
}

/**
Describe the fields in `model` that are null or empty text.

This method returns `None` if `model` is null. Otherwise it returns the message rendered by [`EmptyProperties`].
*/
pub fn describe_empty_properties(model: impl ToValue) -> Option<String> {
    empty_properties(model).map(|report| report.to_string())
}
