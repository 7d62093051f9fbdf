/*!
The [`Empty`] type.

An [`Empty`] can be used as a default in place of a more meaningful value or record. As a [`crate::value::Value`] it's null, and as a [`crate::record::Record`] it has no fields.
*/

/**
A type that behaves like a default, empty, null value.
*/
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;
