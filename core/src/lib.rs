/*!
Core value and record model for `emptiness`.

This crate defines how inputs are classified into [`value::Value`]s, how structured types expose their fields as [`record::Record`]s, and the checks and reports built on top of them. Most applications should depend on the `emptiness` crate instead of this one.
*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

extern crate core;

#[cfg(feature = "serde")]
pub mod adapt;
pub mod check;
pub mod empty;
pub mod record;
#[cfg(feature = "alloc")]
pub mod report;
pub mod str;
pub mod value;

mod internal {
    pub struct Erased<T>(pub(crate) T);
}
