/*!
The [`Record`] type.

A [`Record`] is a structured value with named fields. Records are how an arbitrary type exposes its fields for checking without runtime reflection. There are a few ways to get one:

- Derive `Record` on a struct. Fields are enumerated in declaration order.
- Use a list of `(name, value)` pairs, like `[("name", Value::null()), ("age", 30.to_value())]`. Fields are enumerated in element order.
- Use a `BTreeMap` (key order) or `HashMap` (unspecified order) of names to values.
- Wrap a `serde::Serialize` type in [`crate::adapt::Serde`]. Fields are enumerated in serialization order.

Lists and maps of pairs are still collections when converted through [`ToValue`], so checking or reporting on one directly looks at its length rather than its fields. Wrap it in [`Value::from_record`] to treat it as a record.
*/

use core::ops::ControlFlow;

use crate::{
    empty::Empty,
    str::{Str, ToStr},
    value::{ToValue, Value},
};

/**
A collection of named fields.

Fields aren't required to be unique, but each one is checked and reported independently.
*/
pub trait Record {
    /**
    Enumerate the fields of the record.

    The `for_each` function will be called for each field in a stable order until it returns `ControlFlow::Break`.
    */
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        for_each: F,
    ) -> ControlFlow<()>;

    /**
    Count the number of fields in the record.
    */
    fn count(&self) -> usize {
        let mut count = 0;

        let _ = self.for_each(|_, _| {
            count += 1;

            ControlFlow::Continue(())
        });

        count
    }
}

impl<'a, R: Record + ?Sized> Record for &'a R {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        for_each: F,
    ) -> ControlFlow<()> {
        (**self).for_each(for_each)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<K: ToStr, V: ToValue> Record for (K, V) {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for_each(self.0.to_str(), self.1.to_value())
    }

    fn count(&self) -> usize {
        1
    }
}

impl<K: ToStr, V: ToValue> Record for [(K, V)] {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            for_each(k.to_str(), v.to_value())?;
        }

        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<K: ToStr, V: ToValue, const N: usize> Record for [(K, V); N] {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        for_each: F,
    ) -> ControlFlow<()> {
        (self as &[_]).for_each(for_each)
    }

    fn count(&self) -> usize {
        N
    }
}

impl Record for Empty {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        _: F,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        0
    }
}

#[cfg(feature = "alloc")]
mod alloc_support {
    use super::*;

    use alloc::{boxed::Box, collections::BTreeMap, sync::Arc, vec::Vec};

    impl<R: Record + ?Sized> Record for Box<R> {
        fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
            &self,
            for_each: F,
        ) -> ControlFlow<()> {
            (**self).for_each(for_each)
        }

        fn count(&self) -> usize {
            (**self).count()
        }
    }

    impl<R: Record + ?Sized> Record for Arc<R> {
        fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
            &self,
            for_each: F,
        ) -> ControlFlow<()> {
            (**self).for_each(for_each)
        }

        fn count(&self) -> usize {
            (**self).count()
        }
    }

    impl<K: ToStr, V: ToValue> Record for Vec<(K, V)> {
        fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
            &self,
            for_each: F,
        ) -> ControlFlow<()> {
            (self as &[_]).for_each(for_each)
        }

        fn count(&self) -> usize {
            self.len()
        }
    }

    impl<K: ToStr + Ord, V: ToValue> Record for BTreeMap<K, V> {
        fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
            &self,
            mut for_each: F,
        ) -> ControlFlow<()> {
            for (k, v) in self {
                for_each(k.to_str(), v.to_value())?;
            }

            ControlFlow::Continue(())
        }

        fn count(&self) -> usize {
            self.len()
        }
    }
}

#[cfg(feature = "std")]
mod std_support {
    use super::*;

    use std::collections::HashMap;

    impl<K: ToStr, V: ToValue, S> Record for HashMap<K, V, S> {
        fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
            &self,
            mut for_each: F,
        ) -> ControlFlow<()> {
            for (k, v) in self {
                for_each(k.to_str(), v.to_value())?;
            }

            ControlFlow::Continue(())
        }

        fn count(&self) -> usize {
            self.len()
        }
    }
}

mod internal {
    use core::ops::ControlFlow;

    use crate::{str::Str, value::Value};

    pub trait DispatchRecord {
        fn dispatch_for_each(
            &self,
            for_each: &mut dyn FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>,
        ) -> ControlFlow<()>;

        fn dispatch_count(&self) -> usize;
    }

    pub trait SealedRecord {
        fn erase_record(&self) -> crate::internal::Erased<&dyn DispatchRecord>;
    }
}

/**
An object-safe [`Record`].

A `dyn ErasedRecord` can be treated as `impl Record`. It's what [`Value`]s hold when they're classified as records.
*/
pub trait ErasedRecord: internal::SealedRecord {}

impl<R: Record> ErasedRecord for R {}

impl<R: Record> internal::SealedRecord for R {
    fn erase_record(&self) -> crate::internal::Erased<&dyn internal::DispatchRecord> {
        crate::internal::Erased(self)
    }
}

impl<R: Record> internal::DispatchRecord for R {
    fn dispatch_for_each(
        &self,
        for_each: &mut dyn FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.for_each(for_each)
    }

    fn dispatch_count(&self) -> usize {
        self.count()
    }
}

impl<'a> Record for dyn ErasedRecord + 'a {
    fn for_each<F: FnMut(Str<'_>, Value<'_>) -> ControlFlow<()>>(
        &self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        self.erase_record().0.dispatch_for_each(&mut for_each)
    }

    fn count(&self) -> usize {
        self.erase_record().0.dispatch_count()
    }
}
