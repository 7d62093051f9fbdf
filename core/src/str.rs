/*!
The [`Str`] type.

A [`Str`] holds the name of a record field or the contents of a text value. Names usually come from string literals in derived code, so they're kept as `'static` where possible. Records that can only produce their names or text on the fly, like the `serde` adapter, can hand out borrowed strings that live just for the duration of a callback, and reports that need to outlive the record take an owned copy.
*/

use core::{borrow::Borrow, cmp::Ordering, fmt, hash};

/**
A field name or piece of text.

Equality, ordering, and hashing are all based on [`Str::get`], regardless of whether the string is borrowed or owned.
*/
pub struct Str<'k>(Repr<'k>);

enum Repr<'k> {
    Static(&'static str),
    Borrowed(&'k str),
    #[cfg(feature = "alloc")]
    Owned(alloc::boxed::Box<str>),
}

impl Str<'static> {
    /**
    A string from a literal or other `'static` value.

    This is what the `Record` derive uses for field names.
    */
    pub const fn new(s: &'static str) -> Self {
        Str(Repr::Static(s))
    }
}

impl<'k> Str<'k> {
    /**
    A string borrowed for `'k`.
    */
    pub const fn new_ref(s: &'k str) -> Self {
        Str(Repr::Borrowed(s))
    }

    /**
    Borrow this string without copying it.

    A `'static` string stays `'static`.
    */
    pub fn by_ref<'b>(&'b self) -> Str<'b> {
        match self.0 {
            Repr::Static(s) => Str(Repr::Static(s)),
            _ => Str(Repr::Borrowed(self.get())),
        }
    }

    /**
    The string as a standard [`str`].
    */
    pub fn get(&self) -> &str {
        match self.0 {
            Repr::Static(s) => s,
            Repr::Borrowed(s) => s,
            #[cfg(feature = "alloc")]
            Repr::Owned(ref s) => s,
        }
    }

    /**
    The string as a `'static` [`str`], if it was created with [`Str::new`].
    */
    pub const fn get_static(&self) -> Option<&'static str> {
        match self.0 {
            Repr::Static(s) => Some(s),
            _ => None,
        }
    }

    /**
    Whether the string has a length of zero.

    This is what makes a text [`crate::value::Value`] empty.
    */
    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}

impl<'k> Clone for Str<'k> {
    fn clone(&self) -> Self {
        match self.0 {
            Repr::Static(s) => Str(Repr::Static(s)),
            Repr::Borrowed(s) => Str(Repr::Borrowed(s)),
            #[cfg(feature = "alloc")]
            Repr::Owned(ref s) => Str(Repr::Owned(s.clone())),
        }
    }
}

impl<'k> fmt::Debug for Str<'k> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get(), f)
    }
}

impl<'k> fmt::Display for Str<'k> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

impl<'k> hash::Hash for Str<'k> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<'k, 'o> PartialEq<Str<'o>> for Str<'k> {
    fn eq(&self, other: &Str<'o>) -> bool {
        self.get() == other.get()
    }
}

impl<'k> Eq for Str<'k> {}

impl<'k> PartialEq<str> for Str<'k> {
    fn eq(&self, other: &str) -> bool {
        self.get() == other
    }
}

impl<'k, 'o> PartialEq<&'o str> for Str<'k> {
    fn eq(&self, other: &&'o str) -> bool {
        self.get() == *other
    }
}

impl<'k, 'o> PartialOrd<Str<'o>> for Str<'k> {
    fn partial_cmp(&self, other: &Str<'o>) -> Option<Ordering> {
        Some(self.get().cmp(other.get()))
    }
}

impl<'k> Ord for Str<'k> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<'k> Borrow<str> for Str<'k> {
    fn borrow(&self) -> &str {
        self.get()
    }
}

impl<'k> AsRef<str> for Str<'k> {
    fn as_ref(&self) -> &str {
        self.get()
    }
}

impl<'k> From<&'k str> for Str<'k> {
    fn from(s: &'k str) -> Self {
        Str::new_ref(s)
    }
}

/**
Use a value as the name of a record field.

This is the bound on names in lists and maps of `(name, value)` pairs.
*/
pub trait ToStr {
    /**
    Borrow the value as a [`Str`].
    */
    fn to_str(&self) -> Str;
}

impl<'a, T: ToStr + ?Sized> ToStr for &'a T {
    fn to_str(&self) -> Str {
        (**self).to_str()
    }
}

impl<'k> ToStr for Str<'k> {
    fn to_str(&self) -> Str {
        self.by_ref()
    }
}

impl ToStr for str {
    fn to_str(&self) -> Str {
        Str::new_ref(self)
    }
}

#[cfg(feature = "alloc")]
mod alloc_support {
    use alloc::{boxed::Box, string::String};

    use super::*;

    impl Str<'static> {
        /**
        A string that owns its contents.
        */
        pub fn new_owned(s: impl Into<Box<str>>) -> Self {
            Str(Repr::Owned(s.into()))
        }
    }

    impl<'k> Str<'k> {
        /**
        Detach this string from `'k`, copying it if it isn't already `'static`.
        */
        pub fn to_owned(&self) -> Str<'static> {
            match self.0 {
                Repr::Static(s) => Str::new(s),
                _ => Str::new_owned(self.get()),
            }
        }
    }

    impl ToStr for String {
        fn to_str(&self) -> Str {
            Str::new_ref(self)
        }
    }

    impl From<String> for Str<'static> {
        fn from(s: String) -> Self {
            Str::new_owned(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_ref_keeps_static() {
        let s = Str::new("name");

        assert_eq!(Some("name"), s.by_ref().get_static());
        assert_eq!(None, Str::new_ref("name").by_ref().get_static());
    }

    #[test]
    fn eq_defers_to_str() {
        assert_eq!(Str::new("a"), Str::new_ref("a"));
        assert_eq!(Str::new("a"), "a");
        assert!(Str::new("a") < Str::new_ref("b"));
    }

    #[test]
    fn empty() {
        assert!(Str::new("").is_empty());
        assert!(!Str::new_ref(" ").is_empty());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned() {
        let owned = {
            let s = alloc::string::String::from("email");

            Str::new_ref(&s).to_owned()
        };

        assert_eq!("email", owned.get());
        assert_eq!("email", owned.clone().get());
        assert_eq!(None, owned.get_static());
        assert_eq!(Some("name"), Str::new("name").to_owned().get_static());
    }
}
