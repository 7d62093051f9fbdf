/*!
Implementation details for `emptiness` derives.

This crate is not intended to be consumed directly. Use the `Record` derive re-exported from `emptiness` instead.
*/

extern crate proc_macro;

#[macro_use]
extern crate quote;

#[macro_use]
extern crate syn;

use proc_macro2::TokenStream;

mod args;
mod record;
mod util;

/**
Derive `Record` and `ToValue` for a struct.

Fields are enumerated in declaration order. Tuple struct fields are named by their index, and unit structs have no fields.

Each field's value is captured through its `ToValue` implementation. Fields accept the following arguments in `#[record(..)]`:

- `rename: "name"`: use a different name for the field.
- `skip: true`: don't enumerate the field at all.
- `as_display: true`: capture the field as a scalar using its `Display` implementation.
- `as_debug: true`: capture the field as a scalar using its `Debug` implementation.

Boolean arguments can be written without a value, like `#[record(skip)]`.

Any type parameters on the struct must implement `ToValue`.
*/
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    base_derive(
        record::expand_tokens,
        record::ExpandTokens {
            input: TokenStream::from(item),
        },
    )
}

fn base_derive<T>(
    expand: impl FnOnce(T) -> Result<TokenStream, syn::Error>,
    opts: T,
) -> proc_macro::TokenStream {
    match expand(opts) {
        Ok(tokens) => proc_macro::TokenStream::from(tokens),
        Err(err) => proc_macro::TokenStream::from(err.to_compile_error()),
    }
}
