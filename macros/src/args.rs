use syn::{spanned::Spanned, Expr, ExprLit, FieldValue, Lit};

use crate::util::{print_list, FieldValueKey};

/**
A single argument in a `#[record(..)]` attribute, written as a field-value like `rename: "name"`.

Each argument can be set at most once across all the attributes on a field.
*/
pub struct Arg<T> {
    key: &'static str,
    parse: fn(&'static str, &FieldValue) -> Result<T, syn::Error>,
    value: Option<T>,
}

impl Arg<bool> {
    /**
    A flag, like `skip: true`. A bare `skip` is the same as `skip: true`.
    */
    pub fn flag(key: &'static str) -> Self {
        Arg::new(key, parse_flag)
    }
}

impl Arg<String> {
    /**
    A string literal, like `rename: "name"`.
    */
    pub fn str(key: &'static str) -> Self {
        Arg::new(key, parse_str)
    }
}

impl<T> Arg<T> {
    fn new(key: &'static str, parse: fn(&'static str, &FieldValue) -> Result<T, syn::Error>) -> Self {
        Arg {
            key,
            parse,
            value: None,
        }
    }

    pub fn take(self) -> Option<T> {
        self.value
    }
}

impl<T: Default> Arg<T> {
    pub fn take_or_default(self) -> T {
        self.value.unwrap_or_default()
    }
}

fn parse_flag(key: &'static str, fv: &FieldValue) -> Result<bool, syn::Error> {
    if fv.colon_token.is_none() {
        return Ok(true);
    }

    match fv.expr {
        Expr::Lit(ExprLit {
            lit: Lit::Bool(ref lit),
            ..
        }) => Ok(lit.value),
        ref expr => Err(syn::Error::new(
            expr.span(),
            format_args!("`{}` requires a boolean value", key),
        )),
    }
}

fn parse_str(key: &'static str, fv: &FieldValue) -> Result<String, syn::Error> {
    match fv.expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(ref lit),
            ..
        }) => Ok(lit.value()),
        ref expr => Err(syn::Error::new(
            expr.span(),
            format_args!("`{}` requires a string value", key),
        )),
    }
}

/**
An [`Arg`] with its value type erased, so arguments of different types can be set together.
*/
pub trait ArgDef {
    fn key(&self) -> &'static str;
    fn set(&mut self, fv: &FieldValue) -> Result<(), syn::Error>;
}

impl<T> ArgDef for Arg<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&mut self, fv: &FieldValue) -> Result<(), syn::Error> {
        if self.value.is_some() {
            return Err(syn::Error::new(
                fv.span(),
                format_args!("a value for `{}` has already been specified", self.key),
            ));
        }

        self.value = Some((self.parse)(self.key, fv)?);

        Ok(())
    }
}

/**
Match each field-value to the argument with the same key and set it.

Any field-value that doesn't match an argument is an error.
*/
pub fn set_from_field_values<'a, const N: usize>(
    field_values: impl Iterator<Item = &'a FieldValue>,
    args: [&mut dyn ArgDef; N],
) -> Result<(), syn::Error> {
    for fv in field_values {
        let key = fv.key_name();

        let Some(i) = args.iter().position(|arg| arg.key() == key) else {
            return Err(syn::Error::new(
                fv.span(),
                format_args!(
                    "unknown argument `{}`; available arguments are {}",
                    key,
                    print_list(args.iter().map(|arg| arg.key()))
                ),
            ));
        };

        args[i].set(fv)?;
    }

    Ok(())
}
