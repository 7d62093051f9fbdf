use std::fmt::Write;

use proc_macro2::TokenStream;
use syn::{
    parse::{self, Parse, ParseStream},
    punctuated::Punctuated,
    Member,
};

pub trait FieldValueKey {
    fn key_name(&self) -> String;
}

impl FieldValueKey for syn::FieldValue {
    fn key_name(&self) -> String {
        match self.member {
            Member::Named(ref member) => member.to_string(),
            Member::Unnamed(ref member) => member.index.to_string(),
        }
    }
}

pub fn parse_comma_separated2<T: Parse>(
    tokens: TokenStream,
) -> Result<Punctuated<T, Token![,]>, syn::Error> {
    struct ParsePunctuated<T> {
        value: Punctuated<T, Token![,]>,
    }

    impl<T: Parse> Parse for ParsePunctuated<T> {
        fn parse(input: ParseStream) -> parse::Result<Self> {
            Ok(ParsePunctuated {
                value: input.parse_terminated(T::parse, Token![,])?,
            })
        }
    }

    Ok(syn::parse2::<ParsePunctuated<T>>(tokens)?.value)
}

pub fn print_list<'a>(list: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();

    for (i, item) in list.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }

        let _ = write!(out, "`{}`", item);
    }

    out
}
