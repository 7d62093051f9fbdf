use std::collections::BTreeSet;

use proc_macro2::{Literal, TokenStream};
use syn::{
    ext::IdentExt, spanned::Spanned, Attribute, Data, DeriveInput, FieldValue, Index, Member,
    Meta,
};

use crate::{
    args::{self, Arg},
    util::parse_comma_separated2,
};

pub struct ExpandTokens {
    pub input: TokenStream,
}

/**
Arguments accepted by `#[record(..)]` on a field.
*/
struct FieldArgs {
    rename: Option<String>,
    skip: bool,
    as_display: bool,
    as_debug: bool,
}

impl FieldArgs {
    fn from_attrs(attrs: &[Attribute]) -> Result<Self, syn::Error> {
        let mut rename = Arg::str("rename");
        let mut skip = Arg::flag("skip");
        let mut as_display = Arg::flag("as_display");
        let mut as_debug = Arg::flag("as_debug");

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            let Meta::List(ref list) = attr.meta else {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected arguments, like `#[record(rename: \"name\")]`",
                ));
            };

            let fv = parse_comma_separated2::<FieldValue>(list.tokens.clone())?;

            args::set_from_field_values(
                fv.iter(),
                [&mut rename, &mut skip, &mut as_display, &mut as_debug],
            )?;
        }

        let args = FieldArgs {
            rename: rename.take(),
            skip: skip.take_or_default(),
            as_display: as_display.take_or_default(),
            as_debug: as_debug.take_or_default(),
        };

        if args.as_display && args.as_debug {
            return Err(syn::Error::new(
                attrs
                    .iter()
                    .find(|attr| attr.path().is_ident("record"))
                    .map(|attr| attr.span())
                    .unwrap_or_else(proc_macro2::Span::call_site),
                "`as_display` and `as_debug` can't both be set on a field",
            ));
        }

        Ok(args)
    }
}

pub fn expand_tokens(opts: ExpandTokens) -> Result<TokenStream, syn::Error> {
    let mut input = syn::parse2::<DeriveInput>(opts.input)?;

    let fields = match input.data {
        Data::Struct(ref data) => &data.fields,
        Data::Enum(ref data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Record` can only be derived for structs, not enums",
            ))
        }
        Data::Union(ref data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Record` can only be derived for structs, not unions",
            ))
        }
    };

    let mut names = BTreeSet::new();
    let mut field_tokens = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let args = FieldArgs::from_attrs(&field.attrs)?;

        if args.skip {
            continue;
        }

        let member = match field.ident {
            Some(ref ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: index as u32,
                span: field.span(),
            }),
        };

        let name = match (args.rename, &member) {
            (Some(rename), _) => rename,
            (None, Member::Named(ident)) => ident.unraw().to_string(),
            (None, Member::Unnamed(index)) => index.index.to_string(),
        };

        // Make sure names aren't duplicated
        if !names.insert(name.clone()) {
            return Err(syn::Error::new(
                field.span(),
                format_args!("the name `{}` is already used by another field", name),
            ));
        }

        let value_tokens = if args.as_display {
            quote_spanned!(field.span()=> emptiness::__private::Value::from_display(&self.#member))
        } else if args.as_debug {
            quote_spanned!(field.span()=> emptiness::__private::Value::from_debug(&self.#member))
        } else {
            quote_spanned!(field.span()=> emptiness::__private::ToValue::to_value(&self.#member))
        };

        field_tokens.push(quote_spanned!(field.span()=>
            for_each(emptiness::__private::Str::new(#name), #value_tokens)?;
        ));
    }

    let count = Literal::usize_unsuffixed(field_tokens.len());

    let type_params = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect::<Vec<_>>();

    if !type_params.is_empty() {
        let where_clause = input.generics.make_where_clause();

        for param in type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: emptiness::__private::ToValue));
        }
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote!(
        #[automatically_derived]
        impl #impl_generics emptiness::__private::Record for #ident #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn for_each<__F: FnMut(emptiness::__private::Str<'_>, emptiness::__private::Value<'_>) -> emptiness::__private::ControlFlow<()>>(
                &self,
                mut for_each: __F,
            ) -> emptiness::__private::ControlFlow<()> {
                #(#field_tokens)*

                emptiness::__private::ControlFlow::Continue(())
            }

            fn count(&self) -> usize {
                #count
            }
        }

        #[automatically_derived]
        impl #impl_generics emptiness::__private::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> emptiness::__private::Value<'_> {
                emptiness::__private::Value::from_record(self)
            }
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> Result<TokenStream, syn::Error> {
        expand_tokens(ExpandTokens { input })
    }

    #[test]
    fn expand_named() {
        let actual = expand(quote!(
            struct Person {
                #[record(rename: "Name")]
                name: Option<String>,
                #[record(skip)]
                id: u64,
                #[record(as_display: true)]
                age: Age,
                r#type: String,
            }
        ))
        .unwrap();

        let expected = quote!(
            #[automatically_derived]
            impl emptiness::__private::Record for Person {
                #[allow(unused_mut)]
                fn for_each<__F: FnMut(emptiness::__private::Str<'_>, emptiness::__private::Value<'_>) -> emptiness::__private::ControlFlow<()>>(
                    &self,
                    mut for_each: __F,
                ) -> emptiness::__private::ControlFlow<()> {
                    for_each(emptiness::__private::Str::new("Name"), emptiness::__private::ToValue::to_value(&self.name))?;
                    for_each(emptiness::__private::Str::new("age"), emptiness::__private::Value::from_display(&self.age))?;
                    for_each(emptiness::__private::Str::new("type"), emptiness::__private::ToValue::to_value(&self.r#type))?;

                    emptiness::__private::ControlFlow::Continue(())
                }

                fn count(&self) -> usize {
                    3
                }
            }

            #[automatically_derived]
            impl emptiness::__private::ToValue for Person {
                fn to_value(&self) -> emptiness::__private::Value<'_> {
                    emptiness::__private::Value::from_record(self)
                }
            }
        );

        assert_eq!(expected.to_string(), actual.to_string());
    }

    #[test]
    fn expand_tuple() {
        let actual = expand(quote!(
            struct Pair(Option<String>, #[record(as_debug)] Kind);
        ))
        .unwrap()
        .to_string();

        assert!(actual.contains(
            &quote!(for_each(emptiness::__private::Str::new("0"), emptiness::__private::ToValue::to_value(&self.0))?;).to_string()
        ));
        assert!(actual.contains(
            &quote!(for_each(emptiness::__private::Str::new("1"), emptiness::__private::Value::from_debug(&self.1))?;).to_string()
        ));
    }

    #[test]
    fn expand_unit() {
        let actual = expand(quote!(
            struct Unit;
        ))
        .unwrap()
        .to_string();

        assert!(actual.contains(&quote!(fn count(&self) -> usize { 0 }).to_string()));
    }

    #[test]
    fn expand_generic() {
        let actual = expand(quote!(
            struct Wrapper<'a, T> where T: Clone {
                value: &'a T,
            }
        ))
        .unwrap()
        .to_string();

        assert!(actual.contains(
            &quote!(impl<'a, T> emptiness::__private::Record for Wrapper<'a, T> where T: Clone, T: emptiness::__private::ToValue).to_string()
        ));
    }

    #[test]
    fn expand_err() {
        for (expected, input) in [
            (
                "`Record` can only be derived for structs, not enums",
                quote!(
                    enum Status {
                        Active,
                    }
                ),
            ),
            (
                "`Record` can only be derived for structs, not unions",
                quote!(
                    union Bits {
                        a: u32,
                    }
                ),
            ),
            (
                "the name `name` is already used by another field",
                quote!(
                    struct Person {
                        name: String,
                        #[record(rename: "name")]
                        other: String,
                    }
                ),
            ),
            (
                "`as_display` and `as_debug` can't both be set on a field",
                quote!(
                    struct Person {
                        #[record(as_display, as_debug)]
                        name: String,
                    }
                ),
            ),
            (
                "a value for `skip` has already been specified",
                quote!(
                    struct Person {
                        #[record(skip)]
                        #[record(skip: false)]
                        name: String,
                    }
                ),
            ),
            (
                "unknown argument `flatten`; available arguments are `rename`, `skip`, `as_display`, `as_debug`",
                quote!(
                    struct Person {
                        #[record(flatten)]
                        name: String,
                    }
                ),
            ),
            (
                "expected arguments, like `#[record(rename: \"name\")]`",
                quote!(
                    struct Person {
                        #[record]
                        name: String,
                    }
                ),
            ),
        ] {
            let err = expand(input).unwrap_err();

            assert_eq!(expected, err.to_string());
        }
    }
}
