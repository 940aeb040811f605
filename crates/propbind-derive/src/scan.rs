use crate::util::is_path_ident;
use darling::{
    FromDeriveInput, FromMeta,
    ast::Data,
    util::Ignored,
};
use propbind_schema::prelude::*;
use quote::ToTokens;
use syn::{DeriveInput, Expr, Field, Generics, Ident, Meta, Type, Visibility, ext::IdentExt};

const STORE_CELL: &str = "StoreCell";

///
/// BindableArgs
///
/// Struct-level `#[bindable(...)]` options.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bindable), supports(struct_named))]
struct BindableArgs {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<Ignored, Field>,

    #[darling(multiple, rename = "computed")]
    computed: Vec<ComputedArgs>,
}

///
/// ComputedArgs
///
/// `computed(name = "total", ty = "f64", body = "self._price * 2.0")`
///

#[derive(Debug, FromMeta)]
struct ComputedArgs {
    name: Ident,
    ty: Type,
    body: Expr,

    #[darling(default)]
    accessibility: Accessibility,
}

///
/// BindArgs
///

#[derive(Debug, Default, FromMeta)]
struct BindArgs {
    #[darling(default)]
    accessibility: Accessibility,
}

impl BindArgs {
    // a bare `#[bind]` takes every default
    fn from_attr_meta(meta: &Meta) -> darling::Result<Self> {
        match meta {
            Meta::Path(_) => Ok(Self::default()),
            meta => Self::from_meta(meta),
        }
    }
}

///
/// ScannedType
///
/// The host type reduced to what analysis and codegen need: its identity,
/// the store field and one descriptor per candidate member.
///

#[derive(Debug)]
pub struct ScannedType {
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub store_field: Ident,
    pub members: Vec<MemberDescriptor>,
}

impl ScannedType {
    pub fn scan(input: &DeriveInput) -> darling::Result<Self> {
        let args = BindableArgs::from_derive_input(input)?;
        let fields = args
            .data
            .take_struct()
            .ok_or_else(|| darling::Error::unsupported_shape("enum"))?;

        // every path past this point must finish the accumulator
        let mut errors = darling::Error::accumulator();

        if let Some(lifetime) = args.generics.lifetimes().next() {
            errors.push(
                darling::Error::custom("Bindable types cannot borrow; remove the lifetime")
                    .with_span(lifetime),
            );
        }

        let mut store_fields = Vec::new();
        let mut members = Vec::new();

        for field in fields.iter() {
            let Some(ident) = &field.ident else {
                continue;
            };
            let mut bind_attrs = field.attrs.iter().filter(|a| a.path().is_ident("bind"));
            let bind_attr = bind_attrs.next();

            if let Some(extra) = bind_attrs.next() {
                errors.push(darling::Error::duplicate_field("bind").with_span(extra));
            }

            if is_path_ident(&field.ty, STORE_CELL) {
                if let Some(attr) = bind_attr {
                    errors.push(
                        darling::Error::custom("the store field cannot be bound").with_span(attr),
                    );
                }
                store_fields.push(ident.clone());
                continue;
            }

            let Some(attr) = bind_attr else {
                continue;
            };
            let Some(bind) = errors.handle(BindArgs::from_attr_meta(&attr.meta)) else {
                continue;
            };

            members.push(
                MemberDescriptor::field(ident.unraw().to_string(), TypeRef::new(&field.ty))
                    .with_accessibility(bind.accessibility)
                    .with_span(ident.span()),
            );
        }

        for computed in &args.computed {
            members.push(
                MemberDescriptor::computed(
                    computed.name.unraw().to_string(),
                    TypeRef::new(&computed.ty),
                    computed.body.to_token_stream(),
                )
                .with_accessibility(computed.accessibility)
                .with_span(computed.name.span()),
            );
        }

        let store_field = match store_fields.as_slice() {
            [only] => Some(only.clone()),
            [] => {
                errors.push(
                    darling::Error::custom(format!(
                        "Bindable types need one field of type `{STORE_CELL}<Self>`"
                    ))
                    .with_span(&args.ident),
                );
                None
            }
            [_, extra, ..] => {
                errors.push(
                    darling::Error::custom(format!("only one `{STORE_CELL}` field is allowed"))
                        .with_span(extra),
                );
                None
            }
        };

        errors.finish()?;
        let store_field =
            store_field.ok_or_else(|| darling::Error::custom("missing store field"))?;

        Ok(Self {
            ident: args.ident,
            vis: args.vis,
            generics: args.generics,
            store_field,
            members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn collects_bound_fields_and_computed_properties() {
        let input: DeriveInput = parse_quote! {
            #[bindable(computed(name = "total", ty = "f64", body = "self._price * 2.0"))]
            pub struct Order {
                #[bind]
                _price: f64,
                #[bind(accessibility = "internal")]
                _qty: i32,
                note: String,
                store: StoreCell<Self>,
            }
        };
        let scanned = ScannedType::scan(&input).unwrap();

        assert_eq!(scanned.store_field, "store");
        let names = scanned
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["_price", "_qty", "total"]);
        assert_eq!(scanned.members[1].accessibility, Accessibility::Internal);
        assert_eq!(scanned.members[2].kind, MemberKind::ComputedProperty);
        assert_eq!(scanned.members[2].value_type.display, "f64");
    }

    #[test]
    fn unprefixed_fields_are_still_scanned() {
        let input: DeriveInput = parse_quote! {
            struct Counter {
                #[bind]
                count: i32,
                store: StoreCell<Self>,
            }
        };
        let scanned = ScannedType::scan(&input).unwrap();

        assert_eq!(scanned.members[0].name, "count");
    }

    #[test]
    fn raw_identifiers_are_unrawed() {
        let input: DeriveInput = parse_quote! {
            struct Raw {
                #[bind]
                r#_type: i32,
                store: StoreCell<Self>,
            }
        };
        let scanned = ScannedType::scan(&input).unwrap();

        assert_eq!(scanned.members[0].name, "_type");
    }

    #[test]
    fn store_field_is_required() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                #[bind]
                _name: String,
            }
        };

        assert!(ScannedType::scan(&input).is_err());
    }

    #[test]
    fn two_store_fields_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                a: StoreCell<Self>,
                b: StoreCell<Self>,
            }
        };

        assert!(ScannedType::scan(&input).is_err());
    }

    #[test]
    fn enums_are_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Mood { Happy }
        };

        assert!(ScannedType::scan(&input).is_err());
    }

    #[test]
    fn bad_accessibility_is_an_error() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                #[bind(accessibility = "friends")]
                _name: String,
                store: StoreCell<Self>,
            }
        };

        assert!(ScannedType::scan(&input).is_err());
    }

    #[test]
    fn lifetimes_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct View<'a> {
                #[bind]
                _name: &'a str,
                store: StoreCell<Self>,
            }
        };

        assert!(ScannedType::scan(&input).is_err());
    }
}
