use crate::{
    imp::BindingGen,
    implementor::{ImplKind, Implementor},
};
use propbind_schema::prelude::*;
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, format_ident, quote};

/// The `BindableObject` impl: key tables, cascade table, the store slot and
/// one typed lookup per category that has members.
pub fn generate(bind: &BindingGen<'_>) -> TokenStream {
    let scanned = bind.scanned;
    let ident = &scanned.ident;
    let store_field = &scanned.store_field;

    let keys = bind.plan.members.iter().map(|m| bind.key_path(m));
    let key_info = bind.plan.members.iter().map(|m| key_info(bind, m));
    let cascades = cascades(bind);
    let lookups = FAST_LOOKUPS
        .iter()
        .map(|lookup| lookup.generate(bind.plan));
    let generic = visit_generic(bind.plan);

    let tokens = quote! {
        const PATH: &'static str = concat!(module_path!(), "::", stringify!(#ident));
        const KEYS: &'static [&'static str] = &[#(#keys),*];
        const KEY_INFO: &'static [::propbind::core::key::KeyInfo] = &[#(#key_info),*];
        #cascades

        fn store_cell(&self) -> &::propbind::core::store::StoreCell<Self> {
            &self.#store_field
        }

        #(#lookups)*
        #generic
    };

    Implementor::new(
        ident,
        &scanned.generics,
        ImplKind::Trait(quote!(::propbind::core::traits::BindableObject)),
    )
    .set_tokens(tokens)
    .to_token_stream()
}

fn key_info(bind: &BindingGen<'_>, member: &BoundMember) -> TokenStream {
    let key = bind.key_path(member);
    let name = member.name();
    let kind = match member.descriptor.kind {
        MemberKind::Field => quote!(Field),
        MemberKind::ComputedProperty => quote!(ComputedProperty),
    };
    let category = category_variant(member.category);
    let type_name = &member.descriptor.value_type.display;

    quote! {
        ::propbind::core::key::KeyInfo::new(
            #key,
            #name,
            ::propbind::core::MemberKind::#kind,
            ::propbind::core::TypeCategory::#category,
            #type_name,
        )
    }
}

fn category_variant(category: TypeCategory) -> TokenStream {
    match category {
        TypeCategory::Int => quote!(Int),
        TypeCategory::Text => quote!(Text),
        TypeCategory::Bool => quote!(Bool),
        TypeCategory::Float32 => quote!(Float32),
        TypeCategory::Float64 => quote!(Float64),
        TypeCategory::Generic => quote!(Generic),
    }
}

// Only emitted when some field has dependents; an absent table means the
// store never builds a dispatcher.
fn cascades(bind: &BindingGen<'_>) -> TokenStream {
    if !bind.plan.has_dependencies() {
        return quote!();
    }

    let key_struct = bind.key_struct();
    let entries = bind.plan.dependencies.iter().map(|edge| {
        let source = const_path(&key_struct, &edge.source_key);
        let dependents = edge
            .dependents
            .iter()
            .map(|key| const_path(&key_struct, key));

        quote!(::propbind::core::key::Cascade::new(#source, &[#(#dependents),*]))
    });

    quote! {
        const CASCADES: &'static [::propbind::core::key::Cascade] = &[#(#entries),*];
    }
}

fn const_path(key_struct: &Ident, key: &BindableKey) -> TokenStream {
    let constant = format_ident!("{}", key.const_name());

    quote!(#key_struct::#constant)
}

///
/// FastLookup
///
/// One typed accessor of `BindableObject`, emitted only for categories that
/// have at least one member.
///

struct FastLookup {
    category: TypeCategory,
    method: &'static str,
}

const FAST_LOOKUPS: [FastLookup; 5] = [
    FastLookup {
        category: TypeCategory::Int,
        method: "get_int",
    },
    FastLookup {
        category: TypeCategory::Text,
        method: "get_text",
    },
    FastLookup {
        category: TypeCategory::Bool,
        method: "get_bool",
    },
    FastLookup {
        category: TypeCategory::Float32,
        method: "get_f32",
    },
    FastLookup {
        category: TypeCategory::Float64,
        method: "get_f64",
    },
];

impl FastLookup {
    fn generate(&self, plan: &BindingPlan) -> TokenStream {
        let members = plan.in_category(self.category).collect::<Vec<_>>();
        if members.is_empty() {
            return quote!();
        }

        let method = format_ident!("{}", self.method);
        let ret = self.return_type();
        let arms = members.iter().map(|member| {
            let key = member.key.as_str();
            let value = self.value_expr(member);

            quote!(#key => Some(#value),)
        });

        quote! {
            fn #method(&self, key: &str) -> Option<#ret> {
                match key {
                    #(#arms)*
                    _ => None,
                }
            }
        }
    }

    fn return_type(&self) -> TokenStream {
        match self.category {
            TypeCategory::Text => quote!(::std::borrow::Cow<'_, str>),
            category => category.type_name().map_or_else(
                || quote!(()),
                |name| {
                    let ty = format_ident!("{name}");
                    quote!(#ty)
                },
            ),
        }
    }

    fn value_expr(&self, member: &BoundMember) -> TokenStream {
        let read = BindingGen::read_expr(member);

        match (self.category, member.descriptor.kind) {
            (TypeCategory::Text, MemberKind::Field) => {
                quote!(::std::borrow::Cow::Borrowed(#read.as_str()))
            }
            (TypeCategory::Text, MemberKind::ComputedProperty) => {
                quote!(::std::borrow::Cow::Owned(#read))
            }
            _ => read,
        }
    }
}

fn visit_generic(plan: &BindingPlan) -> TokenStream {
    let members = plan.in_category(TypeCategory::Generic).collect::<Vec<_>>();
    if members.is_empty() {
        return quote!();
    }

    let arms = members.iter().map(|member| {
        let key = member.key.as_str();
        let read = BindingGen::read_expr(member);

        quote!(#key => visitor(&#read),)
    });

    quote! {
        fn visit_generic(
            &self,
            key: &str,
            visitor: &mut dyn FnMut(&dyn ::std::any::Any),
        ) -> bool {
            match key {
                #(#arms)*
                _ => return false,
            }

            true
        }
    }
}
