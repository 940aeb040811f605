use crate::util::{static_bounds, where_clause_with_bounds};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident};

///
/// ImplKind
///

pub enum ImplKind {
    Inherent,
    Trait(TokenStream),
}

///
/// Implementor
///
/// Wraps generated items in an `impl` block for the host type, carrying its
/// generics and the `'static` bounds the runtime needs.
///

pub struct Implementor<'a> {
    ident: &'a Ident,
    generics: &'a Generics,
    kind: ImplKind,
    tokens: TokenStream,
}

impl<'a> Implementor<'a> {
    pub fn new(ident: &'a Ident, generics: &'a Generics, kind: ImplKind) -> Self {
        Self {
            ident,
            generics,
            kind,
            tokens: TokenStream::new(),
        }
    }

    #[must_use]
    pub fn set_tokens(mut self, tokens: TokenStream) -> Self {
        self.tokens = tokens;
        self
    }
}

impl ToTokens for Implementor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = self.ident;
        let inner = &self.tokens;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let where_clause = where_clause_with_bounds(where_clause, &static_bounds(self.generics));

        tokens.extend(match &self.kind {
            ImplKind::Inherent => quote! {
                impl #impl_generics #ident #ty_generics #where_clause {
                    #inner
                }
            },
            ImplKind::Trait(path) => quote! {
                impl #impl_generics #path for #ident #ty_generics #where_clause {
                    #inner
                }
            },
        });
    }
}
