use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Type, WhereClause};

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause
            .as_ref()
            .map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    if let Some(wc) = where_clause {
        let preds = &wc.predicates;
        quote!(where #preds, #(#bounds),*)
    } else {
        quote!(where #(#bounds),*)
    }
}

/// `T: 'static` for every type parameter; the runtime trait needs it.
pub fn static_bounds(generics: &Generics) -> Vec<TokenStream> {
    generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(#ident: 'static)
        })
        .collect()
}

/// Match a type by the last segment of its path, ignoring generics.
pub fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}
