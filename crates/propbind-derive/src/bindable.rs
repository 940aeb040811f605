use crate::{imp::BindingGen, scan::ScannedType};
use propbind_schema::prelude::*;
use proc_macro2::TokenStream;
use syn::DeriveInput;

// derive_bindable
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(darling::Error::write_errors)
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let scanned = ScannedType::scan(input)?;
    let plan = BindingPlan::build(scanned.ident.to_string(), scanned.members.clone())
        .map_err(ErrorTree::into_darling)?;

    Ok(BindingGen::new(&scanned, &plan).generate())
}
