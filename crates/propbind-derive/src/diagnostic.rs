use propbind_schema::prelude::*;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote_spanned};

/// Surface non-fatal diagnostics as compiler warnings.
///
/// Stable proc macros cannot warn directly, so each diagnostic becomes a
/// deprecated constant that is immediately used. Both the constant and its
/// use carry the member's span: rustc drops deprecation warnings whose span
/// belongs to a derive expansion, and `call_site` would.
pub fn emit_warnings(owner: &Ident, diagnostics: &[Diagnostic]) -> TokenStream {
    diagnostics
        .iter()
        .map(|diagnostic| warning(owner, diagnostic))
        .collect()
}

fn warning(owner: &Ident, diagnostic: &Diagnostic) -> TokenStream {
    let span = diagnostic.span;
    let note = diagnostic.to_string();
    let ident = format_ident!(
        "{}_{}_{}",
        diagnostic.code.to_string(),
        owner,
        diagnostic.member,
        span = span
    );

    quote_spanned! {span=>
        #[deprecated(note = #note)]
        #[allow(non_upper_case_globals)]
        #[doc(hidden)]
        const #ident: () = ();

        const _: () = #ident;
    }
}
