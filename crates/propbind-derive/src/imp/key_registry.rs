use crate::{
    imp::BindingGen,
    implementor::{ImplKind, Implementor},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// `<Type>BindingKey` with one constant per key, plus `bindings()` and
/// `binding_keys()` on the host type.
pub fn generate(bind: &BindingGen<'_>) -> TokenStream {
    let scanned = bind.scanned;
    let ident = &scanned.ident;
    let vis = &scanned.vis;
    let key_struct = bind.key_struct();

    let constants = bind.plan.members.iter().map(|member| {
        let constant = format_ident!("{}", member.key.const_name());
        let key = member.key.as_str();
        let doc = format!("Binding key of `{}`.", member.name());

        quote! {
            #[doc = #doc]
            pub const #constant: &'static str = #key;
        }
    });

    let doc = format!("Binding keys of [`{ident}`], in declaration order.");
    let inherent = Implementor::new(ident, &scanned.generics, ImplKind::Inherent).set_tokens(quote! {
        /// Typed view over this instance's bindings, creating the store on
        /// first use.
        #[must_use]
        pub fn bindings(&self) -> ::propbind::core::bindings::Bindings<'_, Self> {
            <Self as ::propbind::core::traits::BindableObject>::bindings(self)
        }

        /// Every binding key of this type, in declaration order.
        #[must_use]
        pub fn binding_keys() -> &'static [&'static str] {
            <Self as ::propbind::core::traits::BindableObject>::KEYS
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug)]
        #vis struct #key_struct;

        impl #key_struct {
            #(#constants)*
        }

        #inherent
    }
}

#[cfg(test)]
mod tests {
    use crate::imp::tests::{expand, order, person};

    #[test]
    fn registry_has_one_constant_per_key() {
        let out = expand(&person());

        assert!(out.contains("pubstructPersonBindingKey;"));
        assert!(out.contains("pubconstNAME:&'staticstr=\"Name\";"));
        assert!(out.contains("pubconstAGE:&'staticstr=\"Age\";"));
        assert!(out.contains("pubfnbinding_keys()"));
    }

    #[test]
    fn computed_keys_are_registered() {
        assert!(expand(&order()).contains("pubconstTOTAL:&'staticstr=\"Total\";"));
    }
}
