use crate::{
    imp::BindingGen,
    implementor::{ImplKind, Implementor},
};
use propbind_schema::prelude::*;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

/// Setters and getters for bound fields, getters for computed properties.
pub fn generate(bind: &BindingGen<'_>) -> TokenStream {
    let fields = bind.plan.fields().map(|member| field_accessors(bind, member));
    let computed = bind.plan.computed().map(computed_getter);

    Implementor::new(&bind.scanned.ident, &bind.scanned.generics, ImplKind::Inherent)
        .set_tokens(quote! {
            #(#fields)*
            #(#computed)*
        })
        .to_token_stream()
}

// Equality gate first: an unchanged value records a suppressed write and
// notifies nobody.
fn field_accessors(bind: &BindingGen<'_>, member: &BoundMember) -> TokenStream {
    let vis = member.descriptor.accessibility.visibility();
    let field = format_ident!("{}", member.name());
    let getter = format_ident!("{}", member.key.accessor_name());
    let setter = format_ident!("{}", member.key.setter_name());
    let ty = &member.descriptor.value_type.tokens;
    let key = bind.key_path(member);

    let setter_doc = format!(
        "Set `{}`, notifying `{}` listeners when the value changes.",
        member.name(),
        member.key
    );
    let getter_doc = format!("Current value of `{}`.", member.name());

    // generic members may not be PartialEq unless asked
    let bound = member
        .category
        .is_generic()
        .then(|| quote!(where #ty: ::std::cmp::PartialEq));

    quote! {
        #[doc = #setter_doc]
        #[allow(clippy::float_cmp)]
        #vis fn #setter(&mut self, value: #ty) #bound {
            if self.#field == value {
                ::propbind::core::store::record_suppressed::<Self>();
                return;
            }

            self.#field = value;
            ::propbind::core::traits::BindableObject::notify_property_changed(self, #key);
        }

        #[doc = #getter_doc]
        #[must_use]
        #vis const fn #getter(&self) -> &#ty {
            &self.#field
        }
    }
}

fn computed_getter(member: &BoundMember) -> TokenStream {
    let vis = member.descriptor.accessibility.visibility();
    let getter = format_ident!("{}", member.key.accessor_name());
    let ty = &member.descriptor.value_type.tokens;
    let body = member
        .descriptor
        .body
        .as_ref()
        .map(|body| body.tokens.clone())
        .unwrap_or_default();
    let doc = format!("Computed property `{}`.", member.key);

    quote! {
        #[doc = #doc]
        #[must_use]
        #vis fn #getter(&self) -> #ty {
            #body
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::imp::tests::{expand, order, person};
    use syn::{DeriveInput, parse_quote};

    #[test]
    fn setters_are_equality_gated() {
        let out = expand(&person());

        assert!(out.contains(
            "pubfnset_name(&mutself,value:String){ifself._name==value{::propbind::core::store::record_suppressed::<Self>();return;}self._name=value;::propbind::core::traits::BindableObject::notify_property_changed(self,PersonBindingKey::NAME);}"
        ));
    }

    #[test]
    fn accessibility_controls_visibility() {
        let out = expand(&person());

        assert!(out.contains("pubconstfnname(&self)->&String"));
        assert!(out.contains("]fnset_age(&mutself,value:i32)"));
        assert!(out.contains("]constfnage(&self)->&i32"));
    }

    #[test]
    fn computed_getter_inlines_the_body() {
        let out = expand(&order());

        assert!(out.contains("pubfntotal(&self)->f64{self._price*f64::from(self._qty)}"));
        assert!(!out.contains("fnset_total"));
    }

    #[test]
    fn generic_setters_require_partial_eq() {
        let input: DeriveInput = parse_quote! {
            struct Tagged {
                #[bind(accessibility = 3)]
                _tags: Vec<String>,
                store: StoreCell<Self>,
            }
        };
        let out = expand(&input);

        assert!(out.contains(
            "pub(crate)fnset_tags(&mutself,value:Vec<String>)whereVec<String>:::std::cmp::PartialEq"
        ));
    }
}
