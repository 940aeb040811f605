mod key_registry;
mod mutator;
mod store;

use crate::{diagnostic::emit_warnings, scan::ScannedType};
use propbind_schema::prelude::*;
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, format_ident, quote};

///
/// BindingGen
///
/// Emits everything a bindable type gets: the key registry, the runtime
/// trait impl, setters and getters, plus warnings for dropped members.
///

pub struct BindingGen<'a> {
    scanned: &'a ScannedType,
    plan: &'a BindingPlan,
}

impl<'a> BindingGen<'a> {
    pub const fn new(scanned: &'a ScannedType, plan: &'a BindingPlan) -> Self {
        Self { scanned, plan }
    }

    pub fn generate(&self) -> TokenStream {
        let registry = key_registry::generate(self);
        let store = store::generate(self);
        let mutators = mutator::generate(self);
        let warnings = emit_warnings(&self.scanned.ident, &self.plan.diagnostics);

        quote! {
            #registry
            #store
            #mutators
            #warnings
        }
    }

    // Name of the generated key namespace, `PersonBindingKey` for `Person`.
    fn key_struct(&self) -> Ident {
        format_ident!("{}BindingKey", self.scanned.ident)
    }

    // `PersonBindingKey::NAME`
    fn key_path(&self, member: &BoundMember) -> TokenStream {
        let key_struct = self.key_struct();
        let constant = format_ident!("{}", member.key.const_name());

        quote!(#key_struct::#constant)
    }

    // `self._name` for fields, `self.total()` for computed properties
    fn read_expr(member: &BoundMember) -> TokenStream {
        match member.descriptor.kind {
            MemberKind::Field => {
                let field = format_ident!("{}", member.name());
                quote!(self.#field)
            }
            MemberKind::ComputedProperty => {
                let accessor = format_ident!("{}", member.key.accessor_name());
                quote!(self.#accessor())
            }
        }
    }
}

impl ToTokens for BindingGen<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.generate());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use syn::{DeriveInput, parse_quote};

    // generated tokens with all whitespace removed
    pub(crate) fn expand(input: &DeriveInput) -> String {
        let scanned = ScannedType::scan(input).unwrap();
        let plan = BindingPlan::build(scanned.ident.to_string(), scanned.members.clone()).unwrap();

        BindingGen::new(&scanned, &plan)
            .to_token_stream()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    pub(crate) fn person() -> DeriveInput {
        parse_quote! {
            pub struct Person {
                #[bind]
                _name: String,
                #[bind(accessibility = "private")]
                _age: i32,
                store: StoreCell<Self>,
            }
        }
    }

    pub(crate) fn order() -> DeriveInput {
        parse_quote! {
            #[bindable(computed(name = "total", ty = "f64", body = "self._price * f64::from(self._qty)"))]
            pub struct Order {
                #[bind]
                _price: f64,
                #[bind]
                _qty: i32,
                store: StoreCell<Self>,
            }
        }
    }

    #[test]
    fn naming_violation_becomes_a_warning() {
        let input: DeriveInput = parse_quote! {
            pub struct Counter {
                #[bind]
                count: i32,
                store: StoreCell<Self>,
            }
        };
        let out = expand(&input);

        assert!(out.contains("deprecated"));
        assert!(out.contains("PB001_Counter_count"));
        assert!(!out.contains("\"Count\""));
    }

    #[test]
    fn clean_types_emit_no_warnings() {
        assert!(!expand(&person()).contains("deprecated"));
    }
}
