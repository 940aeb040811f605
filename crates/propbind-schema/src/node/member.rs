use crate::{prelude::*, validate::naming::validate_field_name};
use proc_macro2::{Span, TokenStream};
use quote::ToTokens;

///
/// TypeRef
///
/// Declared value type of a member. `display` is the token text with
/// whitespace removed, which is what the classifier matches on.
///

#[derive(Clone, Debug)]
pub struct TypeRef {
    pub display: String,
    pub tokens: TokenStream,
}

impl TypeRef {
    pub fn new(ty: &impl ToTokens) -> Self {
        let tokens = ty.to_token_stream();
        let display = tokens
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        Self { display, tokens }
    }

    #[must_use]
    pub fn category(&self) -> TypeCategory {
        TypeCategory::classify(&self.display)
    }
}

///
/// DeclaredBody
///
/// Expression body of a computed property, kept as raw tokens so references
/// inside macro invocations are still visible to the dependency scan.
///

#[derive(Clone, Debug)]
pub struct DeclaredBody {
    pub tokens: TokenStream,
}

impl DeclaredBody {
    #[must_use]
    pub const fn new(tokens: TokenStream) -> Self {
        Self { tokens }
    }
}

///
/// MemberDescriptor
///

#[derive(Clone, Debug)]
pub struct MemberDescriptor {
    pub name: String,
    pub value_type: TypeRef,
    pub kind: MemberKind,
    pub body: Option<DeclaredBody>,
    pub accessibility: Accessibility,
    pub span: Span,
}

impl MemberDescriptor {
    pub fn field(name: impl Into<String>, value_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            value_type,
            kind: MemberKind::Field,
            body: None,
            accessibility: Accessibility::default(),
            span: Span::call_site(),
        }
    }

    pub fn computed(name: impl Into<String>, value_type: TypeRef, body: TokenStream) -> Self {
        Self {
            name: name.into(),
            value_type,
            kind: MemberKind::ComputedProperty,
            body: Some(DeclaredBody::new(body)),
            accessibility: Accessibility::default(),
            span: Span::call_site(),
        }
    }

    #[must_use]
    pub const fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub const fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub const fn is_field(&self) -> bool {
        self.kind.is_field()
    }

    /// Naming check for fields; computed properties always pass.
    pub fn validate(&self) -> Result<(), Diagnostic> {
        validate_field_name(self)
    }
}
