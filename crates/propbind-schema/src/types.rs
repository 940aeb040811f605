use crate::Error;
use darling::FromMeta;
use derive_more::Display;
use proc_macro2::TokenStream;
use quote::quote;
use std::str::FromStr;
use syn::Lit;

///
/// Accessibility
///
/// Visibility of generated accessors. The integer form mirrors the
/// declaration order: 0 = public, 1 = protected, 2 = private, 3 = internal.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Private,
    Internal,
}

impl Accessibility {
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Public),
            1 => Some(Self::Protected),
            2 => Some(Self::Private),
            3 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Visibility tokens for generated methods.
    ///
    /// Rust has no `protected`. It is crate-wide like `Internal`, which stays
    /// valid wherever the host type is declared, crate root included.
    #[must_use]
    pub fn visibility(self) -> TokenStream {
        match self {
            Self::Public => quote!(pub),
            Self::Protected => quote!(pub(crate)),
            Self::Private => quote!(),
            Self::Internal => quote!(pub(crate)),
        }
    }
}

impl FromStr for Accessibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            "internal" => Ok(Self::Internal),
            _ => Err(Error::UnknownAccessibility(s.to_string())),
        }
    }
}

impl FromMeta for Accessibility {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }

    fn from_value(value: &Lit) -> Result<Self, darling::Error> {
        match value {
            Lit::Str(lit) => Self::from_string(&lit.value()),
            Lit::Int(lit) => {
                let index = lit.base10_parse::<u8>()?;

                Self::from_index(index).ok_or_else(|| {
                    darling::Error::custom(format!(
                        "accessibility index {index} outside of range 0-3"
                    ))
                })
            }
            _ => Err(darling::Error::unexpected_lit_type(value)),
        }
        .map_err(|err| err.with_span(value))
    }
}
