#[macro_use]
mod macros;

use std::{any::TypeId, fmt};

/// Leading marker every bound backing field name must carry.
pub const BACKING_FIELD_MARKER: char = '_';

/// Return whether `name` follows the backing-field naming convention.
///
/// The marker alone (`_`) is a wildcard, not a field name.
#[must_use]
pub fn is_backing_field_name(name: &str) -> bool {
    name.strip_prefix(BACKING_FIELD_MARKER)
        .is_some_and(|rest| !rest.is_empty())
}

///
/// TypeCategory
///
/// Value-type category of a bound member. The five scalar categories get
/// their own typed lookup; everything else shares the generic lookup.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeCategory {
    Int,
    Text,
    Bool,
    Float32,
    Float64,
    Generic,
}

impl TypeCategory {
    /// Classify a type by its display name.
    ///
    /// Exact match only: `std::string::String` or `i64` are `Generic`.
    #[must_use]
    pub fn classify(type_name: &str) -> Self {
        category_registry!(classify_from_registry, type_name)
    }

    /// Category a runtime lookup for `V` is routed to.
    #[must_use]
    pub fn of<V: 'static>() -> Self {
        category_registry!(of_from_registry, TypeId::of::<V>())
    }

    /// Canonical type name for scalar categories.
    #[must_use]
    pub const fn type_name(self) -> Option<&'static str> {
        category_registry!(type_name_from_registry, self)
    }

    #[must_use]
    pub const fn is_generic(self) -> bool {
        matches!(self, Self::Generic)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Text => "Text",
            Self::Bool => "Bool",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Generic => "Generic",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scalar categories in registry order.
pub const FAST_CATEGORIES: [TypeCategory; 5] = category_registry!(fast_categories_from_registry);

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MemberKind {
    Field,
    ComputedProperty,
}

impl MemberKind {
    #[must_use]
    pub const fn is_field(self) -> bool {
        matches!(self, Self::Field)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => f.write_str("field"),
            Self::ComputedProperty => f.write_str("computed property"),
        }
    }
}
