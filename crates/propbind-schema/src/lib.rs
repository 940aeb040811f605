//! Build-time analysis for bindable types.
//!
//! Everything here is a pure function over [`node::MemberDescriptor`]s, so
//! the classifier, naming rules and dependency graph can be exercised
//! without running the derive.

pub mod analyze;
pub mod error;
pub mod key;
pub mod node;
pub mod plan;
pub mod types;
pub mod validate;

/// Maximum length of a bindable key.
pub const MAX_KEY_LEN: usize = 64;

/// Maximum number of bound members on one type.
pub const MAX_MEMBERS: usize = 256;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        analyze::{DependencyEdge, DependencyGraph},
        err,
        error::{AnalysisError, Diagnostic, DiagnosticCode, ErrorTree},
        key::BindableKey,
        node::{DeclaredBody, MemberDescriptor, TypeRef},
        plan::{BindingPlan, BoundMember},
        types::Accessibility,
    };
    pub use propbind_primitives::{MemberKind, TypeCategory};
}

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error("unsupported accessibility value '{0}'")]
    UnknownAccessibility(String),
}
