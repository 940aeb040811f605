use derive_more::{Deref, Display, IntoIterator};
use proc_macro2::Span;
use std::fmt;

///
/// err
/// push a formatted error onto an ErrorTree
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $span:expr, $($arg:tt)*) => {{
        $errs.add($crate::error::AnalysisError::new(format!($($arg)*), $span));
    }};
}

///
/// AnalysisError
///
/// One fatal problem found while analysing a type.
///

#[derive(Clone, Debug)]
pub struct AnalysisError {
    pub message: String,
    pub span: Span,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<AnalysisError> for darling::Error {
    fn from(err: AnalysisError) -> Self {
        syn::Error::new(err.span, err.message).into()
    }
}

///
/// ErrorTree
///
/// Accumulates every fatal error for a type so the user sees all of them in
/// one compile instead of one per attempt.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct ErrorTree {
    errors: Vec<AnalysisError>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, err: AnalysisError) {
        self.errors.push(err);
    }

    /// Ok if nothing was collected.
    pub fn result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collapse into a single darling error carrying every span.
    #[must_use]
    pub fn into_darling(self) -> darling::Error {
        darling::Error::multiple(self.errors.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        f.write_str(&messages.join("; "))
    }
}

///
/// DiagnosticCode
///
/// Stable machine-readable codes for non-fatal findings.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum DiagnosticCode {
    #[display("PB001")]
    NamingViolation,
}

///
/// Diagnostic
///
/// Non-fatal finding: the member is dropped, its siblings carry on.
///

#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub member: String,
    pub message: String,
    pub suggestion: String,
    pub span: Span,
}

impl Diagnostic {
    #[must_use]
    pub fn naming_violation(member: &str, span: Span) -> Self {
        let suggestion = format!("_{member}");

        Self {
            code: DiagnosticCode::NamingViolation,
            member: member.to_string(),
            message: format!(
                "bound field '{member}' must start with '_' and is excluded from bindings; rename it to '{suggestion}'"
            ),
            suggestion,
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn err_macro_collects_in_order() {
        let mut errs = ErrorTree::new();
        err!(errs, Span::call_site(), "first {}", 1);
        err!(errs, Span::call_site(), "second");

        let errs = errs.result().unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs.to_string(), "first 1; second");
    }

    #[test]
    fn naming_violation_suggests_prefixed_name() {
        let diag = Diagnostic::naming_violation("count", Span::call_site());

        assert_eq!(diag.code.to_string(), "PB001");
        assert_eq!(diag.suggestion, "_count");
        assert!(diag.to_string().starts_with("PB001: bound field 'count'"));
    }
}
