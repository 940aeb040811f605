use crate::prelude::*;
use propbind_primitives::is_backing_field_name;

/// Accept a field iff its name carries the backing-field marker.
///
/// Computed properties are public-facing names and are never rejected here.
pub fn validate_field_name(member: &MemberDescriptor) -> Result<(), Diagnostic> {
    if !member.is_field() || is_backing_field_name(&member.name) {
        return Ok(());
    }

    Err(Diagnostic::naming_violation(&member.name, member.span))
}

/// Split members into accepted ones and per-member rejections.
///
/// A rejection never aborts its siblings.
pub fn partition_members(
    members: Vec<MemberDescriptor>,
) -> (Vec<MemberDescriptor>, Vec<Diagnostic>) {
    let mut accepted = Vec::with_capacity(members.len());
    let mut diagnostics = Vec::new();

    for member in members {
        match validate_field_name(&member) {
            Ok(()) => accepted.push(member),
            Err(diag) => diagnostics.push(diag),
        }
    }

    (accepted, diagnostics)
}
