use crate::{
    MAX_KEY_LEN, MAX_MEMBERS,
    prelude::*,
    validate::reserved::{is_reserved_accessor, is_reserved_word},
};
use std::collections::HashMap;

/// Validate keys across every accepted member of one type.
///
/// Two members normalising to the same key is a hard error naming both;
/// nothing downstream arbitrates between them.
pub fn validate_keys(type_name: &str, members: &[BoundMember], errs: &mut ErrorTree) {
    if members.len() > MAX_MEMBERS {
        err!(
            errs,
            proc_macro2::Span::call_site(),
            "'{type_name}' binds {} members, the maximum is {MAX_MEMBERS}",
            members.len()
        );
    }

    let mut seen: HashMap<&str, &BoundMember> = HashMap::new();
    let mut accessors: HashMap<String, &BoundMember> = HashMap::new();

    for member in members {
        let key = member.key.as_str();
        let name = &member.descriptor.name;
        let span = member.descriptor.span;

        if key.is_empty() {
            err!(errs, span, "member '{name}' normalises to an empty binding key");
            continue;
        }

        if !key.starts_with(|c: char| c.is_ascii_alphabetic()) {
            err!(
                errs,
                span,
                "binding key '{key}' of member '{name}' must start with a letter"
            );
            continue;
        }

        if key.len() > MAX_KEY_LEN {
            err!(
                errs,
                span,
                "binding key '{key}' exceeds max length {MAX_KEY_LEN}"
            );
        }

        let accessor = member.key.accessor_name();
        if is_reserved_accessor(&accessor) {
            err!(
                errs,
                span,
                "member '{name}' would generate accessor '{accessor}', which is reserved"
            );
        }
        if is_reserved_word(&accessor) {
            err!(errs, span, "the word '{accessor}' is reserved");
        }

        if let Some(prev) = seen.insert(key, member) {
            err!(
                errs,
                span,
                "duplicate binding key '{key}': {} '{}' and {} '{name}' both normalise to it",
                prev.descriptor.kind,
                prev.descriptor.name,
                member.descriptor.kind,
            );
        } else if let Some(prev) = accessors.insert(accessor.clone(), member) {
            err!(
                errs,
                span,
                "binding keys '{}' and '{key}' both generate accessor '{accessor}'",
                prev.key,
            );
        }
    }
}
