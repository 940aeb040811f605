use crate::{MemberKind, TypeCategory};

///
/// KeyInfo
///
/// Registry entry for one binding key, emitted as a `const` table by the
/// derive so it exists before any instance of the owner does.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyInfo {
    pub key: &'static str,
    pub member: &'static str,
    pub kind: MemberKind,
    pub category: TypeCategory,
    pub type_name: &'static str,
}

impl KeyInfo {
    #[must_use]
    pub const fn new(
        key: &'static str,
        member: &'static str,
        kind: MemberKind,
        category: TypeCategory,
        type_name: &'static str,
    ) -> Self {
        Self {
            key,
            member,
            kind,
            category,
            type_name,
        }
    }
}

///
/// Cascade
///
/// Direct dependents of one field key. Only the literal source fans out;
/// dependents never cascade further.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cascade {
    pub source: &'static str,
    pub dependents: &'static [&'static str],
}

impl Cascade {
    #[must_use]
    pub const fn new(source: &'static str, dependents: &'static [&'static str]) -> Self {
        Self { source, dependents }
    }
}

/// Find the dependents recorded for `key`, if any.
#[must_use]
pub fn dependents_of(table: &'static [Cascade], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|cascade| cascade.source == key)
        .map_or(&[], |cascade| cascade.dependents)
}

/// Find the registry entry for `key`.
#[must_use]
pub fn find_key(table: &'static [KeyInfo], key: &str) -> Option<&'static KeyInfo> {
    table.iter().find(|info| info.key == key)
}
