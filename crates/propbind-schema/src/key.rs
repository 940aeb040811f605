use convert_case::{Case, Casing};
use derive_more::{Deref, Display};
use propbind_primitives::BACKING_FIELD_MARKER;

///
/// BindableKey
///
/// Public string key of a member: one leading marker stripped, first
/// letter upper-cased, the rest kept verbatim.
/// `_first_name` becomes `First_name`, a computed `total` becomes `Total`.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BindableKey(String);

impl BindableKey {
    #[must_use]
    pub fn from_member_name(name: &str) -> Self {
        let stripped = name.strip_prefix(BACKING_FIELD_MARKER).unwrap_or(name);

        let mut chars = stripped.chars();
        let key = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Self(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the associated constant in the key registry.
    #[must_use]
    pub fn const_name(&self) -> String {
        self.0.to_case(Case::Constant)
    }

    /// snake_case name used for generated accessors.
    #[must_use]
    pub fn accessor_name(&self) -> String {
        self.0.to_case(Case::Snake)
    }

    #[must_use]
    pub fn setter_name(&self) -> String {
        format!("set_{}", self.accessor_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_one_marker_and_upper_cases_the_first_letter() {
        assert_eq!(BindableKey::from_member_name("_count").as_str(), "Count");
        assert_eq!(BindableKey::from_member_name("_first_name").as_str(), "First_name");
        assert_eq!(BindableKey::from_member_name("_firstName").as_str(), "FirstName");
        assert_eq!(BindableKey::from_member_name("total").as_str(), "Total");
    }

    #[test]
    fn acronyms_and_digits_are_kept_verbatim() {
        assert_eq!(BindableKey::from_member_name("_maxHP").as_str(), "MaxHP");
        assert_eq!(BindableKey::from_member_name("_URL").as_str(), "URL");
        assert_eq!(BindableKey::from_member_name("_item2count").as_str(), "Item2count");
    }

    #[test]
    fn only_one_marker_is_stripped() {
        assert_eq!(BindableKey::from_member_name("__name").as_str(), "_name");
        assert_eq!(BindableKey::from_member_name("_").as_str(), "");
    }

    #[test]
    fn derived_names() {
        let key = BindableKey::from_member_name("_first_name");

        assert_eq!(key.const_name(), "FIRST_NAME");
        assert_eq!(key.accessor_name(), "first_name");
        assert_eq!(key.setter_name(), "set_first_name");
    }

    #[test]
    fn differently_spelled_fields_can_collide() {
        assert_eq!(
            BindableKey::from_member_name("_Name"),
            BindableKey::from_member_name("_name")
        );
        assert_ne!(
            BindableKey::from_member_name("_ab_c"),
            BindableKey::from_member_name("_abC")
        );
    }

    proptest! {
        #[test]
        fn key_keeps_the_tail_verbatim(name in "_[a-z][a-zA-Z0-9_]{0,12}") {
            let key = BindableKey::from_member_name(&name);

            prop_assert!(key.chars().next().is_some_and(char::is_uppercase));
            prop_assert_eq!(&key.as_str()[1..], &name[2..]);
        }

        #[test]
        fn normalisation_is_idempotent(name in "_[a-z][a-zA-Z0-9_]{0,12}") {
            let key = BindableKey::from_member_name(&name);
            let again = BindableKey::from_member_name(key.as_str());

            prop_assert_eq!(key, again);
        }
    }
}
