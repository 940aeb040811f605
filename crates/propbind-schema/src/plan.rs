use crate::{
    prelude::*,
    validate::{keys::validate_keys, naming::partition_members},
};

///
/// BoundMember
///
/// A member that survived naming validation, with its key and category.
///

#[derive(Clone, Debug)]
pub struct BoundMember {
    pub descriptor: MemberDescriptor,
    pub key: BindableKey,
    pub category: TypeCategory,
}

impl BoundMember {
    #[must_use]
    pub fn new(descriptor: MemberDescriptor) -> Self {
        let key = BindableKey::from_member_name(&descriptor.name);
        let category = descriptor.value_type.category();

        Self {
            descriptor,
            key,
            category,
        }
    }

    #[must_use]
    pub const fn is_field(&self) -> bool {
        self.descriptor.is_field()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

///
/// BindingPlan
///
/// Everything the emitters need for one host type: accepted members in
/// declaration order, the dependency graph and the non-fatal diagnostics.
///

#[derive(Clone, Debug)]
pub struct BindingPlan {
    pub type_name: String,
    pub members: Vec<BoundMember>,
    pub dependencies: DependencyGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl BindingPlan {
    /// Run the analysis pipeline over one type's members.
    ///
    /// Naming violations become diagnostics; key collisions and malformed
    /// computed properties are collected into the returned `ErrorTree`.
    pub fn build(
        type_name: impl Into<String>,
        members: Vec<MemberDescriptor>,
    ) -> Result<Self, ErrorTree> {
        let type_name = type_name.into();
        let mut errs = ErrorTree::new();

        // naming
        let (accepted, diagnostics) = partition_members(members);

        for member in &accepted {
            if member.kind == MemberKind::ComputedProperty && member.body.is_none() {
                err!(
                    errs,
                    member.span,
                    "computed property '{}' has no body",
                    member.name
                );
            }
        }

        // classification
        let members = accepted.into_iter().map(BoundMember::new).collect::<Vec<_>>();

        validate_keys(&type_name, &members, &mut errs);

        // dependencies
        let dependencies = DependencyGraph::analyze(members.iter().map(|m| &m.descriptor))
            .retain_sources(members.iter().filter(|m| m.is_field()).map(BoundMember::name));

        errs.result()?;

        Ok(Self {
            type_name,
            members,
            dependencies,
            diagnostics,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &BoundMember> {
        self.members.iter().filter(|m| m.is_field())
    }

    pub fn computed(&self) -> impl Iterator<Item = &BoundMember> {
        self.members.iter().filter(|m| !m.is_field())
    }

    /// Members routed to one lookup category.
    pub fn in_category(&self, category: TypeCategory) -> impl Iterator<Item = &BoundMember> {
        self.members.iter().filter(move |m| m.category == category)
    }

    /// Binding keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.key.as_str()).collect()
    }

    #[must_use]
    pub const fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
