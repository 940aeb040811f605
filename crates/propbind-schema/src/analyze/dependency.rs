use crate::prelude::*;
use proc_macro2::{TokenStream, TokenTree};
use propbind_primitives::is_backing_field_name;

///
/// DependencyEdge
///
/// One backing field and the computed properties whose bodies read it, in
/// the order those properties were declared.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DependencyEdge {
    pub source_field: String,
    pub source_key: BindableKey,
    pub dependents: Vec<BindableKey>,
}

///
/// DependencyGraph
///
/// Field name -> dependent computed-property keys. Edges are ordered by the
/// first property that referenced each field. Cycles are harmless: dispatch
/// only ever forwards a key one level, it never re-evaluates a body.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DependencyGraph {
    edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    /// Build the graph from computed properties in declaration order.
    ///
    /// Fields are not passed in; anything else in the iterator without a
    /// body contributes nothing.
    pub fn analyze<'a>(members: impl IntoIterator<Item = &'a MemberDescriptor>) -> Self {
        let mut graph = Self::default();

        for member in members {
            if member.kind != MemberKind::ComputedProperty {
                continue;
            }
            let Some(body) = &member.body else {
                continue;
            };

            let dependent = BindableKey::from_member_name(&member.name);
            for field in field_references(&body.tokens) {
                graph.add_edge(&field, &dependent);
            }
        }

        graph
    }

    fn add_edge(&mut self, field: &str, dependent: &BindableKey) {
        let pos = match self.edges.iter().position(|e| e.source_field == field) {
            Some(pos) => pos,
            None => {
                self.edges.push(DependencyEdge {
                    source_field: field.to_string(),
                    source_key: BindableKey::from_member_name(field),
                    dependents: Vec::new(),
                });
                self.edges.len() - 1
            }
        };

        let edge = &mut self.edges[pos];
        if !edge.dependents.contains(dependent) {
            edge.dependents.push(dependent.clone());
        }
    }

    /// Keep only edges whose source is one of `fields`.
    ///
    /// Bodies may read locals that merely look like backing fields; those
    /// can never change through a setter so they are dropped.
    #[must_use]
    pub fn retain_sources<'a>(mut self, fields: impl IntoIterator<Item = &'a str>) -> Self {
        let fields = fields.into_iter().collect::<Vec<_>>();
        self.edges.retain(|edge| fields.contains(&edge.source_field.as_str()));
        self
    }

    #[must_use]
    pub fn dependents_of_field(&self, field: &str) -> &[BindableKey] {
        self.edges
            .iter()
            .find(|edge| edge.source_field == field)
            .map_or(&[], |edge| edge.dependents.as_slice())
    }

    #[must_use]
    pub fn dependents_of_key(&self, key: &str) -> &[BindableKey] {
        self.edges
            .iter()
            .find(|edge| edge.source_key.as_str() == key)
            .map_or(&[], |edge| edge.dependents.as_slice())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DependencyEdge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a DependencyGraph {
    type Item = &'a DependencyEdge;
    type IntoIter = std::slice::Iter<'a, DependencyEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Distinct backing-field identifiers in a body, first-seen order.
///
/// Walks nested groups, so `format!("{}", self._name)` counts too.
#[must_use]
pub fn field_references(tokens: &TokenStream) -> Vec<String> {
    let mut found = Vec::new();
    collect_references(tokens.clone(), &mut found);

    found
}

fn collect_references(tokens: TokenStream, found: &mut Vec<String>) {
    for tree in tokens {
        match tree {
            TokenTree::Ident(ident) => {
                let name = ident.to_string();
                let name = name.trim_start_matches("r#");

                if is_backing_field_name(name) && !found.iter().any(|f| f == name) {
                    found.push(name.to_string());
                }
            }
            TokenTree::Group(group) => collect_references(group.stream(), found),
            TokenTree::Punct(_) | TokenTree::Literal(_) => {}
        }
    }
}
