//! Sibling and attribute queries over the template tree.
//!
//! The backward sibling scan lives here so that "which siblings count" is
//! decided in exactly one place.

use super::ast::{Attribute, Element, Node};
use super::directives::DirectiveKind;

/// Nearest preceding sibling of `siblings[index]` that is an element,
/// skipping text and comment nodes.
pub fn preceding_element_sibling(siblings: &[Node], index: usize) -> Option<&Element> {
    siblings[..index].iter().rev().find_map(|node| match node {
        Node::Element(element) => Some(element),
        _ => None,
    })
}

/// Whether `element` carries a directive attribute of the given kind.
pub fn has_directive(element: &Element, kind: DirectiveKind) -> bool {
    directive(element, kind).is_some()
}

/// First attribute on `element` whose directive key matches `kind`.
pub fn directive(element: &Element, kind: DirectiveKind) -> Option<&Attribute> {
    element
        .attrs
        .iter()
        .find(|attr| attr.directive.as_ref().is_some_and(|key| key.kind == kind))
}

/// Whether the attribute binds a non-empty expression. An attribute written
/// without a value, or with a blank one (`v-else-if=""`), does not.
pub fn has_bound_value(attr: &Attribute) -> bool {
    attr.value
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty())
}
