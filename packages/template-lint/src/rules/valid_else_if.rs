//! Validation of `v-else-if` directive chains.

use crate::template::directives::DirectiveKind;
use crate::template::query::{has_bound_value, has_directive, preceding_element_sibling};

use super::{DirectiveRule, Reporter, RuleTarget};

pub const MISSING_PRECEDING_BRANCH: &str = "'v-else-if' directives require being preceded by the element which has a 'v-if' or 'v-else-if' directive.";
pub const CONFLICTING_IF_DIRECTIVE: &str =
    "'v-else-if' and 'v-if' directives can't exist on the same element.";
pub const CONFLICTING_ELSE_DIRECTIVE: &str =
    "'v-else-if' and 'v-else' directives can't exist on the same element.";
pub const UNEXPECTED_ARGUMENT: &str = "'v-else-if' directives require no argument.";
pub const UNEXPECTED_MODIFIERS: &str = "'v-else-if' directives require no modifier.";
pub const MISSING_VALUE: &str = "'v-else-if' directives require that attribute value.";

/// Checks that each `v-else-if` attribute is a legal continuation of a
/// conditional chain and that its key shape is well-formed.
///
/// The checks are independent and never short-circuit; one attribute can
/// accumulate several diagnostics in a single pass. Chain validity is a
/// single-hop property: only the nearest preceding element sibling of the
/// owning element is consulted.
pub struct ValidElseIf;

impl DirectiveRule for ValidElseIf {
    fn name(&self) -> &'static str {
        "valid-else-if"
    }

    fn selector(&self) -> DirectiveKind {
        DirectiveKind::ElseIf
    }

    fn check(&self, target: &RuleTarget<'_>, reporter: &mut dyn Reporter) {
        let attr = target.attribute;
        let key = match &attr.directive {
            Some(key) => key,
            // Selector dispatch only hands out directive attributes.
            None => return,
        };
        debug_assert!(
            key.kind == DirectiveKind::ElseIf,
            "valid-else-if invoked on a 'v-{}' attribute",
            key.name,
        );

        let preceded_by_branch = preceding_element_sibling(target.siblings, target.index)
            .is_some_and(|prev| {
                has_directive(prev, DirectiveKind::If)
                    || has_directive(prev, DirectiveKind::ElseIf)
            });
        if !preceded_by_branch {
            reporter.report(&attr.source_span, MISSING_PRECEDING_BRANCH);
        }

        if has_directive(target.element, DirectiveKind::If) {
            reporter.report(&attr.source_span, CONFLICTING_IF_DIRECTIVE);
        }

        if has_directive(target.element, DirectiveKind::Else) {
            reporter.report(&attr.source_span, CONFLICTING_ELSE_DIRECTIVE);
        }

        if key.argument.is_some() {
            reporter.report(&attr.source_span, UNEXPECTED_ARGUMENT);
        }

        if !key.modifiers.is_empty() {
            reporter.report(&attr.source_span, UNEXPECTED_MODIFIERS);
        }

        if !has_bound_value(attr) {
            reporter.report(&attr.source_span, MISSING_VALUE);
        }
    }
}
