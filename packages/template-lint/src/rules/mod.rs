//! Rule registration and template traversal.
//!
//! The registry walks an already-parsed tree in document order and hands
//! each directive attribute to the rules registered for its kind. Rules are
//! stateless; each invocation reads only the target it is handed, so a host
//! may run disjoint subtrees in parallel with per-subtree reporters.

use serde_json::Value;
use thiserror::Error;

use crate::parse_util::{Diagnostic, ParseSourceSpan};
use crate::template::ast::{Attribute, Element, Node};
use crate::template::directives::DirectiveKind;

pub mod valid_else_if;

pub use valid_else_if::ValidElseIf;

/// Diagnostic sink handed to rules. Fire-and-forget: no return value, no
/// feedback into the traversal.
pub trait Reporter {
    fn report(&mut self, span: &ParseSourceSpan, message: &str);
}

/// Reporter that accumulates diagnostics in memory.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        DiagnosticCollector { diagnostics: vec![] }
    }

    /// Renders the collected diagnostics for the host linter.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.diagnostics).unwrap_or(Value::Null)
    }
}

impl Reporter for DiagnosticCollector {
    fn report(&mut self, span: &ParseSourceSpan, message: &str) {
        self.diagnostics
            .push(Diagnostic::new(span.clone(), message.to_string()));
    }
}

/// Everything a rule may inspect for one matched directive attribute.
pub struct RuleTarget<'a> {
    /// The matched directive attribute.
    pub attribute: &'a Attribute,
    /// The element the attribute is written on.
    pub element: &'a Element,
    /// The sibling list containing `element`, in document order.
    pub siblings: &'a [Node],
    /// Position of `element` within `siblings`.
    pub index: usize,
}

/// A validation pass keyed to one directive kind.
pub trait DirectiveRule {
    fn name(&self) -> &'static str;

    /// The directive kind whose attribute nodes this rule wants to see.
    fn selector(&self) -> DirectiveKind;

    fn check(&self, target: &RuleTarget<'_>, reporter: &mut dyn Reporter);
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("rule \"{0}\" is already registered")]
    DuplicateRule(String),
}

/// Holds the registered rules and drives traversal.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn DirectiveRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        RuleRegistry { rules: vec![] }
    }

    /// Registering the same rule name twice is a host wiring bug.
    pub fn register(&mut self, rule: Box<dyn DirectiveRule>) -> Result<(), RegistryError> {
        if self.rules.iter().any(|existing| existing.name() == rule.name()) {
            return Err(RegistryError::DuplicateRule(rule.name().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Walks `nodes` in document order, invoking every rule whose selector
    /// matches each directive attribute encountered.
    pub fn run(&self, nodes: &[Node], reporter: &mut dyn Reporter) {
        self.walk(nodes, reporter);
    }

    fn walk(&self, siblings: &[Node], reporter: &mut dyn Reporter) {
        for (index, node) in siblings.iter().enumerate() {
            if let Node::Element(element) = node {
                for attr in &element.attrs {
                    if let Some(key) = &attr.directive {
                        let target = RuleTarget {
                            attribute: attr,
                            element,
                            siblings,
                            index,
                        };
                        for rule in &self.rules {
                            if rule.selector() == key.kind {
                                rule.check(&target, reporter);
                            }
                        }
                    }
                }
                self.walk(&element.children, reporter);
            }
        }
    }
}

/// Registry preloaded with the shipped rules.
pub fn default_registry() -> RuleRegistry {
    RuleRegistry {
        rules: vec![Box::new(ValidElseIf)],
    }
}

/// Validates a parsed template tree with the default rules.
pub fn lint(nodes: &[Node]) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    default_registry().run(nodes, &mut collector);
    collector.diagnostics
}
