#![deny(clippy::all)]

//! Structural linting for Vue-style template directives.
//!
//! The host parser produces an immutable template tree; this crate walks it
//! and validates conditional-rendering directive chains (`v-if` /
//! `v-else-if` / `v-else`), reporting violations as span-anchored
//! diagnostics. No parsing, no expression evaluation, no tree mutation.

pub mod parse_util;
pub mod rules;
pub mod template;

// Re-exports
pub use parse_util::{Diagnostic, DiagnosticLevel, ParseSourceSpan};
pub use rules::{default_registry, lint, DiagnosticCollector, Reporter, RuleRegistry};
pub use template::ast::Node;
pub use template::directives::DirectiveKind;
