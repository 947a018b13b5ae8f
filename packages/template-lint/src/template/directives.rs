//! Directive attribute keys.
//!
//! A raw attribute name such as `v-else-if:arg.m1.m2` decomposes into a
//! directive name, an optional colon-qualified argument and zero or more
//! dot-suffixed modifiers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Splits a directive attribute name into name, argument and modifiers
    static ref DIRECTIVE_KEY_REGEXP: Regex =
        Regex::new(r"^v-([^:.\s]+)(?::([^:.\s]+))?((?:\.[^:.\s]+)*)$").unwrap();
}

/// Directive kind tag, decided once when the attribute node is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    If,
    ElseIf,
    Else,
    Other,
}

impl DirectiveKind {
    pub fn from_name(name: &str) -> DirectiveKind {
        match name {
            "if" => DirectiveKind::If,
            "else-if" => DirectiveKind::ElseIf,
            "else" => DirectiveKind::Else,
            _ => DirectiveKind::Other,
        }
    }
}

/// Decomposed directive attribute name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveKey {
    pub kind: DirectiveKind,
    pub name: String,
    pub argument: Option<String>,
    pub modifiers: Vec<String>,
}

impl DirectiveKey {
    /// Recognizes a directive attribute name. Plain attributes and names
    /// that do not match the `v-name[:argument][.modifier]*` shape return
    /// `None`.
    pub fn parse(attr_name: &str) -> Option<DirectiveKey> {
        let captures = DIRECTIVE_KEY_REGEXP.captures(attr_name)?;

        let name = captures.get(1).map(|m| m.as_str())?.to_string();
        let argument = captures.get(2).map(|m| m.as_str().to_string());
        let modifiers: Vec<String> = captures
            .get(3)
            .map(|m| m.as_str())
            .unwrap_or("")
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect();

        let kind = DirectiveKind::from_name(&name);
        Some(DirectiveKey {
            kind,
            name,
            argument,
            modifiers,
        })
    }
}
