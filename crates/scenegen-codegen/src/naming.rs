//! Identifier sanitizers and per-generation unique names.

use convert_case::{Case, Casing};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"))
}

/// Reduce a display name to ASCII words separated by single spaces.
fn words(name: &str) -> String {
    separators().replace_all(name, " ").trim().to_string()
}

/// Convert `name` to `case`, falling back to `fallback` for names with no
/// usable characters and prefixing names that start with a digit.
fn sanitize(name: &str, case: Case, fallback: &str, digit_prefix: &str) -> String {
    let words = words(name);
    if words.is_empty() {
        return fallback.to_string();
    }
    let converted = words.to_case(case);
    if converted.is_empty() {
        return fallback.to_string();
    }
    if converted.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", digit_prefix, converted)
    } else {
        converted
    }
}

/// PascalCase component identifier; never empty.
pub fn pascal_case(name: &str) -> String {
    sanitize(name, Case::Pascal, "Component", "Component")
}

/// camelCase identifier; never empty.
pub fn camel_case(name: &str) -> String {
    sanitize(name, Case::Camel, "node", "node")
}

/// kebab-case class or file name; never empty.
pub fn kebab_case(name: &str) -> String {
    sanitize(name, Case::Kebab, "node", "node-")
}

/// snake_case file name; never empty.
pub fn snake_case(name: &str) -> String {
    sanitize(name, Case::Snake, "component", "component_")
}

/// Hands out unique names for one generation call.
///
/// Every name carries a counter suffix, so siblings that share a display
/// name still get distinct identifiers. A fresh generator per top-level
/// call keeps output deterministic.
#[derive(Debug, Default)]
pub struct NameGenerator {
    counter: usize,
    used: HashSet<String>,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique kebab-case class name, e.g. `hero-card-3`.
    pub fn class_name(&mut self, name: &str) -> String {
        let base = kebab_case(name);
        self.unique(|n| format!("{}-{}", base, n))
    }

    /// Unique camelCase identifier, e.g. `heroCard3`.
    pub fn identifier(&mut self, name: &str) -> String {
        let base = camel_case(name);
        self.unique(|n| format!("{}{}", base, n))
    }

    fn unique(&mut self, make: impl Fn(usize) -> String) -> String {
        loop {
            self.counter += 1;
            let candidate = make(self.counter);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
