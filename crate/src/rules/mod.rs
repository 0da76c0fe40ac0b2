//! Built-in rule sources.
//!
//! Each submodule has a `define` function with the [RuleSource] signature.
//! [Registry::new](crate::registry::Registry::new) registers every entry
//! of [BUILTIN].

use crate::registry::RuleSource;

pub mod en;
pub mod es;

/// Every built-in language code and its rule source.
pub const BUILTIN: &[(&str, RuleSource)] = &[("en", en::define), ("es", es::define)];

/// Returns the built-in rule source for `code`, if there is one.
pub fn builtin(code: &str) -> Option<RuleSource> {
    BUILTIN
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use crate::rule_set::RuleSet;

    #[test]
    fn builtin() {
        for (code, _) in super::BUILTIN {
            let source = super::builtin(code).expect("builtin source exists");
            let mut rules = RuleSet::new(*code);
            source(&mut rules).unwrap_or_else(|e| panic!("rules for {} are valid: {}", code, e));
            assert!(!rules.is_empty(), "rules for {} are not empty", code);
        }
        assert!(super::builtin("tlh").is_none());
    }
}
