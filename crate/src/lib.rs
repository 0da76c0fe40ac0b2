// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize nouns using per-language rule tables.
//!
//! Each language has a [RuleSet](rule_set::RuleSet) made of three tables:
//! ordered regex rules ("-is" becomes "-es"), irregular pairs ("child"
//! becomes "children"), and uncountable words ("sheep" stays "sheep"). A
//! [Registry](registry::Registry) loads rule sets on demand from a rule
//! source per language code, caches them, and resolves words against the
//! active language.
//!
//! Resolution always produces a value. Uncountables win over irregulars,
//! irregulars win over rules, the first matching rule wins over later ones,
//! and a word that nothing matches comes back unchanged. So does any word
//! in a language that has no rules loaded.
//!
//! # Examples
//!
//! The crate-level [pluralize] function uses a shared registry with the
//! English rules loaded.
//!
//! ```
//! assert_eq!(plural_rules::pluralize("matrix"), "matrices");
//! assert_eq!(plural_rules::pluralize("child"), "children");
//! assert_eq!(plural_rules::pluralize("sheep"), "sheep");
//! assert_eq!(plural_rules::pluralize("  dog "), "dogs");
//! ```
//!
//! For other languages, or to add your own rules, build a
//! [Registry](registry::Registry).
//!
//! ```
//! use plural_rules::registry::Registry;
//!
//! let mut registry = Registry::default();
//! assert!(registry.load_language("es"));
//! assert_eq!(registry.pluralize("luz"), "luces");
//!
//! registry.add_irregular("pez", "peces")?;
//! assert_eq!(registry.pluralize("pez"), "peces");
//! assert_eq!(registry.pluralize_in("en", "knife"), "knives");
//! # Ok::<(), plural_rules::error::Error>(())
//! ```
//!
//! # Logging
//!
//! The crate emits [tracing](https://docs.rs/tracing) events: `debug` when
//! languages are loaded or selected, `warn` when a load fails, and `trace`
//! for each resolved word. It never installs a subscriber.
//!
//! # Features
//!
//! * `builtin-rules` (enabled by default): registers the English (`en`) and
//!   Spanish (`es`) rule sources in every new registry.

pub mod error;
pub mod registry;
pub mod rule;
pub mod rule_set;
#[cfg(feature = "builtin-rules")]
pub mod rules;

use once_cell::sync::Lazy;
use registry::Registry;
use std::borrow::Cow;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::default);

/// Returns the plural of `word` using the shared default registry, which
/// has [DEFAULT_LANGUAGE](registry::DEFAULT_LANGUAGE) loaded. The registry
/// is built on first use and never changes afterwards.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    REGISTRY.pluralize(word)
}
