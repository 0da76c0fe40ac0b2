//! The [Registry] struct, which caches one [RuleSet] per language code.
//!
//! Languages are materialized lazily. Each code can have a [RuleSource], a
//! plain function that fills in an empty rule set. The first call to
//! [Registry::load_language] for a code runs its source and caches the
//! result, and later calls are served from the cache.
//!
//! The registry also tracks an active language. It is used by
//! [Registry::pluralize] and by the builder methods on the registry
//! itself. Code that already has a `&mut RuleSet` (from
//! [Registry::create_language] or [Registry::rule_set_mut]) does not need
//! it.
//!
//! # Examples
//!
//! ```
//! use plural_rules::{error::Error, registry::Registry, rule_set::RuleSet};
//!
//! fn pirate(rules: &mut RuleSet) -> Result<(), Error> {
//!     rules.add_plural_rule(r"([a-z])$", "${1}z")?;
//!     rules.add_irregular("parrot", "parrotz o' the sea");
//!     Ok(())
//! }
//!
//! let mut registry = Registry::new();
//! registry.register_source("pirate", pirate);
//! assert!(registry.load_language("pirate"));
//! assert_eq!(registry.active_language(), Some("pirate"));
//! assert_eq!(registry.pluralize("ship"), "shipz");
//!
//! // Unknown languages fall back to returning the word unchanged.
//! assert_eq!(registry.pluralize_in("klingon", " ship "), "ship");
//! ```

use crate::{error::Error, rule_set::RuleSet};
use std::{borrow::Cow, collections::HashMap};
use tracing::{debug, warn};

/// The language loaded by [Registry::default].
pub const DEFAULT_LANGUAGE: &str = "en";

/// A function that populates an empty rule set for one language.
pub type RuleSource = fn(&mut RuleSet) -> Result<(), Error>;

#[derive(Clone, Debug)]
pub struct Registry {
    rule_sets: HashMap<String, RuleSet>,
    sources: HashMap<String, RuleSource>,
    active: Option<String>,
}

impl Registry {
    /// Creates a registry with no languages loaded and no active language.
    /// When the `builtin-rules` feature is enabled the crate's own rule
    /// sources are registered, but none of them is run yet.
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self {
            rule_sets: HashMap::new(),
            sources: HashMap::new(),
            active: None,
        };
        #[cfg(feature = "builtin-rules")]
        for (code, source) in crate::rules::BUILTIN {
            registry.register_source(*code, *source);
        }
        registry
    }

    /// Registers the rule source for `code`, replacing any earlier one. A
    /// language that was already loaded keeps its cached rules.
    pub fn register_source(&mut self, code: impl Into<String>, source: RuleSource) {
        self.sources.insert(code.into(), source);
    }

    pub fn has_source(&self, code: &str) -> bool {
        self.sources.contains_key(code)
    }

    /// Loads the rules for `code`, returning `true` on success. See
    /// [Registry::try_load_language] for the details. Failures are logged.
    pub fn load_language(&mut self, code: &str) -> bool {
        match self.try_load_language(code) {
            Ok(_) => true,
            Err(e) => {
                warn!(language = code, error = %e, "could not load plural rules");
                false
            }
        }
    }

    /// Loads the rules for `code` and returns them.
    ///
    /// If `code` is already loaded this returns the cached rules and
    /// changes nothing else, including the active language. Otherwise
    /// `code` becomes the active language and its source is run against a
    /// new, empty rule set. On success that rule set is cached and `code`
    /// stays active. On failure nothing is cached and the previously
    /// active language is restored.
    pub fn try_load_language(&mut self, code: &str) -> Result<&RuleSet, Error> {
        if self.rule_sets.contains_key(code) {
            debug!(language = code, "plural rules already loaded");
            return Ok(&self.rule_sets[code]);
        }

        let source = *self
            .sources
            .get(code)
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))?;

        let previous = self.active.replace(code.to_string());
        let mut rule_set = RuleSet::new(code);
        if let Err(e) = source(&mut rule_set) {
            self.active = previous;
            return Err(e);
        }

        debug!(
            language = code,
            plural_rules = rule_set.plural_rule_count(),
            irregulars = rule_set.irregular_count(),
            uncountables = rule_set.uncountable_count(),
            "loaded plural rules"
        );
        Ok(self
            .rule_sets
            .entry(code.to_string())
            .or_insert(rule_set))
    }

    /// Returns the rule set for `code`, inserting an empty one if it is not
    /// loaded. No rule source is run and the active language is unchanged.
    pub fn create_language(&mut self, code: &str) -> &mut RuleSet {
        self.rule_sets
            .entry(code.to_string())
            .or_insert_with(|| RuleSet::new(code))
    }

    /// Makes `code` the active language. It does not need to be loaded.
    pub fn set_language(&mut self, code: impl Into<String>) {
        let code = code.into();
        debug!(language = %code, "selected language");
        self.active = Some(code);
    }

    pub fn active_language(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_loaded(&self, code: &str) -> bool {
        self.rule_sets.contains_key(code)
    }

    pub fn rule_set(&self, code: &str) -> Option<&RuleSet> {
        self.rule_sets.get(code)
    }

    pub fn rule_set_mut(&mut self, code: &str) -> Option<&mut RuleSet> {
        self.rule_sets.get_mut(code)
    }

    /// Returns the codes of all loaded languages, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.rule_sets.keys().map(String::as_str)
    }

    fn active_rule_set_mut(&mut self) -> Result<&mut RuleSet, Error> {
        let code = self.active.as_deref().ok_or(Error::NoActiveLanguage)?;
        self.rule_sets
            .get_mut(code)
            .ok_or_else(|| Error::LanguageNotLoaded(code.to_string()))
    }

    /// Adds a pattern rule to the active language. See
    /// [RuleSet::add_plural_rule].
    pub fn add_plural_rule(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<(), Error> {
        self.active_rule_set_mut()?
            .add_plural_rule(pattern, replacement)
    }

    pub fn add_plural_rules<I, P, R>(&mut self, rules: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        self.active_rule_set_mut()?.add_plural_rules(rules)
    }

    pub fn add_irregular(
        &mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Result<(), Error> {
        self.active_rule_set_mut()?.add_irregular(singular, plural);
        Ok(())
    }

    pub fn add_irregulars<I, S, P>(&mut self, words: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        self.active_rule_set_mut()?.add_irregulars(words);
        Ok(())
    }

    pub fn add_uncountable(&mut self, word: impl AsRef<str>) -> Result<(), Error> {
        self.active_rule_set_mut()?.add_uncountable(word);
        Ok(())
    }

    pub fn add_uncountables<I, W>(&mut self, words: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.active_rule_set_mut()?.add_uncountables(words);
        Ok(())
    }

    /// Pluralizes `word` using the active language. With no active
    /// language, or one that is not loaded, this returns the trimmed word.
    pub fn pluralize<'a>(&'a self, word: &'a str) -> Cow<'a, str> {
        match self.active.as_deref() {
            Some(code) => self.pluralize_in(code, word),
            None => Cow::Borrowed(word.trim()),
        }
    }

    /// Pluralizes `word` using the language `code`, which does not have to
    /// be the active one. If `code` is not loaded this returns the trimmed
    /// word.
    pub fn pluralize_in<'a>(&'a self, code: &str, word: &'a str) -> Cow<'a, str> {
        match self.rule_sets.get(code) {
            Some(rule_set) => rule_set.pluralize(word),
            None => Cow::Borrowed(word.trim()),
        }
    }
}

impl Default for Registry {
    /// Creates a registry with [DEFAULT_LANGUAGE] loaded and active. If it
    /// cannot be loaded the registry is still usable, and every word
    /// pluralizes to itself.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.load_language(DEFAULT_LANGUAGE);
        registry
    }
}
