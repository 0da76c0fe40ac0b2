//! The [RuleSet] struct, which holds every plural rule for one language.
//!
//! A rule set has three independent tables:
//!
//! * Ordered pattern rules. The first rule whose pattern matches a word
//!   wins, so rules for specific endings ("-is" to "-es") must be added
//!   before general ones ("any consonant" to "+s").
//! * Irregular pairs, looked up by exact, case-sensitive word.
//! * Uncountable words, which pluralize to themselves.
//!
//! # Examples
//!
//! ```
//! use plural_rules::rule_set::RuleSet;
//!
//! let mut rules = RuleSet::new("en");
//! rules.add_plural_rule(r"([^aeiou])y$", "${1}ies")?;
//! rules.add_plural_rule(r"([a-rt-z])$", "${1}s")?;
//! rules.add_irregular("child", "children");
//! rules.add_uncountable("sheep");
//!
//! assert_eq!(rules.pluralize("cherry"), "cherries");
//! assert_eq!(rules.pluralize("dog"), "dogs");
//! assert_eq!(rules.pluralize("child"), "children");
//! assert_eq!(rules.pluralize("sheep"), "sheep");
//! # Ok::<(), plural_rules::error::Error>(())
//! ```

use crate::{error::Error, rule::PluralRule};
use indexmap::IndexMap;
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};
use tracing::trace;

#[derive(Clone, Debug)]
pub struct RuleSet {
    language: String,
    // Keyed by pattern so that re-adding a pattern replaces it in place.
    plurals: IndexMap<String, PluralRule>,
    irregulars: HashMap<String, String>,
    uncountables: HashSet<String>,
}

impl RuleSet {
    /// Creates an empty rule set for the given language code.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            plurals: IndexMap::new(),
            irregulars: HashMap::new(),
            uncountables: HashSet::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Adds a pattern rule after all existing rules. If a rule with the
    /// same pattern already exists its replacement is updated and it keeps
    /// its position. An invalid pattern leaves the rule set unchanged.
    pub fn add_plural_rule(
        &mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<(), Error> {
        let rule = PluralRule::new(pattern, replacement)?;
        self.plurals.insert(pattern.to_string(), rule);
        Ok(())
    }

    /// Adds each `(pattern, replacement)` pair in order. Stops at the first
    /// invalid pattern; the pairs before it stay added.
    pub fn add_plural_rules<I, P, R>(&mut self, rules: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        for (pattern, replacement) in rules {
            self.add_plural_rule(pattern.as_ref(), replacement)?;
        }
        Ok(())
    }

    pub fn add_irregular(&mut self, singular: impl Into<String>, plural: impl Into<String>) {
        self.irregulars.insert(singular.into(), plural.into());
    }

    pub fn add_irregulars<I, S, P>(&mut self, words: I)
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        for (singular, plural) in words {
            self.add_irregular(singular, plural);
        }
    }

    /// Marks a word as uncountable. Surrounding whitespace is trimmed.
    pub fn add_uncountable(&mut self, word: impl AsRef<str>) {
        self.uncountables.insert(word.as_ref().trim().to_string());
    }

    pub fn add_uncountables<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        for word in words {
            self.add_uncountable(word);
        }
    }

    /// Returns the pattern rules in the order they are tried.
    pub fn plural_rules(&self) -> impl Iterator<Item = &PluralRule> {
        self.plurals.values()
    }

    pub fn irregular(&self, singular: &str) -> Option<&str> {
        self.irregulars.get(singular).map(String::as_str)
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(word)
    }

    pub fn plural_rule_count(&self) -> usize {
        self.plurals.len()
    }

    pub fn irregular_count(&self) -> usize {
        self.irregulars.len()
    }

    pub fn uncountable_count(&self) -> usize {
        self.uncountables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plurals.is_empty() && self.irregulars.is_empty() && self.uncountables.is_empty()
    }

    /// Returns the plural form of `word` after trimming surrounding
    /// whitespace. Uncountables are checked first, then irregulars, then
    /// the pattern rules in order. A word that nothing matches is returned
    /// as is. This never fails, and it only allocates when a pattern rule
    /// rewrites the word.
    ///
    /// The result has whatever casing the matching entry produces. Nothing
    /// is done to make it match the casing of `word`.
    pub fn pluralize<'a>(&'a self, word: &'a str) -> Cow<'a, str> {
        let word = word.trim();

        if self.uncountables.contains(word) {
            trace!(language = %self.language, word, "uncountable");
            return Cow::Borrowed(word);
        }

        if let Some(plural) = self.irregulars.get(word) {
            trace!(language = %self.language, word, plural = %plural, "irregular");
            return Cow::Borrowed(plural.as_str());
        }

        for rule in self.plurals.values() {
            if let Some(plural) = rule.apply(word) {
                trace!(
                    language = %self.language,
                    word,
                    pattern = rule.pattern(),
                    plural = %plural,
                    "pattern rule"
                );
                return plural;
            }
        }

        trace!(language = %self.language, word, "no rule matched");
        Cow::Borrowed(word)
    }
}
