//! The [Error] type returned by language loading and the builder API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No rule source is registered for this language code.
    #[error("no plural rules are available for language `{0}`")]
    UnknownLanguage(String),

    /// A builder method was called on a [Registry](crate::registry::Registry)
    /// before any language was selected.
    #[error("no language is active")]
    NoActiveLanguage,

    /// A builder method was called while the active language has no rule
    /// set. Load or create the language first.
    #[error("language `{0}` is active but has not been loaded")]
    LanguageNotLoaded(String),

    #[error("could not parse plural rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
