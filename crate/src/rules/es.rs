//! Spanish plural rules.
//!
//! Written stress is not moved, so words like "camión" are handled by their
//! own ending rule instead of the general consonant rule.

use crate::{error::Error, rule_set::RuleSet};

pub fn define(rules: &mut RuleSet) -> Result<(), Error> {
    rules.add_plural_rules([
        // camión, canción
        (r"ión$", "iones"),
        // luz, lápiz
        (r"z$", "ces"),
        (r"([aeiouáéíóú])$", "${1}s"),
        // árbol, rey, papel
        (r"([^aeiouáéíóú])$", "${1}es"),
    ])?;

    rules.add_irregulars([
        ("carácter", "caracteres"),
        ("espécimen", "especímenes"),
        ("régimen", "regímenes"),
    ]);

    rules.add_uncountables([
        "análisis", "crisis", "jueves", "lunes", "martes", "miércoles", "tesis", "viernes",
        "virus",
    ]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::rule_set::RuleSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn plurals() {
        let mut rules = RuleSet::new("es");
        super::define(&mut rules).expect("Spanish rules are valid");

        let tests = [
            ("casa", "casas"),
            ("libro", "libros"),
            ("café", "cafés"),
            ("luz", "luces"),
            ("lápiz", "lápices"),
            ("camión", "camiones"),
            ("árbol", "árboles"),
            ("rey", "reyes"),
            ("papel", "papeles"),
            ("régimen", "regímenes"),
            ("carácter", "caracteres"),
            ("lunes", "lunes"),
            ("crisis", "crisis"),
        ];
        for test in tests {
            assert_eq!(
                rules.pluralize(test.0),
                test.1,
                "pluralize({}) = {}",
                test.0,
                test.1,
            );
        }
    }
}
