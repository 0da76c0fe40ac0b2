//! English plural rules.

use crate::{error::Error, rule_set::RuleSet};

/// Populates `rules` with the English rule table. Specific endings come
/// before the catch-all consonant rule. Words ending in "s" match no rule
/// and are returned unchanged.
pub fn define(rules: &mut RuleSet) -> Result<(), Error> {
    rules.add_plural_rules([
        // matrix, vertex, index
        (r"(matr|vert|ind)(ix|ex)$", "${1}ices"),
        // sibilants without a trailing e
        (r"(ss|sh|ch|x|z)$", "${1}es"),
        // hero, potato
        (r"([^aeiou])o$", "${1}oes"),
        // cherry, soliloquy
        (r"([^aeiou]|qu)y$", "${1}ies"),
        // synopsis, diagnosis
        (r"sis$", "ses"),
        // mouse, louse
        (r"(m|l)ouse$", "${1}ice"),
        // datum, medium
        (r"(t|i)um$", "${1}a"),
        // knife, life, shelf
        (r"([li])fe?$", "${1}ves"),
        // octopus, virus, syllabus
        (r"(octop|vir|syllab)us$", "${1}i"),
        // axis, testis
        (r"(ax|test)is$", "${1}es"),
        // anything not ending in s
        (r"([a-rt-z])$", "${1}s"),
    ])?;

    rules.add_irregulars([
        ("bus", "busses"),
        ("child", "children"),
        ("foot", "feet"),
        ("goose", "geese"),
        ("man", "men"),
        ("ox", "oxen"),
        ("person", "people"),
        ("quiz", "quizzes"),
        ("tooth", "teeth"),
        ("woman", "women"),
    ]);

    rules.add_uncountables([
        "equipment",
        "fish",
        "information",
        "money",
        "moose",
        "news",
        "rice",
        "series",
        "sheep",
        "species",
    ]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::rule_set::RuleSet;
    use pretty_assertions::assert_eq;

    fn rules() -> RuleSet {
        let mut rules = RuleSet::new("en");
        super::define(&mut rules).expect("English rules are valid");
        rules
    }

    #[test]
    fn plurals() {
        let rules = rules();
        let tests = [
            ("matrix", "matrices"),
            ("vertex", "vertices"),
            ("index", "indices"),
            ("glass", "glasses"),
            ("match", "matches"),
            ("dish", "dishes"),
            ("box", "boxes"),
            ("hero", "heroes"),
            ("cherry", "cherries"),
            ("soliloquy", "soliloquies"),
            ("day", "days"),
            ("diagnosis", "diagnoses"),
            ("mouse", "mice"),
            ("louse", "lice"),
            ("datum", "data"),
            ("medium", "media"),
            ("knife", "knives"),
            ("life", "lives"),
            ("shelf", "shelves"),
            ("syllabus", "syllabi"),
            ("octopus", "octopi"),
            ("virus", "viri"),
            ("axis", "axes"),
            ("dogs", "dogs"),
            ("dog", "dogs"),
            ("Dog", "Dogs"),
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

    #[test]
    fn irregulars() {
        let rules = rules();
        let tests = [
            ("bus", "busses"),
            ("child", "children"),
            ("man", "men"),
            ("woman", "women"),
            ("person", "people"),
            ("quiz", "quizzes"),
            ("goose", "geese"),
        ];
        for test in tests {
            assert_eq!(rules.pluralize(test.0), test.1, "{} is irregular", test.0);
        }
    }

    #[test]
    fn uncountables() {
        let rules = rules();
        for word in [
            "news", "money", "rice", "sheep", "fish", "species", "series", "moose",
        ] {
            assert_eq!(rules.pluralize(word), word, "{} is uncountable", word);
        }
    }
}
