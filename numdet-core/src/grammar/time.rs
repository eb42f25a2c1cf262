//! Horários: `13h43`, `13h`, `13:43`, `13:43:05`.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    PatternDef {
        name: "hour_h_minutes",
        source: r"[0-2][0-9][hH]([0-5][0-9])?",
    },
    PatternDef {
        name: "colon_time",
        source: r"[0-2][0-9]:[0-5][0-9](:[0-5][0-9])?",
    },
];

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::grammar::test_support::{detect, texts};

    #[test]
    fn test_hour_h_minutes() {
        assert_eq!(texts(Category::Time, "13h43"), vec!["13h43"]);
        assert_eq!(texts(Category::Time, "à 13h"), vec!["13h"]);
        assert_eq!(texts(Category::Time, "vers 15H30."), vec!["15H30"]);
    }

    #[test]
    fn test_colon_time() {
        assert_eq!(
            detect(Category::Time, "à 13:43:05."),
            vec![("colon_time", "13:43:05".to_string())]
        );
        assert_eq!(texts(Category::Time, "08:15"), vec!["08:15"]);
    }

    #[test]
    fn test_partial_tokens_rejected() {
        // "13h4" não é fronteira; "13h43min" é um único token
        assert!(texts(Category::Time, "13h43min").is_empty());
        assert!(texts(Category::Time, "1h").is_empty());
    }
}
