//! Numerais com algarismos: ordinais, números agrupados por espaços e a forma genérica.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // 1e, 1er, 1ère, 2e, 2nd, 2nde, 3e, 3ème, 45ème, 1000ème
    PatternDef {
        name: "ordinal_suffix",
        source: r"(\d+)(ème|er|e|ère|nde|nd)",
    },
    // 758 625 758 625 123; guloso, pode englobar números menores
    PatternDef {
        name: "grouped_digits",
        source: r"(\d{0,3}) (\d{0,3}) (\d{0,3}) (\d{1,3}) (\d{1,3})",
    },
    // 345, 23,2345, 1.2, 56/8
    PatternDef {
        name: "digits",
        source: r"(\d+)([,./]\d+)?",
    },
];

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::grammar::test_support::{detect, texts};

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(
            texts(Category::DigitNumeral, "le 1er, la 1ère, le 2nde et le 45ème"),
            vec!["1er", "1ère", "2nde", "45ème"]
        );
    }

    #[test]
    fn test_grouped_digits_also_report_groups() {
        let got = detect(Category::DigitNumeral, "758 625 758 625 123 habitants");
        assert_eq!(got[0], ("grouped_digits", "758 625 758 625 123".to_string()));
        // os grupos também aparecem pelo padrão genérico
        let groups: Vec<&str> = got
            .iter()
            .filter(|(p, _)| *p == "digits")
            .map(|(_, t)| t.as_str())
            .collect();
        assert_eq!(groups, vec!["758", "625", "758", "625", "123"]);
    }

    #[test]
    fn test_grouped_digits_after_space_rejected() {
        // o match guloso começa no espaço anterior e é rejeitado
        let got = detect(Category::DigitNumeral, "atteint 758 625 758 625 123");
        assert!(got.iter().all(|(p, _)| *p != "grouped_digits"));
    }

    #[test]
    fn test_digits_with_separators() {
        assert_eq!(
            texts(Category::DigitNumeral, "345, 23,2345, 1.2"),
            vec!["345", "23,2345", "1.2"]
        );
        assert_eq!(texts(Category::DigitNumeral, "56/8"), vec!["56/8"]);
    }

    #[test]
    fn test_percent_number_is_reported() {
        assert_eq!(texts(Category::DigitNumeral, "25%"), vec!["25"]);
    }
}
