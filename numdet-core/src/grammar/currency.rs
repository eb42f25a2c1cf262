//! Valores monetários, com substantivo de moeda ou símbolo.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // 1 euro, 3,5 dollars, 4 millions de livres
    PatternDef {
        name: "amount_currency_noun",
        source: r"(\d+)([,.]\d{1,2})? (millions?|milliards?|billions?)? ?(de|d'|d’)? ?(euros?|dollars?|livres?|yen)",
    },
    // 5 €, 5€, 10,5 £, 15.00 $, 235 ¥
    PatternDef {
        name: "amount_currency_symbol",
        source: r"(\d+)([,.]\d{1,2})? ?[€$£¥]",
    },
    // 1 million $, 3 milliards d'€, 4,56 millions de ¥
    PatternDef {
        name: "amount_magnitude_symbol",
        source: r"(\d+)([,.]\d{1,2})? (millions?|milliards?|billions?) ?(de|d'|d’)? ?[€$£¥]",
    },
];

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::grammar::test_support::{detect, texts};

    #[test]
    fn test_currency_noun() {
        assert_eq!(texts(Category::Currency, "3,5 dollars"), vec!["3,5 dollars"]);
        assert_eq!(
            texts(Category::Currency, "Il a payé 4 millions d'euros le"),
            vec!["4 millions d'euros"]
        );
        assert_eq!(
            texts(Category::Currency, "2 milliards de livres"),
            vec!["2 milliards de livres"]
        );
        assert_eq!(texts(Category::Currency, "1 euro"), vec!["1 euro"]);
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(texts(Category::Currency, "5 €"), vec!["5 €"]);
        assert_eq!(texts(Category::Currency, "5€"), vec!["5€"]);
        assert_eq!(texts(Category::Currency, "15.00 $ et 235 ¥"), vec!["15.00 $", "235 ¥"]);
    }

    #[test]
    fn test_magnitude_symbol() {
        assert_eq!(
            detect(Category::Currency, "soit 4,56 millions de ¥, et"),
            vec![("amount_magnitude_symbol", "4,56 millions de ¥".to_string())]
        );
    }

    #[test]
    fn test_partial_currency_word_rejected() {
        // "5 euro" termina dentro de "eurodéputés"
        assert!(texts(Category::Currency, "5 eurodéputés").is_empty());
    }
}
