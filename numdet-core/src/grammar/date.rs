//! Datas: dia + mês por extenso, forma numérica e mês abreviado.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // 21 juillet 2021, 21 juillet
    PatternDef {
        name: "day_month_year",
        source: r"([0-3][0-9]) (janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)( [12][0-9][0-9][0-9])?",
    },
    // 21/07/2021, 21/07/21
    PatternDef {
        name: "numeric_date",
        source: r"([0-3][0-9])/([01][0-9])/([12]?[0-9]?[0-9][0-9])",
    },
    // 21 juill. 2021, 21 juill 2021, 21 juill., 21 juill
    PatternDef {
        name: "day_abbreviated_month",
        source: r"([0-3][0-9]) (jan\.?|févr\.?|avr\.?|juill\.?|sept\.?|oct\.?|nov\.?|déc\.?) ?([12][0-9][0-9][0-9])?",
    },
];

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::grammar::test_support::{detect, texts};

    #[test]
    fn test_full_month_name() {
        assert_eq!(texts(Category::Date, "21 juillet 2021"), vec!["21 juillet 2021"]);
        assert_eq!(
            detect(Category::Date, "Le 14 juillet 1789, la Bastille tombe."),
            vec![("day_month_year", "14 juillet 1789".to_string())]
        );
        assert_eq!(texts(Category::Date, "le 01 mai"), vec!["01 mai"]);
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(texts(Category::Date, "né le 21/07/2021"), vec!["21/07/2021"]);
        assert_eq!(texts(Category::Date, "du 03/09/21 au"), vec!["03/09/21"]);
    }

    #[test]
    fn test_abbreviated_month() {
        assert_eq!(texts(Category::Date, "le 21 juill. 2021"), vec!["21 juill. 2021"]);
        assert_eq!(texts(Category::Date, "le 03 févr. 2020 à"), vec!["03 févr. 2020"]);
        assert_eq!(texts(Category::Date, "le 21 juill 2021"), vec!["21 juill 2021"]);
    }

    #[test]
    fn test_abbreviation_inside_full_name_is_rejected() {
        // "21 jan" termina no meio de "janvier": apenas a forma completa sobrevive
        assert_eq!(
            detect(Category::Date, "21 janvier"),
            vec![("day_month_year", "21 janvier".to_string())]
        );
    }

    #[test]
    fn test_single_digit_day_is_not_a_date() {
        assert!(texts(Category::Date, "le 3 févr. 2020").is_empty());
        assert!(texts(Category::Date, "").is_empty());
    }
}
