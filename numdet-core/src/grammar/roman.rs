//! Algarismos romanos com notação subtrativa estrita, sensível a maiúsculas.
//!
//! O padrão minúsculo aceita qualquer palavra escrita só com `i v x l c d m`
//! em notação válida (ex: `mix`, `dix`): falsos positivos conhecidos.

use super::PatternDef;

pub(super) const PATTERNS: &[PatternDef] = &[
    // Ier, Ière, IInd, IInde, IVème, Vème, VIIème, XIXème, Ie, Ve, XIXe
    PatternDef {
        name: "roman_ordinal",
        source: r"((M{1,4}(CM|(CD|(D?C{0,3})))?(XC|(XL|(L?X{0,3})))?(IX|(IV|(V?I{0,3})))?)|((CM|(CD|(DC{0,3})|(C{1,3})))(XC|(XL|(L?X{0,3})))?(IX|(IV|(V?I{0,3})))?)|((XC|(XL|(LX{0,3})|(X{1,3})))(IX|(IV|(V?I{0,3})))?)|((IX|(IV|(VI{0,3})|(I{1,3})))))(ème|er|e|ère|nde|nd)",
    },
    // I, II, IV, V, VII, MC, DC
    PatternDef {
        name: "roman_upper",
        source: r"(M{1,4}(CM|(CD|(D?C{0,3})))?(XC|(XL|(L?X{0,3})))?(IX|(IV|(V?I{0,3})))?)|((CM|(CD|(DC{0,3})|(C{1,3})))(XC|(XL|(L?X{0,3})))?(IX|(IV|(V?I{0,3})))?)|((XC|(XL|(LX{0,3})|(X{1,3})))(IX|(IV|(V?I{0,3})))?)|((IX|(IV|(VI{0,3})|(I{1,3}))))",
    },
    // i, ii, iv, v, vii, mc, dc
    PatternDef {
        name: "roman_lower",
        source: r"(m{1,4}(cm|(cd|(d?c{0,3})))?(xc|(xl|(l?x{0,3})))?(ix|(iv|(v?i{0,3})))?)|((cm|(cd|(dc{0,3})|(c{1,3})))(xc|(xl|(l?x{0,3})))?(ix|(iv|(v?i{0,3})))?)|((xc|(xl|(lx{0,3})|(x{1,3})))(ix|(iv|(v?i{0,3})))?)|((ix|(iv|(vi{0,3})|(i{1,3}))))",
    },
];

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::grammar::test_support::{detect, texts};

    #[test]
    fn test_roman_ordinal() {
        assert_eq!(
            detect(Category::RomanNumeral, "XIXème siècle"),
            vec![("roman_ordinal", "XIXème".to_string())]
        );
        assert_eq!(
            texts(Category::RomanNumeral, "le IIIe siècle, Ier, IInde"),
            vec!["IIIe", "Ier", "IInde"]
        );
    }

    #[test]
    fn test_bare_upper_and_lower() {
        assert_eq!(
            detect(Category::RomanNumeral, "Louis XIV et MCMXCIV, chapitre vii"),
            vec![
                ("roman_upper", "XIV".to_string()),
                ("roman_upper", "MCMXCIV".to_string()),
                ("roman_lower", "vii".to_string()),
            ]
        );
    }

    #[test]
    fn test_lowercase_false_positives_are_accepted() {
        assert_eq!(texts(Category::RomanNumeral, "mix et dix"), vec!["mix", "dix"]);
        // "mi" termina dentro de "mic"
        assert!(texts(Category::RomanNumeral, "mic").is_empty());
    }

    #[test]
    fn test_letters_inside_words_rejected() {
        assert!(texts(Category::RomanNumeral, "Il vient").is_empty());
        assert!(texts(Category::RomanNumeral, "").is_empty());
    }
}
