//! # Corpus de Frases em Francês Anotadas
//!
//! Frases de exemplo com as expressões numéricas que o detector deve encontrar.
//! Usado nos testes orientados a dados e como textos de demonstração no servidor web.
//!
//! ## Domínios Cobertos
//! - História
//! - Economia
//! - Ciências
//! - Agenda (datas e horários)
//! - Ordinais
//! - Números

use crate::category::Category;
use crate::category::Category::*;

/// Uma frase anotada com os matches esperados.
///
/// A lista `expected` não é exaustiva: o detector pode reportar matches
/// adicionais (ex: os algarismos dentro de uma data), mas deve reportar todos
/// os listados, com a categoria indicada.
pub struct AnnotatedSample {
    pub text: &'static str,
    /// Domínio temático (agrupa os textos na interface).
    pub domain: &'static str,
    /// Pares (categoria, trecho).
    pub expected: &'static [(Category, &'static str)],
}

/// Retorna o corpus completo.
pub fn samples() -> Vec<AnnotatedSample> {
    vec![
        // ===== HISTÓRIA =====
        AnnotatedSample {
            text: "Le 14 juillet 1789, la Bastille tombe vers 15h30.",
            domain: "histoire",
            expected: &[
                (Date, "14 juillet 1789"),
                (Time, "15h30"),
                (DigitNumeral, "14"),
                (DigitNumeral, "1789"),
            ],
        },
        AnnotatedSample {
            text: "Louis XIV règne au XVIIe siècle, bien avant le XXIe siècle.",
            domain: "histoire",
            expected: &[
                (RomanNumeral, "XVIIe"),
                (RomanNumeral, "XXIe"),
                (RomanNumeral, "XIV"),
            ],
        },
        // ===== ÉCONOMIE =====
        AnnotatedSample {
            text: "Le contrat prévoit 4 millions d'euros, soit 12,5% du budget et 15.00 $ de frais.",
            domain: "économie",
            expected: &[
                (Percent, "12,5%"),
                (Currency, "4 millions d'euros"),
                (Currency, "15.00 $"),
                (DigitNumeral, "15.00"),
            ],
        },
        AnnotatedSample {
            text: "Le budget atteint 2 milliards €, en hausse de 3,2 p. cent sur un an.",
            domain: "économie",
            expected: &[
                (Percent, "3,2 p. cent"),
                (Currency, "2 milliards €"),
                (DigitNumeral, "3,2"),
            ],
        },
        // ===== SCIENCES =====
        AnnotatedSample {
            text: "Le moteur délivre 150 kW pour 1,2 t et 90 km/h.",
            domain: "sciences",
            expected: &[
                (Measurement, "150 kW"),
                (Measurement, "1,2 t"),
                (Measurement, "90 km/h"),
            ],
        },
        AnnotatedSample {
            text: "La solution de 58 cl est chauffée à 23,4°C pendant 13h43min.",
            domain: "sciences",
            expected: &[
                (Temperature, "23,4°C"),
                (Measurement, "58 cl"),
                (DigitNumeral, "23,4"),
            ],
        },
        // ===== AGENDA =====
        AnnotatedSample {
            text: "Il est arrivé le 03 févr. 2020 à 08:15.",
            domain: "agenda",
            expected: &[
                (Date, "03 févr. 2020"),
                (Time, "08:15"),
                (DigitNumeral, "2020"),
            ],
        },
        AnnotatedSample {
            text: "Rendez-vous le 21/07/21 à 13:43:05.",
            domain: "agenda",
            expected: &[
                (Date, "21/07/21"),
                (Time, "13:43:05"),
                (DigitNumeral, "21/07"),
            ],
        },
        // ===== ORDINAUX =====
        AnnotatedSample {
            text: "Il termine premier, puis seconde place, et enfin dix-huitième.",
            domain: "ordinaux",
            expected: &[
                (SpelledNumeral, "premier"),
                (SpelledNumeral, "seconde"),
                (SpelledNumeral, "dix-huitième"),
            ],
        },
        AnnotatedSample {
            text: "Le 2nde tour, la 45ème édition et le 1er prix.",
            domain: "ordinaux",
            expected: &[
                (DigitNumeral, "2nde"),
                (DigitNumeral, "45ème"),
                (DigitNumeral, "1er"),
            ],
        },
        // ===== NOMBRES =====
        AnnotatedSample {
            text: "Il compte quatre-vingt-dix-neuf moutons et deux-mille-vingt-trois brebis.",
            domain: "nombres",
            expected: &[
                (SpelledNumeral, "quatre-vingt-dix-neuf"),
                (SpelledNumeral, "deux-mille"),
                (SpelledNumeral, "mille-vingt-trois"),
                (SpelledNumeral, "dix-neuf"),
            ],
        },
        AnnotatedSample {
            text: "(1 000 000 000 000) étoiles, 345 planètes et 56/8 comètes.",
            domain: "nombres",
            expected: &[
                (DigitNumeral, "1 000 000 000 000"),
                (DigitNumeral, "345"),
                (DigitNumeral, "56/8"),
            ],
        },
    ]
}

/// Pares (domínio, texto) exibidos pela interface de demonstração.
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    samples().into_iter().map(|s| (s.domain, s.text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::NumericDetector;

    #[test]
    fn test_every_expected_match_is_found() {
        let detector = NumericDetector::new().unwrap();
        for sample in samples() {
            let found: Vec<(Category, String)> = detector
                .analyze(sample.text)
                .into_iter()
                .map(|m| (m.category, m.span.text))
                .collect();
            for &(category, text) in sample.expected {
                assert!(
                    found.contains(&(category, text.to_string())),
                    "{category} '{text}' ausente em: {}",
                    sample.text
                );
            }
        }
    }

    #[test]
    fn test_expected_spans_are_substrings() {
        for sample in samples() {
            assert!(!sample.expected.is_empty());
            for (_, text) in sample.expected {
                assert!(sample.text.contains(text), "{text}");
            }
        }
    }

    #[test]
    fn test_demo_texts_cover_all_samples() {
        let demos = demo_texts();
        assert_eq!(demos.len(), samples().len());
        assert!(demos.iter().any(|(domain, _)| *domain == "sciences"));
    }
}
