//! # Gramáticas por Categoria
//!
//! Cada categoria possui uma tabela declarativa de padrões ([`PatternDef`]),
//! ordenada do mais específico para o mais genérico. A tabela é compilada uma
//! única vez em uma [`CategoryGrammar`].
//!
//! ## Semântica de varredura
//!
//! 1. Cada padrão varre o texto **inteiro**, com a semântica leftmost-first sem
//!    sobreposição da crate `regex`.
//! 2. Cada candidato passa pelo [`SpanValidator`]; rejeitados são descartados.
//! 3. A saída é "todos os matches do padrão 1, depois todos do padrão 2...":
//!    os padrões não são intercalados por posição.
//!
//! Não há supressão: um padrão posterior pode reportar um trecho contido em um
//! match de um padrão anterior (ex: `deux` dentro de `deux-mille`).

mod currency;
mod date;
mod digit;
mod measurement;
mod percent;
mod roman;
mod spelled;
mod temperature;
mod time;

use regex::Regex;
use tracing::trace;

use crate::category::{Category, Match};
use crate::error::{DetectError, Result};
use crate::span::SpanValidator;

/// Definição estática de um padrão: nome (proveniência) + fonte da regex.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub name: &'static str,
    pub source: &'static str,
}

/// Tabela de padrões de uma categoria, na ordem de execução.
pub fn table(category: Category) -> &'static [PatternDef] {
    match category {
        Category::Date => date::PATTERNS,
        Category::Time => time::PATTERNS,
        Category::Percent => percent::PATTERNS,
        Category::Currency => currency::PATTERNS,
        Category::Temperature => temperature::PATTERNS,
        Category::Measurement => measurement::PATTERNS,
        Category::DigitNumeral => digit::PATTERNS,
        Category::SpelledNumeral => spelled::PATTERNS,
        Category::RomanNumeral => roman::PATTERNS,
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    name: &'static str,
    regex: Regex,
}

/// Gramática compilada de uma categoria.
///
/// Imutável após a construção; pode ser compartilhada entre threads.
#[derive(Debug, Clone)]
pub struct CategoryGrammar {
    category: Category,
    patterns: Vec<CompiledPattern>,
}

impl CategoryGrammar {
    /// Compila a tabela da categoria. Falha apenas se algum padrão for inválido.
    pub fn compile(category: Category) -> Result<Self> {
        let patterns = table(category)
            .iter()
            .map(|def| {
                Regex::new(def.source)
                    .map(|regex| CompiledPattern { name: def.name, regex })
                    .map_err(|source| DetectError::InvalidPattern {
                        category,
                        pattern: def.name,
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { category, patterns })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Nomes dos padrões, na ordem de execução.
    pub fn pattern_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    /// Varre `text` e produz os matches validados, de forma preguiçosa.
    ///
    /// Cada chamada recomeça do início: o iterador não guarda estado entre chamadas.
    /// `validator` deve ter sido construído para o mesmo `text`.
    pub fn detect<'a, V>(&'a self, text: &'a str, validator: &'a V) -> impl Iterator<Item = Match> + 'a
    where
        V: SpanValidator + ?Sized + 'a,
    {
        let category = self.category;
        self.patterns.iter().flat_map(move |pattern| {
            pattern.regex.find_iter(text).filter_map(move |m| {
                let span = validator.validate(m.start(), m.end());
                if span.is_none() {
                    trace!(
                        category = category.name(),
                        pattern = pattern.name,
                        start = m.start(),
                        end = m.end(),
                        "candidato rejeitado pelo validador"
                    );
                }
                span.map(|span| Match {
                    span,
                    category,
                    pattern: pattern.name,
                })
            })
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{CharBoundaries, TokenBoundaries};

    #[test]
    fn test_every_table_compiles() {
        for category in Category::ALL {
            let grammar = CategoryGrammar::compile(category).unwrap();
            assert_eq!(grammar.category(), category);
            assert_eq!(grammar.pattern_names().count(), table(category).len());
            assert!(!table(category).is_empty());
        }
    }

    #[test]
    fn test_pattern_names_unique_within_category() {
        for category in Category::ALL {
            let mut names: Vec<&str> = table(category).iter().map(|p| p.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table(category).len(), "{category}");
        }
    }

    #[test]
    fn test_detect_is_restartable() {
        let grammar = CategoryGrammar::compile(Category::DigitNumeral).unwrap();
        let text = "345, 23,2345 et 56/8";
        let validator = TokenBoundaries::new(text);
        let first: Vec<Match> = grammar.detect(text, &validator).collect();
        let second: Vec<Match> = grammar.detect(text, &validator).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_patterns_are_not_interleaved() {
        // "1er" vem do padrão 0; "2" e "3" do padrão 2, mesmo estando antes no texto
        let got = test_support::detect(Category::DigitNumeral, "2 et 3 puis 1er");
        assert_eq!(
            got,
            vec![
                ("ordinal_suffix", "1er".to_string()),
                ("digits", "2".to_string()),
                ("digits", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejected_candidates_are_dropped() {
        let grammar = CategoryGrammar::compile(Category::RomanNumeral).unwrap();
        let text = "Il vient";
        let strict = TokenBoundaries::new(text);
        assert_eq!(grammar.detect(text, &strict).count(), 0);

        // Sem tokenização, "I" e "l" de "Il" e o "vi" de "vient" passam
        let permissive = CharBoundaries::new(text);
        let loose: Vec<String> = grammar
            .detect(text, &permissive)
            .map(|m| m.span.text)
            .collect();
        assert_eq!(loose, vec!["I", "l", "vi"]);
    }
}
