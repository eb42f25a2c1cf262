//! # Categorias e Matches
//!
//! Define as categorias de expressões numéricas reconhecidas e o tipo [`Match`],
//! um span rotulado com a categoria e o padrão que o produziu.
//!
//! ## Categorias
//!
//! | Categoria        | Rótulo        | Exemplos                              |
//! |------------------|---------------|---------------------------------------|
//! | Date             | `date`        | 21 juillet 2021, 21/07/21, 21 juill.  |
//! | Time             | `time`        | 13h43, 13:43:05                       |
//! | Percent          | `percent`     | 25%, 25 p. cent                       |
//! | Currency         | `currency`    | 5 €, 4 millions d'euros               |
//! | Temperature      | `temperature` | 25°C, 23,4°                           |
//! | Measurement      | `mesure`      | 58 cl, 90 km/h                        |
//! | DigitNumeral     | `number`      | 1er, 345, 1 000 000 000 000           |
//! | SpelledNumeral   | `alpha`       | mille-deux-cent-vingt, troisième      |
//! | RomanNumeral     | `roman`       | XIXème, XIV, vii                      |
//!
//! A ordem de declaração é também a ordem em que o motor executa as gramáticas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Categorias de expressões numéricas.
///
/// Conjunto fechado: adicionar uma categoria significa adicionar uma nova
/// gramática em [`crate::grammar`], sem modificar as existentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Date,
    Time,
    Percent,
    Currency,
    Temperature,
    Measurement,
    /// Numerais com algarismos, incluindo ordinais (`1er`, `45ème`)
    DigitNumeral,
    /// Numerais por extenso, cardinais e ordinais
    SpelledNumeral,
    RomanNumeral,
}

impl Category {
    /// Todas as categorias, na ordem fixa de execução.
    pub const ALL: [Category; 9] = [
        Category::Date,
        Category::Time,
        Category::Percent,
        Category::Currency,
        Category::Temperature,
        Category::Measurement,
        Category::DigitNumeral,
        Category::SpelledNumeral,
        Category::RomanNumeral,
    ];

    /// Posição na ordem de declaração (0..9).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Nome estável (igual à serialização serde).
    pub fn name(&self) -> &'static str {
        match self {
            Category::Date => "date",
            Category::Time => "time",
            Category::Percent => "percent",
            Category::Currency => "currency",
            Category::Temperature => "temperature",
            Category::Measurement => "measurement",
            Category::DigitNumeral => "digit_numeral",
            Category::SpelledNumeral => "spelled_numeral",
            Category::RomanNumeral => "roman_numeral",
        }
    }

    /// Rótulo curto usado na saída textual (`date 21 juillet 2021`)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Date => "date",
            Category::Time => "time",
            Category::Percent => "percent",
            Category::Currency => "currency",
            Category::Temperature => "temperature",
            Category::Measurement => "mesure",
            Category::DigitNumeral => "number",
            Category::SpelledNumeral => "alpha",
            Category::RomanNumeral => "roman",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Erro de parse de [`Category`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("categoria desconhecida: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Aceita o nome (`digit_numeral`) ou o rótulo (`number`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s || c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Um span rotulado com sua categoria.
///
/// Produzido uma vez por aplicação bem-sucedida de um padrão. Matches nunca são
/// deduplicados: o mesmo trecho pode aparecer sob várias categorias
/// (ex: `25%` em Percent e `25` em DigitNumeral).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    #[serde(flatten)]
    pub span: Span,
    pub category: Category,
    /// Nome do padrão que produziu o match (proveniência)
    pub pattern: &'static str,
}

impl Match {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn text(&self) -> &str {
        &self.span.text
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.category.label(), self.span.text)
    }
}
