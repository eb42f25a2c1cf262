//! # numdet-core — Detecção de Expressões Numéricas em Francês
//!
//! Este crate localiza expressões numéricas em textos em francês e as rotula
//! em nove categorias: datas, horas, porcentagens, valores monetários,
//! temperaturas, medidas, numerais com algarismos, numerais por extenso e
//! algarismos romanos.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Texto bruto (`&str`).
//! 2.  **Tokenização** ([`tokenizer`]): define as fronteiras válidas de palavra, com offsets de byte.
//! 3.  **Gramáticas** ([`grammar`]): uma tabela ordenada de regex por categoria varre o texto inteiro.
//! 4.  **Validação** ([`span`]): cada candidato precisa começar e terminar em fronteiras de token.
//! 5.  **Saída**: Lista de [`Match`] na ordem categoria → padrão → posição, sem arbitragem.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use numdet_core::{Category, NumericDetector};
//!
//! let detector = NumericDetector::new().expect("padrões estáticos compilam");
//!
//! let matches = detector.analyze("Il fait 25°C le 21 juillet 2021.");
//!
//! assert!(matches
//!     .iter()
//!     .any(|m| m.category == Category::Date && m.text() == "21 juillet 2021"));
//! for m in &matches {
//!     println!("{m}");
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: Motor que executa as gramáticas e emite eventos.
//! - [`grammar`]: Tabelas de padrões por categoria.
//! - [`corpus`]: Frases de exemplo anotadas.

pub mod category;
pub mod corpus;
pub mod error;
pub mod grammar;
pub mod pipeline;
pub mod span;
pub mod tokenizer;

pub use category::{Category, Match, UnknownCategory};
pub use error::DetectError;
pub use grammar::{CategoryGrammar, PatternDef};
pub use pipeline::{group_by_category, CategoryMatches, DetectConfig, DetectionEvent, MatchOrder, NumericDetector};
pub use span::{CharBoundaries, Span, SpanValidator, TokenBoundaries};
pub use tokenizer::{tokenize, Token};
