//! # Spans e Validação de Fronteiras
//!
//! Um [`Span`] é um trecho contíguo e **validado** do texto de origem. As gramáticas
//! nunca constroem spans diretamente: cada candidato encontrado por uma regex passa
//! por um [`SpanValidator`], que confirma o trecho ou o rejeita.
//!
//! ## Por que validar?
//!
//! As regex varrem o texto cru e não sabem nada sobre palavras. Sem validação,
//! o padrão de algarismos romanos encontraria `I` dentro de `Il`, e o padrão de
//! datas abreviadas encontraria `21 jan` dentro de `21 janvier`. O validador
//! apoiado na tokenização ([`TokenBoundaries`]) exige que o match comece no início
//! de um token e termine no fim de outro.
//!
//! Uma rejeição **não é um erro**: o candidato é simplesmente descartado.

use serde::{Deserialize, Serialize};

use crate::tokenizer::{tokenize, Token};

/// Trecho validado do texto de origem.
///
/// # Exemplo
/// Em "Il fait 25°C", o span da temperatura:
/// `Span { start: 8, end: 13, text: "25°C" }` (offsets em bytes; `°` ocupa 2 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte inicial (inclusivo)
    pub start: usize,
    /// Byte final (exclusivo)
    pub end: usize,
    /// Exatamente `source[start..end]`
    pub text: String,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Verdadeiro se os dois spans compartilham ao menos um byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Colaborador que confirma (ou rejeita) um intervalo de bytes do texto.
///
/// Implementações devem ser construídas para o **mesmo texto** passado às gramáticas.
/// O validador é apenas lido pelo motor, inclusive a partir de várias threads
/// no modo paralelo, daí o requisito `Sync`.
pub trait SpanValidator: Sync {
    /// Retorna o span correspondente a `start..end`, ou `None` se o intervalo
    /// não estiver alinhado com as fronteiras aceitas.
    fn validate(&self, start: usize, end: usize) -> Option<Span>;
}

/// Validador estrito baseado na tokenização do texto.
///
/// Aceita `start..end` somente se `start` é o início de algum token e `end`
/// é o fim de algum token (possivelmente outro).
#[derive(Debug, Clone)]
pub struct TokenBoundaries<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    /// Inícios de token, ordenados (tokens saem do tokenizador em ordem)
    starts: Vec<usize>,
    /// Fins de token, ordenados
    ends: Vec<usize>,
}

impl<'a> TokenBoundaries<'a> {
    /// Tokeniza `text` e indexa as fronteiras.
    pub fn new(text: &'a str) -> Self {
        Self::from_tokens(text, tokenize(text))
    }

    /// Usa uma tokenização externa (ex: de outro pipeline de NLP).
    ///
    /// Os tokens devem ter offsets de byte válidos para `text`.
    pub fn from_tokens(text: &'a str, tokens: Vec<Token>) -> Self {
        let mut starts: Vec<usize> = tokens.iter().map(|t| t.start).collect();
        let mut ends: Vec<usize> = tokens.iter().map(|t| t.end).collect();
        starts.sort_unstable();
        ends.sort_unstable();
        Self {
            text,
            tokens,
            starts,
            ends,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl SpanValidator for TokenBoundaries<'_> {
    fn validate(&self, start: usize, end: usize) -> Option<Span> {
        if start >= end || end > self.text.len() {
            return None;
        }
        if self.starts.binary_search(&start).is_err() || self.ends.binary_search(&end).is_err() {
            return None;
        }
        self.text.get(start..end).map(|text| Span {
            start,
            end,
            text: text.to_string(),
        })
    }
}

/// Validador permissivo: aceita qualquer intervalo não vazio alinhado a caracteres UTF-8.
///
/// Útil quando não há tokenização disponível.
#[derive(Debug, Clone, Copy)]
pub struct CharBoundaries<'a> {
    text: &'a str,
}

impl<'a> CharBoundaries<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl SpanValidator for CharBoundaries<'_> {
    fn validate(&self, start: usize, end: usize) -> Option<Span> {
        if start >= end {
            return None;
        }
        self.text.get(start..end).map(|text| Span {
            start,
            end,
            text: text.to_string(),
        })
    }
}
