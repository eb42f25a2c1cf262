//! # Motor de Detecção com Eventos Observáveis
//!
//! O [`NumericDetector`] compila as nove gramáticas uma única vez e as executa
//! sobre um texto, na ordem fixa de declaração das categorias. Não há
//! arbitragem: os matches de todas as categorias são concatenados, inclusive
//! quando se sobrepõem.
//!
//! Além da forma preguiçosa ([`NumericDetector::run`]), o motor oferece uma forma
//! configurável ([`DetectConfig`]) e uma forma em streaming que emite eventos
//! via `mpsc`, usada pelo servidor WebSocket para transmitir o progresso.

use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, Match};
use crate::error::Result;
use crate::grammar::CategoryGrammar;
use crate::span::{SpanValidator, TokenBoundaries};
use crate::tokenizer::Token;

/// Ordem dos matches dentro de cada categoria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// Todos os matches do padrão 1, depois os do padrão 2, e assim por diante.
    #[default]
    Pattern,
    /// Ordenação estável por `(start, end)` dentro da categoria.
    Offset,
}

/// Opções de execução do motor.
///
/// Todos os campos têm default, então `{}` em JSON é uma configuração válida.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Categorias a executar. Vazio significa todas.
    pub categories: Vec<Category>,
    pub order: MatchOrder,
    /// Executa uma tarefa rayon por categoria. A saída é idêntica à sequencial.
    pub parallel: bool,
}

impl DetectConfig {
    /// Categorias efetivas: sem duplicatas, na ordem de declaração.
    pub fn resolved_categories(&self) -> Vec<Category> {
        normalize(&self.categories)
    }
}

fn normalize(categories: &[Category]) -> Vec<Category> {
    if categories.is_empty() {
        return Category::ALL.to_vec();
    }
    let mut resolved = categories.to_vec();
    resolved.sort_unstable();
    resolved.dedup();
    resolved
}

/// Matches de uma categoria, para exibição agrupada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatches {
    pub category: Category,
    pub label: &'static str,
    pub matches: Vec<Match>,
}

/// Agrupa os matches por categoria, na ordem de declaração.
///
/// Categorias sem nenhum match são omitidas. A ordem relativa dos matches de
/// cada categoria é preservada.
pub fn group_by_category(matches: &[Match]) -> Vec<CategoryMatches> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let selected: Vec<Match> = matches
                .iter()
                .filter(|m| m.category == category)
                .cloned()
                .collect();
            (!selected.is_empty()).then(|| CategoryMatches {
                category,
                label: category.label(),
                matches: selected,
            })
        })
        .collect()
}

/// Eventos emitidos durante a detecção em streaming.
///
/// Serializados como `{"type": "...", "data": ...}` para o frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DetectionEvent {
    /// **Passo 1**: tokenização concluída (define as fronteiras válidas).
    TokenizationDone { tokens: Vec<Token>, total: usize },
    /// Início da varredura de uma categoria, com seus padrões na ordem de execução.
    CategoryStarted {
        category: Category,
        patterns: Vec<&'static str>,
    },
    /// Um match validado.
    MatchFound(Match),
    /// Fim da varredura de uma categoria.
    CategoryDone { category: Category, count: usize },
    /// **Conclusão**: todos os matches, na ordem final.
    Done {
        matches: Vec<Match>,
        total: usize,
        processing_ms: u64,
    },
}

/// O detector de expressões numéricas.
///
/// Imutável após a construção e `Send + Sync`: pode ser compartilhado via `Arc`
/// entre requisições.
///
/// # Modos de Uso
/// - **Preguiçoso**: [`run`](Self::run) devolve um iterador que recomeça do zero a cada chamada.
/// - **Configurável**: [`detect_with`](Self::detect_with) aplica um [`DetectConfig`].
/// - **Streaming**: [`analyze_streaming`](Self::analyze_streaming) para UIs reativas.
#[derive(Debug, Clone)]
pub struct NumericDetector {
    /// Uma gramática por categoria, indexada por [`Category::index`]
    grammars: Vec<CategoryGrammar>,
}

impl NumericDetector {
    /// Compila todas as gramáticas.
    pub fn new() -> Result<Self> {
        let grammars = Category::ALL
            .iter()
            .map(|&category| CategoryGrammar::compile(category))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { grammars })
    }

    /// Gramática de uma única categoria.
    pub fn grammar(&self, category: Category) -> &CategoryGrammar {
        &self.grammars[category.index()]
    }

    pub fn grammars(&self) -> &[CategoryGrammar] {
        &self.grammars
    }

    /// Executa as categorias pedidas, em ordem de declaração, de forma preguiçosa.
    ///
    /// `categories` é normalizado (duplicatas removidas, reordenado); uma lista
    /// vazia significa todas as categorias.
    pub fn run<'a, V>(
        &'a self,
        text: &'a str,
        validator: &'a V,
        categories: &[Category],
    ) -> impl Iterator<Item = Match> + 'a
    where
        V: SpanValidator + ?Sized + 'a,
    {
        normalize(categories)
            .into_iter()
            .flat_map(move |category| self.grammar(category).detect(text, validator))
    }

    /// Todas as categorias.
    pub fn run_all<'a, V>(&'a self, text: &'a str, validator: &'a V) -> impl Iterator<Item = Match> + 'a
    where
        V: SpanValidator + ?Sized + 'a,
    {
        self.run(text, validator, &[])
    }

    /// Executa conforme `config` e coleta os matches.
    pub fn detect_with<V>(&self, text: &str, validator: &V, config: &DetectConfig) -> Vec<Match>
    where
        V: SpanValidator + ?Sized,
    {
        let categories = config.resolved_categories();
        let per_category: Vec<Vec<Match>> = if config.parallel {
            // collect em iterador indexado preserva a ordem das categorias
            categories
                .par_iter()
                .map(|&category| self.collect_category(category, text, validator, config.order))
                .collect()
        } else {
            categories
                .iter()
                .map(|&category| self.collect_category(category, text, validator, config.order))
                .collect()
        };
        per_category.into_iter().flatten().collect()
    }

    /// Tokeniza o texto e executa todas as categorias com a configuração padrão.
    pub fn analyze(&self, text: &str) -> Vec<Match> {
        self.analyze_with(text, &DetectConfig::default())
    }

    /// Tokeniza o texto e executa conforme `config`.
    pub fn analyze_with(&self, text: &str, config: &DetectConfig) -> Vec<Match> {
        let validator = TokenBoundaries::new(text);
        self.detect_with(text, &validator, config)
    }

    /// Executa a detecção enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokenizationDone`
    /// 2. Para cada categoria: `CategoryStarted`, `MatchFound`*, `CategoryDone`
    /// 3. `Done` com todos os matches
    ///
    /// As categorias são sempre processadas em sequência; `config.parallel` é
    /// ignorado aqui. Um receptor desconectado não interrompe a detecção.
    pub fn analyze_streaming(&self, text: &str, config: &DetectConfig, tx: mpsc::Sender<DetectionEvent>) {
        let start = Instant::now();

        let validator = TokenBoundaries::new(text);
        let _ = tx.send(DetectionEvent::TokenizationDone {
            tokens: validator.tokens().to_vec(),
            total: validator.tokens().len(),
        });

        let mut all = Vec::new();
        for category in config.resolved_categories() {
            let _ = tx.send(DetectionEvent::CategoryStarted {
                category,
                patterns: self.grammar(category).pattern_names().collect(),
            });

            let matches = self.collect_category(category, text, &validator, config.order);
            for m in &matches {
                let _ = tx.send(DetectionEvent::MatchFound(m.clone()));
            }
            let _ = tx.send(DetectionEvent::CategoryDone {
                category,
                count: matches.len(),
            });
            all.extend(matches);
        }

        let _ = tx.send(DetectionEvent::Done {
            total: all.len(),
            matches: all,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }

    fn collect_category<V>(&self, category: Category, text: &str, validator: &V, order: MatchOrder) -> Vec<Match>
    where
        V: SpanValidator + ?Sized,
    {
        let mut matches: Vec<Match> = self.grammar(category).detect(text, validator).collect();
        if order == MatchOrder::Offset {
            matches.sort_by_key(|m| (m.start(), m.end()));
        }
        debug!(category = category.name(), count = matches.len(), "categoria processada");
        matches
    }
}
