//! Erros do motor de detecção.
//!
//! A detecção em si é infalível: spans rejeitados são filtrados e nenhum match é
//! um resultado normal. O único erro possível acontece na **construção**, quando
//! uma tabela de padrões contém uma regex inválida.

use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum DetectError {
    /// Padrão estático que não compila (erro de programação, detectado em `new`)
    #[error("padrão inválido '{pattern}' na categoria {category}: {source}")]
    InvalidPattern {
        category: Category,
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectError>;
