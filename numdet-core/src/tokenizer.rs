//! # Tokenizador para Francês
//!
//! Divide o texto bruto em tokens preservando os offsets de byte originais.
//! Os tokens não são consumidos pelas gramáticas (que varrem o texto inteiro):
//! eles definem as **fronteiras válidas** usadas pelo validador de spans
//! ([`crate::span::TokenBoundaries`]).
//!
//! ## Regras
//!
//! - Sequências alfanuméricas formam um token (`13h43`, `XIXème`, `1er`).
//! - Hífens são tokens próprios: `deux-mille` → `deux`, `-`, `mille`.
//! - Elisão: `d'euros` → `d'`, `euros`; `aujourd'hui` permanece inteiro.
//! - `,` e `.` entre dígitos fazem parte do número (`23,4`, `1.2`).
//! - Abreviações conhecidas mantêm o ponto (`M.`, `juill.`, `p.`).
//! - Qualquer outro símbolo (`%`, `€`, `°`, `/`, `:`) vira um token isolado.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use numdet_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("4 millions d'euros");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["4", "millions", "d'", "euros"]);
//! ```

use serde::{Deserialize, Serialize};

/// Um token extraído do texto original.
///
/// Mantém a posição exata (`start`, `end`) no texto, em bytes, para que o
/// validador possa conferir se um match começa e termina em fronteiras de token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "juillet", "€", "d'").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Prefixos elididos do francês: o apóstrofo encerra o token.
const ELISIONS: &[&str] = &[
    "l", "d", "j", "m", "n", "s", "t", "c", "qu", "jusqu", "lorsqu", "puisqu", "quoiqu",
];

/// Abreviações que mantêm o ponto final (comparação sensível a maiúsculas)
const ABBREVIATIONS: &[&str] = &[
    "M", "MM", "Mme", "Mmes", "Mlle", "Dr", "Pr", "Me", "St", "Ste", "av", "bd", "cf",
    "etc", "env", "ex", "fig", "p", "vol", "janv", "févr", "juill", "déc",
];

/// Tokeniza um texto em francês.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current_start = 0;
    let mut current_text = String::new();
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for (i, &(byte_pos, ch)) in chars.iter().enumerate() {
        let next = chars.get(i + 1).map(|(_, c)| *c);

        if ch.is_alphanumeric() {
            if current_text.is_empty() {
                current_start = byte_pos;
            }
            current_text.push(ch);
        } else if is_apostrophe(ch) && !current_text.is_empty() {
            let is_elision = ELISIONS.contains(&current_text.to_lowercase().as_str());
            current_text.push(ch);
            if is_elision {
                flush_token(&mut tokens, &mut current_text, current_start, byte_pos + ch.len_utf8());
            }
        } else if (ch == ',' || ch == '.')
            && is_number(&current_text)
            && next.map(|c| c.is_numeric()).unwrap_or(false)
        {
            // Separador decimal ou de milhar (ex: 23,4 ou 1.2)
            current_text.push(ch);
        } else if ch == '.' && ABBREVIATIONS.contains(&current_text.as_str()) {
            current_text.push(ch);
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos + 1);
        } else if ch.is_whitespace() {
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos);
        } else {
            flush_token(&mut tokens, &mut current_text, current_start, byte_pos);
            push_token(&mut tokens, ch.to_string(), byte_pos, byte_pos + ch.len_utf8());
        }
    }

    flush_token(&mut tokens, &mut current_text, current_start, text.len());

    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

/// Verdadeiro se o token acumulado até aqui é um número (ex: "23", "1,5")
fn is_number(s: &str) -> bool {
    s.chars().next().map(|c| c.is_numeric()).unwrap_or(false)
        && s.chars().all(|c| c.is_numeric() || c == ',' || c == '.')
}

/// Fecha o token acumulado e adiciona à lista (se não vazio)
fn flush_token(tokens: &mut Vec<Token>, text: &mut String, start: usize, end: usize) {
    if !text.is_empty() {
        tokens.push(Token {
            text: text.clone(),
            start,
            end,
            index: 0, // atribuído no final
        });
        text.clear();
    }
}

/// Adiciona um token de pontuação/símbolo diretamente
fn push_token(tokens: &mut Vec<Token>, text: String, start: usize, end: usize) {
    tokens.push(Token {
        text,
        start,
        end,
        index: 0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(texts("21 juillet 2021"), vec!["21", "juillet", "2021"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_symbols_are_isolated() {
        assert_eq!(texts("25%"), vec!["25", "%"]);
        assert_eq!(texts("5 €"), vec!["5", "€"]);
        assert_eq!(texts("25°C"), vec!["25", "°", "C"]);
        assert_eq!(texts("90 km/h"), vec!["90", "km", "/", "h"]);
        assert_eq!(texts("13:43"), vec!["13", ":", "43"]);
    }

    #[test]
    fn test_hyphen_splits_compounds() {
        assert_eq!(
            texts("deux-mille-vingt"),
            vec!["deux", "-", "mille", "-", "vingt"]
        );
    }

    #[test]
    fn test_elision() {
        assert_eq!(texts("d'euros"), vec!["d'", "euros"]);
        assert_eq!(texts("d\u{2019}euros"), vec!["d\u{2019}", "euros"]);
        assert_eq!(texts("C'est"), vec!["C'", "est"]);
        assert_eq!(texts("aujourd'hui"), vec!["aujourd'hui"]);
    }

    #[test]
    fn test_numbers_keep_separators() {
        assert_eq!(texts("23,4 et 1.2."), vec!["23,4", "et", "1.2", "."]);
        assert_eq!(texts("il en a 25."), vec!["il", "en", "a", "25", "."]);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(texts("21 juill. 2021"), vec!["21", "juill.", "2021"]);
        assert_eq!(texts("M. Dupont"), vec!["M.", "Dupont"]);
        assert_eq!(texts("fin."), vec!["fin", "."]);
    }

    #[test]
    fn test_offsets_are_bytes() {
        let text = "déc. 2021";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].text, "déc.");
        assert_eq!(&text[tokens[0].start..tokens[0].end], "déc.");
        assert_eq!(&text[tokens[1].start..tokens[1].end], "2021");
        assert_eq!(tokens[1].index, 1);
    }
}
