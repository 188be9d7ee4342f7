//! # Tokenizador para Espanhol
//!
//! Divide o texto bruto em uma sequência ordenada de tokens em minúsculas.
//! A pontuação é descartada (inclusive `¡` e `¿`), mas as vogais acentuadas
//! e as letras `ñ`/`ü` são preservadas dentro das palavras.
//!
//! ## Algoritmo
//!
//! 1. Converte o texto para minúsculas.
//! 2. Substitui por espaço todo caractere que não seja um caractere de palavra
//!    ASCII (`[0-9A-Za-z_]`), espaço em branco ou uma letra espanhola
//!    (`á é í ó ú ü ñ`).
//! 3. Quebra nos espaços em branco e descarta strings vazias.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pln_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("¡Hola, mundo!");
//! assert_eq!(tokens, vec!["hola", "mundo"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Tudo que não é palavra ASCII, espaço ou letra espanhola vira separador
static SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9A-Za-z_\sáéíóúüñ]").expect("padrão de separadores válido")
});

/// Tokeniza um texto: minúsculas, sem pontuação, ordem e repetições preservadas.
///
/// Texto vazio ou composto apenas de pontuação produz um vetor vazio.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SEPARATOR
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
