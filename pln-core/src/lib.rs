//! # pln-core — Análise Morfológica do Espanhol e Chatbot de Videogames
//!
//! Este crate implementa o núcleo do chatbot: tokenização, lematização e
//! etiquetagem POS baseadas em regras para o espanhol, além do classificador
//! de domínio (videogames) e da máquina de estados da conversa.
//! Não faz I/O e não guarda estado mutável: toda função é pura.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Texto bruto (String).
//! 2.  **Tokenização** ([`tokenizer`]): minúsculas, pontuação descartada, acentos preservados.
//! 3.  **Resolução por token** ([`pipeline`]):
//!     *   **Léxico** ([`lexicon`]): busca exata da forma → (lema, POS).
//!     *   **Regras** ([`rule_based`]): sufixos ordenados para formas fora do léxico.
//! 4.  **Saída**: [`AnalysisRecord`] com tokens, lemas e etiquetas alinhados.
//!
//! Em paralelo, sobre o mesmo texto bruto:
//! - [`gaming`]: detecção de termos de videogames e resposta temática.
//! - [`conversation`]: saudação → conversa ativa → despedida.
//! - [`sentiment`]: sentimento por palavras-chave (reserva do modelo externo).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pln_core::{analyze, PosTag};
//!
//! let record = analyze("Estoy jugando rápidamente");
//! assert_eq!(record.tokens, vec!["estoy", "jugando", "rápidamente"]);
//! assert_eq!(record.lemmas[1].lemma, "jugar");
//! assert_eq!(record.pos_tags[2].pos, PosTag::Adv);
//! ```

pub mod conversation;
pub mod corpus;
pub mod gaming;
pub mod lexicon;
pub mod pipeline;
pub mod rule_based;
pub mod sentiment;
pub mod tagger;
pub mod tokenizer;

pub use conversation::{transition, ConversationState, Turn};
pub use gaming::{analyze_gaming_content, is_gaming_related, GamingAnalysis};
pub use pipeline::{analyze, analyze_batch, AnalysisRecord, Pipeline, PipelineEvent};
pub use tagger::{describe, LemmaPair, PosTag, TaggedWord};
pub use tokenizer::tokenize;
