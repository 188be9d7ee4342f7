//! # Etiquetas POS (Part-of-Speech) e Registros por Palavra
//!
//! Define o conjunto **fechado** de categorias gramaticais usado pelo analisador
//! de espanhol e os registros alinhados por token que formam a saída da análise.
//!
//! ## Categorias
//!
//! | Rótulo | Descrição (ES)  | Exemplos                        |
//! |--------|-----------------|---------------------------------|
//! | NOUN   | Sustantivo      | casa, juego, universidad        |
//! | VERB   | Verbo           | corre, hablando, jugar          |
//! | ADJ    | Adjetivo        | pequeña, fascinante, nuevo      |
//! | ADV    | Adverbio        | muy, rápidamente, siempre       |
//! | PRON   | Pronombre       | yo, ella, que                   |
//! | DET    | Determinante    | el, una, estos                  |
//! | PREP   | Preposición     | de, con, según                  |
//! | CONJ   | Conjunción      | y, pero, porque                 |
//! | NUM    | Número          | dos, primero                    |
//! | PUNCT  | Puntuación      | (descartada pelo tokenizador)   |
//! | INTJ   | Interjección    | hola, ay                        |
//!
//! Uma etiqueta desconhecida nunca é produzida pelo analisador: quando nenhuma
//! regra se aplica, a categoria padrão é `NOUN`.

use serde::{Deserialize, Serialize};

/// Categoria gramatical de um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Categoria aberta mais frequente; também é o valor padrão.
    #[default]
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    Prep,
    Conj,
    Num,
    Punct,
    Intj,
}

/// Descrição usada quando um rótulo externo não pertence ao conjunto fechado.
pub const UNKNOWN_DESCRIPTION: &str = "Desconocido";

impl PosTag {
    /// Número total de etiquetas
    pub const COUNT: usize = 11;

    /// Rótulo curto (ex: "NOUN", "VERB")
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Prep => "PREP",
            PosTag::Conj => "CONJ",
            PosTag::Num => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Intj => "INTJ",
        }
    }

    /// Descrição legível em espanhol, exibida no painel de análise
    pub fn description(&self) -> &'static str {
        match self {
            PosTag::Noun => "Sustantivo",
            PosTag::Verb => "Verbo",
            PosTag::Adj => "Adjetivo",
            PosTag::Adv => "Adverbio",
            PosTag::Pron => "Pronombre",
            PosTag::Det => "Determinante",
            PosTag::Prep => "Preposición",
            PosTag::Conj => "Conjunción",
            PosTag::Num => "Número",
            PosTag::Punct => "Puntuación",
            PosTag::Intj => "Interjección",
        }
    }

    /// Parseia um rótulo (ex: "ADJ" → Some(Adj))
    pub fn from_label(s: &str) -> Option<Self> {
        PosTag::all().into_iter().find(|tag| tag.label() == s)
    }

    /// Todas as etiquetas em ordem (para iteração e legendas da UI)
    pub fn all() -> [PosTag; PosTag::COUNT] {
        [
            PosTag::Noun,
            PosTag::Verb,
            PosTag::Adj,
            PosTag::Adv,
            PosTag::Pron,
            PosTag::Det,
            PosTag::Prep,
            PosTag::Conj,
            PosTag::Num,
            PosTag::Punct,
            PosTag::Intj,
        ]
    }

    /// Cor CSS para o destaque da etiqueta na UI
    pub fn color(&self) -> &'static str {
        match self {
            PosTag::Noun => "#bfdbfe",
            PosTag::Verb => "#fecaca",
            PosTag::Adj => "#bbf7d0",
            PosTag::Adv => "#fef08a",
            PosTag::Pron => "#e9d5ff",
            PosTag::Det => "#fbcfe8",
            PosTag::Prep => "#c7d2fe",
            PosTag::Conj => "#e5e7eb",
            PosTag::Num => "#fed7aa",
            PosTag::Punct => "#e2e8f0",
            PosTag::Intj => "#ddd6fe",
        }
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Descreve um rótulo arbitrário; rótulos fora do conjunto fechado viram "Desconocido".
pub fn describe(label: &str) -> &'static str {
    PosTag::from_label(label)
        .map(|tag| tag.description())
        .unwrap_or(UNKNOWN_DESCRIPTION)
}

/// Par (palavra, lema) alinhado com o token de mesmo índice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaPair {
    pub word: String,
    pub lemma: String,
}

/// Palavra etiquetada: (palavra, etiqueta, descrição) alinhada com o token de mesmo índice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub pos: PosTag,
    pub description: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, pos: PosTag) -> Self {
        Self {
            word: word.into(),
            pos,
            description: pos.description().to_string(),
        }
    }
}
