//! # Máquina de Estados da Conversa
//!
//! ```text
//! AwaitingGreeting ──saudação──▶ Active { count: 1 } ──despedida──▶ Ended
//!        ▲   │                        │   ▲
//!        └───┘ outro texto            └───┘ outro texto (count + 1)
//! ```
//!
//! A transição é uma função pura: o servidor não guarda sessão, o cliente
//! devolve o estado a cada mensagem. Saudações e despedidas são detectadas por
//! substring no texto em minúsculas, então `"hi"` também casa em "chico".
//! `Ended` é terminal.

use serde::{Deserialize, Serialize};

use crate::gaming;

const GREETINGS: &[&str] = &[
    "hola", "hello", "hi", "buenos días", "buenas tardes", "buenas noches", "saludos",
];

const FAREWELLS: &[&str] = &[
    "adiós", "adios", "bye", "hasta luego", "nos vemos", "chao", "goodbye",
];

/// Primeira mensagem do bot, antes de qualquer entrada
pub const WELCOME: &str = "¡Hola! Soy tu asistente virtual. ¿Qué tal estás?";

const GREETING_PROMPT: &str = "Para iniciar nuestra conversación, necesito que me saludes primero diciendo 'hola'. Una vez que lo hagas, podremos conversar y analizar cualquier texto que escribas.";

const ENDED_NOTICE: &str = "Nuestra conversación ya ha terminado. Si quieres iniciar una nueva conversación, recarga la página y salúdame nuevamente con 'hola'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    AwaitingGreeting,
    /// `count` = mensagens trocadas desde a saudação (a saudação conta como 1)
    Active { count: u32 },
    Ended,
}

impl ConversationState {
    /// Texto do indicador de estado na UI
    pub fn status_label(&self) -> String {
        match self {
            ConversationState::AwaitingGreeting => "Esperando saludo".to_string(),
            ConversationState::Active { count } => format!("Activo ({count} mensajes)"),
            ConversationState::Ended => "Conversación terminada".to_string(),
        }
    }
}

/// Resposta do bot a uma mensagem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub reply: String,
    /// A mensagem deve ser acompanhada da análise morfológica?
    pub analyze: bool,
}

impl Turn {
    fn analyzed(reply: String) -> Self {
        Self { reply, analyze: true }
    }

    fn plain(reply: &str) -> Self {
        Self { reply: reply.to_string(), analyze: false }
    }
}

pub fn is_greeting(text: &str) -> bool {
    let lower = text.to_lowercase();
    GREETINGS.iter().any(|g| lower.contains(g))
}

pub fn is_farewell(text: &str) -> bool {
    let lower = text.to_lowercase();
    FAREWELLS.iter().any(|f| lower.contains(f))
}

/// Aplica uma mensagem do usuário ao estado atual
pub fn transition(state: ConversationState, input: &str) -> (ConversationState, Turn) {
    match state {
        ConversationState::AwaitingGreeting if is_greeting(input) => (
            ConversationState::Active { count: 1 },
            Turn::analyzed(format!(
                "¡Excelente! Ahora que nos hemos saludado, nuestra conversación ha comenzado. Puedes escribir cualquier texto y te mostraré su análisis completo de PLN. Has escrito: \"{input}\"."
            )),
        ),
        ConversationState::AwaitingGreeting => (state, Turn::plain(GREETING_PROMPT)),
        ConversationState::Active { .. } if is_farewell(input) => (
            ConversationState::Ended,
            Turn::analyzed(format!(
                "¡Ha sido un placer conversar contigo! Espero que hayas aprendido mucho sobre el procesamiento de lenguaje natural. Analizamos tu despedida: \"{input}\". ¡Hasta la próxima!"
            )),
        ),
        ConversationState::Active { count } => (
            ConversationState::Active { count: count.saturating_add(1) },
            Turn::analyzed(gaming::respond(input)),
        ),
        ConversationState::Ended => (state, Turn::plain(ENDED_NOTICE)),
    }
}
