//! # Textos de Demonstração em Espanhol
//!
//! Frases de exemplo exibidas na interface web, agrupadas por tema. Cobrem o
//! léxico (verbos conjugados, gerúndios, artigos), as regras de sufixo
//! (`-mente`, plurais, particípios) e o classificador de domínio, incluindo
//! um texto fora do tema para mostrar o redirecionamento do chatbot.

use serde::Serialize;

/// Um texto de demonstração e seu tema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoText {
    pub domain: &'static str,
    pub text: &'static str,
}

/// Textos de demonstração para a interface web
pub fn demo_texts() -> Vec<DemoText> {
    vec![
        DemoText {
            domain: "Saludo",
            text: "¡Hola! Buenas tardes, hoy quiero hablar de videojuegos contigo.",
        },
        DemoText {
            domain: "Juegos populares",
            text: "Me encanta jugar Minecraft en mi PS5 y construir castillos enormes con mis amigos.",
        },
        DemoText {
            domain: "Géneros",
            text: "Los juegos de rol y los metroidvania son rápidamente mis géneros favoritos porque tienen historias fascinantes.",
        },
        DemoText {
            domain: "Plataformas",
            text: "Estoy jugando en la Nintendo Switch mientras mi hermano está probando la nueva Xbox Series X.",
        },
        DemoText {
            domain: "Técnico",
            text: "El lag del servidor arruinó la partida online, pero la resolución en 4K y el ray tracing son increíbles.",
        },
        DemoText {
            domain: "Compañías",
            text: "Capcom y Square Enix anunciaron nuevos títulos durante la última edición de The Game Awards.",
        },
        DemoText {
            domain: "Esports",
            text: "Los jugadores profesionales de League of Legends compitieron en el campeonato mundial celebrado en Seúl.",
        },
        DemoText {
            domain: "Morfología",
            text: "Los desarrolladores terminaron la actualización y los personajes fueron rediseñados completamente.",
        },
        DemoText {
            domain: "Fuera de tema",
            text: "Mañana voy a cocinar una sopa de verduras para la cena familiar.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaming::is_gaming_related;

    #[test]
    fn test_demo_texts_are_non_empty() {
        let texts = demo_texts();
        assert!(!texts.is_empty());
        for demo in &texts {
            assert!(!crate::tokenizer::tokenize(demo.text).is_empty(), "{}", demo.domain);
        }
    }

    #[test]
    fn test_only_off_topic_demo_is_outside_domain() {
        for demo in demo_texts() {
            assert_eq!(
                is_gaming_related(demo.text),
                demo.domain != "Fuera de tema",
                "{}: {}",
                demo.domain,
                demo.text
            );
        }
    }
}
