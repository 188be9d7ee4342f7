//! # Classificador de Domínio — Videogames
//!
//! Decide se um texto fala de videogames e monta a resposta temática do
//! chatbot. A detecção é por **substring** no texto em minúsculas, sem
//! fronteira de palavra: termos curtos como `"ea"` ou `"rol"` casam dentro de
//! outras palavras ("idea", "control"). É uma imprecisão aceita do
//! classificador, coberta pelos testes.
//!
//! ## Vocabulário
//!
//! | Categoria    | Exemplos                                |
//! |--------------|-----------------------------------------|
//! | `género`     | acción, rpg, battle royale, sandbox     |
//! | `plataforma` | pc, ps5, xbox, switch, steam deck       |
//! | `técnico`    | fps, resolución, lag, multijugador      |
//! | `compañía`   | nintendo, sony, capcom, naughty dog     |
//! | `evento`     | e3, gamescom, esports, torneo           |
//!
//! Além das categorias há termos genéricos (`juego`, `consola`, `gamer`...) e
//! um catálogo de títulos populares com desenvolvedora, gênero e plataformas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Uma categoria do vocabulário e seus termos (em minúsculas)
pub struct Category {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

pub const GENRE: Category = Category {
    name: "género",
    terms: &[
        "acción", "aventura", "rol", "estrategia", "simulación", "deportes", "carreras",
        "shooter", "fps", "tps", "mmorpg", "rpg", "moba", "battle royale", "sandbox",
        "plataformas", "puzzle", "roguelike", "metroidvania", "survival horror", "mundo abierto",
    ],
};

pub const PLATFORM: Category = Category {
    name: "plataforma",
    terms: &[
        "pc", "playstation", "ps1", "ps2", "ps3", "ps4", "ps5", "xbox", "xbox 360",
        "xbox one", "xbox series x", "nintendo", "switch", "wii", "game boy", "3ds",
        "mobile", "android", "ios", "steam deck", "vr", "oculus", "psvr",
    ],
};

pub const TECHNICAL: Category = Category {
    name: "técnico",
    terms: &[
        "fps", "resolución", "gráficos", "ray tracing", "dlss", "hdr", "4k", "60fps",
        "lag", "ping", "servidor", "online", "multijugador", "cooperativo", "pvp", "pve",
        "dificultad", "nivel", "jefe", "checkpoint", "guardado", "partida", "campaña",
    ],
};

pub const COMPANY: Category = Category {
    name: "compañía",
    terms: &[
        "nintendo", "sony", "microsoft", "valve", "epic games", "ubisoft", "ea",
        "activision", "blizzard", "rockstar", "bethesda", "cd projekt red", "square enix",
        "capcom", "konami", "sega", "bandai namco", "from software", "naughty dog",
    ],
};

pub const EVENT: Category = Category {
    name: "evento",
    terms: &[
        "e3", "gamescom", "tokyo game show", "pax", "blizzcon", "the game awards",
        "esports", "torneo", "competición", "mundial", "liga", "campeonato",
    ],
};

/// Categorias na ordem em que são reportadas
pub const CATEGORIES: [&Category; 5] = [&GENRE, &PLATFORM, &TECHNICAL, &COMPANY, &EVENT];

/// Termos genéricos que marcam o domínio mas não pertencem a uma categoria
pub const GENERIC_TERMS: &[&str] = &[
    "juego", "videojuego", "consola", "gaming", "gamer", "jugador",
    "jugar", "partida", "nivel", "personaje", "mando", "joystick",
];

/// Ficha de um título popular
#[derive(Debug, Clone, Copy)]
pub struct GameInfo {
    pub developer: &'static str,
    pub genre: &'static str,
    pub platforms: &'static [&'static str],
    pub description: &'static str,
}

/// Catálogo de títulos, chaveado pelo nome em minúsculas
pub const POPULAR_GAMES: &[(&str, GameInfo)] = &[
    ("minecraft", GameInfo {
        developer: "Mojang Studios",
        genre: "Sandbox, Supervivencia",
        platforms: &["PC", "Consolas", "Mobile"],
        description: "Juego de mundo abierto que permite a los jugadores construir y explorar mundos hechos de bloques.",
    }),
    ("fortnite", GameInfo {
        developer: "Epic Games",
        genre: "Battle Royale, Shooter",
        platforms: &["PC", "Consolas", "Mobile"],
        description: "Popular juego battle royale donde 100 jugadores luchan hasta que solo queda uno.",
    }),
    ("the legend of zelda", GameInfo {
        developer: "Nintendo",
        genre: "Acción-Aventura",
        platforms: &["Nintendo Switch", "Consolas Nintendo"],
        description: "Serie de juegos de aventura que sigue las hazañas de Link en el reino de Hyrule.",
    }),
    ("call of duty", GameInfo {
        developer: "Activision",
        genre: "FPS, Shooter",
        platforms: &["PC", "PlayStation", "Xbox"],
        description: "Serie de juegos de disparos en primera persona con modos campaña y multijugador.",
    }),
    ("fifa", GameInfo {
        developer: "EA Sports",
        genre: "Deportes, Simulación",
        platforms: &["PC", "PlayStation", "Xbox", "Nintendo Switch"],
        description: "Simulador de fútbol con licencias oficiales de equipos y jugadores reales.",
    }),
    ("grand theft auto", GameInfo {
        developer: "Rockstar Games",
        genre: "Acción-Aventura, Mundo Abierto",
        platforms: &["PC", "PlayStation", "Xbox"],
        description: "Serie de juegos de mundo abierto con narrativas criminales y libertad de exploración.",
    }),
    ("league of legends", GameInfo {
        developer: "Riot Games",
        genre: "MOBA",
        platforms: &["PC"],
        description: "Juego de estrategia en equipo donde dos equipos de campeones se enfrentan.",
    }),
    ("pokemon", GameInfo {
        developer: "Game Freak",
        genre: "RPG",
        platforms: &["Consolas Nintendo", "Mobile"],
        description: "Serie de juegos donde entrenadores capturan y entrenan criaturas llamadas Pokémon.",
    }),
    ("dark souls", GameInfo {
        developer: "FromSoftware",
        genre: "RPG de Acción",
        platforms: &["PC", "PlayStation", "Xbox"],
        description: "Serie conocida por su alta dificultad y combate estratégico.",
    }),
    ("overwatch", GameInfo {
        developer: "Blizzard",
        genre: "FPS, Hero Shooter",
        platforms: &["PC", "PlayStation", "Xbox", "Nintendo Switch"],
        description: "Shooter en equipo con diversos héroes con habilidades únicas.",
    }),
];

const GENERAL_RESPONSES: &[&str] = &[
    "Los videojuegos han evolucionado mucho desde Pong y Space Invaders, ¿no crees?",
    "¿Qué opinas de los juegos indie? Algunos como Hollow Knight o Stardew Valley han tenido tanto éxito como los AAA.",
    "La narrativa en los videojuegos ha alcanzado niveles comparables al cine y la literatura.",
    "Los esports se han convertido en un fenómeno global con millones de espectadores.",
    "La realidad virtual está cambiando la forma en que experimentamos los videojuegos.",
    "¿Prefieres jugar en consola o PC? Es un debate que nunca termina en la comunidad gaming.",
    "Los juegos de mundo abierto ofrecen una libertad increíble, pero a veces pueden sentirse abrumadores.",
    "Los roguelikes son adictivos por su naturaleza de 'una partida más' y la aleatoriedad.",
    "Los juegos multijugador competitivos como League of Legends o CS:GO tienen curvas de aprendizaje muy pronunciadas.",
    "La accesibilidad en los videojuegos ha mejorado mucho, permitiendo que más personas puedan disfrutarlos.",
];

const OFF_TOPIC_RESPONSES: &[&str] = &[
    "Estamos hablando de videojuegos. Si tienes alguna pregunta o comentario sobre juegos, consolas, o la industria gaming, estaré encantado de seguir la conversación.",
    "Parece que nos estamos desviando del tema de los videojuegos. ¿Te gustaría que volvamos a hablar sobre algún aspecto del mundo gaming?",
    "Como especialista en videojuegos, puedo ofrecerte información sobre juegos, plataformas, géneros y más. ¿Hay algo específico del mundo gaming que te interese?",
    "Mi conocimiento se centra en videojuegos. Si quieres hablar de otro tema, puedo intentar relacionarlo con el mundo de los videojuegos si es posible.",
    "Estoy especializado en conversar sobre videojuegos. ¿Quieres que hablemos sobre algún juego, consola o tendencia reciente en la industria?",
];

/// Palavra-chave encontrada e sua categoria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub category: String,
}

/// Resultado da análise de domínio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamingAnalysis {
    pub is_gaming_related: bool,
    pub keywords: Vec<Keyword>,
    /// Títulos do catálogo mencionados, pela chave em minúsculas
    pub games_mentioned: Vec<String>,
    /// Categoria → número de termos distintos encontrados (só categorias com acertos)
    pub categories: BTreeMap<String, usize>,
}

pub fn is_gaming_related(text: &str) -> bool {
    let lower = text.to_lowercase();
    CATEGORIES
        .iter()
        .flat_map(|c| c.terms.iter())
        .chain(GENERIC_TERMS.iter())
        .any(|term| lower.contains(term))
        || POPULAR_GAMES.iter().any(|(title, _)| lower.contains(title))
}

pub fn analyze_gaming_content(text: &str) -> GamingAnalysis {
    let lower = text.to_lowercase();
    let mut analysis = GamingAnalysis {
        is_gaming_related: is_gaming_related(text),
        ..Default::default()
    };

    analysis.games_mentioned = POPULAR_GAMES
        .iter()
        .filter(|(title, _)| lower.contains(title))
        .map(|(title, _)| title.to_string())
        .collect();

    for category in CATEGORIES {
        let found: Vec<&str> = category.terms.iter().copied().filter(|t| lower.contains(t)).collect();
        if found.is_empty() {
            continue;
        }
        analysis.categories.insert(category.name.to_string(), found.len());
        analysis.keywords.extend(found.into_iter().map(|word| Keyword {
            word: word.to_string(),
            category: category.name.to_string(),
        }));
    }

    analysis
}

/// Resposta temática do chatbot para um texto.
///
/// Prioridade: fora do domínio → redirecionamento; título do catálogo; gênero;
/// plataforma; companhia; comentário geral. Onde há várias respostas prontas,
/// a escolha é determinística a partir do texto.
pub fn respond(text: &str) -> String {
    let lower = text.to_lowercase();

    if !is_gaming_related(text) {
        return pick(OFF_TOPIC_RESPONSES, &lower).to_string();
    }

    if let Some((title, info)) = POPULAR_GAMES.iter().find(|(title, _)| lower.contains(title)) {
        return format!(
            "¡{} es un gran juego! {} Fue desarrollado por {} y está disponible en {}. ¿Has jugado a otros juegos de {}?",
            capitalize(title),
            info.description,
            info.developer,
            info.platforms.join(", "),
            info.genre
        );
    }

    if let Some(genre) = first_term(&GENRE, &lower) {
        return format!(
            "Los juegos de {genre} son fascinantes. ¿Tienes algún título favorito de este género? Hay muchas opciones interesantes para explorar."
        );
    }

    if let Some(platform) = first_term(&PLATFORM, &lower) {
        return format!(
            "{} es una gran plataforma para jugar. ¿Qué juegos has probado en ella? Hay muchos títulos exclusivos y multiplataforma disponibles.",
            capitalize(platform)
        );
    }

    if let Some(company) = first_term(&COMPANY, &lower) {
        return format!(
            "{} ha desarrollado algunos juegos increíbles. ¿Tienes algún título favorito de esta compañía? Han contribuido significativamente a la industria.",
            capitalize(company)
        );
    }

    pick(GENERAL_RESPONSES, &lower).to_string()
}

fn first_term(category: &Category, lower: &str) -> Option<&'static str> {
    category.terms.iter().copied().find(|t| lower.contains(t))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escolhe uma resposta pronta com um hash estável (FNV-1a) do texto
fn pick<'a>(options: &[&'a str], key: &str) -> &'a str {
    let hash = key
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| (h ^ b as u64).wrapping_mul(0x0100_0000_01b3));
    options[(hash % options.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minecraft_on_ps5() {
        let text = "Me encanta jugar Minecraft en mi PS5";
        assert!(is_gaming_related(text));

        let analysis = analyze_gaming_content(text);
        assert!(analysis.is_gaming_related);
        assert!(analysis.games_mentioned.contains(&"minecraft".to_string()));
        assert!(analysis.keywords.contains(&Keyword {
            word: "ps5".into(),
            category: "plataforma".into(),
        }));
        assert_eq!(analysis.categories.get("plataforma"), Some(&1));
    }

    #[test]
    fn test_off_topic() {
        let text = "Hoy quiero cocinar una sopa de tomate";
        assert!(!is_gaming_related(text));
        let analysis = analyze_gaming_content(text);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.categories.is_empty());
        assert!(OFF_TOPIC_RESPONSES.contains(&respond(text).as_str()));
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        // "idea" contém "ea"
        let analysis = analyze_gaming_content("Tengo una idea");
        assert!(analysis.is_gaming_related);
        assert_eq!(analysis.keywords[0].word, "ea");
        assert_eq!(analysis.keywords[0].category, "compañía");
    }

    #[test]
    fn test_term_in_two_categories_counts_in_both() {
        let analysis = analyze_gaming_content("Nintendo");
        assert_eq!(analysis.categories.get("plataforma"), Some(&1));
        assert_eq!(analysis.categories.get("compañía"), Some(&1));
    }

    #[test]
    fn test_respond_prefers_game_title() {
        let reply = respond("¿Qué tal Dark Souls en PC?");
        assert!(reply.starts_with("¡Dark souls es un gran juego!"));
        assert!(reply.contains("FromSoftware"));
        assert!(reply.contains("PC, PlayStation, Xbox"));
    }

    #[test]
    fn test_respond_genre_then_platform_then_company() {
        assert!(respond("me gustan los metroidvania").starts_with("Los juegos de metroidvania"));
        assert!(respond("tengo una xbox").starts_with("Xbox es una gran plataforma"));
        assert!(respond("konami").starts_with("Konami ha desarrollado"));
    }

    #[test]
    fn test_respond_general_is_deterministic() {
        let text = "soy un gamer";
        let reply = respond(text);
        assert!(GENERAL_RESPONSES.contains(&reply.as_str()));
        assert_eq!(reply, respond(text));
    }

    #[test]
    fn test_capitalize_handles_accents() {
        assert_eq!(capitalize("ágil"), "Ágil");
        assert_eq!(capitalize(""), "");
    }
}
