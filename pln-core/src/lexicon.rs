//! # Léxico Estático do Espanhol
//!
//! Tabela fixa `forma de superfície → (lema, POS)` consultada antes do motor
//! de regras. A busca é por igualdade exata: os tokens já chegam em
//! minúsculas e todas as chaves são armazenadas em minúsculas.
//!
//! O léxico é montado uma única vez, no primeiro acesso, e nunca é alterado.
//! Toda entrada carrega lema **e** categoria; palavras funcionais (artigos,
//! preposições, conjunções...) são o próprio lema.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::tagger::PosTag::{self, *};

/// Uma entrada do léxico: lema e categoria da forma de superfície
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub lemma: &'static str,
    pub pos: PosTag,
}

/// Vocabulário curado: (forma, lema, POS)
const ENTRIES: &[(&str, &str, PosTag)] = &[
    // --- Gerúndios ---
    ("corriendo", "correr", Verb),
    ("comiendo", "comer", Verb),
    ("hablando", "hablar", Verb),
    ("estudiando", "estudiar", Verb),
    ("trabajando", "trabajar", Verb),
    ("jugando", "jugar", Verb),
    ("leyendo", "leer", Verb),
    ("escribiendo", "escribir", Verb),
    ("viviendo", "vivir", Verb),
    ("aprendiendo", "aprender", Verb),
    ("enseñando", "enseñar", Verb),
    ("pensando", "pensar", Verb),
    // --- Presente do indicativo ---
    ("corro", "correr", Verb),
    ("corres", "correr", Verb),
    ("corre", "correr", Verb),
    ("corremos", "correr", Verb),
    ("corren", "correr", Verb),
    ("comes", "comer", Verb),
    ("come", "comer", Verb),
    ("comemos", "comer", Verb),
    ("comen", "comer", Verb),
    ("hablo", "hablar", Verb),
    ("hablas", "hablar", Verb),
    ("habla", "hablar", Verb),
    ("hablamos", "hablar", Verb),
    ("hablan", "hablar", Verb),
    ("estudio", "estudiar", Verb),
    ("estudias", "estudiar", Verb),
    ("estudia", "estudiar", Verb),
    ("estudiamos", "estudiar", Verb),
    ("estudian", "estudiar", Verb),
    ("trabajo", "trabajar", Verb),
    ("trabaja", "trabajar", Verb),
    ("trabajan", "trabajar", Verb),
    ("juego", "juego", Noun),
    ("juegas", "jugar", Verb),
    ("juega", "jugar", Verb),
    ("jugamos", "jugar", Verb),
    ("juegan", "jugar", Verb),
    ("lee", "leer", Verb),
    ("leen", "leer", Verb),
    ("escribes", "escribir", Verb),
    ("escribe", "escribir", Verb),
    ("escriben", "escribir", Verb),
    ("aprende", "aprender", Verb),
    ("aprenden", "aprender", Verb),
    ("enseña", "enseñar", Verb),
    ("enseñan", "enseñar", Verb),
    ("combina", "combinar", Verb),
    ("combinan", "combinar", Verb),
    ("mejora", "mejorar", Verb),
    ("mejoran", "mejorar", Verb),
    ("desarrolla", "desarrollar", Verb),
    ("desarrollan", "desarrollar", Verb),
    ("procesa", "procesar", Verb),
    ("procesan", "procesar", Verb),
    ("tiene", "tener", Verb),
    ("tienen", "tener", Verb),
    ("tengo", "tener", Verb),
    ("hay", "haber", Verb),
    ("encanta", "encantar", Verb),
    ("gusta", "gustar", Verb),
    ("gustan", "gustar", Verb),
    // --- Ser / estar ---
    ("soy", "ser", Verb),
    ("eres", "ser", Verb),
    ("es", "ser", Verb),
    ("somos", "ser", Verb),
    ("son", "ser", Verb),
    ("estoy", "estar", Verb),
    ("estás", "estar", Verb),
    ("está", "estar", Verb),
    ("estamos", "estar", Verb),
    ("están", "estar", Verb),
    // --- Particípios ---
    ("aprendido", "aprender", Verb),
    ("enseñado", "enseñar", Verb),
    ("desarrollado", "desarrollar", Verb),
    ("mejorado", "mejorar", Verb),
    ("combinado", "combinar", Verb),
    ("procesado", "procesar", Verb),
    // --- Substantivos ---
    ("casa", "casa", Noun),
    ("casas", "casa", Noun),
    ("libro", "libro", Noun),
    ("libros", "libro", Noun),
    ("niño", "niño", Noun),
    ("niños", "niño", Noun),
    ("niña", "niña", Noun),
    ("niñas", "niña", Noun),
    ("mujer", "mujer", Noun),
    ("mujeres", "mujer", Noun),
    ("hombre", "hombre", Noun),
    ("hombres", "hombre", Noun),
    ("estudiante", "estudiante", Noun),
    ("estudiantes", "estudiante", Noun),
    ("profesor", "profesor", Noun),
    ("profesora", "profesor", Noun),
    ("profesores", "profesor", Noun),
    ("profesoras", "profesor", Noun),
    ("universidad", "universidad", Noun),
    ("universidades", "universidad", Noun),
    ("escuela", "escuela", Noun),
    ("escuelas", "escuela", Noun),
    ("parque", "parque", Noun),
    ("cocina", "cocina", Noun),
    ("gato", "gato", Noun),
    ("perro", "perro", Noun),
    ("ciudad", "ciudad", Noun),
    ("procesamiento", "procesamiento", Noun),
    ("lenguaje", "lenguaje", Noun),
    ("disciplina", "disciplina", Noun),
    ("lingüística", "lingüística", Noun),
    ("computación", "computación", Noun),
    ("algoritmo", "algoritmo", Noun),
    ("algoritmos", "algoritmo", Noun),
    ("técnica", "técnica", Noun),
    ("técnicas", "técnica", Noun),
    ("modelo", "modelo", Noun),
    ("modelos", "modelo", Noun),
    ("análisis", "análisis", Noun),
    ("tokenización", "tokenización", Noun),
    ("lematización", "lematización", Noun),
    ("precisión", "precisión", Noun),
    ("desarrollo", "desarrollo", Noun),
    ("inteligencia", "inteligencia", Noun),
    ("videojuego", "videojuego", Noun),
    ("videojuegos", "videojuego", Noun),
    ("juegos", "juego", Noun),
    ("consola", "consola", Noun),
    ("consolas", "consola", Noun),
    ("partida", "partida", Noun),
    ("partidas", "partida", Noun),
    ("nivel", "nivel", Noun),
    ("niveles", "nivel", Noun),
    ("jugador", "jugador", Noun),
    ("jugadores", "jugador", Noun),
    // --- Adjetivos ---
    ("grande", "grande", Adj),
    ("grandes", "grande", Adj),
    ("pequeño", "pequeño", Adj),
    ("pequeña", "pequeño", Adj),
    ("pequeños", "pequeño", Adj),
    ("pequeñas", "pequeño", Adj),
    ("bueno", "bueno", Adj),
    ("buena", "bueno", Adj),
    ("buenos", "bueno", Adj),
    ("buenas", "bueno", Adj),
    ("malo", "malo", Adj),
    ("mala", "malo", Adj),
    ("nuevo", "nuevo", Adj),
    ("nueva", "nuevo", Adj),
    ("viejo", "viejo", Adj),
    ("vieja", "viejo", Adj),
    ("rojo", "rojo", Adj),
    ("azul", "azul", Adj),
    ("verde", "verde", Adj),
    ("amarillo", "amarillo", Adj),
    ("blanco", "blanco", Adj),
    ("negro", "negro", Adj),
    ("natural", "natural", Adj),
    ("fascinante", "fascinante", Adj),
    ("fascinantes", "fascinante", Adj),
    ("inteligente", "inteligente", Adj),
    ("inteligentes", "inteligente", Adj),
    ("avanzado", "avanzado", Adj),
    ("avanzada", "avanzado", Adj),
    ("avanzados", "avanzado", Adj),
    ("avanzadas", "avanzado", Adj),
    ("colaborativo", "colaborativo", Adj),
    ("colaborativa", "colaborativo", Adj),
    ("significativo", "significativo", Adj),
    ("significativa", "significativo", Adj),
    // --- Advérbios ---
    ("muy", "muy", Adv),
    ("más", "más", Adv),
    ("menos", "menos", Adv),
    ("bien", "bien", Adv),
    ("mal", "mal", Adv),
    ("aquí", "aquí", Adv),
    ("allí", "allí", Adv),
    ("ahora", "ahora", Adv),
    ("después", "después", Adv),
    ("antes", "antes", Adv),
    ("siempre", "siempre", Adv),
    ("nunca", "nunca", Adv),
    ("también", "también", Adv),
    ("solo", "solo", Adv),
    ("sólo", "sólo", Adv),
    ("rápidamente", "rápido", Adv),
    ("lentamente", "lento", Adv),
    ("fácilmente", "fácil", Adv),
    ("claramente", "claro", Adv),
    ("perfectamente", "perfecto", Adv),
    ("significativamente", "significativo", Adv),
    ("colaborativamente", "colaborativo", Adv),
    ("cómo", "cómo", Adv),
    ("cuándo", "cuándo", Adv),
    ("dónde", "dónde", Adv),
    ("cuánto", "cuánto", Adv),
    ("cuánta", "cuánto", Adv),
    // --- Determinantes ---
    ("el", "el", Det),
    ("la", "la", Det),
    ("los", "los", Det),
    ("las", "las", Det),
    ("un", "un", Det),
    ("una", "una", Det),
    ("unos", "unos", Det),
    ("unas", "unas", Det),
    ("este", "este", Det),
    ("esta", "esta", Det),
    ("estos", "estos", Det),
    ("estas", "estas", Det),
    ("ese", "ese", Det),
    ("esa", "esa", Det),
    ("esos", "esos", Det),
    ("esas", "esas", Det),
    ("aquel", "aquel", Det),
    ("aquella", "aquella", Det),
    ("aquellos", "aquellos", Det),
    ("aquellas", "aquellas", Det),
    ("mi", "mi", Det),
    ("tu", "tu", Det),
    ("su", "su", Det),
    ("nuestro", "nuestro", Det),
    ("vuestro", "vuestro", Det),
    // --- Pronomes ---
    ("yo", "yo", Pron),
    ("tú", "tú", Pron),
    ("él", "él", Pron),
    ("ella", "ella", Pron),
    ("nosotros", "nosotros", Pron),
    ("nosotras", "nosotros", Pron),
    ("vosotros", "vosotros", Pron),
    ("vosotras", "vosotros", Pron),
    ("ellos", "ellos", Pron),
    ("ellas", "ellos", Pron),
    ("usted", "usted", Pron),
    ("ustedes", "usted", Pron),
    ("me", "me", Pron),
    ("te", "te", Pron),
    ("se", "se", Pron),
    ("nos", "nos", Pron),
    ("os", "os", Pron),
    ("les", "les", Pron),
    ("que", "que", Pron),
    ("quien", "quien", Pron),
    ("quienes", "quien", Pron),
    ("cual", "cual", Pron),
    ("cuales", "cual", Pron),
    ("qué", "qué", Pron),
    ("quién", "quién", Pron),
    ("cuál", "cuál", Pron),
    // --- Preposições ---
    ("a", "a", Prep),
    ("al", "al", Prep),
    ("del", "del", Prep),
    ("de", "de", Prep),
    ("en", "en", Prep),
    ("con", "con", Prep),
    ("por", "por", Prep),
    ("para", "para", Prep),
    ("sin", "sin", Prep),
    ("sobre", "sobre", Prep),
    ("bajo", "bajo", Prep),
    ("desde", "desde", Prep),
    ("hasta", "hasta", Prep),
    ("entre", "entre", Prep),
    ("durante", "durante", Prep),
    ("mediante", "mediante", Prep),
    ("según", "según", Prep),
    ("contra", "contra", Prep),
    // --- Conjunções ---
    ("y", "y", Conj),
    ("e", "e", Conj),
    ("o", "o", Conj),
    ("u", "u", Conj),
    ("pero", "pero", Conj),
    ("mas", "mas", Conj),
    ("aunque", "aunque", Conj),
    ("porque", "porque", Conj),
    ("si", "si", Conj),
    ("cuando", "cuando", Conj),
    ("donde", "donde", Conj),
    ("como", "como", Conj),
    ("mientras", "mientras", Conj),
    // --- Numerais ---
    ("uno", "uno", Num),
    ("dos", "dos", Num),
    ("tres", "tres", Num),
    ("cuatro", "cuatro", Num),
    ("cinco", "cinco", Num),
    ("primero", "primero", Num),
    ("segundo", "segundo", Num),
    ("tercero", "tercero", Num),
    ("último", "último", Num),
    // --- Interjeições ---
    ("hola", "hola", Intj),
    ("adiós", "adiós", Intj),
    ("ay", "ay", Intj),
    ("vaya", "vaya", Intj),
    ("ojalá", "ojalá", Intj),
];

static LEXICON: Lazy<HashMap<&'static str, LexiconEntry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(form, lemma, pos)| (form, LexiconEntry { lemma, pos }))
        .collect()
});

/// Busca exata de um token (já em minúsculas) no léxico.
pub fn lookup(token: &str) -> Option<LexiconEntry> {
    LEXICON.get(token).copied()
}
