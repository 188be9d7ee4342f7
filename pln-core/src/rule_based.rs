//! # Motor de Regras Morfológicas — Sufixos do Espanhol
//!
//! Quando uma forma não está no [`lexicon`](crate::lexicon), o motor deriva
//! um lema e uma categoria a partir de padrões de sufixo. São duas passagens
//! independentes, cada uma com sua própria tabela ordenada:
//!
//! 1. **Regras de lema** (a primeira que casa vence):
//!    `-mente` → adjetivo (`rápidamente` → `rápido`), gerúndios (`-ando` → `-ar`,
//!    `-iendo` → `-er`), particípios (`-ado` → `-ar`, `-ido` → `-er`), plurais
//!    (`-es`, `-s`), femininos de adjetivos conhecidos (`-a` → `-o`) e sufixos
//!    nominais que já estão na forma base.
//! 2. **Heurísticas de POS**: `-mente` → ADV, gerúndios e particípios → VERB,
//!    sufixos nominais → NOUN, sufixos adjetivais → ADJ, infinitivos → VERB,
//!    `-s` → NOUN e, por fim, NOUN como categoria padrão.
//!
//! A categoria final vem da segunda passagem. A primeira também informa a
//! categoria implícita na regra de lema usada; as duas podem divergir (ex:
//! `buenísima` é ADJ pela regra de lema e NOUN pela heurística) e o pipeline
//! expõe ambas.
//!
//! Comprimentos são contados em caracteres, não em bytes.

use serde::{Deserialize, Serialize};

use crate::tagger::PosTag;

/// O que uma regra de lema faz com a palavra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LemmaAction {
    /// Remove o sufixo e acrescenta a terminação dada
    Replace(&'static str),
    /// Remove `-mente`; um `-a` final do radical vira `-o`
    Adverb,
    /// `-a` → `-o`, somente para radicais de adjetivo conhecidos
    Feminine,
    /// A palavra já está na forma base
    Keep,
}

/// Regra de lema: sufixos, comprimento mínimo e ação
#[derive(Debug, Clone)]
struct LemmaRule {
    name: &'static str,
    suffixes: &'static [&'static str],
    /// Comprimento mínimo da palavra (em caracteres) para a regra valer
    min_chars: usize,
    /// Sufixo que desqualifica a regra (ex: "ss" para o plural em -s)
    unless_suffix: Option<&'static str>,
    action: LemmaAction,
    /// Categoria implícita quando a regra casa
    pos: PosTag,
}

/// Heurística de POS: se a palavra termina com um dos sufixos, vira `pos`
#[derive(Debug, Clone)]
struct PosRule {
    name: &'static str,
    suffixes: &'static [&'static str],
    min_chars: usize,
    pos: PosTag,
}

/// Resultado do motor para uma palavra ausente do léxico
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub lemma: String,
    /// Categoria final (heurística de POS)
    pub pos: PosTag,
    /// Regra de lema que casou (ou "default")
    pub lemma_rule: String,
    /// Categoria implícita na regra de lema
    pub lemma_rule_pos: PosTag,
    /// Heurística de POS que casou (ou "default")
    pub pos_rule: String,
}

/// Motor de regras de sufixo
pub struct RuleEngine {
    lemma_rules: Vec<LemmaRule>,
    pos_rules: Vec<PosRule>,
    /// Radicais de adjetivos cujo feminino em -a volta para -o
    feminine_stems: Vec<String>,
}

/// Nome reportado quando nenhuma regra casa
pub const DEFAULT_RULE: &str = "default";

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            lemma_rules: vec![
                LemmaRule {
                    name: "adverb_mente",
                    suffixes: &["mente"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Adverb,
                    pos: PosTag::Adv,
                },
                LemmaRule {
                    name: "gerund_ando",
                    suffixes: &["ando"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Replace("ar"),
                    pos: PosTag::Verb,
                },
                LemmaRule {
                    name: "gerund_iendo",
                    suffixes: &["iendo"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Replace("er"),
                    pos: PosTag::Verb,
                },
                LemmaRule {
                    name: "participle_ado",
                    suffixes: &["ado"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Replace("ar"),
                    pos: PosTag::Verb,
                },
                LemmaRule {
                    name: "participle_ido",
                    suffixes: &["ido"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Replace("er"),
                    pos: PosTag::Verb,
                },
                LemmaRule {
                    name: "plural_es",
                    suffixes: &["es"],
                    min_chars: 4,
                    unless_suffix: None,
                    action: LemmaAction::Replace(""),
                    pos: PosTag::Noun,
                },
                LemmaRule {
                    name: "plural_s",
                    suffixes: &["s"],
                    min_chars: 3,
                    unless_suffix: Some("ss"),
                    action: LemmaAction::Replace(""),
                    pos: PosTag::Noun,
                },
                LemmaRule {
                    name: "feminine_adjective",
                    suffixes: &["a"],
                    min_chars: 3,
                    unless_suffix: None,
                    action: LemmaAction::Feminine,
                    pos: PosTag::Adj,
                },
                LemmaRule {
                    name: "noun_base_form",
                    suffixes: &["ción", "sión", "dad", "tad"],
                    min_chars: 0,
                    unless_suffix: None,
                    action: LemmaAction::Keep,
                    pos: PosTag::Noun,
                },
            ],
            pos_rules: vec![
                PosRule { name: "adverb_mente", suffixes: &["mente"], min_chars: 0, pos: PosTag::Adv },
                PosRule { name: "gerund", suffixes: &["ando", "iendo"], min_chars: 0, pos: PosTag::Verb },
                PosRule { name: "participle", suffixes: &["ado", "ido"], min_chars: 0, pos: PosTag::Verb },
                PosRule {
                    name: "noun_suffix",
                    suffixes: &["ción", "sión", "dad", "tad", "eza", "ura", "ismo", "ista", "miento", "aje"],
                    min_chars: 0,
                    pos: PosTag::Noun,
                },
                PosRule {
                    name: "adjective_suffix",
                    suffixes: &["oso", "osa", "ivo", "iva", "able", "ible", "ante", "ente"],
                    min_chars: 0,
                    pos: PosTag::Adj,
                },
                PosRule { name: "infinitive", suffixes: &["ar", "er", "ir"], min_chars: 0, pos: PosTag::Verb },
                PosRule { name: "plural", suffixes: &["s"], min_chars: 3, pos: PosTag::Noun },
            ],
            feminine_stems: ["pequeñ", "buen", "mal", "primer", "tercer"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn add_feminine_stem(&mut self, stem: &str) {
        self.feminine_stems.push(stem.to_lowercase());
    }

    /// Aplica as duas passagens a uma palavra (em minúsculas) ausente do léxico
    pub fn apply(&self, word: &str) -> RuleMatch {
        let (lemma, lemma_rule, lemma_rule_pos) = self.lemmatize(word);
        let (pos, pos_rule) = self.guess_pos(word);
        RuleMatch {
            lemma,
            pos,
            lemma_rule: lemma_rule.to_string(),
            lemma_rule_pos,
            pos_rule: pos_rule.to_string(),
        }
    }

    /// Primeira regra de lema que casa: (lema, nome da regra, categoria implícita)
    pub fn lemmatize(&self, word: &str) -> (String, &'static str, PosTag) {
        let chars = word.chars().count();

        for rule in &self.lemma_rules {
            if chars < rule.min_chars {
                continue;
            }
            if rule.unless_suffix.is_some_and(|s| word.ends_with(s)) {
                continue;
            }
            let Some(stem) = rule.suffixes.iter().find_map(|s| word.strip_suffix(s)) else {
                continue;
            };

            let lemma = match rule.action {
                LemmaAction::Replace(ending) => format!("{stem}{ending}"),
                LemmaAction::Adverb => match stem.strip_suffix('a') {
                    Some(adjective) => format!("{adjective}o"),
                    None => stem.to_string(),
                },
                LemmaAction::Feminine => {
                    if !self.feminine_stems.iter().any(|f| word.starts_with(f.as_str())) {
                        // Terminar em -a não basta ("casa", "cocina"): segue para as próximas regras
                        continue;
                    }
                    format!("{stem}o")
                }
                LemmaAction::Keep => word.to_string(),
            };

            // "mente" sozinho deixaria o lema vazio
            if lemma.is_empty() {
                return (word.to_string(), rule.name, rule.pos);
            }
            return (lemma, rule.name, rule.pos);
        }

        (word.to_string(), DEFAULT_RULE, PosTag::Noun)
    }

    /// Primeira heurística de POS que casa: (categoria, nome da regra)
    pub fn guess_pos(&self, word: &str) -> (PosTag, &'static str) {
        let chars = word.chars().count();
        self.pos_rules
            .iter()
            .find(|rule| chars >= rule.min_chars && rule.suffixes.iter().any(|s| word.ends_with(s)))
            .map(|rule| (rule.pos, rule.name))
            .unwrap_or((PosTag::Noun, DEFAULT_RULE))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        RuleEngine::new().lemmatize(word).0
    }

    fn pos(word: &str) -> PosTag {
        RuleEngine::new().guess_pos(word).0
    }

    #[test]
    fn test_gerunds_and_participles() {
        assert_eq!(lemma("saltando"), "saltar");
        assert_eq!(lemma("bebiendo"), "beber");
        assert_eq!(lemma("terminado"), "terminar");
        assert_eq!(lemma("vendido"), "vender");
        assert_eq!(pos("saltando"), PosTag::Verb);
        assert_eq!(pos("vendido"), PosTag::Verb);
    }

    #[test]
    fn test_mente_swaps_trailing_a() {
        let engine = RuleEngine::new();
        let (l, rule, implied) = engine.lemmatize("tranquilamente");
        assert_eq!(l, "tranquilo");
        assert_eq!(rule, "adverb_mente");
        assert_eq!(implied, PosTag::Adv);
        assert_eq!(lemma("felizmente"), "feliz");
        assert_eq!(pos("felizmente"), PosTag::Adv);
    }

    #[test]
    fn test_bare_mente_keeps_the_word() {
        assert_eq!(lemma("mente"), "mente");
    }

    #[test]
    fn test_plurals() {
        assert_eq!(lemma("jugadores"), "jugador");
        assert_eq!(lemma("mandos"), "mando");
        // "es" com 3 caracteres ou menos não é plural em -es
        assert_eq!(lemma("mes"), "me");
        // -ss não é plural
        assert_eq!(lemma("boss"), "boss");
        assert_eq!(lemma("as"), "as");
    }

    #[test]
    fn test_feminine_only_for_known_stems() {
        assert_eq!(lemma("buenísima"), "buenísimo");
        assert_eq!(lemma("primera"), "primero");
        assert_eq!(lemma("pantalla"), "pantalla");
    }

    #[test]
    fn test_custom_feminine_stem() {
        let mut engine = RuleEngine::new();
        engine.add_feminine_stem("Rápid");
        assert_eq!(engine.lemmatize("rápida").0, "rápido");
    }

    #[test]
    fn test_noun_suffixes_are_base_forms() {
        let engine = RuleEngine::new();
        assert_eq!(engine.lemmatize("resolución"), ("resolución".to_string(), "noun_base_form", PosTag::Noun));
        assert_eq!(pos("dificultad"), PosTag::Noun);
        assert_eq!(pos("realismo"), PosTag::Noun);
    }

    #[test]
    fn test_adjective_and_infinitive_heuristics() {
        assert_eq!(pos("adictivo"), PosTag::Adj);
        assert_eq!(pos("jugable"), PosTag::Adj);
        assert_eq!(pos("construir"), PosTag::Verb);
    }

    #[test]
    fn test_pos_heuristics_cover_every_suffix() {
        let engine = RuleEngine::new();
        let cases = [
            ("lentamente", PosTag::Adv, "adverb_mente"),
            ("saltando", PosTag::Verb, "gerund"),
            ("bebiendo", PosTag::Verb, "gerund"),
            ("terminado", PosTag::Verb, "participle"),
            ("vendido", PosTag::Verb, "participle"),
            ("canción", PosTag::Noun, "noun_suffix"),
            ("televisión", PosTag::Noun, "noun_suffix"),
            ("ciudad", PosTag::Noun, "noun_suffix"),
            ("libertad", PosTag::Noun, "noun_suffix"),
            ("belleza", PosTag::Noun, "noun_suffix"),
            ("aventura", PosTag::Noun, "noun_suffix"),
            ("realismo", PosTag::Noun, "noun_suffix"),
            ("artista", PosTag::Noun, "noun_suffix"),
            ("movimiento", PosTag::Noun, "noun_suffix"),
            ("personaje", PosTag::Noun, "noun_suffix"),
            ("famoso", PosTag::Adj, "adjective_suffix"),
            ("famosa", PosTag::Adj, "adjective_suffix"),
            ("adictivo", PosTag::Adj, "adjective_suffix"),
            ("creativa", PosTag::Adj, "adjective_suffix"),
            ("jugable", PosTag::Adj, "adjective_suffix"),
            ("posible", PosTag::Adj, "adjective_suffix"),
            ("brillante", PosTag::Adj, "adjective_suffix"),
            ("potente", PosTag::Adj, "adjective_suffix"),
            ("cantar", PosTag::Verb, "infinitive"),
            ("correr", PosTag::Verb, "infinitive"),
            ("vivir", PosTag::Verb, "infinitive"),
            ("mandos", PosTag::Noun, "plural"),
            ("zelda", PosTag::Noun, DEFAULT_RULE),
        ];
        for (word, tag, rule) in cases {
            assert_eq!(engine.guess_pos(word), (tag, rule), "{word}");
        }
    }

    #[test]
    fn test_infinitives_are_untouched() {
        for word in ["correr", "jugar", "construir"] {
            assert_eq!(lemma(word), word);
        }
    }

    #[test]
    fn test_default_is_noun_and_unchanged() {
        let m = RuleEngine::new().apply("zelda");
        assert_eq!(m.lemma, "zelda");
        assert_eq!(m.pos, PosTag::Noun);
        assert_eq!(m.lemma_rule, DEFAULT_RULE);
        assert_eq!(m.pos_rule, DEFAULT_RULE);
    }

    #[test]
    fn test_passes_may_disagree() {
        let m = RuleEngine::new().apply("buenísima");
        assert_eq!(m.lemma_rule_pos, PosTag::Adj);
        assert_eq!(m.pos, PosTag::Noun);
        assert_ne!(m.pos, m.lemma_rule_pos);
    }
}
