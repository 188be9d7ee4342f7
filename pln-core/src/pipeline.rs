//! # Pipeline de Análise — Orquestrador com Eventos Observáveis
//!
//! O pipeline coordena tokenizador, léxico e motor de regras, e emite eventos
//! em cada passo via um canal Rust (`mpsc`), permitindo que o servidor
//! WebSocket transmita o progresso em tempo real para o cliente.
//!
//! Para cada token, a resolução é:
//! 1. Busca exata no [`lexicon`](crate::lexicon) → lema e categoria da entrada.
//! 2. Caso contrário, [`RuleEngine`] → lema pela regra de lema, categoria pela
//!    heurística de POS.
//!
//! A análise é total: nunca falha, e a saída está sempre alinhada com os tokens.

use std::sync::mpsc;
use std::time::Instant;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::rule_based::RuleEngine;
use crate::tagger::{LemmaPair, PosTag, TaggedWord};
use crate::tokenizer::tokenize;

/// Resultado da análise de um texto.
///
/// `tokens`, `lemmas` e `pos_tags` têm sempre o mesmo comprimento, e a palavra
/// na posição `i` de cada sequência é `tokens[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub tokens: Vec<String>,
    pub lemmas: Vec<LemmaPair>,
    #[serde(rename = "posTags")]
    pub pos_tags: Vec<TaggedWord>,
}

/// De onde veio a resolução de um token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Lexicon,
    Rule,
}

/// Eventos emitidos pelo pipeline durante o processamento.
///
/// Permitem que a UI visualize a análise passo a passo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: Tokenização concluída.
    TokenizationDone {
        tokens: Vec<String>,
        total: usize,
    },
    /// **Passo 2**: Lema e categoria resolvidos para um token.
    ///
    /// Nas resoluções por regra, `lemma_rule`/`pos_rule` dizem quais regras
    /// casaram e `rule_pos` é a categoria implícita na regra de lema, que pode
    /// divergir de `pos`.
    TokenResolved {
        token_index: usize,
        word: String,
        lemma: String,
        pos: PosTag,
        description: String,
        source: ResolutionSource,
        lemma_rule: Option<String>,
        pos_rule: Option<String>,
        rule_pos: Option<PosTag>,
    },
    /// **Conclusão**: registro completo e tempo de processamento.
    Done {
        record: AnalysisRecord,
        processing_ms: u64,
    },
}

/// O pipeline de análise morfológica.
///
/// # Modos de Uso
/// - **Sync**: [`Pipeline::analyze`] para chamadas diretas.
/// - **Streaming**: [`Pipeline::analyze_streaming`] para UIs reativas (via WebSocket).
pub struct Pipeline {
    pub rule_engine: RuleEngine,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new(),
        }
    }

    /// Analisa o texto de forma síncrona.
    pub fn analyze(&self, text: &str) -> AnalysisRecord {
        let tokens = tokenize(text);
        let mut record = AnalysisRecord {
            lemmas: Vec::with_capacity(tokens.len()),
            pos_tags: Vec::with_capacity(tokens.len()),
            ..Default::default()
        };

        for token in &tokens {
            let (lemma, pos) = self.resolve(token);
            record.lemmas.push(LemmaPair {
                word: token.clone(),
                lemma,
            });
            record.pos_tags.push(TaggedWord::new(token.as_str(), pos));
        }
        record.tokens = tokens;
        record
    }

    /// Lema e categoria de um único token (já em minúsculas)
    pub fn resolve(&self, token: &str) -> (String, PosTag) {
        match lexicon::lookup(token) {
            Some(entry) => (entry.lemma.to_string(), entry.pos),
            None => {
                let m = self.rule_engine.apply(token);
                (m.lemma, m.pos)
            }
        }
    }

    /// Executa a análise enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokenizationDone`
    /// 2. `TokenResolved` (um por token, em ordem)
    /// 3. `Done`
    ///
    /// Se o receptor for descartado no meio do caminho, a análise continua e
    /// os eventos são ignorados.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = Instant::now();

        // === Passo 1: Tokenização ===
        let tokens = tokenize(text);
        let _ = tx.send(PipelineEvent::TokenizationDone {
            tokens: tokens.clone(),
            total: tokens.len(),
        });

        // === Passo 2: Léxico, depois regras ===
        let mut record = AnalysisRecord::default();
        for (i, token) in tokens.iter().enumerate() {
            let event = match lexicon::lookup(token) {
                Some(entry) => PipelineEvent::TokenResolved {
                    token_index: i,
                    word: token.clone(),
                    lemma: entry.lemma.to_string(),
                    pos: entry.pos,
                    description: entry.pos.description().to_string(),
                    source: ResolutionSource::Lexicon,
                    lemma_rule: None,
                    pos_rule: None,
                    rule_pos: None,
                },
                None => {
                    let m = self.rule_engine.apply(token);
                    PipelineEvent::TokenResolved {
                        token_index: i,
                        word: token.clone(),
                        description: m.pos.description().to_string(),
                        lemma: m.lemma,
                        pos: m.pos,
                        source: ResolutionSource::Rule,
                        lemma_rule: Some(m.lemma_rule),
                        pos_rule: Some(m.pos_rule),
                        rule_pos: Some(m.lemma_rule_pos),
                    }
                }
            };

            if let PipelineEvent::TokenResolved { lemma, pos, .. } = &event {
                record.lemmas.push(LemmaPair {
                    word: token.clone(),
                    lemma: lemma.clone(),
                });
                record.pos_tags.push(TaggedWord::new(token.as_str(), *pos));
            }
            let _ = tx.send(event);
        }
        record.tokens = tokens;

        let _ = tx.send(PipelineEvent::Done {
            record,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_PIPELINE: Lazy<Pipeline> = Lazy::new(Pipeline::new);

/// Analisa um texto com o pipeline padrão do processo.
pub fn analyze(text: &str) -> AnalysisRecord {
    DEFAULT_PIPELINE.analyze(text)
}

/// Analisa textos independentes em paralelo; a ordem de saída é a de entrada.
pub fn analyze_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<AnalysisRecord> {
    texts
        .par_iter()
        .map(|text| DEFAULT_PIPELINE.analyze(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lemma_and_pos(text: &str) -> (String, PosTag) {
        let record = analyze(text);
        assert_eq!(record.tokens.len(), 1, "esperava um único token em {text:?}");
        (record.lemmas[0].lemma.clone(), record.pos_tags[0].pos)
    }

    #[test]
    fn test_empty_input() {
        let record = analyze("");
        assert!(record.tokens.is_empty());
        assert!(record.lemmas.is_empty());
        assert!(record.pos_tags.is_empty());
    }

    #[test]
    fn test_known_forms() {
        assert_eq!(lemma_and_pos("hablando"), ("hablar".to_string(), PosTag::Verb));
        assert_eq!(lemma_and_pos("niños").0, "niño");
        assert_eq!(lemma_and_pos("rápidamente"), ("rápido".to_string(), PosTag::Adv));
    }

    #[test]
    fn test_lexicon_hit_returns_entry() {
        let entry = lexicon::lookup("juegos").unwrap();
        let (lemma, pos) = lemma_and_pos("Juegos");
        assert_eq!(lemma, entry.lemma);
        assert_eq!(pos, entry.pos);
    }

    #[test]
    fn test_infinitive_unchanged_by_rules() {
        assert!(lexicon::lookup("correr").is_none());
        assert_eq!(lemma_and_pos("correr"), ("correr".to_string(), PosTag::Verb));
    }

    #[test]
    fn test_rule_fallbacks() {
        assert_eq!(lemma_and_pos("programando"), ("programar".to_string(), PosTag::Verb));
        assert_eq!(lemma_and_pos("desarrolladores"), ("desarrollador".to_string(), PosTag::Noun));
        assert_eq!(lemma_and_pos("Nintendo"), ("nintendo".to_string(), PosTag::Noun));
    }

    #[test]
    fn test_record_serializes_with_pos_tags_key() {
        let json = serde_json::to_value(analyze("¡Hola, mundo!")).unwrap();
        assert_eq!(json["tokens"], serde_json::json!(["hola", "mundo"]));
        assert_eq!(json["lemmas"][0], serde_json::json!({"word": "hola", "lemma": "hola"}));
        assert_eq!(json["posTags"][0]["pos"], "INTJ");
        assert_eq!(json["posTags"][0]["description"], "Interjección");
    }

    #[test]
    fn test_streaming_events() {
        let pipeline = Pipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("Los desarrolladores están corriendo", tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        // TokenizationDone + 4 tokens + Done
        assert_eq!(events.len(), 6);
        assert!(
            matches!(&events[0], PipelineEvent::TokenizationDone { total: 4, .. }),
            "Primeiro evento deve ser TokenizationDone"
        );

        match &events[2] {
            PipelineEvent::TokenResolved { word, lemma, source, lemma_rule, .. } => {
                assert_eq!(word, "desarrolladores");
                assert_eq!(lemma, "desarrollador");
                assert_eq!(*source, ResolutionSource::Rule);
                assert_eq!(lemma_rule.as_deref(), Some("plural_es"));
            }
            other => panic!("evento inesperado: {other:?}"),
        }

        match events.last().unwrap() {
            PipelineEvent::Done { record, .. } => {
                assert_eq!(*record, pipeline.analyze("Los desarrolladores están corriendo"));
            }
            other => panic!("Último evento deve ser Done, veio {other:?}"),
        }
    }

    #[test]
    fn test_streaming_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        Pipeline::new().analyze_streaming("sin nadie escuchando", tx);
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts = ["hola", "", "jugando a la consola"];
        let records = analyze_batch(&texts);
        assert_eq!(records.len(), 3);
        for (text, record) in texts.iter().zip(&records) {
            assert_eq!(*record, analyze(text));
        }
    }

    proptest! {
        #[test]
        fn prop_sequences_stay_aligned(text in "\\PC{0,80}") {
            let record = analyze(&text);
            prop_assert_eq!(record.lemmas.len(), record.tokens.len());
            prop_assert_eq!(record.pos_tags.len(), record.tokens.len());
            for (i, token) in record.tokens.iter().enumerate() {
                prop_assert!(!token.is_empty());
                prop_assert_eq!(&record.lemmas[i].word, token);
                prop_assert_eq!(&record.pos_tags[i].word, token);
            }
        }
    }
}
