//! # Sentimento por Palavras-Chave
//!
//! Classificador de reserva usado quando o modelo externo de sentimento não
//! responde. Conta quantas palavras-chave positivas e negativas aparecem no
//! texto (substring, em minúsculas) e a polaridade com mais acertos vence.
//!
//! A confiança do vencedor é `min(0.5 + 0.1 × acertos, 0.9)`; as outras duas
//! classes dividem o restante igualmente, de modo que as probabilidades somam 1.
//! Empate (inclusive zero a zero) é neutro com confiança 0.5.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "bueno", "excelente", "genial", "fantástico", "maravilloso",
    "increíble", "perfecto", "me gusta", "amor", "feliz",
];

const NEGATIVE_WORDS: &[&str] = &[
    "malo", "terrible", "horrible", "odio", "triste",
    "enojado", "molesto", "problema", "difícil", "mal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "POS")]
    Positive,
    #[serde(rename = "NEG")]
    Negative,
    #[serde(rename = "NEU")]
    Neutral,
}

/// Distribuição de probabilidade sobre as três classes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "POS")]
    pub positive: f64,
    #[serde(rename = "NEG")]
    pub negative: f64,
    #[serde(rename = "NEU")]
    pub neutral: f64,
}

impl Probabilities {
    /// `confidence` para a classe vencedora, o resto dividido entre as demais
    pub fn peaked(winner: Sentiment, confidence: f64) -> Self {
        let rest = (1.0 - confidence) / 2.0;
        let p = |s: Sentiment| if s == winner { confidence } else { rest };
        Self {
            positive: p(Sentiment::Positive),
            negative: p(Sentiment::Negative),
            neutral: p(Sentiment::Neutral),
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub probabilities: Probabilities,
}

fn count_hits(lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| lower.contains(*w)).count()
}

/// Classifica o texto contando palavras-chave
pub fn heuristic_sentiment(text: &str) -> SentimentScore {
    let lower = text.to_lowercase();
    let positive = count_hits(&lower, POSITIVE_WORDS);
    let negative = count_hits(&lower, NEGATIVE_WORDS);

    let (sentiment, hits) = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (Sentiment::Positive, positive),
        std::cmp::Ordering::Less => (Sentiment::Negative, negative),
        std::cmp::Ordering::Equal => (Sentiment::Neutral, 0),
    };
    let confidence = (0.5 + 0.1 * hits as f64).min(0.9);

    SentimentScore {
        sentiment,
        confidence,
        probabilities: Probabilities::peaked(sentiment, confidence),
    }
}
