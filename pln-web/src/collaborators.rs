//! Colaboradores externos: geração de texto e sentimento
//!
//! Os modelos neurais rodam fora do processo, como scripts que recebem o texto
//! em argv e imprimem um objeto JSON em stdout. Qualquer falha (processo que não
//! sobe, timeout, código de saída, JSON inválido ou com campo `error`) vira um
//! [`CollaboratorError`]; os handlers então respondem com o fallback local.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use pln_core::sentiment::{heuristic_sentiment, Probabilities, Sentiment};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::Config;

pub const GENERATION_SCRIPT: &str = "gpt2_processor.py";
pub const SENTIMENT_SCRIPT: &str = "sentiment_analyzer.py";

/// Modelo reportado pelas respostas de geração de reserva
pub const FALLBACK_GENERATION_MODEL: &str = "gpt2-small-spanish";
/// Modelo reportado pelo sentimento por palavras-chave
pub const FALLBACK_SENTIMENT_MODEL: &str = "fallback-basic";

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("não foi possível iniciar o colaborador: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("colaborador excedeu o tempo limite de {0:?}")]
    Timeout(Duration),

    #[error("colaborador terminou com código {code:?}: {stderr}")]
    Exit { code: Option<i32>, stderr: String },

    #[error("saída do colaborador não é JSON válido: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("colaborador reportou erro: {0}")]
    Reported(String),

    #[error("colaboradores desativados")]
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 120,
            temperature: 0.1,
            top_p: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub text: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub response: String,
    pub model: String,
    pub parameters: GenerationParameters,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub probabilities: Probabilities,
    pub model: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Capacidade de geração e classificação fornecida por um modelo externo
#[async_trait]
pub trait TextCollaborator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, CollaboratorError>;

    async fn classify_sentiment(&self, text: &str) -> Result<SentimentResponse, CollaboratorError>;
}

/// Executa os scripts com o interpretador configurado
pub struct ProcessCollaborator {
    interpreter: String,
    scripts_dir: PathBuf,
    timeout: Duration,
}

impl ProcessCollaborator {
    pub fn new(interpreter: impl Into<String>, scripts_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            interpreter: interpreter.into(),
            scripts_dir: scripts_dir.into(),
            timeout,
        }
    }

    async fn run<T: DeserializeOwned>(&self, script: &str, args: &[String]) -> Result<T, CollaboratorError> {
        let path = self.scripts_dir.join(script);
        debug!("Executando {} {}", self.interpreter, path.display());

        let child = Command::new(&self.interpreter)
            .arg(&path)
            .args(args)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| CollaboratorError::Timeout(self.timeout))?
            .map_err(CollaboratorError::Spawn)?;

        if !output.status.success() {
            return Err(CollaboratorError::Exit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        // Os scripts sinalizam falha do modelo com {"error": ..., "fallback_...": ...}
        if let Some(message) = value.get("error") {
            let message = message.as_str().map(str::to_string).unwrap_or_else(|| message.to_string());
            return Err(CollaboratorError::Reported(message));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl TextCollaborator for ProcessCollaborator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, CollaboratorError> {
        let p = request.parameters;
        let args = [
            request.text.clone(),
            p.max_length.to_string(),
            p.temperature.to_string(),
            p.top_p.to_string(),
        ];
        let mut response: GenerationResponse = self.run(GENERATION_SCRIPT, &args).await?;
        if response.timestamp.is_empty() {
            response.timestamp = now();
        }
        Ok(response)
    }

    async fn classify_sentiment(&self, text: &str) -> Result<SentimentResponse, CollaboratorError> {
        let mut response: SentimentResponse = self.run(SENTIMENT_SCRIPT, &[text.to_string()]).await?;
        // o carimbo do script prevalece; só preenchemos quando ele não manda um
        if response.timestamp.is_empty() {
            response.timestamp = now();
        }
        Ok(response)
    }
}

/// Colaborador que sempre falha: força os fallbacks locais
pub struct DisabledCollaborator;

#[async_trait]
impl TextCollaborator for DisabledCollaborator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResponse, CollaboratorError> {
        Err(CollaboratorError::Disabled)
    }

    async fn classify_sentiment(&self, _text: &str) -> Result<SentimentResponse, CollaboratorError> {
        Err(CollaboratorError::Disabled)
    }
}

pub fn from_config(config: &Config) -> Arc<dyn TextCollaborator> {
    if config.disable_collaborators {
        Arc::new(DisabledCollaborator)
    } else {
        Arc::new(ProcessCollaborator::new(
            config.python.clone(),
            config.scripts_dir.clone(),
            config.collaborator_timeout(),
        ))
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resposta de geração montada localmente, com os parâmetros padrão
pub fn fallback_generation(text: &str) -> GenerationResponse {
    GenerationResponse {
        response: format!(
            "He procesado tu mensaje: \"{text}\". Este es un ejemplo de respuesta generada por el sistema GPT-2 en español."
        ),
        model: FALLBACK_GENERATION_MODEL.to_string(),
        parameters: GenerationParameters::default(),
        timestamp: now(),
    }
}

/// Sentimento por palavras-chave, no mesmo formato do modelo externo
pub fn fallback_sentiment(text: &str) -> SentimentResponse {
    let score = heuristic_sentiment(text);
    SentimentResponse {
        text: text.to_string(),
        sentiment: score.sentiment,
        confidence: score.confidence,
        probabilities: score.probabilities,
        model: FALLBACK_SENTIMENT_MODEL.to_string(),
        timestamp: now(),
    }
}

pub async fn generate_or_fallback(collaborator: &dyn TextCollaborator, request: &GenerationRequest) -> GenerationResponse {
    match collaborator.generate(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Geração indisponível, usando fallback: {e}");
            fallback_generation(&request.text)
        }
    }
}

pub async fn sentiment_or_fallback(collaborator: &dyn TextCollaborator, text: &str) -> SentimentResponse {
    match collaborator.classify_sentiment(text).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Sentimento indisponível, usando fallback: {e}");
            fallback_sentiment(text)
        }
    }
}
