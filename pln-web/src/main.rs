//! Servidor web Axum com WebSocket para o chatbot de videojuegos e a análise PLN em tempo real

mod collaborators;
mod config;

use std::path::PathBuf;
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use pln_core::{
    conversation::{self, ConversationState},
    corpus::{demo_texts, DemoText},
    gaming::{analyze_gaming_content, GamingAnalysis},
    pipeline::{AnalysisRecord, Pipeline, PipelineEvent},
    tagger::PosTag,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::collaborators::{
    generate_or_fallback, sentiment_or_fallback, GenerationParameters, GenerationRequest, TextCollaborator,
};
use crate::config::Config;

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: Pipeline,
    collaborator: Arc<dyn TextCollaborator>,
}

#[derive(Deserialize)]
struct TextRequest {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    state: ConversationState,
}

#[derive(Deserialize)]
struct GenerationBody {
    #[serde(default)]
    text: String,
    /// Aceita qualquer número JSON; ver `clamp_max_length`
    max_length: Option<f64>,
    temperature: Option<f64>,
    top_p: Option<f64>,
}

/// Análise morfológica mais a análise de domínio do mesmo texto
#[derive(Serialize)]
struct NlpResponse {
    #[serde(flatten)]
    record: AnalysisRecord,
    #[serde(rename = "gamingAnalysis")]
    gaming_analysis: GamingAnalysis,
}

#[derive(Serialize)]
struct ChatResponse {
    state: ConversationState,
    status: String,
    reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<NlpResponse>,
}

/// Legenda das etiquetas na página
struct TagLegend {
    label: &'static str,
    description: &'static str,
    color: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    welcome: &'static str,
    demos: Vec<DemoText>,
    legend: Vec<TagLegend>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    if config.disable_collaborators {
        info!("Colaboradores desativados: geração e sentimento usarão fallbacks locais");
    }

    let state = Arc::new(AppState {
        pipeline: Pipeline::new(),
        collaborator: collaborators::from_config(&config),
    });
    let app = app(state, config.static_dir());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("🚀 Servidor PLN iniciado em http://{}", config.addr);
    axum::serve(listener, app).await
}

fn app(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/api/nlp-process", post(nlp_process_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/gpt2-chat", post(gpt2_chat_handler))
        .route("/api/sentiment-analysis", post(sentiment_handler))
        .route("/ws", get(ws_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

fn text_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": "Texto requerido"})),
    )
        .into_response()
}

fn nlp_response(pipeline: &Pipeline, text: &str) -> NlpResponse {
    NlpResponse {
        record: pipeline.analyze(text),
        gaming_analysis: analyze_gaming_content(text),
    }
}

/// Retorna a página principal HTML
async fn index_handler() -> Response {
    let page = IndexTemplate {
        welcome: conversation::WELCOME,
        demos: demo_texts(),
        legend: PosTag::all()
            .into_iter()
            .map(|tag| TagLegend {
                label: tag.label(),
                description: tag.description(),
                color: tag.color(),
            })
            .collect(),
    };
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Erro ao renderizar página: {e}")).into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    Json(demo_texts())
}

/// Análise PLN via HTTP POST (sem streaming)
async fn nlp_process_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Response {
    if req.text.trim().is_empty() {
        return text_required();
    }
    debug!("Analisando {} chars", req.text.len());
    Json(nlp_response(&state.pipeline, &req.text)).into_response()
}

/// Um turno da conversa; o cliente devolve o estado recebido na resposta anterior
async fn chat_handler(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    if req.text.trim().is_empty() {
        return text_required();
    }

    let (next, turn) = conversation::transition(req.state, &req.text);
    info!("Conversa: {:?} → {:?}", req.state, next);

    Json(ChatResponse {
        status: next.status_label(),
        state: next,
        reply: turn.reply,
        analysis: turn.analyze.then(|| nlp_response(&state.pipeline, &req.text)),
    })
    .into_response()
}

/// Arredonda e limita o comprimento pedido a `1..=u32::MAX` (o `as` satura)
fn clamp_max_length(requested: f64) -> u32 {
    requested.round().max(1.0) as u32
}

async fn gpt2_chat_handler(State(state): State<Arc<AppState>>, Json(req): Json<GenerationBody>) -> Response {
    if req.text.trim().is_empty() {
        return text_required();
    }

    let defaults = GenerationParameters::default();
    let request = GenerationRequest {
        parameters: GenerationParameters {
            max_length: req.max_length.map(clamp_max_length).unwrap_or(defaults.max_length),
            temperature: req.temperature.unwrap_or(defaults.temperature),
            top_p: req.top_p.unwrap_or(defaults.top_p),
        },
        text: req.text,
    };
    Json(generate_or_fallback(state.collaborator.as_ref(), &request).await).into_response()
}

async fn sentiment_handler(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Response {
    if req.text.trim().is_empty() {
        return text_required();
    }
    Json(sentiment_or_fallback(state.collaborator.as_ref(), &req.text).await).into_response()
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa o pipeline e envia os eventos passo a passo
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(raw) => {
                // Aceita {"text": ...} ou o texto puro
                let text = match serde_json::from_str::<TextRequest>(&raw) {
                    Ok(req) => req.text.trim().to_string(),
                    Err(_) => raw.trim().to_string(),
                };
                if text.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} chars", text.len());

                // O pipeline é síncrono: roda fora do runtime
                let (tx, rx) = std::sync::mpsc::channel::<PipelineEvent>();
                let worker = Arc::clone(&state);
                let handle = tokio::task::spawn_blocking(move || {
                    worker.pipeline.analyze_streaming(&text, tx);
                });
                handle.await.ok();

                let events: Vec<PipelineEvent> = rx.try_iter().collect();
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pausa curta para a animação passo a passo
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pln_core::sentiment::{Probabilities, Sentiment};
    use tower::ServiceExt;

    use crate::collaborators::{
        CollaboratorError, DisabledCollaborator, GenerationResponse, SentimentResponse,
        FALLBACK_GENERATION_MODEL, FALLBACK_SENTIMENT_MODEL,
    };

    /// Colaborador que responde sempre a mesma coisa
    struct CannedCollaborator;

    #[async_trait]
    impl TextCollaborator for CannedCollaborator {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, CollaboratorError> {
            Ok(GenerationResponse {
                response: format!("eco: {}", request.text),
                model: "modelo-de-teste".into(),
                parameters: request.parameters,
                timestamp: "2024-01-01T00:00:00Z".into(),
            })
        }

        async fn classify_sentiment(&self, text: &str) -> Result<SentimentResponse, CollaboratorError> {
            Ok(SentimentResponse {
                text: text.into(),
                sentiment: Sentiment::Negative,
                confidence: 0.6,
                probabilities: Probabilities::peaked(Sentiment::Negative, 0.6),
                model: "modelo-de-teste".into(),
                timestamp: "2024-01-01T00:00:00Z".into(),
            })
        }
    }

    fn test_app(collaborator: Arc<dyn TextCollaborator>) -> Router {
        let state = Arc::new(AppState {
            pipeline: Pipeline::new(),
            collaborator,
        });
        app(state, std::env::temp_dir())
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders() {
        let (status, html) = get(test_app(Arc::new(DisabledCollaborator)), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Interjección"));
        assert!(html.contains("Me encanta jugar Minecraft"));
    }

    #[tokio::test]
    async fn test_health_and_demo_texts() {
        let (status, body) = get(test_app(Arc::new(DisabledCollaborator)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"ok\""));

        let (status, body) = get(test_app(Arc::new(DisabledCollaborator)), "/demo-texts").await;
        assert_eq!(status, StatusCode::OK);
        let demos: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(demos[0]["domain"].is_string());
        assert!(demos[0]["text"].is_string());
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        for uri in ["/api/nlp-process", "/api/chat", "/api/gpt2-chat", "/api/sentiment-analysis"] {
            let (status, body) = post_json(test_app(Arc::new(DisabledCollaborator)), uri, serde_json::json!({"text": "   "})).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, serde_json::json!({"error": "Texto requerido"}));
        }

        let (status, _) = post_json(test_app(Arc::new(DisabledCollaborator)), "/api/nlp-process", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nlp_process() {
        let (status, body) = post_json(
            test_app(Arc::new(DisabledCollaborator)),
            "/api/nlp-process",
            serde_json::json!({"text": "Me encanta jugar Minecraft en mi PS5"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokens"].as_array().unwrap().len(), 7);
        assert_eq!(body["posTags"].as_array().unwrap().len(), 7);
        assert_eq!(body["lemmas"][2]["lemma"], "jugar");
        assert_eq!(body["gamingAnalysis"]["is_gaming_related"], true);
        assert_eq!(body["gamingAnalysis"]["games_mentioned"][0], "minecraft");
    }

    #[tokio::test]
    async fn test_chat_turns() {
        let app = test_app(Arc::new(DisabledCollaborator));

        let (_, body) = post_json(app.clone(), "/api/chat", serde_json::json!({"text": "quiero jugar"})).await;
        assert_eq!(body["state"]["kind"], "awaiting_greeting");
        assert!(body.get("analysis").is_none());

        let (_, body) = post_json(app.clone(), "/api/chat", serde_json::json!({"text": "hola"})).await;
        assert_eq!(body["state"], serde_json::json!({"kind": "active", "count": 1}));
        assert_eq!(body["analysis"]["tokens"], serde_json::json!(["hola"]));

        let state = body["state"].clone();
        let (_, body) = post_json(app, "/api/chat", serde_json::json!({"text": "nos vemos", "state": state})).await;
        assert_eq!(body["state"]["kind"], "ended");
        assert_eq!(body["status"], "Conversación terminada");
    }

    #[tokio::test]
    async fn test_generation_falls_back_when_collaborator_fails() {
        let (status, body) = post_json(
            test_app(Arc::new(DisabledCollaborator)),
            "/api/gpt2-chat",
            serde_json::json!({"text": "hola", "max_length": 50}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], FALLBACK_GENERATION_MODEL);
        // O fallback sempre informa os parâmetros padrão
        assert_eq!(body["parameters"]["max_length"], 120);
    }

    #[tokio::test]
    async fn test_generation_passes_parameters() {
        let (_, body) = post_json(
            test_app(Arc::new(CannedCollaborator)),
            "/api/gpt2-chat",
            serde_json::json!({"text": "hola", "max_length": 50}),
        )
        .await;
        assert_eq!(body["response"], "eco: hola");
        assert_eq!(body["parameters"]["max_length"], 50);
        assert_eq!(body["parameters"]["top_p"], 0.9);
    }

    #[tokio::test]
    async fn test_generation_clamps_out_of_range_max_length() {
        for (requested, expected) in [
            (serde_json::json!(-5), 1),
            (serde_json::json!(0), 1),
            (serde_json::json!(50.7), 51),
            (serde_json::json!(1e12), u32::MAX),
        ] {
            let (status, body) = post_json(
                test_app(Arc::new(CannedCollaborator)),
                "/api/gpt2-chat",
                serde_json::json!({"text": "hola", "max_length": requested}),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "max_length {requested}");
            assert_eq!(body["parameters"]["max_length"], expected, "max_length {requested}");
        }
    }

    #[tokio::test]
    async fn test_sentiment() {
        let (_, body) = post_json(
            test_app(Arc::new(DisabledCollaborator)),
            "/api/sentiment-analysis",
            serde_json::json!({"text": "Este juego es excelente"}),
        )
        .await;
        assert_eq!(body["sentiment"], "POS");
        assert_eq!(body["model"], FALLBACK_SENTIMENT_MODEL);
        assert_eq!(body["text"], "Este juego es excelente");

        let (_, body) = post_json(
            test_app(Arc::new(CannedCollaborator)),
            "/api/sentiment-analysis",
            serde_json::json!({"text": "Este juego es excelente"}),
        )
        .await;
        assert_eq!(body["sentiment"], "NEG");
        assert_eq!(body["model"], "modelo-de-teste");
    }
}
