//! Servidor web Axum com WebSocket para detecção de expressões numéricas em tempo real

mod config;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use numdet_core::{
    corpus::demo_texts, group_by_category, CategoryMatches, DetectConfig, DetectionEvent, Match,
    NumericDetector,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Estado compartilhado da aplicação
struct AppState {
    detector: NumericDetector,
}

/// Corpo de `POST /detect` e das mensagens WebSocket.
///
/// As opções (`categories`, `order`, `parallel`) são todas opcionais.
#[derive(Deserialize)]
struct DetectRequest {
    text: String,
    #[serde(flatten)]
    config: DetectConfig,
}

#[derive(Serialize)]
struct DetectResponse {
    matches: Vec<Match>,
    grouped: Vec<CategoryMatches>,
    total: usize,
    processing_ms: u64,
}

#[derive(Serialize)]
struct CategoryInfo {
    name: &'static str,
    label: &'static str,
    patterns: Vec<&'static str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let detector = NumericDetector::new()?;
    let app = router(Arc::new(AppState { detector }));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("🚀 Servidor numdet iniciado em http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/categories", get(categories_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/detect", post(detect_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Quebras de linha viram espaços, preservando os offsets de byte.
///
/// Padrões com espaço literal (`21 juillet 2021`) passam a casar através de uma
/// quebra de linha.
fn flatten_lines(text: &str) -> String {
    text.replace(|c: char| c == '\n' || c == '\r', " ")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Categorias com seus rótulos e padrões, na ordem de execução
async fn categories_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = state
        .detector
        .grammars()
        .iter()
        .map(|grammar| CategoryInfo {
            name: grammar.category().name(),
            label: grammar.category().label(),
            patterns: grammar.pattern_names().collect(),
        })
        .collect();
    Json(categories)
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| json!({ "domain": domain, "text": text }))
        .collect();
    Json(texts)
}

/// Detecção via HTTP POST (sem streaming)
async fn detect_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DetectRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Texto vazio");
    }

    // Detecção é CPU-bound: roda fora do runtime assíncrono
    let result = tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let text = flatten_lines(&req.text);
        let matches = state.detector.analyze_with(&text, &req.config);
        (matches, start.elapsed().as_millis() as u64)
    })
    .await;

    match result {
        Ok((matches, processing_ms)) => Json(DetectResponse {
            grouped: group_by_category(&matches),
            total: matches.len(),
            matches,
            processing_ms,
        })
        .into_response(),
        Err(err) => {
            warn!("tarefa de detecção falhou: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha na detecção")
        }
    }
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa a detecção e envia os eventos
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Tenta parsear como JSON {text, categories, order}; senão usa como texto puro
                let (text, config) = match serde_json::from_str::<DetectRequest>(&text) {
                    Ok(req) => (flatten_lines(&req.text), req.config),
                    Err(_) => (flatten_lines(&text), DetectConfig::default()),
                };
                if text.trim().is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} bytes", text.len());

                let (tx, rx) = std::sync::mpsc::channel::<DetectionEvent>();
                let state = Arc::clone(&state);
                let handle = tokio::task::spawn_blocking(move || {
                    state.detector.analyze_streaming(&text, &config, tx);
                });
                if let Err(err) = handle.await {
                    warn!("tarefa de detecção falhou: {err}");
                    continue;
                }

                let events: Vec<DetectionEvent> = rx.try_iter().collect();
                for event in &events {
                    let Ok(json) = serde_json::to_string(event) else {
                        continue;
                    };
                    if socket.send(Message::Text(json)).await.is_err() {
                        return; // cliente desconectou
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
