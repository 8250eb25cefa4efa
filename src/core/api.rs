//! HTTP + WebSocket API for a single puzzle session
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /tools - Tool catalog (name + description)
//! - GET /state - Session snapshot for rendering
//! - GET /transcript - Transcript lines
//! - POST /execute - Run a tool by name
//! - POST /command - Run agent free text
//! - POST /reset - Fresh session, same seed
//! - WS /ws - Live transcript updates
//!
//! The one engine sits behind one mutex: a call's check-then-set,
//! inventory grant and transcript append all happen under the same lock.

use axum::{
    extract::{State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::info;

use crate::core::PuzzleEngine;
use crate::types::{SessionConfig, SessionSnapshot};

/// App state
pub struct AppState {
    pub engine: Mutex<PuzzleEngine>,
    pub update_tx: broadcast::Sender<TranscriptUpdate>,
}

/// Live update message: the two lines one call appended
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptUpdate {
    pub echo: String,
    pub result: String,
    pub solved: usize,
    pub complete: bool,
}

/// Execute request
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub tool: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Command request
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub text: String,
}

/// Execute / command response
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub result: String,
    pub solved: usize,
    pub inventory: Vec<String>,
    pub complete: bool,
}

/// Catalog entry
#[derive(Debug, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub description: String,
}

/// Transcript response
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub lines: Vec<String>,
    pub digest: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub seed: u64,
}

/// Create the API router
pub fn create_router(config: SessionConfig) -> Router {
    let (tx, _) = broadcast::channel(100);
    let state = Arc::new(AppState {
        engine: Mutex::new(PuzzleEngine::new(config)),
        update_tx: tx,
    });

    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/state", get(get_state))
        .route("/transcript", get(get_transcript))
        .route("/execute", post(execute))
        .route("/command", post(command))
        .route("/reset", post(reset))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let engine = state.engine.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        seed: engine.seed(),
    })
}

/// Tool catalog
async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Vec<ToolEntry>> {
    let engine = state.engine.lock().await;
    Json(
        engine
            .registry()
            .catalog()
            .map(|tool| ToolEntry {
                name: tool.name.clone(),
                description: tool.description.clone(),
            })
            .collect(),
    )
}

/// Session snapshot
async fn get_state(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    let engine = state.engine.lock().await;
    Json(engine.snapshot())
}

/// Transcript lines
async fn get_transcript(State(state): State<Arc<AppState>>) -> Json<TranscriptResponse> {
    let engine = state.engine.lock().await;
    Json(TranscriptResponse {
        lines: engine.transcript().lines().to_vec(),
        digest: engine.transcript().digest(),
    })
}

/// Execute a tool by name
async fn execute(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExecuteRequest>,
) -> Json<ExecuteResponse> {
    let mut engine = state.engine.lock().await;
    let result = engine.execute_tool(&req.tool, &req.args);
    Json(respond(&state, &engine, result))
}

/// Execute agent free text
async fn command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<ExecuteResponse>, StatusCode> {
    let mut engine = state.engine.lock().await;
    let result = engine.execute_command(&req.text).ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(respond(&state, &engine, result)))
}

/// Start over with the same seed
async fn reset(State(state): State<Arc<AppState>>) -> StatusCode {
    let mut engine = state.engine.lock().await;
    engine.reset();
    info!(seed = engine.seed(), "session reset");
    StatusCode::NO_CONTENT
}

/// Broadcast the call just recorded and build the response
fn respond(state: &AppState, engine: &PuzzleEngine, result: String) -> ExecuteResponse {
    let lines = engine.transcript().lines();
    let echo = lines.len().checked_sub(2).map(|i| lines[i].clone()).unwrap_or_default();
    let solved = engine.graph().solved_count();
    let complete = engine.is_complete();

    let update = TranscriptUpdate {
        echo,
        result: result.clone(),
        solved,
        complete,
    };
    let _ = state.update_tx.send(update);

    ExecuteResponse {
        result,
        solved,
        inventory: engine.inventory().iter().map(str::to_string).collect(),
        complete,
    }
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let rx = state.update_tx.subscribe();
    ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    })
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<TranscriptUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Run the API server
pub async fn run_server(addr: &str, config: SessionConfig) -> anyhow::Result<()> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "lockroom API listening");
    println!("🔐 Lockroom API running on {}", addr);
    println!("  GET  /health      - Health check");
    println!("  GET  /tools       - Tool catalog");
    println!("  GET  /state       - Session snapshot");
    println!("  GET  /transcript  - Transcript lines");
    println!("  POST /execute     - Run a tool");
    println!("  POST /command     - Run agent text");
    println!("  POST /reset       - Start over");
    println!("  WS   /ws          - Live updates");
    axum::serve(listener, router).await?;
    Ok(())
}
