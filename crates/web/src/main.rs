use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;

use chess_rules_core::{EngineConfig, Game};

mod routes;

pub struct AppState {
    pub game: Mutex<Game>,
    pub config: EngineConfig,
}

impl AppState {
    pub fn new(config: EngineConfig) -> chess_rules_core::Result<Self> {
        let game = Game::new(config.clone())?;
        Ok(Self {
            game: Mutex::new(game),
            config,
        })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/board", get(routes::board))
        .route("/select", post(routes::select))
        .route("/reset", post(routes::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match std::env::var("CHESS_RULES_CONFIG") {
        Ok(path) => EngineConfig::load(&path).expect("Failed to load config"),
        Err(_) => EngineConfig::default(),
    };
    let state = Arc::new(AppState::new(config).expect("Failed to set up board"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .unwrap();

    tracing::info!("Server running at http://localhost:3000");

    axum::serve(listener, app(state)).await.unwrap();
}
