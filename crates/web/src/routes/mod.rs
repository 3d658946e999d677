use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use chess_rules_core::{ClickOutcome, Event, EventLog, Game, Piece, Protection, Square, Turn};

use crate::AppState;

#[derive(Deserialize)]
pub struct SelectRequest {
    pub square: String,
}

#[derive(Serialize)]
pub struct BoardView {
    pub turn: Turn,
    pub placement: String,
    pub pieces: Vec<Piece>,
    pub highlights: Vec<Square>,
    pub protection: Protection,
}

impl BoardView {
    fn of(game: &Game) -> Self {
        let state = game.state();
        Self {
            turn: state.turn(),
            placement: state.board().placement(),
            pieces: state.board().pieces().copied().collect(),
            highlights: state
                .selection()
                .map(|s| s.moves.clone())
                .unwrap_or_default(),
            protection: state.protection().clone(),
        }
    }
}

#[derive(Serialize)]
pub struct SelectResponse {
    pub outcome: ClickOutcome,
    pub events: Vec<Event>,
    pub board: BoardView,
}

pub async fn board(State(state): State<Arc<AppState>>) -> Json<BoardView> {
    let game = state.game.lock().unwrap();
    Json(BoardView::of(&game))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, (StatusCode, String)> {
    let square: Square = request
        .square
        .parse()
        .map_err(|e: chess_rules_core::Error| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut game = state.game.lock().unwrap();
    let mut log = EventLog::new();
    let outcome = game.on_square_selected(square, &mut log);
    tracing::debug!(%square, ?outcome, "select");

    Ok(Json(SelectResponse {
        outcome,
        events: log.take(),
        board: BoardView::of(&game),
    }))
}

pub async fn reset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BoardView>, (StatusCode, String)> {
    let fresh = Game::new(state.config.clone())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let mut game = state.game.lock().unwrap();
    *game = fresh;
    tracing::info!("game reset");
    Ok(Json(BoardView::of(&game)))
}

pub async fn health() -> &'static str {
    "OK"
}
