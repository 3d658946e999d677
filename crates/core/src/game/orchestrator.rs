//! Click-driven turn handling.

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Board, Color, PieceKind, Square};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::rules::possible_moves;

use super::check::{detect_check, Protection};
use super::observer::BoardObserver;
use super::state::{GameState, Selection};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected { square: Square, moves: Vec<Square> },
    /// The selected piece moved and the turn passed.
    Moved {
        from: Square,
        to: Square,
        kind: PieceKind,
        captured: Option<PieceKind>,
        check: bool,
    },
}

/// A game in progress: its state plus the rules configuration.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    config: EngineConfig,
}

impl Game {
    /// Starts from the configured starting position with White to move.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let board = Board::from_placement(&config.starting_position)?;
        let state = GameState::new(board, Color::White)?;
        Ok(Self::from_state(state, config))
    }

    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        Self { state, config }
    }

    pub fn standard() -> Self {
        Self::from_state(GameState::standard(), EngineConfig::default())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Legal destinations for the piece on `square`, or nothing if it is empty.
    ///
    /// Non-king pieces of a side under a protection constraint are narrowed to its
    /// line. Squares holding a king are never destinations.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        let Some(piece) = self.state.board.get(square) else {
            return Vec::new();
        };
        let board = &self.state.board;
        let moves = possible_moves(board, piece)
            .into_iter()
            .filter(|&to| !board.get(to).is_some_and(|p| p.is_king()))
            .collect();
        self.state.protection.restrict(piece, moves)
    }

    /// Reacts to the user picking `square`.
    ///
    /// With a piece selected, picking one of its highlighted destinations plays the
    /// move. Picking a piece of the side to move selects it instead. Anything else
    /// is a no-op.
    pub fn on_square_selected<O>(&mut self, square: Square, observer: &mut O) -> ClickOutcome
    where
        O: BoardObserver + ?Sized,
    {
        let is_destination = self
            .state
            .selection
            .as_ref()
            .is_some_and(|s| s.moves.contains(&square));
        if is_destination {
            return self.play_selected(square, observer);
        }

        let side = self.state.side_to_move();
        if self.state.board.color_at(square) == Some(side) {
            return self.select(square, observer);
        }

        debug!(%square, %side, "ignoring click");
        ClickOutcome::Ignored
    }

    fn select<O>(&mut self, square: Square, observer: &mut O) -> ClickOutcome
    where
        O: BoardObserver + ?Sized,
    {
        let moves = self.legal_moves(square);
        let previous = self
            .state
            .selection
            .take()
            .map(|s| s.moves)
            .unwrap_or_default();
        let added: Vec<Square> = moves
            .iter()
            .copied()
            .filter(|m| !previous.contains(m))
            .collect();
        let removed: Vec<Square> = previous
            .into_iter()
            .filter(|m| !moves.contains(m))
            .collect();
        observer.on_selection_highlight_changed(&added, &removed);

        debug!(%square, ?moves, "selected piece");
        self.state.selection = Some(Selection {
            square,
            moves: moves.clone(),
        });
        ClickOutcome::Selected { square, moves }
    }

    fn play_selected<O>(&mut self, to: Square, observer: &mut O) -> ClickOutcome
    where
        O: BoardObserver + ?Sized,
    {
        let Some(Selection { square: from, moves }) = self.state.selection.take() else {
            return ClickOutcome::Ignored;
        };
        let state = &mut self.state;

        if self.config.clear_protection_each_ply {
            state.protection = Protection::Normal;
        }

        let captured = state.board.move_piece(from, to).map(|p| p.kind);
        let moved = *state
            .board
            .get(to)
            .expect("moved piece stands on its destination");
        if moved.is_king() {
            state.kings.set(moved.color, to);
        }
        state.assert_kings_cached();

        info!(
            kind = moved.kind.name(),
            color = %moved.color,
            %from,
            %to,
            captured = captured.map(|k| k.name()),
            "moved piece"
        );
        observer.on_occupancy_changed(from, None);
        observer.on_occupancy_changed(to, Some((moved.kind, moved.color)));

        let enemy = moved.color.opposite();
        let enemy_king = state.kings.get(enemy);
        let check = match detect_check(&state.board, &moved, enemy_king, self.config.check_line) {
            Some(line) => {
                info!(checked = %enemy, ?line, "check");
                state.protection = Protection::MustBlockOrCapture { side: enemy, line };
                observer.on_check(enemy);
                true
            }
            None => false,
        };

        observer.on_selection_highlight_changed(&[], &moves);
        state.turn = state.turn.toggled();

        ClickOutcome::Moved {
            from,
            to,
            kind: moved.kind,
            captured,
            check,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}
