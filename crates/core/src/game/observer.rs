//! Outbound notifications to whatever front end drives the game.

use serde::Serialize;

use crate::board::{Color, PieceKind, Square};

/// Receives board changes as the game reacts to clicks.
pub trait BoardObserver {
    /// `square` now holds `occupant`, or nothing. Fired once for the vacated
    /// square and once for the destination on every executed move.
    fn on_occupancy_changed(&mut self, square: Square, occupant: Option<(PieceKind, Color)>);

    /// Legal-move highlighting should be shown on `added` and cleared from `removed`.
    /// The two lists never share a square.
    fn on_selection_highlight_changed(&mut self, added: &[Square], removed: &[Square]);

    /// `checked` was just put in check.
    fn on_check(&mut self, _checked: Color) {}
}

/// Observer that drops every notification.
impl BoardObserver for () {
    fn on_occupancy_changed(&mut self, _square: Square, _occupant: Option<(PieceKind, Color)>) {}

    fn on_selection_highlight_changed(&mut self, _added: &[Square], _removed: &[Square]) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    OccupancyChanged {
        square: Square,
        kind: Option<PieceKind>,
        color: Option<Color>,
    },
    HighlightChanged {
        added: Vec<Square>,
        removed: Vec<Square>,
    },
    Check {
        color: Color,
    },
}

/// Observer that records notifications in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Hands over the recorded events, leaving the log empty.
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl BoardObserver for EventLog {
    fn on_occupancy_changed(&mut self, square: Square, occupant: Option<(PieceKind, Color)>) {
        self.events.push(Event::OccupancyChanged {
            square,
            kind: occupant.map(|(kind, _)| kind),
            color: occupant.map(|(_, color)| color),
        });
    }

    fn on_selection_highlight_changed(&mut self, added: &[Square], removed: &[Square]) {
        if added.is_empty() && removed.is_empty() {
            return;
        }
        self.events.push(Event::HighlightChanged {
            added: added.to_vec(),
            removed: removed.to_vec(),
        });
    }

    fn on_check(&mut self, checked: Color) {
        self.events.push(Event::Check { color: checked });
    }
}
