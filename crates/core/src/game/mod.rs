//! Turn handling, check detection and the notifications sent to front ends.

pub mod check;
pub mod observer;
pub mod orchestrator;
pub mod state;

pub use check::{detect_check, protection_line, Protection};
pub use observer::{BoardObserver, Event, EventLog};
pub use orchestrator::{ClickOutcome, Game};
pub use state::{GameState, KingPositions, Selection, Turn};
