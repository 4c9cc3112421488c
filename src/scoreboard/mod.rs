//! Session scoreboard: a timestamped log of strikes, drinks, clock-outs and
//! block cards, kept apart from engine state.

pub mod event;
pub mod log;

pub use event::{EventDetails, EventKind, GameEvent};
pub use log::{Scoreboard, ScoreboardSummary};
