//! Turn engine and the records it hands to the presentation layer.

pub mod engine;
pub mod records;

pub use engine::{GameEngine, MAX_PLAYERS};
pub use records::{
    AnswerResult, EndReason, FinalResults, GamePhase, GameStatus, HistoryRecord, Standing,
};
