//! # party-trivia
//!
//! Turn engine and question-pool bookkeeping for a yes/no party drinking
//! game.
//!
//! Players take turns answering "have you ever...?" questions drawn at
//! random from a persisted pool. Each "yes" is a strike; three strikes
//! mean a drink. Every player holds one block card that passes a question
//! to the previous active player, and anyone can clock out for good. The
//! game is over once at most one player is still in.
//!
//! ## Modules
//!
//! - `core`: players, errors, configuration, clock, RNG
//! - `questions`: question records, the CSV codec, backends and the store
//! - `game`: the turn engine and the records it returns
//! - `scoreboard`: timestamped event log with running totals
//!
//! ## Example
//!
//! ```
//! use party_trivia::core::{GameRng, PlayerId};
//! use party_trivia::game::GameEngine;
//! use party_trivia::questions::{MemoryBackend, Question, QuestionId, QuestionStore};
//!
//! let pool = (1..=5)
//!     .map(|i| Question::new(QuestionId::new(i), format!("Question {i}?"), 1, 1, true))
//!     .collect();
//! let store = QuestionStore::open(MemoryBackend::new(pool)).unwrap();
//! let mut engine = GameEngine::new(store, GameRng::new(42));
//!
//! assert!(engine.initialize_players(&["Alice", "Bob"]));
//! engine.start_game();
//!
//! let alice = PlayerId::new(0);
//! for _ in 0..3 {
//!     engine.draw_question().unwrap();
//!     engine.player_answers(alice, true).unwrap();
//! }
//!
//! let alice = engine.player(alice).unwrap();
//! assert_eq!(alice.strikes(), 0);
//! assert_eq!(alice.drinks_consumed(), 1);
//! assert_eq!(engine.questions().count_unused(), 2);
//! ```

pub mod core;
pub mod game;
pub mod questions;
pub mod scoreboard;

pub use crate::core::{
    Clock, FixedClock, GameConfig, GameError, GameRng, Player, PlayerId, PlayerStatus,
    SystemClock, STRIKES_PER_DRINK,
};

pub use crate::game::{
    AnswerResult, EndReason, FinalResults, GameEngine, GamePhase, GameStatus, HistoryRecord,
    Standing,
};

pub use crate::questions::{CsvFile, MemoryBackend, Question, QuestionBackend, QuestionId, QuestionStore};

pub use crate::scoreboard::{EventDetails, EventKind, GameEvent, Scoreboard, ScoreboardSummary};
