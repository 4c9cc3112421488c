//! Records the engine returns to the presentation layer.
//!
//! All of these are plain serializable values, safe to clone and ship to a UI.

use serde::{Deserialize, Serialize};

use crate::core::PlayerStatus;
use crate::questions::{Question, QuestionId};

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No players yet.
    Uninitialized,
    /// Players created, game not started.
    PlayersSet,
    /// Between questions.
    AwaitingDraw,
    /// A question is in flight.
    QuestionDrawn,
    /// `end_game` was called.
    Over,
}

/// Why a game should stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// At most one active player remains.
    TooFewPlayers,
    /// Every question has been used.
    QuestionsExhausted,
}

/// Outcome of one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub player_name: String,
    pub answered_yes: bool,
    /// Strike count at the drink check: after the new strike, before any
    /// reset. So a drinking answer reports 3.
    pub strikes: u32,
    pub must_drink: bool,
    /// Drink total after this answer.
    pub drinks_consumed: u32,
    /// The resolved question; `None` if no question was in flight and the
    /// answer had no effect.
    pub question_id: Option<QuestionId>,
}

impl AnswerResult {
    /// Whether the answer actually resolved a question.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.question_id.is_some()
    }
}

/// Entry in the engine's own audit trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryRecord {
    Answer(AnswerResult),
    ClockOut { player_name: String, round: u32 },
}

impl HistoryRecord {
    #[must_use]
    pub fn player_name(&self) -> &str {
        match self {
            HistoryRecord::Answer(result) => &result.player_name,
            HistoryRecord::ClockOut { player_name, .. } => player_name,
        }
    }
}

/// Full snapshot for rendering a game screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub round: u32,
    pub is_active: bool,
    pub is_over: bool,
    pub players: Vec<PlayerStatus>,
    pub active_player_count: usize,
    pub unused_question_count: usize,
    pub current_question_player: Option<String>,
    pub current_question: Option<Question>,
}

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1 = most drinks.
    pub rank: usize,
    pub name: String,
    pub drinks: u32,
    pub strikes: u32,
    pub block_card_used: bool,
}

/// End-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResults {
    /// Fewest drinks (last in standings).
    pub winner: Option<String>,
    /// Most drinks (first in standings).
    pub loser: Option<String>,
    pub standings: Vec<Standing>,
    pub total_rounds: u32,
    pub history_length: usize,
}
