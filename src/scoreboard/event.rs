//! Scoreboard event types.
//!
//! Each event names the player it concerns and carries kind-specific
//! details. The kind is derived from the details, so the two cannot
//! disagree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event category, for filtering and counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Strike,
    Drink,
    ClockOut,
    BlockCard,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Strike => "strike",
            EventKind::Drink => "drink",
            EventKind::ClockOut => "clock_out",
            EventKind::BlockCard => "block_card",
        };
        f.write_str(name)
    }
}

/// Kind-specific event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventDetails {
    /// `strike_count` is the count after the strike.
    Strike { strike_count: u32, must_drink: bool },
    /// `drink_count` is the player's running total.
    Drink { drink_count: u32 },
    ClockOut { round: u32 },
    /// The player who now has to answer.
    BlockCard { target_player: String },
}

impl EventDetails {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            EventDetails::Strike { .. } => EventKind::Strike,
            EventDetails::Drink { .. } => EventKind::Drink,
            EventDetails::ClockOut { .. } => EventKind::ClockOut,
            EventDetails::BlockCard { .. } => EventKind::BlockCard,
        }
    }
}

/// One timestamped scoreboard entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub player_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl GameEvent {
    #[must_use]
    pub fn new(player_name: impl Into<String>, details: EventDetails, timestamp: DateTime<Utc>) -> Self {
        Self {
            player_name: player_name.into(),
            timestamp,
            details,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.details.kind()
    }
}
