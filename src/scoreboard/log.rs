//! Append-only scoreboard with running per-player totals.
//!
//! The scoreboard trusts its callers: nothing is checked against engine
//! state. Feed it from engine results with [`Scoreboard::record_answer`] or
//! record events one by one.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventDetails, EventKind, GameEvent};
use crate::core::{Clock, SystemClock};
use crate::game::AnswerResult;

/// Aggregate view of a scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardSummary {
    pub total_events: usize,
    pub player_drinks: FxHashMap<String, u32>,
    pub player_strikes: FxHashMap<String, u32>,
    pub total_drinking_events: usize,
    pub total_strike_events: usize,
    pub total_clock_outs: usize,
    pub total_block_cards_used: usize,
}

/// Event log for one game session.
pub struct Scoreboard {
    events: Vector<GameEvent>,
    player_drinks: FxHashMap<String, u32>,
    player_strikes: FxHashMap<String, u32>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard")
            .field("events", &self.events.len())
            .field("player_drinks", &self.player_drinks)
            .field("player_strikes", &self.player_strikes)
            .finish_non_exhaustive()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Empty scoreboard stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            events: Vector::new(),
            player_drinks: FxHashMap::default(),
            player_strikes: FxHashMap::default(),
            clock: Box::new(clock),
        }
    }

    // === Recording ===

    /// `strike_count` is the player's count after this strike.
    pub fn record_strike(&mut self, player_name: &str, strike_count: u32, must_drink: bool) {
        self.push(
            player_name,
            EventDetails::Strike {
                strike_count,
                must_drink,
            },
        );
        self.player_strikes.insert(player_name.to_string(), strike_count);
    }

    /// `drink_count` is the player's running total.
    pub fn record_drink(&mut self, player_name: &str, drink_count: u32) {
        self.push(player_name, EventDetails::Drink { drink_count });
        self.player_drinks.insert(player_name.to_string(), drink_count);
    }

    pub fn record_clock_out(&mut self, player_name: &str, round: u32) {
        self.push(player_name, EventDetails::ClockOut { round });
    }

    pub fn record_block_card(&mut self, player_name: &str, target_player: &str) {
        self.push(
            player_name,
            EventDetails::BlockCard {
                target_player: target_player.to_string(),
            },
        );
    }

    /// Record the strike, and the drink if one was due, from an engine
    /// answer. "No" and no-op answers record nothing.
    pub fn record_answer(&mut self, result: &AnswerResult) {
        if !result.answered_yes || !result.is_effective() {
            return;
        }

        self.record_strike(&result.player_name, result.strikes, result.must_drink);
        if result.must_drink {
            self.record_drink(&result.player_name, result.drinks_consumed);
        }
    }

    // === Queries ===

    /// Latest recorded drink total, 0 if none.
    #[must_use]
    pub fn player_drinks(&self, player_name: &str) -> u32 {
        self.player_drinks.get(player_name).copied().unwrap_or(0)
    }

    /// Latest recorded strike count, 0 if none.
    #[must_use]
    pub fn player_strikes(&self, player_name: &str) -> u32 {
        self.player_strikes.get(player_name).copied().unwrap_or(0)
    }

    /// All events in recording order.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    #[must_use]
    pub fn events_by_player(&self, player_name: &str) -> Vec<GameEvent> {
        self.events
            .iter()
            .filter(|e| e.player_name == player_name)
            .cloned()
            .collect()
    }

    /// Strike counts per player, in recording order.
    #[must_use]
    pub fn strike_history(&self) -> FxHashMap<String, Vec<u32>> {
        self.progression(|details| match details {
            EventDetails::Strike { strike_count, .. } => Some(*strike_count),
            _ => None,
        })
    }

    /// Drink totals per player, in recording order.
    #[must_use]
    pub fn drinking_history(&self) -> FxHashMap<String, Vec<u32>> {
        self.progression(|details| match details {
            EventDetails::Drink { drink_count } => Some(*drink_count),
            _ => None,
        })
    }

    #[must_use]
    pub fn summary(&self) -> ScoreboardSummary {
        ScoreboardSummary {
            total_events: self.events.len(),
            player_drinks: self.player_drinks.clone(),
            player_strikes: self.player_strikes.clone(),
            total_drinking_events: self.count_kind(EventKind::Drink),
            total_strike_events: self.count_kind(EventKind::Strike),
            total_clock_outs: self.count_kind(EventKind::ClockOut),
            total_block_cards_used: self.count_kind(EventKind::BlockCard),
        }
    }

    /// Drop every event and total.
    pub fn clear(&mut self) {
        self.events.clear();
        self.player_drinks.clear();
        self.player_strikes.clear();
    }

    fn push(&mut self, player_name: &str, details: EventDetails) {
        let event = GameEvent::new(player_name, details, self.clock.now());
        tracing::trace!(player = %player_name, kind = %event.kind(), "scoreboard event");
        self.events.push_back(event);
    }

    fn count_kind(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    fn progression(&self, pick: impl Fn(&EventDetails) -> Option<u32>) -> FxHashMap<String, Vec<u32>> {
        let mut out: FxHashMap<String, Vec<u32>> = FxHashMap::default();
        for event in &self.events {
            if let Some(value) = pick(&event.details) {
                out.entry(event.player_name.clone()).or_default().push(value);
            }
        }
        out
    }
}
