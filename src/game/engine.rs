//! The turn engine.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --initialize_players--> PlayersSet --start_game--> AwaitingDraw
//! AwaitingDraw --draw_question--> QuestionDrawn
//! QuestionDrawn --player_answers / player_clock_out--> AwaitingDraw
//! any --end_game--> Over
//! ```
//!
//! ## Rules
//!
//! - Answering **yes** adds a strike, whatever the question's correct
//!   answer is. Answering no never changes strikes.
//! - Reaching three strikes applies the drink inside the same call.
//! - Resolving a question (answer or clock-out) marks it used and saves the
//!   pool before returning.
//! - The block card hands the current question to the nearest active player
//!   earlier in turn order.
//!
//! Termination: [`GameEngine::is_game_over`] only looks at active players.
//! Pool exhaustion is a separate signal; [`GameEngine::end_condition`]
//! reports both.

use im::Vector;
use tracing::{debug, info, warn};

use super::records::{
    AnswerResult, EndReason, FinalResults, GamePhase, GameStatus, HistoryRecord, Standing,
};
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId};
use crate::questions::{CsvFile, Question, QuestionBackend, QuestionStore};

/// Seats available per game; `PlayerId` is a `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Game state machine. Owns the players and the question store.
#[derive(Debug)]
pub struct GameEngine<B> {
    store: QuestionStore<B>,
    rng: GameRng,
    players: Vec<Player>,
    current_player_index: Option<usize>,
    current_question: Option<Question>,
    current_question_player: Option<PlayerId>,
    round_number: u32,
    is_active: bool,
    phase: GamePhase,
    history: Vector<HistoryRecord>,
}

impl GameEngine<CsvFile> {
    /// Open the configured CSV file and build an engine around it.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Format` from loading the question file.
    pub fn open(config: &GameConfig) -> Result<Self, GameError> {
        let mut store = QuestionStore::open(CsvFile::new(&config.questions_path))?;
        if config.reset_on_launch {
            store.reset_all();
        }

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(
            path = %store.backend().path().display(),
            total = store.count_total(),
            seed = rng.seed(),
            "question store opened"
        );

        Ok(Self::new(store, rng))
    }
}

impl<B: QuestionBackend> GameEngine<B> {
    /// Create an engine with no players.
    #[must_use]
    pub fn new(store: QuestionStore<B>, rng: GameRng) -> Self {
        Self {
            store,
            rng,
            players: Vec::new(),
            current_player_index: None,
            current_question: None,
            current_question_player: None,
            round_number: 0,
            is_active: false,
            phase: GamePhase::Uninitialized,
            history: Vector::new(),
        }
    }

    // === Intents ===

    /// Seat a new set of players, in turn order, and reset the question pool.
    ///
    /// Duplicate names are accepted. Returns false for an empty list or more
    /// than [`MAX_PLAYERS`] names.
    pub fn initialize_players<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        if names.is_empty() {
            return false;
        }
        if names.len() > MAX_PLAYERS {
            warn!(requested = names.len(), max = MAX_PLAYERS, "too many players");
            return false;
        }

        self.players = names.iter().map(|n| Player::new(n.as_ref())).collect();
        self.store.reset_all();
        self.is_active = true;
        self.current_player_index = None;
        self.current_question = None;
        self.current_question_player = None;
        self.round_number = 0;
        self.history = Vector::new();
        self.phase = GamePhase::PlayersSet;

        info!(players = self.players.len(), "players initialized");
        true
    }

    /// Point the turn at the first active player and zero the round counter.
    ///
    /// A question drawn earlier stays in flight. Returns false if no players
    /// are seated.
    pub fn start_game(&mut self) -> bool {
        if self.players.is_empty() {
            return false;
        }

        let first = self.players.iter().position(Player::is_active).unwrap_or(0);
        self.is_active = true;
        self.round_number = 0;
        self.current_player_index = Some(first);
        self.current_question_player = Some(seat(first));
        self.phase = if self.current_question.is_some() {
            GamePhase::QuestionDrawn
        } else {
            GamePhase::AwaitingDraw
        };

        info!(first_player = %self.players[first].name(), "game started");
        true
    }

    /// Move the turn to the next active player in seat order.
    ///
    /// The first call after `initialize_players` lands on seat 0. The new
    /// turn holder also becomes the current question player. Returns `None`
    /// when nobody is active.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        let count = self.players.len();
        if count == 0 {
            return None;
        }

        let start = self.current_player_index.map_or(0, |i| i + 1);
        let next = (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&i| self.players[i].is_active())?;

        self.current_player_index = Some(next);
        self.current_question_player = Some(seat(next));
        debug!(player = %self.players[next].name(), "turn advanced");
        Some(seat(next))
    }

    /// Hand the turn to a uniformly random active player.
    pub fn select_random_player(&mut self) -> Option<PlayerId> {
        let active = self.active_players();
        let chosen = *self.rng.choose(&active)?;

        self.current_player_index = Some(chosen.index());
        self.current_question_player = Some(chosen);
        Some(chosen)
    }

    /// Draw a random unused question and make it current.
    ///
    /// Returns `None` when the pool is exhausted; the current question and
    /// round counter are then left as they were. The phase stays put until
    /// players are seated.
    pub fn draw_question(&mut self) -> Option<Question> {
        let Some(question) = self.store.draw_random_unused(&mut self.rng) else {
            warn!(round = self.round_number, "question pool exhausted");
            return None;
        };

        self.round_number += 1;
        self.current_question = Some(question.clone());
        if !matches!(self.phase, GamePhase::Uninitialized | GamePhase::Over) {
            self.phase = GamePhase::QuestionDrawn;
        }

        debug!(
            round = self.round_number,
            question_id = question.id.raw(),
            "question drawn"
        );
        Some(question)
    }

    /// Apply `player`'s answer to the current question.
    ///
    /// Only a yes answer adds a strike. Reaching the threshold applies the
    /// drink before returning; `strikes` in the result is the count seen at
    /// that check. The question is marked used and the pool saved in every
    /// case.
    ///
    /// With no question in flight nothing changes and the result has
    /// `question_id == None`.
    ///
    /// # Errors
    ///
    /// - `UnknownPlayer` if `player` is not seated
    /// - `Io` if saving fails; in-memory state is already updated and
    ///   [`persist_questions`](Self::persist_questions) can retry
    pub fn player_answers(
        &mut self,
        player: PlayerId,
        answered_yes: bool,
    ) -> Result<AnswerResult, GameError> {
        let idx = self.player_index(player)?;

        let Some(question_id) = self.current_question.as_ref().map(|q| q.id) else {
            let p = &self.players[idx];
            warn!(player = %p.name(), "answer with no question in flight ignored");
            return Ok(AnswerResult {
                player_name: p.name().to_string(),
                answered_yes,
                strikes: 0,
                must_drink: false,
                drinks_consumed: p.drinks_consumed(),
                question_id: None,
            });
        };

        let p = &mut self.players[idx];
        let mut strikes = p.strikes();
        let mut must_drink = false;

        if answered_yes {
            strikes = p.add_strike();
            must_drink = p.must_drink();
            if must_drink {
                p.drink();
                info!(player = %p.name(), drinks = p.drinks_consumed(), "three strikes, player drinks");
            }
        }

        let result = AnswerResult {
            player_name: p.name().to_string(),
            answered_yes,
            strikes,
            must_drink,
            drinks_consumed: p.drinks_consumed(),
            question_id: Some(question_id),
        };
        debug!(
            player = %result.player_name,
            answered_yes,
            strikes,
            question_id = question_id.raw(),
            "answer applied"
        );

        self.history.push_back(HistoryRecord::Answer(result.clone()));
        self.resolve_current_question()?;
        Ok(result)
    }

    /// Spend `blocker`'s block card to pass the current question backwards.
    ///
    /// Searches seats before the blocker, wrapping around, for the nearest
    /// active player and makes them the current question player.
    ///
    /// Returns `None` without effect if the card was already spent. Also
    /// returns `None` if nobody else is active, but the card stays spent.
    ///
    /// # Errors
    ///
    /// `UnknownPlayer` if `blocker` is not seated.
    pub fn use_block_card(&mut self, blocker: PlayerId) -> Result<Option<PlayerId>, GameError> {
        let idx = self.player_index(blocker)?;

        if !self.players[idx].use_block_card() {
            debug!(player = %self.players[idx].name(), "block card already spent");
            return Ok(None);
        }

        let count = self.players.len();
        let target = (1..count)
            .map(|step| (idx + count - step) % count)
            .find(|&i| self.players[i].is_active());

        let Some(target) = target else {
            warn!(player = %self.players[idx].name(), "block card spent with no one to pass to");
            return Ok(None);
        };

        self.current_question_player = Some(seat(target));
        info!(
            blocker = %self.players[idx].name(),
            target = %self.players[target].name(),
            "block card played"
        );
        Ok(Some(seat(target)))
    }

    /// Take `player` out of the game for good.
    ///
    /// Returns false if they were already out. A question in flight is
    /// marked used and saved, even though nobody answered it.
    ///
    /// # Errors
    ///
    /// - `UnknownPlayer` if `player` is not seated
    /// - `Io` if saving fails; the clock-out itself stands
    pub fn player_clock_out(&mut self, player: PlayerId) -> Result<bool, GameError> {
        let idx = self.player_index(player)?;

        if !self.players[idx].clock_out() {
            return Ok(false);
        }

        let name = self.players[idx].name().to_string();
        info!(player = %name, round = self.round_number, "player clocked out");
        self.history.push_back(HistoryRecord::ClockOut {
            player_name: name,
            round: self.round_number,
        });

        self.resolve_current_question()?;
        Ok(true)
    }

    /// Stop the game. Players and history stay readable.
    pub fn end_game(&mut self) {
        self.is_active = false;
        self.phase = GamePhase::Over;
        info!(rounds = self.round_number, "game ended");
    }

    /// Save the question pool again, e.g. after an `Io` error.
    ///
    /// # Errors
    ///
    /// `Io` if the write fails again.
    pub fn persist_questions(&mut self) -> Result<(), GameError> {
        self.store.save()
    }

    // === Termination & results ===

    /// True when at most one player is still active.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.active_player_count() <= 1
    }

    /// First reason the game should stop, if any.
    #[must_use]
    pub fn end_condition(&self) -> Option<EndReason> {
        if self.is_game_over() {
            Some(EndReason::TooFewPlayers)
        } else if self.store.count_unused() == 0 {
            Some(EndReason::QuestionsExhausted)
        } else {
            None
        }
    }

    /// Standings ordered by drinks, most first. Ties keep seat order.
    #[must_use]
    pub fn get_final_results(&self) -> FinalResults {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.drinks_consumed().cmp(&a.drinks_consumed()));

        let standings = ranked
            .iter()
            .enumerate()
            .map(|(i, p)| Standing {
                rank: i + 1,
                name: p.name().to_string(),
                drinks: p.drinks_consumed(),
                strikes: p.strikes(),
                block_card_used: !p.has_block_card(),
            })
            .collect();

        FinalResults {
            winner: ranked.last().map(|p| p.name().to_string()),
            loser: ranked.first().map(|p| p.name().to_string()),
            standings,
            total_rounds: self.round_number,
            history_length: self.history.len(),
        }
    }

    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        GameStatus {
            round: self.round_number,
            is_active: self.is_active,
            is_over: self.is_game_over(),
            players: self.players.iter().map(Player::status).collect(),
            active_player_count: self.active_player_count(),
            unused_question_count: self.store.count_unused(),
            current_question_player: self
                .current_question_player
                .and_then(|id| self.player(id))
                .map(|p| p.name().to_string()),
            current_question: self.current_question.clone(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Case-insensitive lookup; the first seat wins on duplicates.
    #[must_use]
    pub fn get_player(&self, name: &str) -> Option<PlayerId> {
        let wanted = name.to_lowercase();
        self.players
            .iter()
            .position(|p| p.name().to_lowercase() == wanted)
            .map(seat)
    }

    /// Active players in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| seat(i))
            .collect()
    }

    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player_index.map(seat)
    }

    /// Who must answer the current question (differs from the turn holder
    /// after a block card).
    #[must_use]
    pub fn current_question_player(&self) -> Option<PlayerId> {
        self.current_question_player
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Cheap-to-clone audit trail of answers and clock-outs.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryRecord> {
        &self.history
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionStore<B> {
        &self.store
    }

    pub fn questions_mut(&mut self) -> &mut QuestionStore<B> {
        &mut self.store
    }

    // === Internals ===

    fn player_index(&self, id: PlayerId) -> Result<usize, GameError> {
        if id.index() < self.players.len() {
            Ok(id.index())
        } else {
            Err(GameError::UnknownPlayer(id))
        }
    }

    /// Mark the in-flight question used, clear it, and save.
    fn resolve_current_question(&mut self) -> Result<(), GameError> {
        let Some(question) = self.current_question.take() else {
            return Ok(());
        };

        self.store.mark_used(question.id);
        if self.phase == GamePhase::QuestionDrawn {
            self.phase = GamePhase::AwaitingDraw;
        }
        self.store.save()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn seat(index: usize) -> PlayerId {
    PlayerId::new(index as u8)
}
