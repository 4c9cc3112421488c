//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The index is the
//! player's seat in turn order.
//!
//! ## Player
//!
//! Strikes, drinks, block card and active flag for one participant. Pure
//! state with no I/O; the engine decides when each mutation applies.

use serde::{Deserialize, Serialize};

/// Strikes that trigger a drink.
pub const STRIKES_PER_DRINK: u32 = 3;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use party_trivia::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    strikes: u32,
    has_block_card: bool,
    is_active: bool,
    drinks_consumed: u32,
}

impl Player {
    /// A fresh player: no strikes, block card in hand, active.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strikes: 0,
            has_block_card: true,
            is_active: true,
            drinks_consumed: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    #[must_use]
    pub fn has_block_card(&self) -> bool {
        self.has_block_card
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn drinks_consumed(&self) -> u32 {
        self.drinks_consumed
    }

    /// Add a strike and return the new count.
    pub fn add_strike(&mut self) -> u32 {
        self.strikes += 1;
        self.strikes
    }

    /// Whether the strike count has reached the drink threshold.
    #[must_use]
    pub fn must_drink(&self) -> bool {
        self.strikes >= STRIKES_PER_DRINK
    }

    /// Record a drink and reset strikes.
    ///
    /// Callable regardless of `must_drink()`; the effect is the same.
    pub fn drink(&mut self) {
        self.drinks_consumed += 1;
        self.strikes = 0;
    }

    /// Spend the block card.
    ///
    /// Returns false, without effect, if it was already spent.
    pub fn use_block_card(&mut self) -> bool {
        if self.has_block_card {
            self.has_block_card = false;
            true
        } else {
            false
        }
    }

    /// Leave the game for good.
    ///
    /// Returns whether the player was active before the call.
    pub fn clock_out(&mut self) -> bool {
        let was_active = self.is_active;
        self.is_active = false;
        was_active
    }

    /// Snapshot for presentation.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            name: self.name.clone(),
            strikes: self.strikes,
            has_block_card: self.has_block_card,
            is_active: self.is_active,
            drinks_consumed: self.drinks_consumed,
        }
    }
}

/// Presentation view of a [`Player`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub name: String,
    pub strikes: u32,
    pub has_block_card: bool,
    pub is_active: bool,
    pub drinks_consumed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_creation() {
        let player = Player::new("Alice");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.strikes(), 0);
        assert!(player.has_block_card());
        assert!(player.is_active());
        assert_eq!(player.drinks_consumed(), 0);
    }

    #[test]
    fn test_add_strike() {
        let mut player = Player::new("Bob");
        assert_eq!(player.add_strike(), 1);
        assert_eq!(player.add_strike(), 2);
        assert!(player.has_block_card());
        assert!(player.is_active());
    }

    #[test]
    fn test_must_drink_threshold() {
        let mut player = Player::new("Carol");
        player.add_strike();
        assert!(!player.must_drink());
        player.add_strike();
        assert!(!player.must_drink());
        player.add_strike();
        assert!(player.must_drink());
    }

    #[test]
    fn test_drink_resets_strikes() {
        let mut player = Player::new("Dave");
        for _ in 0..3 {
            player.add_strike();
        }
        player.drink();
        assert_eq!(player.strikes(), 0);
        assert_eq!(player.drinks_consumed(), 1);
    }

    #[test]
    fn test_drink_without_threshold_is_allowed() {
        let mut player = Player::new("Erin");
        player.add_strike();
        assert!(!player.must_drink());

        player.drink();
        assert_eq!(player.strikes(), 0);
        assert_eq!(player.drinks_consumed(), 1);
    }

    #[test]
    fn test_block_card_usage() {
        let mut player = Player::new("Eve");
        assert!(player.use_block_card());
        assert!(!player.has_block_card());
        assert!(!player.use_block_card());
        assert!(!player.has_block_card());
    }

    #[test]
    fn test_clock_out_reports_transition() {
        let mut player = Player::new("Frank");
        assert!(player.clock_out());
        assert!(!player.is_active());
        assert!(!player.clock_out());
        assert!(!player.is_active());
    }

    #[test]
    fn test_player_status() {
        let mut player = Player::new("Grace");
        player.add_strike();
        player.use_block_card();

        let status = player.status();
        assert_eq!(status.name, "Grace");
        assert_eq!(status.strikes, 1);
        assert!(!status.has_block_card);
        assert!(status.is_active);
        assert_eq!(status.drinks_consumed, 0);
    }

    #[test]
    fn test_player_status_serialization() {
        let status = Player::new("Heidi").status();
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: PlayerStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
