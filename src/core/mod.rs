//! Core engine types: errors, configuration, clock, RNG, players.
//!
//! Everything here is independent of how questions are stored or how the
//! game is presented.

pub mod clock;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GameConfig;
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerStatus, STRIKES_PER_DRINK};
pub use rng::GameRng;
