//! Core engine types: choices, teams, RNG, configuration, errors.
//!
//! Everything the resolver, card engine and match state machine share.

pub mod choice;
pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use choice::{Choice, Matchup};
pub use config::{MatchConfig, DEFAULT_MAX_ROUNDS, DEFAULT_TIME_LIMIT_SECS, DEFAULT_VICTORIES_REQUIRED};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use team::{PendingChoices, TeamChoices, TeamId, TeamMap, PLAYERS_PER_TEAM};
