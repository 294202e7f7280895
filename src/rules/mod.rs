//! Game rules: resolution, round orchestration and match state.
//!
//! - `resolver`: 2x2 cross comparison, pairing bonus, differentials
//! - `state`: the match win/loss state machine
//! - `round`: the per-round pipeline tying choices, cards and state together

pub mod resolver;
pub mod round;
pub mod state;

pub use resolver::{Resolver, RoundResult, TeamTally};
pub use round::{fill_unset, play_round, DefaultedChoice, RoundReport};
pub use state::{MatchState, MatchStatus, RoundOutcome, RoundRecord};
