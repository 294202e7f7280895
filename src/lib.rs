//! # rps-teams
//!
//! Round resolution engine for 2 vs 2 rock-paper-scissors with power-up
//! cards.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No prompts, widgets or timers. A presentation layer
//!    collects four choices per round and calls into the engine once.
//!
//! 2. **Explicit State**: The only mutable state is the caller-owned
//!    `MatchState`. Resolution and card scoring are pure functions.
//!
//! 3. **Deterministic Randomness**: Unset choices and ForceSwitch draw
//!    from a seeded `GameRng`, so a match replays from its seed.
//!
//! ## Round Pipeline
//!
//! choices -> default fill -> ForceSwitch -> resolver -> DoublePoints and
//! applied delta -> match state -> continue or end.
//!
//! ## Modules
//!
//! - `core`: Choices, teams, RNG, configuration, errors
//! - `cards`: Power-up catalog and team selections
//! - `rules`: Resolver, round pipeline, match state machine
//! - `effects`: Card engine
//! - `play`: Choice policies and a headless match runner

pub mod core;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Choice, Matchup,
    TeamId, TeamMap, TeamChoices, PendingChoices,
    GameRng, GameRngState,
    MatchConfig,
    EngineError, Result,
};

pub use crate::cards::{Card, CardDefinition, CardRegistry, CardSet, CardTiming, CARDS_PER_TEAM};

pub use crate::rules::{
    Resolver, RoundResult, TeamTally,
    play_round, fill_unset, RoundReport, DefaultedChoice,
    MatchState, MatchStatus, RoundOutcome, RoundRecord,
};

pub use crate::effects::{CardEngine, CardScore, ForcedSwitch};

pub use crate::play::{ChoicePolicy, MatchRunner, MatchSummary, RandomPolicy, FixedPolicy, IdlePolicy, ScriptedPolicy};
