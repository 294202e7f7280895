//! Match configuration.
//!
//! The caller builds a `MatchConfig` once, before the first round:
//! - victories a team needs to win the match
//! - each team's card selection (or the card layer switched off)
//! - the per-round choice deadline, used only by the presentation layer
//! - a round cap and seed for automated drivers
//!
//! Nothing here is mutated once a match starts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{EngineError, Result};
use super::team::{TeamId, TeamMap};
use crate::cards::{Card, CardSet};

/// Victories needed when the caller doesn't say otherwise.
pub const DEFAULT_VICTORIES_REQUIRED: i64 = 3;

/// Seconds players get to pick before unset choices default to random.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 10;

/// Round cap for automated drivers.
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

/// Complete match configuration.
///
/// `victories_required` is signed so out-of-range caller input can be
/// reported instead of silently wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub victories_required: i64,

    /// When false, both teams play without power-ups and card
    /// selections are ignored.
    pub cards_enabled: bool,

    pub team_a_cards: Vec<Card>,
    pub team_b_cards: Vec<Card>,

    pub choice_time_limit_secs: u64,

    pub max_rounds: u32,

    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            victories_required: DEFAULT_VICTORIES_REQUIRED,
            cards_enabled: true,
            team_a_cards: Vec::new(),
            team_b_cards: Vec::new(),
            choice_time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Create a configuration requiring `victories_required` round wins.
    pub fn new(victories_required: i64) -> Self {
        Self {
            victories_required,
            ..Self::default()
        }
    }

    /// Set a team's card selection.
    #[must_use]
    pub fn with_cards(mut self, team: TeamId, cards: impl IntoIterator<Item = Card>) -> Self {
        let cards = cards.into_iter().collect();
        match team {
            TeamId::A => self.team_a_cards = cards,
            TeamId::B => self.team_b_cards = cards,
        }
        self
    }

    /// Play without the card layer.
    #[must_use]
    pub fn without_cards(mut self) -> Self {
        self.cards_enabled = false;
        self
    }

    #[must_use]
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.choice_time_limit_secs = secs;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The victory threshold, checked to be a positive `u32`.
    pub fn threshold(&self) -> Result<u32> {
        if self.victories_required <= 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "victories required must be positive, got {}",
                self.victories_required
            )));
        }
        u32::try_from(self.victories_required).map_err(|_| {
            EngineError::InvalidConfiguration(format!(
                "victories required is too large: {}",
                self.victories_required
            ))
        })
    }

    /// Both teams' validated card selections.
    ///
    /// With cards disabled, both sets are empty.
    pub fn card_sets(&self) -> Result<TeamMap<CardSet>> {
        if !self.cards_enabled {
            return Ok(TeamMap::with_value(CardSet::empty()));
        }

        let a = CardSet::new(self.team_a_cards.iter().copied()).map_err(|e| tag(TeamId::A, e))?;
        let b = CardSet::new(self.team_b_cards.iter().copied()).map_err(|e| tag(TeamId::B, e))?;
        Ok(TeamMap::from_pair(a, b))
    }

    /// Check everything a match needs before the first round.
    pub fn validate(&self) -> Result<()> {
        self.threshold()?;
        self.card_sets()?;
        if self.max_rounds == 0 {
            return Err(EngineError::InvalidConfiguration(
                "max rounds must be positive".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn choice_time_limit(&self) -> Duration {
        Duration::from_secs(self.choice_time_limit_secs)
    }
}

fn tag(team: TeamId, err: EngineError) -> EngineError {
    match err {
        EngineError::InvalidConfiguration(msg) => {
            EngineError::InvalidConfiguration(format!("{team}: {msg}"))
        }
        other => other,
    }
}
