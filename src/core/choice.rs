//! Choices and the fixed rule cycle.
//!
//! Rock beats scissors, scissors beats paper, paper beats rock.
//! The cycle and the numbered option menu are read-only tables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;
use super::rng::GameRng;

/// A single player's pick for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

/// Result of comparing two choices from the first choice's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matchup {
    Tie,
    Win,
    Loss,
}

impl Choice {
    /// Every choice, in menu order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Numbered option menu offered to players.
    pub const MENU: [(&'static str, Choice); 3] = [
        ("1", Choice::Rock),
        ("2", Choice::Paper),
        ("3", Choice::Scissors),
    ];

    /// The choice this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Compare against an opposing choice.
    #[must_use]
    pub fn against(self, other: Choice) -> Matchup {
        if self == other {
            Matchup::Tie
        } else if self.beats() == other {
            Matchup::Win
        } else {
            Matchup::Loss
        }
    }

    /// Draw a choice uniformly at random.
    pub fn random(rng: &mut GameRng) -> Choice {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = EngineError;

    /// Accepts a choice name (any case) or its menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if let Some((_, choice)) = Self::MENU.iter().find(|(key, _)| *key == input) {
            return Ok(*choice);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| EngineError::InvalidChoice(input.to_string()))
    }
}
