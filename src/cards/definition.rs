//! Card definitions - the closed power-up catalog.
//!
//! `Card` names a power-up. `CardDefinition` holds its immutable display
//! data and the point in the round at which it acts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::EngineError;

/// A power-up a team can hold for the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Card {
    /// Doubles the round's points when the team's raw wins exceed its losses.
    DoublePoints,
    /// Re-picks the opposing team's first choice at random before resolution.
    ForceSwitch,
    /// Lets the team re-pick manually after a tied round. Not enforced by the engine.
    SecondChance,
}

impl Card {
    /// Every card in the catalog.
    pub const ALL: [Card; 3] = [Card::DoublePoints, Card::ForceSwitch, Card::SecondChance];

    /// Stable key used in configuration files and caller input.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Card::DoublePoints => "double-points",
            Card::ForceSwitch => "force-switch",
            Card::SecondChance => "second-chance",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(input))
            .ok_or_else(|| EngineError::InvalidConfiguration(format!("unknown card {input:?}")))
    }
}

/// When during a round a card acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTiming {
    /// Mutates pending choices before the resolver runs.
    BeforeResolution,
    /// Scales points after the resolver has produced tallies.
    AfterResolution,
    /// Surfaced to the caller when a round ends tied.
    OnTie,
}

/// Static card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub card: Card,

    /// Display name.
    pub name: String,

    /// One-line rules text shown during card selection.
    pub description: String,

    pub timing: CardTiming,
}

impl CardDefinition {
    #[must_use]
    pub fn new(
        card: Card,
        name: impl Into<String>,
        description: impl Into<String>,
        timing: CardTiming,
    ) -> Self {
        Self {
            card,
            name: name.into(),
            description: description.into(),
            timing,
        }
    }

    /// Whether the engine applies this card automatically.
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.timing != CardTiming::OnTie
    }
}
