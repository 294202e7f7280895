//! Card engine - applying power-ups around round resolution.
//!
//! Cards act at two points of a round:
//!
//! 1. **Before resolution**: ForceSwitch re-picks the opposing team's
//!    first choice at random. The resolver then sees the new choice.
//! 2. **After resolution**: DoublePoints sets a x2 multiplier when the
//!    team's raw wins exceed its raw losses (tallies taken after any
//!    switch). The round's applied delta is `max(0, differential) * multiplier`.
//!
//! SecondChance has no automatic effect. It is reported to the caller as
//! a manual re-pick option when a round ends tied.
//!
//! No card is ever consumed; a held card acts in every round.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSet};
use crate::core::{Choice, GameRng, TeamChoices, TeamId, TeamMap};
use crate::rules::{RoundResult, TeamTally};

/// Multiplier granted by DoublePoints.
pub const DOUBLE_POINTS_MULTIPLIER: u32 = 2;

/// Record of a ForceSwitch overwriting an opposing choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedSwitch {
    /// Team holding the card.
    pub by: TeamId,
    /// Team whose first player was switched.
    pub target: TeamId,
    pub from: Choice,
    pub to: Choice,
}

/// Points a team takes from a round after cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardScore {
    pub multiplier: u32,
    pub delta: u32,
}

/// Stateless card engine.
pub struct CardEngine;

impl CardEngine {
    /// Apply a team's ForceSwitch to the opposing team's choices.
    ///
    /// The opposing first player's choice is replaced by a uniform random
    /// choice (which may equal the original). Holding two ForceSwitch
    /// cards still overwrites that choice once.
    ///
    /// Returns `(from, to)` when the card fired.
    pub fn apply_force_switch(
        cards: &CardSet,
        opponent: &mut TeamChoices,
        rng: &mut GameRng,
    ) -> Option<(Choice, Choice)> {
        if !cards.contains(Card::ForceSwitch) {
            return None;
        }

        let from = opponent.first();
        let to = Choice::random(rng);
        opponent.0[0] = to;
        Some((from, to))
    }

    /// Apply both teams' ForceSwitch cards, team A first.
    pub fn apply_force_switches(
        cards: &TeamMap<CardSet>,
        choices: &mut TeamMap<TeamChoices>,
        rng: &mut GameRng,
    ) -> Vec<ForcedSwitch> {
        let mut switches = Vec::new();

        for by in TeamId::ALL {
            let target = by.opponent();
            if let Some((from, to)) = Self::apply_force_switch(&cards[by], &mut choices[target], rng) {
                debug!("{by} forced {target} to switch {from} -> {to}");
                switches.push(ForcedSwitch { by, target, from, to });
            }
        }

        switches
    }

    /// Point multiplier for a team given its raw tallies.
    #[must_use]
    pub fn multiplier(cards: &CardSet, wins: u32, losses: u32) -> u32 {
        if cards.contains(Card::DoublePoints) && wins > losses {
            DOUBLE_POINTS_MULTIPLIER
        } else {
            1
        }
    }

    /// Applied points: non-positive differentials contribute nothing.
    #[must_use]
    pub fn final_delta(differential: i32, multiplier: u32) -> u32 {
        differential.max(0) as u32 * multiplier
    }

    /// Multiplier and applied delta for one team.
    #[must_use]
    pub fn score_team(cards: &CardSet, tally: &TeamTally) -> CardScore {
        let multiplier = Self::multiplier(cards, tally.wins, tally.losses);
        CardScore {
            multiplier,
            delta: Self::final_delta(tally.differential(), multiplier),
        }
    }

    /// Multiplier and applied delta for both teams.
    #[must_use]
    pub fn score(cards: &TeamMap<CardSet>, result: &RoundResult) -> TeamMap<CardScore> {
        TeamMap::new(|team| Self::score_team(&cards[team], &result[team]))
    }

    /// Whether a team may re-pick manually after this round.
    #[must_use]
    pub fn second_chance_available(cards: &CardSet, round_tied: bool) -> bool {
        round_tied && cards.contains(Card::SecondChance)
    }
}
