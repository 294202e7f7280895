//! Round resolution - turning four choices into per-team tallies.
//!
//! Every player is compared against every opposing player (2x2 cross
//! comparison), so each team gets four comparisons per round. Ties are
//! skipped; the rest count as a win or a loss for the team doing the
//! comparing. A team whose two players picked the same thing earns a
//! pairing bonus of +1 on its differential.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{Matchup, TeamChoices, TeamId, TeamMap};

/// One team's raw result for a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    pub wins: u32,
    pub losses: u32,
    pub pairing_bonus: bool,
}

impl TeamTally {
    /// `wins - losses + bonus`. May be negative.
    #[must_use]
    pub fn differential(&self) -> i32 {
        self.wins as i32 - self.losses as i32 + i32::from(self.pairing_bonus)
    }

    /// Raw wins exceed raw losses (bonus excluded).
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.wins > self.losses
    }
}

/// Both teams' tallies for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub tallies: TeamMap<TeamTally>,
}

impl RoundResult {
    #[must_use]
    pub fn tally(&self, team: TeamId) -> &TeamTally {
        &self.tallies[team]
    }
}

impl Index<TeamId> for RoundResult {
    type Output = TeamTally;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.tally(team)
    }
}

/// Stateless resolver.
pub struct Resolver;

impl Resolver {
    /// Tally one team's choices against the opposing team's.
    #[must_use]
    pub fn tally(team: &TeamChoices, opponent: &TeamChoices) -> TeamTally {
        let mut tally = TeamTally {
            pairing_bonus: team.is_pair(),
            ..TeamTally::default()
        };

        for mine in team.iter() {
            for theirs in opponent.iter() {
                match mine.against(theirs) {
                    Matchup::Tie => {}
                    Matchup::Win => tally.wins += 1,
                    Matchup::Loss => tally.losses += 1,
                }
            }
        }

        tally
    }

    /// Resolve a round. Each team is tallied independently from the
    /// same four choices.
    #[must_use]
    pub fn resolve(team_a: &TeamChoices, team_b: &TeamChoices) -> RoundResult {
        RoundResult {
            tallies: TeamMap::from_pair(Self::tally(team_a, team_b), Self::tally(team_b, team_a)),
        }
    }

    /// `resolve` over a per-team map.
    #[must_use]
    pub fn resolve_teams(choices: &TeamMap<TeamChoices>) -> RoundResult {
        Self::resolve(&choices[TeamId::A], &choices[TeamId::B])
    }
}
