//! One round, start to finish.
//!
//! `play_round` runs the fixed pipeline:
//!
//! 1. unset choices default to a uniform random choice
//! 2. ForceSwitch cards overwrite opposing first choices
//! 3. the resolver tallies the final four choices
//! 4. DoublePoints multipliers and applied deltas
//! 5. the match state records the deltas
//!
//! and returns a `RoundReport` for the presentation layer.

use log::debug;
use serde::{Deserialize, Serialize};

use super::resolver::{Resolver, RoundResult};
use super::state::{MatchState, MatchStatus, RoundOutcome};
use crate::cards::CardSet;
use crate::core::{
    Choice, EngineError, GameRng, PendingChoices, Result, TeamChoices, TeamId, TeamMap,
    PLAYERS_PER_TEAM,
};
use crate::effects::{CardEngine, CardScore, ForcedSwitch};

/// A slot that was still unset at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultedChoice {
    pub team: TeamId,
    pub player: usize,
    pub choice: Choice,
}

/// Everything that happened in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,

    /// Choices the resolver actually saw (after defaults and switches).
    pub selections: TeamMap<TeamChoices>,

    pub defaulted: Vec<DefaultedChoice>,

    pub forced: Vec<ForcedSwitch>,

    pub result: RoundResult,

    pub scores: TeamMap<CardScore>,

    pub outcome: RoundOutcome,

    /// Teams that may re-pick manually because the round tied and they
    /// hold SecondChance.
    pub second_chance: TeamMap<bool>,

    pub status: MatchStatus,

    /// Running points after this round.
    pub points: TeamMap<u64>,

    /// Running victories after this round.
    pub victories: TeamMap<u32>,
}

impl RoundReport {
    #[must_use]
    pub fn delta(&self, team: TeamId) -> u32 {
        self.scores[team].delta
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Round {}: Selections: [{}, {}]",
            self.round, self.selections[TeamId::A], self.selections[TeamId::B]
        )?;
        writeln!(f, "Score: {} - {}", self.points[TeamId::A], self.points[TeamId::B])?;
        match self.outcome {
            RoundOutcome::Winner(team) => writeln!(f, "{team} wins the round!")?,
            RoundOutcome::Tie => writeln!(f, "The round is a tie!")?,
        }
        write!(
            f,
            "Victories: {} [{}] - {} [{}]",
            TeamId::A,
            self.victories[TeamId::A],
            TeamId::B,
            self.victories[TeamId::B]
        )?;
        if let Some(winner) = self.status.winner() {
            write!(f, "\n{winner} wins the match!")?;
        }
        Ok(())
    }
}

/// Replace unset slots with uniformly random choices.
pub fn fill_unset(
    pending: &PendingChoices,
    rng: &mut GameRng,
) -> (TeamMap<TeamChoices>, Vec<DefaultedChoice>) {
    let mut defaulted = Vec::new();

    let choices = TeamMap::new(|team| {
        let slots = pending.team(team);
        let mut pair = [Choice::Rock; PLAYERS_PER_TEAM];
        for (player, slot) in slots.iter().enumerate() {
            pair[player] = match slot {
                Some(choice) => *choice,
                None => {
                    let choice = Choice::random(rng);
                    defaulted.push(DefaultedChoice { team, player, choice });
                    choice
                }
            };
        }
        TeamChoices(pair)
    });

    (choices, defaulted)
}

/// Play one round against the match state.
///
/// `rng` is forked once per round; defaults and ForceSwitch draw from
/// separate streams of that fork.
pub fn play_round(
    state: &mut MatchState,
    pending: &PendingChoices,
    cards: &TeamMap<CardSet>,
    rng: &mut GameRng,
) -> Result<RoundReport> {
    if state.is_terminal() {
        return Err(EngineError::MatchOver);
    }

    let round_rng = rng.fork();
    let mut fill_rng = round_rng.for_context("default-fill");
    let mut switch_rng = round_rng.for_context("force-switch");

    let (mut selections, defaulted) = fill_unset(pending, &mut fill_rng);
    for d in &defaulted {
        debug!("{} player {} defaulted to {}", d.team, d.player + 1, d.choice);
    }

    let forced = CardEngine::apply_force_switches(cards, &mut selections, &mut switch_rng);

    let result = Resolver::resolve_teams(&selections);
    let scores = CardEngine::score(cards, &result);
    let deltas = scores.map(|_, s| s.delta);

    let outcome = state.record_round(deltas)?;
    let second_chance =
        TeamMap::new(|team| CardEngine::second_chance_available(&cards[team], outcome.is_tie()));

    let report = RoundReport {
        round: state.rounds_played(),
        selections,
        defaulted,
        forced,
        result,
        scores,
        outcome,
        second_chance,
        status: state.status(),
        points: TeamMap::new(|team| state.points(team)),
        victories: TeamMap::new(|team| state.victories(team)),
    };
    debug!("{}", report);

    Ok(report)
}
