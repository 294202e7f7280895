//! Choice policies - who picks for a team.
//!
//! A `ChoicePolicy` is the seam where a presentation layer, a script or a
//! bot hands the engine its choices. Returning `None` leaves a slot unset
//! (the player ran out of time); the engine then picks at random.

use std::collections::VecDeque;

use crate::core::{Choice, GameRng, TeamChoices, TeamId, PLAYERS_PER_TEAM};
use crate::rules::{MatchState, RoundReport};

/// Supplies one team's choices each round.
pub trait ChoicePolicy {
    /// Pick for `player` (0 or 1) of `team`. `None` means no pick was made.
    fn choose(
        &mut self,
        team: TeamId,
        player: usize,
        state: &MatchState,
        rng: &mut GameRng,
    ) -> Option<Choice>;

    /// Called after every round with the engine's report.
    fn observe(&mut self, _report: &RoundReport) {}
}

/// Uniform random picks.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl ChoicePolicy for RandomPolicy {
    fn choose(
        &mut self,
        _team: TeamId,
        _player: usize,
        _state: &MatchState,
        rng: &mut GameRng,
    ) -> Option<Choice> {
        Some(Choice::random(rng))
    }
}

/// The same two choices every round.
#[derive(Clone, Debug)]
pub struct FixedPolicy {
    choices: TeamChoices,
}

impl FixedPolicy {
    pub fn new(choices: TeamChoices) -> Self {
        Self { choices }
    }
}

impl ChoicePolicy for FixedPolicy {
    fn choose(
        &mut self,
        _team: TeamId,
        player: usize,
        _state: &MatchState,
        _rng: &mut GameRng,
    ) -> Option<Choice> {
        self.choices.0.get(player).copied()
    }
}

/// Never picks; every slot defaults to random.
#[derive(Clone, Debug, Default)]
pub struct IdlePolicy;

impl ChoicePolicy for IdlePolicy {
    fn choose(
        &mut self,
        _team: TeamId,
        _player: usize,
        _state: &MatchState,
        _rng: &mut GameRng,
    ) -> Option<Choice> {
        None
    }
}

/// Plays back prepared rounds, then goes idle.
///
/// Each entry holds a team's two slots for one round; `None` slots stay unset.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    rounds: VecDeque<[Option<Choice>; PLAYERS_PER_TEAM]>,
    current: Option<[Option<Choice>; PLAYERS_PER_TEAM]>,
}

impl ScriptedPolicy {
    pub fn new(rounds: impl IntoIterator<Item = [Option<Choice>; PLAYERS_PER_TEAM]>) -> Self {
        Self {
            rounds: rounds.into_iter().collect(),
            current: None,
        }
    }

    /// Script made only of complete rounds.
    pub fn from_choices(rounds: impl IntoIterator<Item = TeamChoices>) -> Self {
        Self::new(rounds.into_iter().map(|c| c.0.map(Some)))
    }

    /// Rounds not yet played back.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl ChoicePolicy for ScriptedPolicy {
    fn choose(
        &mut self,
        _team: TeamId,
        player: usize,
        _state: &MatchState,
        _rng: &mut GameRng,
    ) -> Option<Choice> {
        // The first player's pick starts a new scripted round.
        if player == 0 {
            self.current = self.rounds.pop_front();
        }
        self.current.and_then(|slots| slots.get(player).copied().flatten())
    }
}
