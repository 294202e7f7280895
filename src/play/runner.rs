//! Match driver for headless play.
//!
//! Runs rounds until the match is decided or `max_rounds` is hit,
//! asking each team's `ChoicePolicy` for picks.

use log::{debug, info, warn};

use super::policy::{ChoicePolicy, RandomPolicy};
use crate::cards::CardSet;
use crate::core::{
    GameRng, GameRngState, MatchConfig, PendingChoices, Result, TeamId, TeamMap,
    PLAYERS_PER_TEAM,
};
use crate::rules::{play_round, MatchState, RoundReport};

/// Outcome of a driven match.
#[derive(Clone, Debug)]
pub struct MatchSummary {
    pub seed: u64,

    /// Final state (terminal unless the round cap was hit).
    pub state: MatchState,

    pub reports: Vec<RoundReport>,

    /// The round cap stopped the match before a team won.
    pub hit_round_cap: bool,

    /// Engine RNG position after the last round. Restoring it with
    /// `GameRng::from_state` continues the match with the draws it would
    /// have made.
    pub rng: GameRngState,
}

impl MatchSummary {
    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        self.state.winner()
    }

    /// Rounds in which a team could have used SecondChance.
    #[must_use]
    pub fn second_chance_offers(&self, team: TeamId) -> usize {
        self.reports.iter().filter(|r| r.second_chance[team]).count()
    }
}

/// Drives a match from a validated configuration.
pub struct MatchRunner {
    config: MatchConfig,
    cards: TeamMap<CardSet>,
    policies: TeamMap<Box<dyn ChoicePolicy>>,
}

impl MatchRunner {
    /// Validate the configuration. Both teams start with `RandomPolicy`.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let cards = config.card_sets()?;

        Ok(Self {
            config,
            cards,
            policies: TeamMap::new(|_| Box::new(RandomPolicy) as Box<dyn ChoicePolicy>),
        })
    }

    /// Set who picks for a team.
    #[must_use]
    pub fn with_policy(mut self, team: TeamId, policy: impl ChoicePolicy + 'static) -> Self {
        self.policies[team] = Box::new(policy);
        self
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &TeamMap<CardSet> {
        &self.cards
    }

    /// Play the match out.
    pub fn run(&mut self) -> Result<MatchSummary> {
        let mut state = MatchState::from_config(&self.config)?;
        let mut engine_rng = GameRng::new(self.config.seed);
        let mut policy_rng = engine_rng.for_context("policy");
        let mut reports = Vec::new();

        for (team, cards) in self.cards.iter() {
            debug!("{team} cards: {cards}");
        }

        while !state.is_terminal() && state.rounds_played() < self.config.max_rounds {
            let pending = self.collect(&state, &mut policy_rng);
            let report = play_round(&mut state, &pending, &self.cards, &mut engine_rng)?;

            for team in TeamId::ALL {
                self.policies[team].observe(&report);
            }
            reports.push(report);
        }

        let hit_round_cap = !state.is_terminal();
        if hit_round_cap {
            warn!(
                "Round cap of {} reached without a winner: {}",
                self.config.max_rounds,
                state.scoreboard()
            );
        } else {
            info!("{} rounds played, {}", state.rounds_played(), state.scoreboard());
        }

        Ok(MatchSummary {
            seed: self.config.seed,
            state,
            reports,
            hit_round_cap,
            rng: engine_rng.state(),
        })
    }

    fn collect(&mut self, state: &MatchState, rng: &mut GameRng) -> PendingChoices {
        let mut pending = PendingChoices::new();
        for team in TeamId::ALL {
            for player in 0..PLAYERS_PER_TEAM {
                if let Some(choice) = self.policies[team].choose(team, player, state, rng) {
                    pending.set(team, player, choice);
                }
            }
        }
        pending
    }
}
