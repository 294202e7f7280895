//! Match state machine.
//!
//! ```text
//! InProgress --(team A reaches threshold)--> TeamAWins
//! InProgress --(team B reaches threshold)--> TeamBWins
//! ```
//!
//! Each round, the team with the strictly greater applied delta gains one
//! victory; equal deltas (0-0 included) award nothing. The match turns
//! terminal the moment a victory counter reaches the threshold. Should
//! both counters ever reach it in the same evaluation, team A wins.
//! Terminal states accept no further rounds.

use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, MatchConfig, Result, TeamId, TeamMap};

/// Where the match stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    InProgress,
    TeamAWins,
    TeamBWins,
}

impl MatchStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != MatchStatus::InProgress
    }

    #[must_use]
    pub fn winner(self) -> Option<TeamId> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::TeamAWins => Some(TeamId::A),
            MatchStatus::TeamBWins => Some(TeamId::B),
        }
    }

    fn won_by(team: TeamId) -> Self {
        match team {
            TeamId::A => MatchStatus::TeamAWins,
            TeamId::B => MatchStatus::TeamBWins,
        }
    }
}

/// Who took a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(TeamId),
    Tie,
}

impl RoundOutcome {
    /// Compare applied deltas.
    #[must_use]
    pub fn from_deltas(deltas: &TeamMap<u32>) -> Self {
        use std::cmp::Ordering;

        match deltas[TeamId::A].cmp(&deltas[TeamId::B]) {
            Ordering::Greater => RoundOutcome::Winner(TeamId::A),
            Ordering::Less => RoundOutcome::Winner(TeamId::B),
            Ordering::Equal => RoundOutcome::Tie,
        }
    }

    #[must_use]
    pub fn is_tie(self) -> bool {
        self == RoundOutcome::Tie
    }
}

/// One entry of the in-memory round log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub deltas: TeamMap<u32>,
    pub outcome: RoundOutcome,
}

/// Cumulative match state, owned by the caller's round loop.
///
/// Uses an `im` vector for the round log so snapshots clone cheaply.
/// Deserialization replays the round log and rejects snapshots whose
/// counters or status disagree with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    threshold: u32,
    victories: TeamMap<u32>,
    /// Sum of applied deltas (the running score shown to players).
    points: TeamMap<u64>,
    status: MatchStatus,
    history: Vector<RoundRecord>,
}

/// Unchecked wire form of `MatchState`.
#[derive(Deserialize)]
struct MatchStateRepr {
    threshold: u32,
    victories: TeamMap<u32>,
    points: TeamMap<u64>,
    status: MatchStatus,
    history: Vector<RoundRecord>,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = EngineError;

    fn try_from(repr: MatchStateRepr) -> Result<Self> {
        let mut state = Self::new(repr.threshold)?;
        for (i, record) in repr.history.iter().enumerate() {
            if record.round as usize != i + 1 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "round log out of order at entry {}",
                    i + 1
                )));
            }
            if record.outcome != RoundOutcome::from_deltas(&record.deltas) {
                return Err(EngineError::InvalidConfiguration(format!(
                    "round {} outcome disagrees with its deltas",
                    record.round
                )));
            }
            state.record_round(record.deltas).map_err(|_| {
                EngineError::InvalidConfiguration(format!(
                    "round {} recorded after the match ended",
                    record.round
                ))
            })?;
        }

        if state.victories != repr.victories
            || state.points != repr.points
            || state.status != repr.status
        {
            return Err(EngineError::InvalidConfiguration(
                "match state disagrees with its round log".to_string(),
            ));
        }
        Ok(state)
    }
}

impl MatchState {
    /// Start a match requiring `threshold` round victories.
    pub fn new(threshold: u32) -> Result<Self> {
        if threshold == 0 {
            return Err(EngineError::InvalidConfiguration(
                "victories required must be positive, got 0".to_string(),
            ));
        }

        Ok(Self {
            threshold,
            victories: TeamMap::with_value(0),
            points: TeamMap::with_value(0),
            status: MatchStatus::InProgress,
            history: Vector::new(),
        })
    }

    /// Start a match from a validated configuration.
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        let state = Self::new(config.threshold()?)?;
        info!("Match started: first to {} round victories", state.threshold);
        Ok(state)
    }

    /// Record one completed round's applied deltas.
    ///
    /// Fails with `MatchOver` (leaving the state untouched) once terminal.
    pub fn record_round(&mut self, deltas: TeamMap<u32>) -> Result<RoundOutcome> {
        if self.status.is_terminal() {
            return Err(EngineError::MatchOver);
        }

        for (team, delta) in deltas.iter() {
            self.points[team] += u64::from(*delta);
        }

        let outcome = RoundOutcome::from_deltas(&deltas);
        if let RoundOutcome::Winner(team) = outcome {
            self.victories[team] += 1;
        }

        self.history.push_back(RoundRecord {
            round: self.history.len() as u32 + 1,
            deltas,
            outcome,
        });

        // Team A is checked first so a simultaneous finish favours it.
        if let Some(team) = TeamId::ALL
            .into_iter()
            .find(|t| self.victories[*t] >= self.threshold)
        {
            self.status = MatchStatus::won_by(team);
            info!(
                "Match over after {} rounds: {} wins {}",
                self.rounds_played(),
                team,
                self.scoreboard()
            );
        }

        Ok(outcome)
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn victories(&self, team: TeamId) -> u32 {
        self.victories[team]
    }

    #[must_use]
    pub fn points(&self, team: TeamId) -> u64 {
        self.points[team]
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        self.status.winner()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.history.len() as u32
    }

    /// Round log, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// "Team A [x] - Team B [y]" victory line.
    #[must_use]
    pub fn scoreboard(&self) -> String {
        format!(
            "{} [{}] - {} [{}]",
            TeamId::A,
            self.victories[TeamId::A],
            TeamId::B,
            self.victories[TeamId::B]
        )
    }
}
