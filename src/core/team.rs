//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Exactly two teams play a match: `TeamId::A` and `TeamId::B`.
//!
//! ## TeamMap
//!
//! Fixed two-slot storage indexed by `TeamId`, mirroring the way the
//! engine stores everything "per team" (victories, cards, deltas).
//!
//! ## Choices
//!
//! `TeamChoices` is one team's resolved pair of choices. `PendingChoices`
//! holds the four slots a caller fills in during a round; any slot still
//! empty at resolution time defaults to a random choice.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::choice::Choice;
use super::error::Result;

/// Number of players on each team.
pub const PLAYERS_PER_TEAM: usize = 2;

/// Team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// Both teams, A first.
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    /// 0 for team A, 1 for team B.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::A => 0,
            TeamId::B => 1,
        }
    }

    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::A => write!(f, "Team A"),
            TeamId::B => write!(f, "Team B"),
        }
    }
}

/// Per-team data storage.
///
/// ## Example
///
/// ```
/// use rps_teams::core::{TeamId, TeamMap};
///
/// let mut victories: TeamMap<u32> = TeamMap::with_value(0);
/// victories[TeamId::B] += 1;
///
/// assert_eq!(victories[TeamId::A], 0);
/// assert_eq!(victories[TeamId::B], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// The factory runs for team A, then team B.
    pub fn new(mut factory: impl FnMut(TeamId) -> T) -> Self {
        let a = factory(TeamId::A);
        let b = factory(TeamId::B);
        Self { data: [a, b] }
    }

    /// Create a map from explicit values for A and B.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        TeamId::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply a function to both entries.
    pub fn map<U>(&self, f: impl Fn(TeamId, &T) -> U) -> TeamMap<U> {
        TeamMap::new(|team| f(team, self.get(team)))
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

/// One team's resolved choices. Player order only matters for
/// ForceSwitch, which targets the first player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamChoices(pub [Choice; PLAYERS_PER_TEAM]);

impl TeamChoices {
    #[must_use]
    pub const fn new(first: Choice, second: Choice) -> Self {
        Self([first, second])
    }

    #[must_use]
    pub const fn first(&self) -> Choice {
        self.0[0]
    }

    #[must_use]
    pub const fn second(&self) -> Choice {
        self.0[1]
    }

    /// Both players picked the same thing.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.0[0] == self.0[1]
    }

    pub fn iter(&self) -> impl Iterator<Item = Choice> + '_ {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for TeamChoices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.0[0], self.0[1])
    }
}

/// The four choice slots collected during a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChoices {
    slots: TeamMap<[Option<Choice>; PLAYERS_PER_TEAM]>,
}

impl PendingChoices {
    /// All four slots unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully specified choices.
    #[must_use]
    pub fn from_teams(a: TeamChoices, b: TeamChoices) -> Self {
        Self {
            slots: TeamMap::from_pair(a.0.map(Some), b.0.map(Some)),
        }
    }

    /// Set one player's choice.
    ///
    /// Panics if `player` is not 0 or 1.
    pub fn set(&mut self, team: TeamId, player: usize, choice: Choice) {
        assert!(player < PLAYERS_PER_TEAM, "Player index must be 0 or 1");
        self.slots[team][player] = Some(choice);
    }

    /// Parse caller text (name or menu number) into a slot.
    pub fn set_from_str(&mut self, team: TeamId, player: usize, input: &str) -> Result<Choice> {
        let choice = input.parse::<Choice>()?;
        self.set(team, player, choice);
        Ok(choice)
    }

    /// Builder form of `set`.
    #[must_use]
    pub fn with(mut self, team: TeamId, player: usize, choice: Choice) -> Self {
        self.set(team, player, choice);
        self
    }

    /// Get one player's slot.
    ///
    /// Panics if `player` is not 0 or 1.
    #[must_use]
    pub fn get(&self, team: TeamId, player: usize) -> Option<Choice> {
        assert!(player < PLAYERS_PER_TEAM, "Player index must be 0 or 1");
        self.slots[team][player]
    }

    /// Get a team's two slots.
    #[must_use]
    pub fn team(&self, team: TeamId) -> [Option<Choice>; PLAYERS_PER_TEAM] {
        self.slots[team]
    }

    /// Every slot has been filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, pair)| pair.iter().all(Option::is_some))
    }

    /// Number of unset slots.
    #[must_use]
    pub fn unset_count(&self) -> usize {
        self.slots
            .iter()
            .map(|(_, pair)| pair.iter().filter(|c| c.is_none()).count())
            .sum()
    }

    /// Reset all slots for the next round.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
