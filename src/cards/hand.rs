//! A team's fixed card selection.
//!
//! Each team picks exactly `CARDS_PER_TEAM` cards before the first round.
//! The selection is a multiset (the same card may be picked twice) and is
//! never consumed: every held card is active in every round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::Card;
use crate::core::{EngineError, Result};

/// Cards each team must select.
pub const CARDS_PER_TEAM: usize = 2;

/// A validated card selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet {
    cards: SmallVec<[Card; CARDS_PER_TEAM]>,
}

impl CardSet {
    /// Validate a selection of exactly `CARDS_PER_TEAM` cards.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let cards: SmallVec<[Card; CARDS_PER_TEAM]> = cards.into_iter().collect();
        if cards.len() != CARDS_PER_TEAM {
            return Err(EngineError::InvalidConfiguration(format!(
                "each team must select {} cards, got {}",
                CARDS_PER_TEAM,
                cards.len()
            )));
        }
        Ok(Self { cards })
    }

    /// Parse card keys (e.g. from a form) into a validated selection.
    pub fn parse<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let cards = keys
            .iter()
            .map(|k| k.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(cards)
    }

    /// A team playing without power-ups, for matches configured with
    /// the card layer disabled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// How many copies of a card are held.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exactly `CARDS_PER_TEAM` cards held.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == CARDS_PER_TEAM
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("no cards");
        }
        let keys: Vec<_> = self.cards.iter().map(|c| c.key()).collect();
        f.write_str(&keys.join(", "))
    }
}
