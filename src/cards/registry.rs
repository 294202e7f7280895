//! Card catalog lookup.
//!
//! The catalog is built once and only read afterwards.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardDefinition, CardTiming};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rps_teams::cards::{Card, CardRegistry};
///
/// let registry = CardRegistry::standard();
/// let def = registry.get(Card::DoublePoints).unwrap();
/// assert_eq!(def.name, "Double Points");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<Card, CardDefinition>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full three-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(CardDefinition::new(
            Card::DoublePoints,
            "Double Points",
            "Doubles the points your team earns in a round it wins outright.",
            CardTiming::AfterResolution,
        ));
        registry.register(CardDefinition::new(
            Card::ForceSwitch,
            "Force Switch",
            "The rival's first player must switch to a random choice.",
            CardTiming::BeforeResolution,
        ));
        registry.register(CardDefinition::new(
            Card::SecondChance,
            "Second Chance",
            "Allows your team to pick again after a tied round.",
            CardTiming::OnTie,
        ));
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if the card is already registered.
    pub fn register(&mut self, def: CardDefinition) {
        if self.cards.contains_key(&def.card) {
            panic!("Card {:?} already registered", def.card);
        }
        self.cards.insert(def.card, def);
    }

    #[must_use]
    pub fn get(&self, card: Card) -> Option<&CardDefinition> {
        self.cards.get(&card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains_key(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Definitions in catalog order (stable, unlike the map order).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        Card::ALL.into_iter().filter_map(move |c| self.cards.get(&c))
    }

    /// Definitions acting at a given point of the round.
    pub fn by_timing(&self, timing: CardTiming) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |d| d.timing == timing)
    }
}
