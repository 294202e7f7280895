//! Card layer tests.
//!
//! These tests verify the card catalog, team selections and how each card
//! shows up in a played round.

use rps_teams::cards::{Card, CardRegistry, CardSet, CardTiming, CARDS_PER_TEAM};
use rps_teams::core::Choice::{Paper, Rock, Scissors};
use rps_teams::core::{EngineError, GameRng, MatchConfig, PendingChoices, TeamChoices, TeamId, TeamMap};
use rps_teams::effects::CardEngine;
use rps_teams::rules::{play_round, MatchState, RoundOutcome};

/// The standard catalog offers each card once, in a fixed order.
#[test]
fn test_standard_catalog() {
    let registry = CardRegistry::standard();
    assert_eq!(registry.len(), 3);

    let order: Vec<Card> = registry.iter().map(|d| d.card).collect();
    assert_eq!(order, Card::ALL.to_vec());

    let before: Vec<Card> = registry
        .by_timing(CardTiming::BeforeResolution)
        .map(|d| d.card)
        .collect();
    assert_eq!(before, vec![Card::ForceSwitch]);

    let manual: Vec<_> = registry.iter().filter(|d| !d.is_automatic()).collect();
    assert_eq!(manual.len(), 1);
    assert_eq!(manual[0].card, Card::SecondChance);
}

/// Selections must hold exactly two known cards.
#[test]
fn test_selection_validation() {
    let ok = CardSet::parse(&["double-points", "Double-Points"]).unwrap();
    assert_eq!(ok.len(), CARDS_PER_TEAM);
    assert_eq!(ok.count(Card::DoublePoints), 2);

    assert!(matches!(
        CardSet::parse(&["force-switch"]),
        Err(EngineError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        CardSet::parse(&["force-switch", "second-chance", "double-points"]),
        Err(EngineError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        CardSet::parse(&["force-switch", "triple-points"]),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

/// Disabling cards ignores whatever selections were entered.
#[test]
fn test_cards_disabled_ignores_selection() {
    let config = MatchConfig::new(3)
        .with_cards(TeamId::A, [Card::DoublePoints])
        .without_cards();
    let sets = config.card_sets().unwrap();
    assert!(sets[TeamId::A].is_empty());
    assert!(sets[TeamId::B].is_empty());
}

/// DoublePoints also doubles a narrow outright win.
#[test]
fn test_double_points_on_narrow_win() {
    let sets = TeamMap::with_value(CardSet::new([Card::DoublePoints, Card::SecondChance]).unwrap());

    let mut state = MatchState::new(3).unwrap();
    let mut rng = GameRng::new(0);
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Scissors, Paper),
        TeamChoices::new(Rock, Scissors),
    );
    let report = play_round(&mut state, &pending, &sets, &mut rng).unwrap();

    // B's rock beats scissors and loses to paper; its scissors ties then wins
    let tally = report.result[TeamId::B];
    assert_eq!((tally.wins, tally.losses), (2, 1));
    assert_eq!(report.scores[TeamId::B].multiplier, 2);
    assert_eq!(report.delta(TeamId::B), 2);
    assert_eq!(report.scores[TeamId::A].multiplier, 1);
    assert_eq!(report.outcome, RoundOutcome::Winner(TeamId::B));
}

/// SecondChance is offered only on ties and only to its holder.
#[test]
fn test_second_chance_offered_on_tie() {
    let sets = TeamMap::from_pair(
        CardSet::new([Card::SecondChance, Card::DoublePoints]).unwrap(),
        CardSet::new([Card::DoublePoints, Card::DoublePoints]).unwrap(),
    );
    let mut state = MatchState::new(3).unwrap();
    let mut rng = GameRng::new(0);

    let mirror = TeamChoices::new(Paper, Scissors);
    let tie = play_round(&mut state, &PendingChoices::from_teams(mirror, mirror), &sets, &mut rng).unwrap();
    assert!(tie.outcome.is_tie());
    assert!(tie.second_chance[TeamId::A]);
    assert!(!tie.second_chance[TeamId::B]);

    // The flag never changes scoring.
    assert_eq!(tie.victories, TeamMap::with_value(0));

    let decided = play_round(
        &mut state,
        &PendingChoices::from_teams(TeamChoices::new(Rock, Rock), TeamChoices::new(Scissors, Scissors)),
        &sets,
        &mut rng,
    )
    .unwrap();
    assert!(!decided.second_chance[TeamId::A]);
}

/// A held card is never consumed.
#[test]
fn test_cards_persist_across_rounds() {
    let sets = TeamMap::from_pair(
        CardSet::new([Card::DoublePoints, Card::SecondChance]).unwrap(),
        CardSet::new([Card::SecondChance, Card::SecondChance]).unwrap(),
    );
    let mut state = MatchState::new(10).unwrap();
    let mut rng = GameRng::new(3);
    let pending = PendingChoices::from_teams(TeamChoices::new(Paper, Paper), TeamChoices::new(Rock, Rock));

    for round in 1..=4 {
        let report = play_round(&mut state, &pending, &sets, &mut rng).unwrap();
        // 4 wins + pair bonus, doubled
        assert_eq!(report.delta(TeamId::A), 10);
        assert_eq!(state.points(TeamId::A), 10 * round);
    }
}

/// Final delta clamps at zero before the multiplier applies.
#[test]
fn test_final_delta_clamps() {
    assert_eq!(CardEngine::final_delta(-3, 2), 0);
    assert_eq!(CardEngine::final_delta(0, 2), 0);
    assert_eq!(CardEngine::final_delta(3, 2), 6);
    assert_eq!(CardEngine::final_delta(3, 1), 3);
}
