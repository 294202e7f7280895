//! Round pipeline tests.
//!
//! These tests drive `play_round` end to end: default fill, ForceSwitch,
//! resolution, DoublePoints and the match state update.

use rps_teams::cards::{Card, CardSet};
use rps_teams::core::Choice::{Paper, Rock, Scissors};
use rps_teams::core::{Choice, GameRng, MatchConfig, PendingChoices, TeamChoices, TeamId, TeamMap};
use rps_teams::rules::{fill_unset, play_round, MatchState, MatchStatus, Resolver, RoundOutcome};

fn no_cards() -> TeamMap<CardSet> {
    TeamMap::with_value(CardSet::empty())
}

fn cards(a: [Card; 2], b: [Card; 2]) -> TeamMap<CardSet> {
    TeamMap::from_pair(CardSet::new(a).unwrap(), CardSet::new(b).unwrap())
}

/// Pairing bonus alone decides a one-victory match.
#[test]
fn test_pairing_bonus_wins_single_round_match() {
    let config = MatchConfig::new(1).without_cards();
    let mut state = MatchState::from_config(&config).unwrap();
    let mut rng = GameRng::new(config.seed);

    let pending = PendingChoices::from_teams(
        TeamChoices::new(Rock, Rock),
        TeamChoices::new(Scissors, Paper),
    );
    let report = play_round(&mut state, &pending, &config.card_sets().unwrap(), &mut rng).unwrap();

    assert!(report.result[TeamId::A].pairing_bonus);
    assert!(!report.result[TeamId::B].pairing_bonus);
    assert_eq!(report.result[TeamId::A].differential(), 1);
    assert_eq!(report.result[TeamId::B].differential(), 0);
    assert_eq!(report.delta(TeamId::A), 1);
    assert_eq!(report.delta(TeamId::B), 0);
    assert_eq!(report.outcome, RoundOutcome::Winner(TeamId::A));
    assert_eq!(state.status(), MatchStatus::TeamAWins);
}

/// DoublePoints doubles a +2 raw differential to 4.
#[test]
fn test_double_points_doubles_positive_round() {
    let mut state = MatchState::new(3).unwrap();
    let mut rng = GameRng::new(1);
    let cards = cards(
        [Card::DoublePoints, Card::SecondChance],
        [Card::SecondChance, Card::SecondChance],
    );

    // rock ties both rocks, paper beats both rocks
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Rock, Paper),
        TeamChoices::new(Rock, Rock),
    );
    let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();

    assert_eq!(report.result[TeamId::A].wins, 2);
    assert_eq!(report.result[TeamId::A].losses, 0);
    assert_eq!(report.scores[TeamId::A].multiplier, 2);
    assert_eq!(report.delta(TeamId::A), 4);
    assert_eq!(report.delta(TeamId::B), 0);
    assert_eq!(state.points(TeamId::A), 4);
}

/// DoublePoints ignores the pairing bonus when judging a round.
#[test]
fn test_double_points_needs_raw_win() {
    let mut state = MatchState::new(3).unwrap();
    let mut rng = GameRng::new(1);
    let cards = cards(
        [Card::DoublePoints, Card::DoublePoints],
        [Card::SecondChance, Card::SecondChance],
    );

    let pending = PendingChoices::from_teams(
        TeamChoices::new(Scissors, Scissors),
        TeamChoices::new(Rock, Paper),
    );
    let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();

    assert_eq!(report.scores[TeamId::A].multiplier, 1);
    assert_eq!(report.delta(TeamId::A), 1); // 2 wins, 2 losses, pair bonus
    assert_eq!(report.outcome, RoundOutcome::Winner(TeamId::A));
}

/// ForceSwitch overwrites the opposing first choice before the resolver runs.
#[test]
fn test_force_switch_changes_tallies() {
    let cards = cards(
        [Card::ForceSwitch, Card::SecondChance],
        [Card::SecondChance, Card::SecondChance],
    );
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Rock, Rock),
        TeamChoices::new(Scissors, Scissors),
    );

    let mut saw_change = false;
    for seed in 0..50 {
        let mut state = MatchState::new(3).unwrap();
        let mut rng = GameRng::new(seed);
        let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();

        assert_eq!(report.forced.len(), 1);
        let switch = report.forced[0];
        assert_eq!(switch.by, TeamId::A);
        assert_eq!(switch.target, TeamId::B);
        assert_eq!(switch.from, Scissors);
        assert_eq!(report.selections[TeamId::B].first(), switch.to);
        assert_eq!(report.selections[TeamId::B].second(), Scissors);

        // Tallies always come from the switched choices.
        assert_eq!(report.result, Resolver::resolve_teams(&report.selections));

        if switch.to != Scissors {
            saw_change = true;
            let original = Resolver::resolve(
                &TeamChoices::new(Rock, Rock),
                &TeamChoices::new(Scissors, Scissors),
            );
            assert_ne!(report.result, original);
            assert!(report.result[TeamId::A].wins < 4);
        }
    }
    assert!(saw_change, "ForceSwitch should re-pick a different choice at least once");
}

/// A team never switches its own players.
#[test]
fn test_force_switch_spares_own_team() {
    let cards = cards(
        [Card::ForceSwitch, Card::ForceSwitch],
        [Card::DoublePoints, Card::DoublePoints],
    );
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Paper, Scissors),
        TeamChoices::new(Rock, Paper),
    );

    for seed in 0..20 {
        let mut state = MatchState::new(3).unwrap();
        let mut rng = GameRng::new(seed);
        let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();
        assert_eq!(report.selections[TeamId::A], TeamChoices::new(Paper, Scissors));
        assert_eq!(report.forced.len(), 1);
    }
}

/// When both teams hold ForceSwitch, A's switch lands first and each hits the other team.
#[test]
fn test_force_switch_both_teams_in_order() {
    let cards = cards(
        [Card::ForceSwitch, Card::DoublePoints],
        [Card::ForceSwitch, Card::ForceSwitch],
    );
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Paper, Rock),
        TeamChoices::new(Scissors, Paper),
    );

    for seed in 0..20 {
        let mut state = MatchState::new(3).unwrap();
        let mut rng = GameRng::new(seed);
        let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();

        assert_eq!(report.forced.len(), 2);
        let (first, second) = (report.forced[0], report.forced[1]);
        assert_eq!((first.by, first.target), (TeamId::A, TeamId::B));
        assert_eq!((second.by, second.target), (TeamId::B, TeamId::A));
        assert_eq!(first.from, Scissors);
        assert_eq!(second.from, Paper);

        assert_eq!(report.selections[TeamId::B], TeamChoices::new(first.to, Paper));
        assert_eq!(report.selections[TeamId::A], TeamChoices::new(second.to, Rock));
        assert_eq!(report.result, Resolver::resolve_teams(&report.selections));
    }
}

/// DoublePoints is judged on the tallies after a switch.
#[test]
fn test_double_points_uses_post_switch_tallies() {
    let cards = cards(
        [Card::DoublePoints, Card::SecondChance],
        [Card::ForceSwitch, Card::SecondChance],
    );
    let pending = PendingChoices::from_teams(
        TeamChoices::new(Rock, Paper),
        TeamChoices::new(Rock, Rock),
    );

    for seed in 0..30 {
        let mut state = MatchState::new(5).unwrap();
        let mut rng = GameRng::new(seed);
        let report = play_round(&mut state, &pending, &cards, &mut rng).unwrap();

        let tally = report.result[TeamId::A];
        let expected = if tally.wins > tally.losses { 2 } else { 1 };
        assert_eq!(report.scores[TeamId::A].multiplier, expected);
        assert_eq!(
            report.delta(TeamId::A),
            tally.differential().max(0) as u32 * expected
        );
    }
}

/// Unset choices default uniformly and never make resolution fail.
#[test]
fn test_unset_choices_default_uniformly() {
    let mut rng = GameRng::new(99);
    let pending = PendingChoices::new();
    let mut counts = [0usize; 3];
    let trials = 3000;

    for _ in 0..trials {
        let (choices, defaulted) = fill_unset(&pending, &mut rng);
        assert_eq!(defaulted.len(), 4);
        for team in TeamId::ALL {
            for choice in choices[team].iter() {
                counts[Choice::ALL.iter().position(|c| *c == choice).unwrap()] += 1;
            }
        }
    }

    let expected = (trials * 4 / 3) as f64;
    for count in counts {
        let ratio = count as f64 / expected;
        assert!((0.9..1.1).contains(&ratio), "counts skewed: {:?}", counts);
    }
}

/// A round with every slot unset still resolves.
#[test]
fn test_all_unset_round_resolves() {
    let mut state = MatchState::new(1000).unwrap();
    let mut rng = GameRng::new(4);

    for _ in 0..200 {
        let report = play_round(&mut state, &PendingChoices::new(), &no_cards(), &mut rng).unwrap();
        assert_eq!(report.defaulted.len(), 4);
        assert_eq!(report.result, Resolver::resolve_teams(&report.selections));
    }
    assert_eq!(state.rounds_played(), 200);
}

/// Partially filled rounds keep what was picked.
#[test]
fn test_partial_round_keeps_picks() {
    let mut state = MatchState::new(3).unwrap();
    let mut rng = GameRng::new(8);
    let mut pending = PendingChoices::new();
    pending.set_from_str(TeamId::A, 0, "2").unwrap();
    pending.set_from_str(TeamId::B, 1, "scissors").unwrap();

    let report = play_round(&mut state, &pending, &no_cards(), &mut rng).unwrap();
    assert_eq!(report.selections[TeamId::A].first(), Paper);
    assert_eq!(report.selections[TeamId::B].second(), Scissors);
    assert_eq!(report.defaulted.len(), 2);
}

/// Same seed, same round.
#[test]
fn test_round_is_reproducible() {
    let cards = cards(
        [Card::ForceSwitch, Card::DoublePoints],
        [Card::ForceSwitch, Card::DoublePoints],
    );
    let pending = PendingChoices::new().with(TeamId::A, 1, Rock);

    let run = || {
        let mut state = MatchState::new(3).unwrap();
        let mut rng = GameRng::new(321);
        play_round(&mut state, &pending, &cards, &mut rng).unwrap()
    };

    assert_eq!(run(), run());
}
