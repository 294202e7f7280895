//! Headless match driving.
//!
//! ## Overview
//!
//! - **ChoicePolicy**: Where a team's picks come from (UI, script, bot)
//! - **MatchRunner**: Loops rounds until a team wins or the round cap hits
//!
//! ## Usage
//!
//! ```rust
//! use rps_teams::cards::Card;
//! use rps_teams::core::{Choice, MatchConfig, TeamChoices, TeamId};
//! use rps_teams::play::{FixedPolicy, MatchRunner};
//!
//! let config = MatchConfig::new(2)
//!     .with_cards(TeamId::A, [Card::DoublePoints, Card::ForceSwitch])
//!     .with_cards(TeamId::B, [Card::SecondChance, Card::DoublePoints])
//!     .with_seed(7);
//!
//! let mut runner = MatchRunner::new(config)
//!     .unwrap()
//!     .with_policy(TeamId::A, FixedPolicy::new(TeamChoices::new(Choice::Rock, Choice::Rock)));
//!
//! let summary = runner.run().unwrap();
//! assert!(summary.hit_round_cap || summary.winner().is_some());
//! ```

pub mod policy;
pub mod runner;

pub use policy::{ChoicePolicy, FixedPolicy, IdlePolicy, RandomPolicy, ScriptedPolicy};
pub use runner::{MatchRunner, MatchSummary};
