//! Card effects applied around round resolution.
//!
//! ## Key Types
//!
//! - `CardEngine`: ForceSwitch before resolution, DoublePoints and the
//!   applied delta after it, SecondChance availability on ties
//! - `ForcedSwitch`: Record of an overwritten choice
//! - `CardScore`: A team's multiplier and applied delta for a round

pub mod engine;

pub use engine::{CardEngine, CardScore, ForcedSwitch, DOUBLE_POINTS_MULTIPLIER};
