//! Card system: the power-up catalog and team selections.
//!
//! ## Key Types
//!
//! - `Card`: One of the three power-ups
//! - `CardDefinition`: Display name, rules text and timing
//! - `CardRegistry`: Read-only catalog lookup
//! - `CardSet`: A team's validated selection of `CARDS_PER_TEAM` cards

pub mod definition;
pub mod hand;
pub mod registry;

pub use definition::{Card, CardDefinition, CardTiming};
pub use hand::{CardSet, CARDS_PER_TEAM};
pub use registry::CardRegistry;
