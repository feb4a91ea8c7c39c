//! Deterministic round state machine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advanced only by explicit `tick(delta_ms)` calls
//! - Seeded RNG only
//! - Stable iteration order (contacts keyed in a `BTreeMap`)
//! - No rendering or platform dependencies

pub mod clock;
pub mod contact;
pub mod controller;
pub mod select;

pub use clock::{ClockTransition, Phase, RoundClock};
pub use contact::{ColorAssigner, Contact, ContactId, ContactSet, ContactTracker};
pub use controller::{Banner, ContactDot, RoundController, RoundEvent, ViewModel};
pub use select::select_winner;
