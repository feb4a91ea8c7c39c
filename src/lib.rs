//! Touch Roulette - a multi-touch party game core
//!
//! Every player holds a finger on the screen; a countdown runs; when it
//! expires one active finger is picked uniformly at random and highlighted
//! for a short hold period before the round ends.
//!
//! Core modules:
//! - `round`: Deterministic round state machine (contacts, clock, selection)
//! - `render`: Frame composition onto an opaque drawing surface
//! - `config`: Round configuration (palette, durations)
//!
//! The core is single-threaded by construction: the host event loop delivers
//! touch events and timer ticks to one [`round::RoundController`] and reads
//! its view model between mutations. Nothing here blocks, spawns, or locks.

pub mod config;
pub mod render;
pub mod round;

pub use config::{ConfigError, Palette, RoundConfig};
pub use round::{ContactId, RoundController, RoundEvent, ViewModel};

/// Game configuration constants
pub mod consts {
    /// Countdown phase duration before the winner is drawn
    pub const COUNTDOWN_MS: u64 = 10_000;
    /// How long the result stays on screen before the round ends
    pub const RESULT_HOLD_MS: u64 = 5_000;

    /// Radius of a contact circle
    pub const CONTACT_RADIUS: f32 = 75.0;
    /// Radius of the ring drawn under the winning contact
    pub const HIGHLIGHT_RADIUS: f32 = 85.0;
    /// Ring color for the winner (0xRRGGBB)
    pub const HIGHLIGHT_COLOR: u32 = 0xFFFFFF;
    /// Background color the surface is cleared to each frame
    pub const BACKGROUND_COLOR: u32 = 0x000000;
}
