//! Round controller: composes tracker, clock and winner draw into the
//! game's state machine and produces the render-ready view model.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::{ClockTransition, Phase, RoundClock};
use super::contact::{ContactId, ContactTracker};
use super::select::select_winner;
use crate::config::{ConfigError, RoundConfig};
use crate::consts::HIGHLIGHT_COLOR;

/// Events surfaced to the host from a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The countdown expired and the draw happened. `None` means nobody was
    /// touching at that moment.
    WinnerChosen(Option<ContactId>),
    /// The result-hold period ended; the host should leave the game screen.
    /// Emitted exactly once per round.
    RoundOver,
}

/// Status text accompanying the contact circles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Whole seconds left on the countdown
    Countdown(u64),
    /// A winner is on screen
    Winner,
    /// Nothing to announce (draw happened with no fingers down)
    Empty,
}

/// One circle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactDot {
    pub pos: Vec2,
    /// Fill color (0xRRGGBB)
    pub color: u32,
    /// Winner gets a ring under the fill circle
    pub highlighted: bool,
    /// Ring color, meaningful only when `highlighted`
    pub ring_color: u32,
}

/// Declarative description of the current frame. Reading it never mutates
/// round state, so repeated reads between ticks are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub dots: Vec<ContactDot>,
    pub banner: Banner,
}

/// Owns one round from countdown start to result-hold completion
#[derive(Debug)]
pub struct RoundController {
    config: RoundConfig,
    tracker: ContactTracker,
    clock: RoundClock,
    rng: Pcg32,
    winner: Option<ContactId>,
    winner_chosen: bool,
}

impl RoundController {
    /// Start a round. Fails fast on an invalid config rather than erroring
    /// mid-round at color-assignment time.
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "round start: countdown {}ms, hold {}ms, {} palette colors",
            config.countdown_ms,
            config.result_hold_ms,
            config.palette.len()
        );
        Ok(Self {
            tracker: ContactTracker::new(&config.palette),
            clock: RoundClock::new(config.countdown_ms, config.result_hold_ms),
            rng: Pcg32::seed_from_u64(seed),
            config,
            winner: None,
            winner_chosen: false,
        })
    }

    // Input events are forwarded in every phase. A finger may keep moving
    // during the result hold; that never disturbs an already-chosen winner,
    // which is remembered independently of live touch state.

    pub fn on_down(&mut self, id: ContactId, x: f32, y: f32) {
        self.tracker.on_down(id, Vec2::new(x, y));
    }

    pub fn on_move(&mut self, id: ContactId, x: f32, y: f32) {
        self.tracker.on_move(id, Vec2::new(x, y));
    }

    pub fn on_up(&mut self, id: ContactId) {
        self.tracker.on_up(id);
    }

    pub fn on_cancel(&mut self, id: ContactId) {
        self.tracker.on_cancel(id);
    }

    /// Advance the round by `delta_ms`. All input delivered before this call
    /// is reflected in the snapshot used for the draw if the countdown
    /// expires on this tick.
    pub fn tick(&mut self, delta_ms: u64) -> Option<RoundEvent> {
        match self.clock.tick(delta_ms) {
            ClockTransition::None => None,
            ClockTransition::CountdownExpired => {
                let snapshot = self.tracker.snapshot();
                self.winner = select_winner(&snapshot, &mut self.rng);
                self.winner_chosen = true;
                match self.winner {
                    Some(id) => log::info!("winner: {:?} of {} contacts", id, snapshot.len()),
                    None => log::info!("countdown expired with no contacts"),
                }
                Some(RoundEvent::WinnerChosen(self.winner))
            }
            ClockTransition::RoundOver => {
                log::info!("round over");
                Some(RoundEvent::RoundOver)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    pub fn winner_chosen(&self) -> bool {
        self.winner_chosen
    }

    pub fn winner(&self) -> Option<ContactId> {
        self.winner
    }

    /// Render-ready description of the current frame.
    ///
    /// Before the draw: every active contact in its own color, plus the
    /// countdown. After the draw: only the winner, highlighted, even if
    /// other fingers are still down; or nothing at all if the draw found an
    /// empty screen.
    pub fn view_model(&self) -> ViewModel {
        if !self.winner_chosen {
            let dots = self
                .tracker
                .snapshot()
                .values()
                .map(|contact| ContactDot {
                    pos: contact.pos,
                    color: self.config.palette.color(contact.color),
                    highlighted: false,
                    ring_color: HIGHLIGHT_COLOR,
                })
                .collect();
            return ViewModel {
                dots,
                banner: Banner::Countdown(self.clock.remaining_countdown_secs()),
            };
        }

        let Some(winner_id) = self.winner else {
            return ViewModel {
                dots: Vec::new(),
                banner: Banner::Empty,
            };
        };

        // The winner value outlives the touch: if the winning finger has
        // lifted there is no position left to draw, but the banner stays.
        let dots = match self.tracker.get(winner_id) {
            Some(contact) => vec![ContactDot {
                pos: contact.pos,
                color: self.config.palette.color(contact.color),
                highlighted: true,
                ring_color: HIGHLIGHT_COLOR,
            }],
            None => Vec::new(),
        };
        ViewModel {
            dots,
            banner: Banner::Winner,
        }
    }
}
