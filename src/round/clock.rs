//! Round timing state machine
//!
//! Two phases of fixed duration: the countdown, then the result-hold where
//! the winner stays on screen. The clock is advanced by explicit deltas from
//! the host timer and must tolerate jitter; it never assumes an exact tick
//! cadence.

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown is running
    Running,
    /// Countdown expired, result is being displayed
    ResultHold,
    /// Round is over; terminal
    Done,
}

/// Phase transition caused by a tick. Each transition is reported exactly
/// once over the life of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTransition {
    None,
    /// Running -> ResultHold; the moment the winner must be drawn
    CountdownExpired,
    /// ResultHold -> Done
    RoundOver,
}

/// Drives a round's two timed phases off host-supplied elapsed time
#[derive(Debug, Clone)]
pub struct RoundClock {
    countdown_ms: u64,
    result_hold_ms: u64,
    elapsed_ms: u64,
    phase: Phase,
}

impl RoundClock {
    pub fn new(countdown_ms: u64, result_hold_ms: u64) -> Self {
        Self {
            countdown_ms,
            result_hold_ms,
            elapsed_ms: 0,
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Remaining countdown rounded up to whole seconds, for display. A fresh
    /// clock reads the full countdown; the value hits 0 exactly when the
    /// countdown expires.
    pub fn remaining_countdown_secs(&self) -> u64 {
        let remaining = self.countdown_ms.saturating_sub(self.elapsed_ms);
        remaining.div_ceil(1000)
    }

    /// Advance by `delta_ms` of real time. At most one transition is
    /// reported per call; a delta that overshoots both thresholds reports
    /// `CountdownExpired` now and `RoundOver` on the next tick, so the
    /// winner draw is never skipped.
    pub fn tick(&mut self, delta_ms: u64) -> ClockTransition {
        if self.phase == Phase::Done {
            return ClockTransition::None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        match self.phase {
            Phase::Running if self.elapsed_ms >= self.countdown_ms => {
                self.phase = Phase::ResultHold;
                ClockTransition::CountdownExpired
            }
            Phase::ResultHold
                if self.elapsed_ms >= self.countdown_ms + self.result_hold_ms =>
            {
                self.phase = Phase::Done;
                ClockTransition::RoundOver
            }
            _ => ClockTransition::None,
        }
    }
}
