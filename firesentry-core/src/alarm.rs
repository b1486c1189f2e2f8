//! Actuator Cadence State Machines
//!
//! ## Overview
//!
//! Translates the discrete alert state into LED and buzzer drive levels.
//! This sits strictly downstream of the core: it reads only the current
//! [`AlertState`] and a timestamp, never the pipeline's statistics, and
//! is intended to be polled at a higher frequency than the tick rate.
//!
//! Cadence per state:
//!
//! ```text
//! Bootup    LED 100 ms blink            buzzer silent
//! Safe      LED off                     buzzer silent
//! Warning   LED 1 s blink               buzzer silent
//! HighRisk  LED 200 ms blink            buzzer 1 s on/off
//! Emergency LED solid                   buzzer continuous
//! ```
//!
//! ## Phase Reset Invariant
//!
//! Switching state always resets both actuators to a known quiescent
//! point (LED off, buzzer silent) with their phase clocks re-anchored at
//! the transition instant. Without this, a blink pattern could carry a
//! half-elapsed phase across a transition and fire immediately.

use crate::state::AlertState;
use crate::time::Timestamp;

/// LED blink half-period during bootup, in milliseconds
const BOOTUP_LED_PERIOD_MS: u64 = 100;

/// LED blink half-period during warning, in milliseconds
const WARNING_LED_PERIOD_MS: u64 = 1000;

/// LED blink half-period during high risk, in milliseconds
const HIGH_RISK_LED_PERIOD_MS: u64 = 200;

/// Buzzer beep half-period during high risk, in milliseconds
const HIGH_RISK_BUZZER_PERIOD_MS: u64 = 1000;

/// Drive levels for the two actuators
///
/// `true` means "on"; pin polarity (active-low buzzers and the like) is
/// the Alert Sink collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlarmOutput {
    /// LED drive level
    pub led: bool,
    /// Buzzer drive level
    pub buzzer: bool,
}

/// Blink/beep cadence machine keyed by elapsed time since last toggle
#[derive(Debug, Clone, Copy)]
pub struct AlarmCadence {
    state: AlertState,
    led_on: bool,
    buzzer_on: bool,
    last_led_toggle: Timestamp,
    last_buzzer_toggle: Timestamp,
}

impl AlarmCadence {
    /// Creates a cadence machine in the bootup state
    pub const fn new() -> Self {
        Self {
            state: AlertState::Bootup,
            led_on: false,
            buzzer_on: false,
            last_led_toggle: 0,
            last_buzzer_toggle: 0,
        }
    }

    /// Applies the state computed by the latest tick
    ///
    /// On an actual transition both actuator phases reset to quiescent,
    /// anchored at `now`. Re-applying the current state is a no-op, so
    /// this is safe to call every tick.
    pub fn set_state(&mut self, state: AlertState, now: Timestamp) {
        if self.state != state {
            self.state = state;
            self.led_on = false;
            self.buzzer_on = false;
            self.last_led_toggle = now;
            self.last_buzzer_toggle = now;
        }
    }

    /// The state currently driving the cadence
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Evaluates the cadence at `now`, returning the drive levels
    ///
    /// Expected to be called more often than the half-periods above;
    /// each call performs at most one toggle per actuator.
    pub fn poll(&mut self, now: Timestamp) -> AlarmOutput {
        match self.state {
            AlertState::Bootup => {
                self.toggle_led_every(BOOTUP_LED_PERIOD_MS, now);
                self.buzzer_on = false;
            }
            AlertState::Safe => {
                self.led_on = false;
                self.buzzer_on = false;
            }
            AlertState::Warning => {
                self.toggle_led_every(WARNING_LED_PERIOD_MS, now);
                self.buzzer_on = false;
            }
            AlertState::HighRisk => {
                self.toggle_led_every(HIGH_RISK_LED_PERIOD_MS, now);
                if now.saturating_sub(self.last_buzzer_toggle) >= HIGH_RISK_BUZZER_PERIOD_MS {
                    self.last_buzzer_toggle = now;
                    self.buzzer_on = !self.buzzer_on;
                }
            }
            AlertState::Emergency => {
                self.led_on = true;
                self.buzzer_on = true;
            }
        }

        AlarmOutput {
            led: self.led_on,
            buzzer: self.buzzer_on,
        }
    }

    fn toggle_led_every(&mut self, period_ms: u64, now: Timestamp) {
        if now.saturating_sub(self.last_led_toggle) >= period_ms {
            self.last_led_toggle = now;
            self.led_on = !self.led_on;
        }
    }
}

impl Default for AlarmCadence {
    fn default() -> Self {
        Self::new()
    }
}
