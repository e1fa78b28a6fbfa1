//! Display mode state machine and button debouncing
//!
//! Exactly one [`DisplayMode`] is active. [`ModeMachine::step`] applies the
//! transitions once per poll tick, in this order:
//!
//! 1. display timeout: back to the clock, unless the alarm is ringing
//! 2. mode button: toggle clock / date
//! 3. alarm button: acknowledge a ringing alarm, otherwise alarm setting
//! 4. triggered alarm: force the ringing mode
//!
//! Buttons and alarm are applied by the caller from the returned [`Step`].

use embassy_time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[default]
    ClockDisplay,
    DateDisplay,
    AlarmSetting,
    AlarmActive,
}

/// Debounced presses sampled during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presses {
    pub mode: bool,
    pub alarm: bool,
}

/// What one [`ModeMachine::step`] asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub previous: DisplayMode,
    pub current: DisplayMode,
    /// Alarm button pressed while ringing: clear the triggered flag.
    pub acknowledge: bool,
    /// Alarm button pressed again in the setting mode: move the alarm time.
    pub advance_alarm: bool,
}

impl Step {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Accepts a press on the released → pressed edge, at most once per interval.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    interval: Duration,
    last_accepted: Option<Instant>,
    was_pressed: bool,
}

impl Debouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
            was_pressed: false,
        }
    }

    /// Feed one sample; returns `true` if it counts as a press.
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        if !rising {
            return false;
        }

        let too_soon = self
            .last_accepted
            .is_some_and(|last| now.saturating_duration_since(last) < self.interval);
        if too_soon {
            return false;
        }

        self.last_accepted = Some(now);
        true
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModeMachine {
    mode: DisplayMode,
    last_action: Instant,
    timeout: Duration,
}

impl ModeMachine {
    /// Start in [`DisplayMode::ClockDisplay`] with the action timer at `now`.
    pub fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            mode: DisplayMode::ClockDisplay,
            last_action: now,
            timeout,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn step(&mut self, now: Instant, presses: Presses, alarm_triggered: bool) -> Step {
        let previous = self.mode;
        let mut triggered = alarm_triggered;
        let mut acknowledge = false;
        let mut advance_alarm = false;

        if self.mode != DisplayMode::AlarmActive
            && now.saturating_duration_since(self.last_action) > self.timeout
        {
            self.go(DisplayMode::ClockDisplay);
        }

        if presses.mode {
            self.go(match self.mode {
                DisplayMode::ClockDisplay => DisplayMode::DateDisplay,
                _ => DisplayMode::ClockDisplay,
            });
            self.last_action = now;
        }

        if presses.alarm {
            match self.mode {
                DisplayMode::AlarmActive => {
                    acknowledge = true;
                    triggered = false;
                    self.go(DisplayMode::ClockDisplay);
                }
                DisplayMode::AlarmSetting => advance_alarm = true,
                _ => self.go(DisplayMode::AlarmSetting),
            }
            self.last_action = now;
        }

        if triggered && self.mode != DisplayMode::AlarmActive {
            self.go(DisplayMode::AlarmActive);
            self.last_action = now;
        }

        Step {
            previous,
            current: self.mode,
            acknowledge,
            advance_alarm,
        }
    }

    fn go(&mut self, next: DisplayMode) {
        if self.mode != next {
            info!("Mode {} -> {}", self.mode, next);
            self.mode = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(3000);

    fn ms(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    const MODE: Presses = Presses {
        mode: true,
        alarm: false,
    };
    const ALARM: Presses = Presses {
        mode: false,
        alarm: true,
    };
    const NONE: Presses = Presses {
        mode: false,
        alarm: false,
    };

    #[test]
    fn test_starts_on_clock() {
        let machine = ModeMachine::new(TIMEOUT, ms(0));
        assert_eq!(machine.mode(), DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_mode_button_toggles_clock_and_date() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        let step = machine.step(ms(100), MODE, false);
        assert!(step.changed());
        assert_eq!(step.current, DisplayMode::DateDisplay);

        let step = machine.step(ms(500), MODE, false);
        assert_eq!(step.previous, DisplayMode::DateDisplay);
        assert_eq!(step.current, DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_date_reverts_to_clock_after_timeout() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(1000), MODE, false);

        // exactly at the timeout the date is still shown
        assert_eq!(machine.step(ms(4000), NONE, false).current, DisplayMode::DateDisplay);
        assert_eq!(machine.step(ms(4100), NONE, false).current, DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_mode_press_restarts_timeout() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(1000), MODE, false);
        machine.step(ms(3500), MODE, false);
        machine.step(ms(3600), MODE, false);
        assert_eq!(machine.step(ms(6500), NONE, false).current, DisplayMode::DateDisplay);
    }

    #[test]
    fn test_alarm_button_enters_setting_then_advances() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        let step = machine.step(ms(100), ALARM, false);
        assert_eq!(step.current, DisplayMode::AlarmSetting);
        assert!(!step.advance_alarm);

        let step = machine.step(ms(400), ALARM, false);
        assert_eq!(step.current, DisplayMode::AlarmSetting);
        assert!(step.advance_alarm);
        assert!(!step.changed());
    }

    #[test]
    fn test_setting_times_out() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(100), ALARM, false);
        assert_eq!(machine.step(ms(3200), NONE, false).current, DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_mode_button_leaves_setting() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(100), ALARM, false);
        assert_eq!(machine.step(ms(300), MODE, false).current, DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_triggered_alarm_forces_active() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(100), MODE, false);
        let step = machine.step(ms(200), NONE, true);
        assert_eq!(step.previous, DisplayMode::DateDisplay);
        assert_eq!(step.current, DisplayMode::AlarmActive);
    }

    #[test]
    fn test_active_alarm_ignores_timeout() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(100), NONE, true);
        assert_eq!(machine.step(ms(60_000), NONE, true).current, DisplayMode::AlarmActive);
    }

    #[test]
    fn test_alarm_button_acknowledges() {
        let mut machine = ModeMachine::new(TIMEOUT, ms(0));
        machine.step(ms(100), NONE, true);

        let step = machine.step(ms(5000), ALARM, true);
        assert!(step.acknowledge);
        assert_eq!(step.current, DisplayMode::ClockDisplay);
    }

    #[test]
    fn test_debouncer_rejects_fast_repeats() {
        let mut button = Debouncer::new(Duration::from_millis(200));
        assert!(button.update(true, ms(0)));
        assert!(!button.update(false, ms(50)));
        assert!(!button.update(true, ms(100)));
        assert!(!button.update(false, ms(150)));
        assert!(button.update(true, ms(300)));
    }

    #[test]
    fn test_debouncer_needs_release_between_presses() {
        let mut button = Debouncer::new(Duration::from_millis(200));
        assert!(button.update(true, ms(0)));
        assert!(!button.update(true, ms(500)));
        assert!(!button.update(true, ms(1000)));
        assert!(!button.update(false, ms(1100)));
        assert!(button.update(true, ms(1200)));
    }
}
