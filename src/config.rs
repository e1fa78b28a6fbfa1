//! Tunables of the clock
//!
//! Every timing and default the poll loop uses. The firmware runs with
//! [`ClockConfig::default`]; tests shorten or override individual fields.

use embassy_time::Duration;

/// Alarm time armed at power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmTime {
    pub hour: u8,
    pub minute: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Inactivity after which the display falls back to the clock.
    pub display_timeout: Duration,
    /// Minimum spacing between two accepted presses of the same button.
    pub debounce: Duration,
    /// LED toggle period while the alarm rings.
    pub blink_half_period: Duration,
    pub tone_frequency_hz: u32,
    pub tone_duration: Duration,
    /// Pause between two ticks of the poll loop.
    pub poll_interval: Duration,
    /// Seconds after the full minute during which the alarm may still fire.
    pub alarm_window_secs: u8,
    pub default_alarm: AlarmTime,
    /// Minutes added per alarm-button press in the setting mode.
    pub alarm_step_minutes: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            display_timeout: Duration::from_millis(3000),
            debounce: Duration::from_millis(200),
            blink_half_period: Duration::from_millis(500),
            tone_frequency_hz: 1000,
            tone_duration: Duration::from_millis(500),
            poll_interval: Duration::from_millis(100),
            alarm_window_secs: 5,
            default_alarm: AlarmTime {
                hour: 7,
                minute: 30,
            },
            alarm_step_minutes: 10,
        }
    }
}
