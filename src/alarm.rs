//! Single daily alarm
//!
//! The alarm fires when the RTC reading matches its hour and minute within
//! the first few seconds of that minute, so the poll loop does not need to
//! observe the exact second. Once fired it stays triggered until the user
//! acknowledges it.

use crate::calendar::CalendarDate;

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    hour: u8,
    minute: u8,
    enabled: bool,
    triggered: bool,
    /// Reading that fired the alarm, so one match window fires only once.
    fired_at: Option<CalendarDate>,
}

impl Alarm {
    /// A disabled alarm at 00:00.
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            enabled: false,
            triggered: false,
            fired_at: None,
        }
    }

    /// Arm the alarm for `hour:minute`, daily.
    ///
    /// Out-of-range values are clamped to 23:59.
    pub fn set(&mut self, hour: u8, minute: u8) {
        self.hour = hour.min(23);
        self.minute = minute.min(59);
        self.enabled = true;
        self.triggered = false;
        self.fired_at = None;
        info!("Alarm set to {=u8:02}:{=u8:02}", self.hour, self.minute);
    }

    /// Move the alarm forward by `minutes`, wrapping at midnight, and re-arm it.
    pub fn advance(&mut self, minutes: u8) {
        let total = (self.hour as u16 * 60 + self.minute as u16 + minutes as u16) % MINUTES_PER_DAY;
        self.set((total / 60) as u8, (total % 60) as u8);
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.triggered = false;
    }

    /// Compare against the current reading and fire on a match.
    ///
    /// Returns `true` only on the tick that sets the triggered flag.
    pub fn check(&mut self, now: &CalendarDate, window_secs: u8) -> bool {
        if !self.enabled || self.triggered {
            return false;
        }
        if now.hour != self.hour || now.minute != self.minute || now.second > window_secs {
            return false;
        }
        if self.fired_at.is_some_and(|fired| fired.same_minute(now)) {
            return false;
        }

        self.triggered = true;
        self.fired_at = Some(*now);
        warn!("Alarm triggered at {=u8:02}:{=u8:02}:{=u8:02}", now.hour, now.minute, now.second);
        true
    }

    /// Clear the triggered flag. Returns whether the alarm was ringing.
    pub fn acknowledge(&mut self) -> bool {
        let was_triggered = self.triggered;
        self.triggered = false;
        if was_triggered {
            info!("Alarm acknowledged");
        }
        was_triggered
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u8 = 5;

    fn at(day: u8, hour: u8, minute: u8, second: u8) -> CalendarDate {
        CalendarDate::from_ymd_hms(2025, 7, day, hour, minute, second).unwrap()
    }

    fn alarm_0730() -> Alarm {
        let mut alarm = Alarm::new();
        alarm.set(7, 30);
        alarm
    }

    #[test]
    fn test_set_arms_alarm() {
        let alarm = alarm_0730();
        assert!(alarm.enabled());
        assert!(!alarm.triggered());
        assert_eq!((alarm.hour(), alarm.minute()), (7, 30));
    }

    #[test]
    fn test_set_clamps_out_of_range() {
        let mut alarm = Alarm::new();
        alarm.set(25, 75);
        assert_eq!((alarm.hour(), alarm.minute()), (23, 59));
    }

    #[test]
    fn test_triggers_inside_window() {
        let mut alarm = alarm_0730();
        assert!(alarm.check(&at(20, 7, 30, 3), WINDOW));
        assert!(alarm.triggered());
    }

    #[test]
    fn test_window_edge() {
        let mut alarm = alarm_0730();
        assert!(alarm.check(&at(20, 7, 30, 5), WINDOW));

        let mut alarm = alarm_0730();
        assert!(!alarm.check(&at(20, 7, 30, 6), WINDOW));
    }

    #[test]
    fn test_outside_window_does_not_trigger() {
        let mut alarm = alarm_0730();
        assert!(!alarm.check(&at(20, 7, 30, 7), WINDOW));
        assert!(!alarm.check(&at(20, 7, 31, 0), WINDOW));
        assert!(!alarm.check(&at(20, 8, 30, 0), WINDOW));
        assert!(!alarm.triggered());
    }

    #[test]
    fn test_fires_once_while_triggered() {
        let mut alarm = alarm_0730();
        assert!(alarm.check(&at(20, 7, 30, 1), WINDOW));
        assert!(!alarm.check(&at(20, 7, 30, 2), WINDOW));
        assert!(!alarm.check(&at(20, 7, 30, 3), WINDOW));
        assert!(alarm.triggered());
    }

    #[test]
    fn test_acknowledged_alarm_stays_quiet_in_same_window() {
        let mut alarm = alarm_0730();
        assert!(alarm.check(&at(20, 7, 30, 0), WINDOW));
        assert!(alarm.acknowledge());
        assert!(!alarm.triggered());
        assert!(!alarm.check(&at(20, 7, 30, 2), WINDOW));
        assert!(!alarm.acknowledge());
    }

    #[test]
    fn test_fires_again_next_day() {
        let mut alarm = alarm_0730();
        assert!(alarm.check(&at(20, 7, 30, 0), WINDOW));
        alarm.acknowledge();
        assert!(alarm.check(&at(21, 7, 30, 0), WINDOW));
    }

    #[test]
    fn test_disabled_alarm_never_fires() {
        let mut alarm = alarm_0730();
        alarm.disable();
        assert!(!alarm.check(&at(20, 7, 30, 0), WINDOW));
        assert!(!Alarm::new().enabled());
    }

    #[test]
    fn test_advance_wraps_at_midnight() {
        let mut alarm = Alarm::new();
        alarm.set(23, 55);
        alarm.advance(10);
        assert_eq!((alarm.hour(), alarm.minute()), (0, 5));
        assert!(alarm.enabled());

        alarm.advance(60);
        assert_eq!((alarm.hour(), alarm.minute()), (1, 5));
    }
}
