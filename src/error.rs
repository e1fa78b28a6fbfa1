use core::fmt;

/// Errors surfaced by the clock core.
///
/// Only [`ClockError::RtcNotFound`] is fatal: it is returned from
/// [`AlarmClock::start`](crate::AlarmClock::start) and the firmware halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// RTC did not answer during start-up.
    RtcNotFound,
    /// RTC answered at start-up but a later read or write failed.
    RtcAccess,
    /// Text output could not be written.
    Output,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::RtcNotFound => f.write_str("RTC not found"),
            ClockError::RtcAccess => f.write_str("RTC access failed"),
            ClockError::Output => f.write_str("text output failed"),
        }
    }
}
