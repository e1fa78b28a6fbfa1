use crate::calendar::CalendarDate;
use crate::error::ClockError;

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);
}

pub trait Button {
    fn is_pressed(&self) -> bool;
}

pub trait Buzzer {
    /// Start a square-wave tone; keeps sounding until [`Buzzer::stop`].
    fn start_tone(&mut self, frequency_hz: u32);
    fn stop(&mut self);
}

/// Line-oriented text output.
pub trait TextSink {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError>;
}

/// Battery-backed real-time clock.
pub trait Rtc {
    type Error;

    /// Probe the device. An error here means the clock is not fitted.
    fn begin(&mut self) -> Result<(), Self::Error>;
    fn now(&mut self) -> Result<CalendarDate, Self::Error>;
    /// True if the oscillator stopped since the time was last set.
    fn lost_power(&mut self) -> Result<bool, Self::Error>;
    fn adjust(&mut self, date: &CalendarDate) -> Result<(), Self::Error>;
}

/// Writes every line to both sinks; the first failure is reported.
impl<A: TextSink, B: TextSink> TextSink for (A, B) {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError> {
        let first = self.0.write_line(line);
        let second = self.1.write_line(line);
        first.and(second)
    }
}

/// An absent sink swallows output.
impl<S: TextSink> TextSink for Option<S> {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError> {
        match self {
            Some(sink) => sink.write_line(line),
            None => Ok(()),
        }
    }
}
