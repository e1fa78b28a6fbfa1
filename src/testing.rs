//! In-memory stand-ins for the hardware traits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::calendar::CalendarDate;
use crate::error::ClockError;
use crate::hardware::traits::{Button, Buzzer, Led, Rtc, TextSink};

#[derive(Debug)]
pub struct FakeRtc {
    pub present: bool,
    pub lost_power: bool,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub now: CalendarDate,
    pub adjusted: Option<CalendarDate>,
}

impl FakeRtc {
    pub fn at(now: CalendarDate) -> Self {
        Self {
            present: true,
            lost_power: false,
            fail_reads: false,
            fail_writes: false,
            now,
            adjusted: None,
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            ..Self::at(CalendarDate::from_ymd_hms(2000, 1, 1, 0, 0, 0).unwrap())
        }
    }
}

impl Rtc for FakeRtc {
    type Error = ClockError;

    fn begin(&mut self) -> Result<(), ClockError> {
        if self.present {
            Ok(())
        } else {
            Err(ClockError::RtcNotFound)
        }
    }

    fn now(&mut self) -> Result<CalendarDate, ClockError> {
        if self.fail_reads {
            Err(ClockError::RtcAccess)
        } else {
            Ok(self.now)
        }
    }

    fn lost_power(&mut self) -> Result<bool, ClockError> {
        if self.fail_reads {
            Err(ClockError::RtcAccess)
        } else {
            Ok(self.lost_power)
        }
    }

    fn adjust(&mut self, date: &CalendarDate) -> Result<(), ClockError> {
        if self.fail_writes {
            return Err(ClockError::RtcAccess);
        }
        self.now = *date;
        self.adjusted = Some(*date);
        self.lost_power = false;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeLed {
    pub lit: bool,
}

impl Led for FakeLed {
    fn on(&mut self) {
        self.lit = true;
    }

    fn off(&mut self) {
        self.lit = false;
    }

    fn toggle(&mut self) {
        self.lit = !self.lit;
    }
}

#[derive(Debug, Default)]
pub struct FakeBuzzer {
    pub sounding: Option<u32>,
    pub starts: u32,
}

impl Buzzer for FakeBuzzer {
    fn start_tone(&mut self, frequency_hz: u32) {
        self.sounding = Some(frequency_hz);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.sounding = None;
    }
}

#[derive(Debug, Default)]
pub struct FakeButton {
    pub pressed: bool,
}

impl Button for FakeButton {
    fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Clones share the same line buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl TextSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// Fails every write.
#[derive(Debug, Default)]
pub struct BrokenSink;

impl TextSink for BrokenSink {
    fn write_line(&mut self, _line: &str) -> Result<(), ClockError> {
        Err(ClockError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_sink_writes_both_and_reports_failure() {
        let sink = RecordingSink::default();
        let mut pair = (sink.clone(), BrokenSink);
        assert_eq!(pair.write_line("12:00:00"), Err(ClockError::Output));
        assert_eq!(sink.lines(), ["12:00:00"]);
    }

    #[test]
    fn test_absent_sink_accepts_output() {
        let mut sink: Option<RecordingSink> = None;
        assert_eq!(sink.write_line("12:00:00"), Ok(()));

        let recorder = RecordingSink::default();
        let mut sink = Some(recorder.clone());
        sink.write_line("12:00:01").unwrap();
        assert_eq!(recorder.lines(), ["12:00:01"]);
    }
}
