//! Text lines shown by the clock
//!
//! Fixed-width renderings built into `heapless` strings:
//! - time: `07:05:09`
//! - date: `Mo KW05 03.02.2025` (weekday, ISO week, day.month.year)
//! - alarm: `Alarm 07:30 an`

use core::fmt::Write;
use heapless::String;

use crate::alarm::Alarm;
use crate::calendar::{CalendarDate, iso_week};

/// Weekday abbreviations indexed by the RTC weekday (Sunday = 0).
pub const WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

/// Longest line any formatter produces.
pub const LINE_CAPACITY: usize = 20;

pub type Line = String<LINE_CAPACITY>;

pub fn format_time(now: &CalendarDate) -> Line {
    let mut buf = Line::new();
    // 8 characters, always within capacity
    let _ = write!(
        &mut buf,
        "{:02}:{:02}:{:02}",
        now.hour, now.minute, now.second
    );
    buf
}

pub fn format_date(now: &CalendarDate) -> Line {
    let mut buf = Line::new();
    let _ = write!(
        &mut buf,
        "{} KW{:02} {:02}.{:02}.{:04}",
        WEEKDAYS[(now.weekday % 7) as usize],
        iso_week(now),
        now.day,
        now.month,
        now.year
    );
    buf
}

pub fn format_alarm(alarm: &Alarm) -> Line {
    let mut buf = Line::new();
    let _ = write!(
        &mut buf,
        "Alarm {:02}:{:02} {}",
        alarm.hour(),
        alarm.minute(),
        if alarm.enabled() { "an" } else { "aus" }
    );
    buf
}
