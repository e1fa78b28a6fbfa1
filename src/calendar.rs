//! Calendar math for the date line
//!
//! Day-of-year and ISO 8601 week numbers computed from the fields the RTC
//! reports. Weekdays follow the RTC convention (Sunday = 0 .. Saturday = 6);
//! [`iso_weekday`] converts to Monday = 1 .. Sunday = 7 where ISO rules need it.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Fallback when the build timestamp is unusable: the DS3231 epoch.
const FALLBACK_YEAR: u16 = 2000;

/// One RTC reading. Immutable snapshot taken once per poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDate {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-6, Sunday = 0
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarDate {
    /// Build a date from its civil fields, deriving the weekday.
    ///
    /// Returns `None` for dates that do not exist (e.g. 2023-02-29).
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)?
            .and_hms_opt(hour as u32, minute as u32, second as u32)
            .map(Self::from)
    }

    /// Convert back to chrono for writing into the RTC.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?.and_hms_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        )
    }

    /// True when both readings fall into the same calendar minute.
    pub fn same_minute(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
            && self.minute == other.minute
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            weekday: dt.weekday().num_days_from_sunday() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}

/// Gregorian leap year rule.
///
/// - 2000: leap (divisible by 400)
/// - 1900: not leap (divisible by 100 but not 400)
/// - 2024: leap
/// - 2023: not leap
pub fn is_leap_year(year: u16) -> bool {
    (year.is_multiple_of(4) && !year.is_multiple_of(100)) || year.is_multiple_of(400)
}

pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Ordinal day within the year, 1..=366.
pub fn day_of_year(date: &CalendarDate) -> u16 {
    (1..date.month)
        .map(|m| days_in_month(date.year, m) as u16)
        .sum::<u16>()
        + date.day as u16
}

/// RTC weekday (Sunday = 0) to ISO weekday (Monday = 1 .. Sunday = 7).
pub fn iso_weekday(weekday: u8) -> u8 {
    match weekday % 7 {
        0 => 7,
        wd => wd,
    }
}

/// ISO 8601 week number, 1..=53.
///
/// `week = (ordinal - iso_weekday + 10) / 7`, then:
/// - week 0 belongs to the last week of the previous year, evaluated on its
///   December 31st,
/// - week 53 becomes week 1 of the next year unless at least four days of
///   that Monday-based week are still in this year.
pub fn iso_week(date: &CalendarDate) -> u8 {
    week_in_year(
        date.year as i32,
        day_of_year(date) as i32,
        date.day as i32,
        iso_weekday(date.weekday) as i32,
    )
}

fn week_in_year(year: i32, ordinal: i32, day: i32, weekday: i32) -> u8 {
    let week = (ordinal - weekday + 10) / 7;

    if week < 1 {
        // `ordinal` days back from today is Dec 31 of the previous year.
        let previous = year - 1;
        let weekday = (weekday - 1 - ordinal).rem_euclid(7) + 1;
        return week_in_year(previous, days_in_year(previous), 31, weekday);
    }

    if week > 52 && 31 - day + weekday < 4 {
        return 1;
    }

    week as u8
}

/// Year length in the proleptic Gregorian calendar, also before year 1.
fn days_in_year(year: i32) -> i32 {
    let leap = (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0;
    if leap { 366 } else { 365 }
}

/// Compile time of the firmware, used to reseed an RTC that lost power.
pub fn build_timestamp() -> CalendarDate {
    option_env!("ALARM_CLOCK_BUILD_UNIX")
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| CalendarDate::from(dt.naive_utc()))
        .unwrap_or(CalendarDate {
            year: FALLBACK_YEAR,
            month: 1,
            day: 1,
            weekday: 6,
            hour: 0,
            minute: 0,
            second: 0,
        })
}
