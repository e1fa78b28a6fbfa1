//! DS3231 over I2C as the clock's [`Rtc`].
//!
//! "Lost power" is the DS3231 oscillator-stop flag. It is cleared after the
//! time has been rewritten.

use super::traits::Rtc;
use crate::calendar::CalendarDate;
use crate::error::ClockError;
use ds323x::{DateTimeAccess, Ds323x, ic::DS3231, interface::I2cInterface};
use embedded_hal::i2c::I2c;

pub struct Ds3231Rtc<I2C> {
    rtc: Ds323x<I2cInterface<I2C>, DS3231>,
}

impl<I2C, E> Ds3231Rtc<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            rtc: Ds323x::new_ds3231(i2c),
        }
    }
}

impl<I2C, E> Rtc for Ds3231Rtc<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = ClockError;

    fn begin(&mut self) -> Result<(), ClockError> {
        let running = self.rtc.running().map_err(|_| ClockError::RtcNotFound)?;
        if !running {
            warn!("DS3231 oscillator disabled, enabling");
            self.rtc.enable().map_err(|_| ClockError::RtcNotFound)?;
        }
        Ok(())
    }

    fn now(&mut self) -> Result<CalendarDate, ClockError> {
        self.rtc
            .datetime()
            .map(CalendarDate::from)
            .map_err(|_| ClockError::RtcAccess)
    }

    fn lost_power(&mut self) -> Result<bool, ClockError> {
        self.rtc.has_been_stopped().map_err(|_| ClockError::RtcAccess)
    }

    fn adjust(&mut self, date: &CalendarDate) -> Result<(), ClockError> {
        let datetime = date.to_naive().ok_or(ClockError::RtcAccess)?;
        self.rtc
            .set_datetime(&datetime)
            .map_err(|_| ClockError::RtcAccess)?;
        self.rtc
            .clear_has_been_stopped_flag()
            .map_err(|_| ClockError::RtcAccess)
    }
}
