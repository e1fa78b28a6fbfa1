//! Alarm clock core for the STM32F103 Blue Pill
//! =============================================================================================
//!
//! Platform-agnostic logic of a DS3231-backed alarm clock: calendar math,
//! a single alarm, text formatting of the time/date lines and the display
//! mode state machine. Hardware is reached only through the traits in
//! [`hardware::traits`], so everything here runs under `cargo test` on the host.
//!
//! The `board` feature adds the embassy-stm32 implementations of those traits
//! and the `alarm_clock` firmware binary.

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod alarm;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod hardware;
pub mod mode;

#[cfg(test)]
mod testing;

pub use alarm::Alarm;
pub use calendar::CalendarDate;
pub use clock::AlarmClock;
pub use config::ClockConfig;
pub use error::ClockError;
pub use mode::DisplayMode;
