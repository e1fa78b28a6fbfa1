//! Hardware seams of the clock.
//!
//! [`traits`] is always available so the core can be driven by fakes. The
//! embassy-stm32 and driver implementations need the `board` feature.

pub mod traits;

#[cfg(feature = "board")]
pub mod ds3231_rtc;
#[cfg(feature = "board")]
pub mod gpio_button;
#[cfg(feature = "board")]
pub mod gpio_led;
#[cfg(feature = "board")]
pub mod oled_sink;
#[cfg(feature = "board")]
pub mod pwm_buzzer;
#[cfg(feature = "board")]
pub mod serial_sink;

/// Electrical level that means "active" for a pin.
#[cfg(feature = "board")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Polarity {
    /// Pull-up wiring: pressed / lit when the pin is low.
    ActiveLow,
    ActiveHigh,
}
