use super::Polarity;
use super::traits::Button;
use embassy_stm32::gpio::Input;

/// Push button sampled once per tick; debouncing happens in the core.
pub struct GpioButton<'d> {
    pin: Input<'d>,
    polarity: Polarity,
}

impl<'d> GpioButton<'d> {
    /// Button to ground with the internal pull-up enabled.
    pub fn new(pin: Input<'d>) -> Self {
        Self {
            pin,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Button to VCC with a pull-down.
    pub fn active_high(pin: Input<'d>) -> Self {
        Self {
            pin,
            polarity: Polarity::ActiveHigh,
        }
    }
}

impl<'d> Button for GpioButton<'d> {
    fn is_pressed(&self) -> bool {
        match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        }
    }
}
