use super::Polarity;
use super::traits::Led;
use embassy_stm32::gpio::Output;

/// Status LED on a push-pull pin. The Blue Pill's PC13 LED is active low.
pub struct GpioLed<'d> {
    pin: Output<'d>,
    polarity: Polarity,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>, polarity: Polarity) -> Self {
        let mut led = Self { pin, polarity };
        led.off();
        led
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        match self.polarity {
            Polarity::ActiveLow => self.pin.set_low(),
            Polarity::ActiveHigh => self.pin.set_high(),
        }
    }

    fn off(&mut self) {
        match self.polarity {
            Polarity::ActiveLow => self.pin.set_high(),
            Polarity::ActiveHigh => self.pin.set_low(),
        }
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}
