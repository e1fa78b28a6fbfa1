use super::traits::Buzzer;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;
use embassy_stm32::timer::{Channel, GeneralInstance4Channel};

/// Passive piezo driven by one timer channel at 50 % duty.
pub struct PwmBuzzer<'d, T: GeneralInstance4Channel> {
    pwm: SimplePwm<'d, T>,
    channel: Channel,
}

impl<'d, T: GeneralInstance4Channel> PwmBuzzer<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        let mut buzzer = Self { pwm, channel };
        buzzer.stop();
        buzzer
    }
}

impl<'d, T: GeneralInstance4Channel> Buzzer for PwmBuzzer<'d, T> {
    fn start_tone(&mut self, frequency_hz: u32) {
        self.pwm.set_frequency(Hertz(frequency_hz));
        let mut ch = self.pwm.channel(self.channel);
        ch.set_duty_cycle_fraction(1, 2);
        ch.enable();
    }

    fn stop(&mut self) {
        self.pwm.channel(self.channel).disable();
    }
}
