//! Alarm clock context and poll tick
//!
//! [`AlarmClock`] owns every piece of mutable state (mode, alarm, debouncers,
//! blink and tone timers) together with the devices it drives. The firmware
//! creates it once with [`AlarmClock::start`] and calls [`AlarmClock::tick`]
//! from its poll loop.
//!
//! Per tick:
//! 1. read the RTC (a failed read skips the tick)
//! 2. check the alarm against the reading
//! 3. sample and debounce both buttons
//! 4. advance the [`ModeMachine`]
//! 5. run the action of the current mode

use embassy_time::Instant;

use crate::alarm::Alarm;
use crate::calendar::build_timestamp;
use crate::config::ClockConfig;
use crate::display::{format_alarm, format_date, format_time};
use crate::error::ClockError;
use crate::hardware::traits::{Button, Buzzer, Led, Rtc, TextSink};
use crate::mode::{Debouncer, DisplayMode, ModeMachine, Presses};

/// The peripherals the clock drives.
pub struct Devices<R, L, Z, S, B> {
    pub rtc: R,
    pub led: L,
    pub buzzer: Z,
    pub sink: S,
    pub mode_button: B,
    pub alarm_button: B,
}

pub struct AlarmClock<R, L, Z, S, B> {
    devices: Devices<R, L, Z, S, B>,
    config: ClockConfig,
    alarm: Alarm,
    machine: ModeMachine,
    mode_debounce: Debouncer,
    alarm_debounce: Debouncer,
    indicator_lit: bool,
    last_blink: Option<Instant>,
    tone_until: Option<Instant>,
}

impl<R, L, Z, S, B> AlarmClock<R, L, Z, S, B>
where
    R: Rtc,
    L: Led,
    Z: Buzzer,
    S: TextSink,
    B: Button,
{
    /// Bring up the RTC and arm the default alarm.
    ///
    /// - RTC missing: reports it on the text sink and returns
    ///   [`ClockError::RtcNotFound`]; the caller must stop here.
    /// - RTC lost power: reseeds it with the firmware build time.
    /// - RTC status or reseed fails: reported on the text sink, start-up
    ///   continues and ticks skip until readings succeed.
    pub fn start(
        config: ClockConfig,
        mut devices: Devices<R, L, Z, S, B>,
        now: Instant,
    ) -> Result<Self, ClockError> {
        if devices.rtc.begin().is_err() {
            error!("RTC not found");
            emit(&mut devices.sink, "RTC nicht gefunden!").ok();
            return Err(ClockError::RtcNotFound);
        }

        match devices.rtc.lost_power() {
            Ok(true) => reseed(&mut devices),
            Ok(false) => {}
            Err(_) => {
                warn!("RTC power status unreadable");
                emit(&mut devices.sink, "RTC Fehler!").ok();
            }
        }

        let mut alarm = Alarm::new();
        alarm.set(config.default_alarm.hour, config.default_alarm.minute);

        devices.led.off();
        devices.buzzer.stop();
        info!("Alarm clock started");

        Ok(Self {
            devices,
            config,
            alarm,
            machine: ModeMachine::new(config.display_timeout, now),
            mode_debounce: Debouncer::new(config.debounce),
            alarm_debounce: Debouncer::new(config.debounce),
            indicator_lit: false,
            last_blink: None,
            tone_until: None,
        })
    }

    /// One pass of the poll loop. Returns the mode that was acted on.
    pub fn tick(&mut self, now: Instant) -> Result<DisplayMode, ClockError> {
        let reading = match self.devices.rtc.now() {
            Ok(reading) => reading,
            Err(_) => {
                warn!("RTC read failed, skipping tick");
                return Err(ClockError::RtcAccess);
            }
        };

        self.alarm.check(&reading, self.config.alarm_window_secs);

        let presses = Presses {
            mode: self
                .mode_debounce
                .update(self.devices.mode_button.is_pressed(), now),
            alarm: self
                .alarm_debounce
                .update(self.devices.alarm_button.is_pressed(), now),
        };

        let step = self.machine.step(now, presses, self.alarm.triggered());
        if step.acknowledge {
            self.alarm.acknowledge();
        }
        if step.advance_alarm {
            self.alarm.advance(self.config.alarm_step_minutes);
        }
        if step.previous == DisplayMode::AlarmActive && step.current != DisplayMode::AlarmActive {
            self.silence();
        }

        self.expire_tone(now);

        match step.current {
            DisplayMode::ClockDisplay => emit(&mut self.devices.sink, &format_time(&reading))?,
            DisplayMode::DateDisplay => emit(&mut self.devices.sink, &format_date(&reading))?,
            DisplayMode::AlarmSetting => {
                emit(&mut self.devices.sink, &format_alarm(&self.alarm))?
            }
            DisplayMode::AlarmActive => self.ring(now),
        }

        Ok(step.current)
    }

    /// Re-arm the alarm for `hour:minute`.
    pub fn set_alarm(&mut self, hour: u8, minute: u8) {
        self.alarm.set(hour, minute);
    }

    pub fn mode(&self) -> DisplayMode {
        self.machine.mode()
    }

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn devices(&self) -> &Devices<R, L, Z, S, B> {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> &mut Devices<R, L, Z, S, B> {
        &mut self.devices
    }

    /// Blink the LED; each time it lights up, sound a tone of `tone_duration`.
    fn ring(&mut self, now: Instant) {
        let blink_due = self.last_blink.is_none_or(|last| {
            now.saturating_duration_since(last) >= self.config.blink_half_period
        });
        if !blink_due {
            return;
        }

        self.devices.led.toggle();
        self.indicator_lit = !self.indicator_lit;
        self.last_blink = Some(now);
        if self.indicator_lit {
            self.devices.buzzer.start_tone(self.config.tone_frequency_hz);
            self.tone_until = Some(now + self.config.tone_duration);
        }
    }

    fn expire_tone(&mut self, now: Instant) {
        if self.tone_until.is_some_and(|until| now >= until) {
            self.devices.buzzer.stop();
            self.tone_until = None;
        }
    }

    fn silence(&mut self) {
        self.devices.led.off();
        self.devices.buzzer.stop();
        self.indicator_lit = false;
        self.last_blink = None;
        self.tone_until = None;
    }
}

fn reseed<R: Rtc, L, Z, S: TextSink, B>(devices: &mut Devices<R, L, Z, S, B>) {
    let seed = build_timestamp();
    if devices.rtc.adjust(&seed).is_err() {
        warn!("RTC lost power and could not be reseeded");
        emit(&mut devices.sink, "RTC Fehler!").ok();
        return;
    }
    warn!(
        "RTC lost power, set to build time {=u16}-{=u8:02}-{=u8:02} {=u8:02}:{=u8:02}:{=u8:02}",
        seed.year,
        seed.month,
        seed.day,
        seed.hour,
        seed.minute,
        seed.second
    );
    emit(&mut devices.sink, "RTC Zeit gesetzt!").ok();
}

fn emit<S: TextSink>(sink: &mut S, line: &str) -> Result<(), ClockError> {
    sink.write_line(line).inspect_err(|_| {
        warn!("Text output failed");
    })
}
