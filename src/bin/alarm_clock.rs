//! STM32F103 Blue Pill Alarm Clock with DS3231 RTC
//! =============================================================================================
//!
//! This firmware implements a clock with one daily alarm using:
//! - DS3231 real-time clock via I2C2
//! - SSD1306 OLED display (128x64) via I2C1, optional
//! - Serial console on USART1 (115200 8N1)
//! - Piezo buzzer on TIM2 channel 1
//! - Two push buttons (mode, alarm) with pull-up
//!
//! Hardware Connections:
//!   DS3231 -> Blue Pill
//!      SDA  -> PB11
//!      SCL  -> PB10
//!
//!   OLED Display -> Blue Pill
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   USART1 TX -> PA9
//!   Buzzer    -> PA0 (TIM2_CH1)
//!   Mode  key -> PB12 (to GND)
//!   Alarm key -> PB13 (to GND)
//!   Keys are read active-low to match the pull-ups, not active-high.
//!   Keys wired to VCC need `GpioButton::active_high` instead.
//!   Status LED: onboard PC13
//!
//! Behaviour:
//! 1. Shows the time every 100 ms, the mode key toggles to the date line
//! 2. The date falls back to the time after 3 s without a key press
//! 3. Alarm key opens the alarm setting, further presses move the alarm by 10 min
//! 4. At the alarm time the LED blinks and the buzzer beeps until the alarm key is pressed
//! 5. Without a DS3231 the firmware reports it and stops; other RTC faults are
//!    reported and the clock keeps polling

#![no_std]
#![no_main]

use alarm_clock::{
    AlarmClock, ClockConfig,
    clock::Devices,
    hardware::{
        Polarity, ds3231_rtc::Ds3231Rtc, gpio_button::GpioButton, gpio_led::GpioLed,
        oled_sink::OledSink, pwm_buzzer::PwmBuzzer, serial_sink::SerialSink,
    },
};
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputType, Pull, Speed},
    i2c::{self, ErrorInterruptHandler, EventInterruptHandler},
    peripherals,
    time::Hertz,
    timer::{
        Channel,
        simple_pwm::{PwmPin, SimplePwm},
    },
    usart::{self, UartTx},
};
use embassy_time::{Instant, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Initialize peripherals with default configuration
    let p = embassy_stm32::init(Default::default());
    info!("Alarm clock booting");

    // Bind I2C interrupt handlers for the OLED bus
    bind_interrupts!(struct Irqs {
        I2C1_EV => EventInterruptHandler<peripherals::I2C1>;
        I2C1_ER => ErrorInterruptHandler<peripherals::I2C1>;
    });

    // OLED on I2C1 at 400kHz
    let oled_i2c = i2c::I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(400),
        Default::default(),
    );
    let oled = match OledSink::new(oled_i2c) {
        Ok(oled) => Some(oled),
        Err(e) => {
            warn!("OLED unavailable: {}, serial output only", e);
            None
        }
    };

    // DS3231 on I2C2 at 100kHz
    let rtc_i2c = i2c::I2c::new_blocking(
        p.I2C2,
        p.PB10,
        p.PB11,
        Hertz::khz(100),
        Default::default(),
    );

    // Serial console
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = 115_200;
    let tx = UartTx::new_blocking(p.USART1, p.PA9, uart_config).unwrap();

    // Buzzer PWM, frequency is set per tone
    let pwm = SimplePwm::new(
        p.TIM2,
        Some(PwmPin::new_ch1(p.PA0, OutputType::PushPull)),
        None,
        None,
        None,
        Hertz::khz(1),
        Default::default(),
    );

    let devices = Devices {
        rtc: Ds3231Rtc::new(rtc_i2c),
        led: GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), Polarity::ActiveLow),
        buzzer: PwmBuzzer::new(pwm, Channel::Ch1),
        sink: (SerialSink::new(tx), oled),
        mode_button: GpioButton::new(Input::new(p.PB12, Pull::Up)),
        alarm_button: GpioButton::new(Input::new(p.PB13, Pull::Up)),
    };

    let mut clock = match AlarmClock::start(ClockConfig::default(), devices, Instant::now()) {
        Ok(clock) => clock,
        Err(e) => {
            error!("Start-up failed: {}, halting", e);
            loop {
                Timer::after_secs(3600).await;
            }
        }
    };

    // Poll loop
    let mut ticker = Ticker::every(clock.config().poll_interval);
    loop {
        if let Err(e) = clock.tick(Instant::now()) {
            warn!("Tick failed: {}", e);
        }
        ticker.next().await;
    }
}
