//! SSD1306 128x64 OLED as a text sink.
//!
//! Each line replaces the previous one. Short lines (the time) use the large
//! font, longer ones (date, alarm) the small one; both centred.

use super::traits::TextSink;
use crate::error::ClockError;
use embassy_stm32::{i2c::I2c, mode::Async};
use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10, ascii::FONT_10X20},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

const WIDTH: i32 = 128;
const LARGE_CHAR_WIDTH: i32 = 10;
const SMALL_CHAR_WIDTH: i32 = 6;

type Display<'d> = Ssd1306<
    I2CInterface<I2c<'d, Async>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct OledSink<'d> {
    display: Display<'d>,
    large: MonoTextStyle<'static, BinaryColor>,
    small: MonoTextStyle<'static, BinaryColor>,
}

impl<'d> OledSink<'d> {
    pub fn new(i2c: I2c<'d, Async>) -> Result<Self, ClockError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| ClockError::Output)?;

        let large = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(BinaryColor::On)
            .build();
        let small = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();

        Ok(Self {
            display,
            large,
            small,
        })
    }
}

impl<'d> TextSink for OledSink<'d> {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError> {
        self.display.clear_buffer();

        let chars = line.len() as i32;
        let (style, x, y) = if chars * LARGE_CHAR_WIDTH <= WIDTH {
            (self.large, (WIDTH - chars * LARGE_CHAR_WIDTH) / 2, 22)
        } else {
            (self.small, ((WIDTH - chars * SMALL_CHAR_WIDTH) / 2).max(0), 27)
        };

        Text::with_baseline(line, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| ClockError::Output)?;
        self.display.flush().map_err(|_| ClockError::Output)
    }
}
