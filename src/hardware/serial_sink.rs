use super::traits::TextSink;
use crate::error::ClockError;
use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::UartTx;

/// Serial console, one CRLF-terminated line per write.
pub struct SerialSink<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> SerialSink<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'d> TextSink for SerialSink<'d> {
    fn write_line(&mut self, line: &str) -> Result<(), ClockError> {
        self.tx
            .blocking_write(line.as_bytes())
            .and_then(|_| self.tx.blocking_write(b"\r\n"))
            .map_err(|_| ClockError::Output)
    }
}
