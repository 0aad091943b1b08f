use core::hint;

use bitfield::*;
use volatile::Volatile;

use no_std_io::{Result, Write};

/// Offset of the line status register, in registers.
const LSR_OFFSET: usize = 5;

/// Transmit side of a memory-mapped 16550 compatible UART.
///
/// The port must already be configured (baud rate, word length) by the
/// caller.
pub struct SerialPort<'a> {
    thr: &'a mut Volatile<u8>,
    lsr: &'a Volatile<u8>,
}

impl<'a> SerialPort<'a> {
    pub fn new(thr: &'a mut Volatile<u8>, lsr: &'a Volatile<u8>) -> SerialPort<'a> {
        SerialPort { thr, lsr }
    }

    /// `stride` is the distance in bytes between two registers, 1 on
    /// byte-spaced buses and 4 on most word-spaced ones.
    ///
    /// # Safety
    ///
    /// `base` must be the address of a mapped 16550 register block that
    /// nothing else writes to.
    pub unsafe fn from_base(base: usize, stride: usize) -> SerialPort<'static> {
        SerialPort {
            thr: &mut *(base as *mut Volatile<u8>),
            lsr: &*((base + LSR_OFFSET * stride) as *const Volatile<u8>),
        }
    }

    fn line_status(&self) -> LSR {
        LSR(self.lsr.read())
    }
}

impl<'a> Write for SerialPort<'a> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        while !self.line_status().transmit_holding_empty() {
            hint::spin_loop();
        }

        self.thr.write(byte);

        Ok(())
    }
}

bitfield! {
    struct LSR(u8);
    impl Debug;

    data_ready, _: 0;
    overrun_error, _: 1;
    parity_error, _: 2;
    framing_error, _: 3;
    break_interrupt, _: 4;
    transmit_holding_empty, _: 5;
    transmitter_empty, _: 6;
    fifo_error, _: 7;
}
