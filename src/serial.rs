use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::InputPin;

use crate::buffer::FmtBuffer;
use crate::probe::adapter_present;
use crate::sink::ByteSink;

/// Decorator over a UART transmitter that goes silent when no serial console
/// is attached.
///
/// Construction probes the UART receive line once; if nothing is driving it
/// high, every subsequent output call is a cheap no-op that still reports
/// success. The decision is permanent for the life of the value - there is no
/// re-probing and no way to toggle the mode.
///
/// `DebugSerial` is itself a [`ByteSink`], and implements both
/// [`core::fmt::Write`] and [`ufmt::uWrite`], so `write!`, `uwrite!` and
/// friends work against it directly.
pub struct DebugSerial<'a, T: ByteSink> {
    transport: &'a mut T,
    disabled: bool,
}

impl<'a, T: ByteSink> DebugSerial<'a, T> {
    /// Wrap `transport`, probing `rx` to decide whether output stays on.
    ///
    /// `rx` is the UART receive pin, already configured as a floating input;
    /// it is only borrowed for the duration of the probe.
    pub fn new(transport: &'a mut T, rx: &mut impl InputPin) -> Self {
        let disabled = !adapter_present(rx);
        Self {
            transport,
            disabled,
        }
    }

    /// Wrap `transport` with output unconditionally on, skipping the probe.
    pub fn assume_present(transport: &'a mut T) -> Self {
        Self {
            transport,
            disabled: false,
        }
    }

    /// Whether the probe found a console and output is passing through.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Write pre-captured format arguments, bounded by the 64-byte debug
    /// buffer.
    ///
    /// When output is suppressed the formatting work is skipped entirely.
    /// Nothing is reported back; a message longer than the buffer is cut
    /// short without notice. Build the arguments at the call site with
    /// `core::format_args!`.
    pub fn print(&mut self, args: fmt::Arguments<'_>) {
        if self.disabled {
            return;
        }
        let mut buf = FmtBuffer::new();
        let _ = fmt::write(&mut buf, args);
        self.transport.write_str(buf.as_str());
    }
}

impl<T: ByteSink> ByteSink for DebugSerial<'_, T> {
    /// Forward one byte, or swallow it while still reporting one byte
    /// accepted, so layered writers keep their accounting straight.
    fn write_byte(&mut self, byte: u8) -> usize {
        if self.disabled {
            1
        } else {
            self.transport.write_byte(byte)
        }
    }

    fn write_str(&mut self, s: &str) {
        if !self.disabled {
            self.transport.write_str(s);
        }
    }

    /// Flush is forwarded even when suppressed; with nothing ever queued the
    /// transport treats it as a no-op.
    fn flush(&mut self) {
        self.transport.flush();
    }
}

impl<T: ByteSink> fmt::Write for DebugSerial<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        ByteSink::write_str(self, s);
        Ok(())
    }
}

impl<T: ByteSink> ufmt::uWrite for DebugSerial<'_, T> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        ByteSink::write_str(self, s);
        Ok(())
    }
}
