//! Debug output to a UART that shuts up when nobody is listening.
//!
//! [`DebugSerial`] wraps an existing serial transmitter and, at construction,
//! samples the UART receive line to tell whether a serial console (an FTDI
//! adapter, usually) is plugged in. An attached adapter holds RX high while
//! idle; if the line reads low across the whole probe, every later output
//! call is silently dropped - while still reporting success - so the same
//! firmware image logs when a console is attached and stays quiet in the
//! field, with no feature flags and no per-call-site checks.
//!
//! ```
//! use debug_serial::{ByteSink, DebugSerial};
//!
//! struct Uart;
//!
//! impl ByteSink for Uart {
//!     fn write_byte(&mut self, _byte: u8) -> usize {
//!         // push the byte into the UART data register
//!         1
//!     }
//! }
//!
//! let mut uart = Uart;
//! // On hardware, use DebugSerial::new with the RX pin as a floating input.
//! let mut debug = DebugSerial::assume_present(&mut uart);
//! debug.print(format_args!("boot #{}", 3));
//! ```
//!
//! For code far from any sink handle, [`install_debug_hook`] plus the
//! [`debug!`]/[`debugln!`] macros give a firmware-wide print that defaults
//! to a no-op.

#![cfg_attr(not(test), no_std)]

mod buffer;
mod global;
mod probe;
mod serial;
mod sink;
#[cfg(test)]
mod testutil;

pub use buffer::{DEBUG_BUF_SIZE, FmtBuffer};
pub use global::{DebugHook, debug_print, install_debug_hook};
pub use probe::{PROBE_SAMPLES, adapter_present};
pub use serial::DebugSerial;
pub use sink::ByteSink;
