//! Hand-rolled hardware stand-ins for the unit tests.

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};

use crate::sink::ByteSink;

/// Transport that records everything it is handed.
pub struct RecordingSink {
    pub bytes: Vec<u8>,
    pub byte_writes: usize,
    pub str_writes: usize,
    pub flushes: usize,
    /// Count reported back from `write_byte`; 1 unless a test overrides it.
    pub accept: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            byte_writes: 0,
            str_writes: 0,
            flushes: 0,
            accept: 1,
        }
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.bytes).expect("transport received invalid UTF-8")
    }

    pub fn total_calls(&self) -> usize {
        self.byte_writes + self.str_writes + self.flushes
    }
}

impl ByteSink for RecordingSink {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.byte_writes += 1;
        self.bytes.push(byte);
        self.accept
    }

    fn write_str(&mut self, s: &str) {
        self.str_writes += 1;
        self.bytes.extend_from_slice(s.as_bytes());
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Pin that replays a scripted level sequence, repeating the last entry.
pub struct ScriptedPin {
    levels: Vec<bool>,
    pub reads: usize,
    failing: bool,
}

impl ScriptedPin {
    pub fn held(level: bool) -> Self {
        Self {
            levels: vec![level],
            reads: 0,
            failing: false,
        }
    }

    pub fn sequence(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            reads: 0,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            levels: vec![false],
            reads: 0,
            failing: true,
        }
    }
}

#[derive(Debug)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for ScriptedPin {
    type Error = PinFault;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        if self.failing {
            return Err(PinFault);
        }
        let i = self.reads.min(self.levels.len() - 1);
        self.reads += 1;
        Ok(self.levels[i])
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        self.is_high().map(|level| !level)
    }
}
