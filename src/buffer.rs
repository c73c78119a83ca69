use core::fmt;
use core::str;

/// Size of the transient formatting buffer, matching the 64-byte transmit
/// buffer Arduino's `Serial` uses, so one formatted message never exceeds
/// what a single raw string write could carry.
pub const DEBUG_BUF_SIZE: usize = 64;

/// Stack-local formatting buffer with silent truncation.
///
/// Holds at most `DEBUG_BUF_SIZE - 1` bytes; the last slot stays free the way
/// a bounded C formatter reserves room for the terminator, so an over-length
/// message truncates to 63 characters. Writes past capacity are discarded
/// without error, and truncation never lands inside a multi-byte character.
pub struct FmtBuffer {
    buf: [u8; DEBUG_BUF_SIZE],
    len: usize,
}

impl FmtBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0; DEBUG_BUF_SIZE],
            len: 0,
        }
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        // Only byte slices copied out of `str` values land in `buf`, and
        // truncation happens on char boundaries, so the prefix is valid UTF-8.
        unsafe { str::from_utf8_unchecked(&self.buf[..self.len]) }
    }
}

impl Default for FmtBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for FmtBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = (DEBUG_BUF_SIZE - 1).saturating_sub(self.len);
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}
