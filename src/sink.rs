/// A character-output transport that can accept one byte at a time.
///
/// Implementors only need [`write_byte`](ByteSink::write_byte); string output
/// is derived from it byte by byte, and `flush` defaults to doing nothing for
/// transports with no transmit queue.
pub trait ByteSink {
    /// Write a single byte, returning the number of bytes accepted.
    ///
    /// A healthy transport accepts the byte and returns 1.
    fn write_byte(&mut self, byte: u8) -> usize;

    /// Write a string by streaming its bytes through `write_byte`.
    fn write_str(&mut self, s: &str) {
        for b in s.as_bytes() {
            self.write_byte(*b);
        }
    }

    /// Block until pending output has been sent.
    fn flush(&mut self) {}
}
