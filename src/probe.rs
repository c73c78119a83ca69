use embedded_hal::digital::InputPin;

/// How many times the probe samples the RX line before deciding nothing is
/// attached. The count is a heuristic against floating-pin noise, not a
/// protocol requirement; a single low read is not trusted on its own.
pub const PROBE_SAMPLES: usize = 100;

/// Decide whether a serial console adapter is attached by sampling the UART
/// receive line in a tight loop.
///
/// An attached USB-serial adapter drives RX high while idle; a line that
/// reads low on every single sample is unconnected (or pulled down), meaning
/// nobody is listening. One high reading anywhere in the run is enough to
/// keep output on. A read error also counts as "present": when in doubt,
/// keep the debug output alive.
///
/// The pin must already be configured as a (floating) digital input.
pub fn adapter_present(rx: &mut impl InputPin) -> bool {
    let mut all_low = true;
    for _ in 0..PROBE_SAMPLES {
        all_low &= matches!(rx.is_low(), Ok(true));
    }
    !all_low
}
