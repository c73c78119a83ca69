//! Firmware-wide debug printing without plumbing a sink through every call
//! site.
//!
//! The hook starts out as a no-op, so `debug!` can be sprinkled through code
//! that runs before (or without) a console ever being set up. Firmware that
//! wants the output installs a hook once during startup, typically one that
//! forwards to a `DebugSerial` held in a `static`.

use core::fmt;

/// Signature of the process-wide debug output hook.
pub type DebugHook = fn(fmt::Arguments<'_>);

fn silent(_: fmt::Arguments<'_>) {}

// Single-owner model: installed once during startup, before any other
// execution context reads it. See `install_debug_hook`.
static mut HOOK: DebugHook = silent;
static mut INSTALLED: bool = false;

/// Route [`debug_print`] (and the `debug!` macros) to `hook`.
///
/// Only the first installation takes effect; later calls are ignored. Call
/// this from the startup path, before interrupts or other contexts can reach
/// [`debug_print`] - the hook is deliberately unsynchronized.
pub fn install_debug_hook(hook: DebugHook) {
    unsafe {
        if !INSTALLED {
            INSTALLED = true;
            HOOK = hook;
        }
    }
}

/// Hand `args` to the installed hook, or drop them if none was ever
/// installed.
pub fn debug_print(args: fmt::Arguments<'_>) {
    let hook = unsafe { HOOK };
    hook(args);
}

/// Print through the installed debug hook, `write!`-style.
///
/// Harmless no-op until a hook is installed.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::debug_print(core::format_args!($($arg)*))
    };
}

/// Like [`debug!`], with a trailing newline.
#[macro_export]
macro_rules! debugln {
    () => {
        $crate::debug_print(core::format_args!("\n"))
    };
    ($($arg:tt)*) => {{
        $crate::debug_print(core::format_args!($($arg)*));
        $crate::debug_print(core::format_args!("\n"));
    }};
}
