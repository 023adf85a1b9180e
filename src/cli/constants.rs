//! Process-wide display level, mirroring the `DISPLAYLEVEL`-style global
//! verbosity switch the teacher's CLI uses.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
