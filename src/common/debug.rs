use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QRSKETCH_DEBUG").is_ok())
}

/// Prints to stderr in debug builds when `QRSKETCH_DEBUG` is set.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && $crate::common::debug::debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;
