//! Private macros used for logging.

/// Prints a debug line to stderr when `FIB_BENCH_DEBUG` is set.
///
/// Stdout carries the benchmark report, so nothing here may ever go there.
macro_rules! info {
    ($($arg:tt)*) => (
        if $crate::debug_enabled() {
            eprintln!("fib-bench DEBUG: {}", &format!($($arg)*));
        }
    )
}

/// Prints an error line to stderr.
macro_rules! error {
    ($($arg:tt)*) => (
        eprintln!("fib-bench ERROR: {}", &format!($($arg)*))
    )
}
