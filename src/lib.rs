//! A microbenchmark of function-call overhead, built around the naive doubly recursive
//! Fibonacci function.
//!
//! The [Harness](harness/struct.Harness.html) times a single evaluation of `fibonacci(25)` with
//! the wall clock and reports the result:
//!
//! ```text
//! Fibonacci number of 25 is 75025.
//! Calculation took 0.000812345.
//! ```
//!
//! ## Features:
//! * Unmemoized recursion; the exponential call tree is the point of the exercise
//! * Pluggable clocks through the [Measurement](measurement/trait.Measurement.html) trait
//! * Human-readable or JSON output
//!
//! Setting the `FIB_BENCH_DEBUG` environment variable enables debug output on stderr.

#![warn(missing_docs)]
#![warn(bare_trait_objects)]

#[cfg(test)]
extern crate quickcheck;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

// Needs to be declared before other modules
// in order to be usable there.
#[macro_use]
mod macros_private;

pub mod cli;
pub mod error;
pub mod fibonacci;
mod format;
pub mod harness;
pub mod measurement;
mod report;

pub use crate::fibonacci::{fibonacci, INPUT, MAX_INPUT};
pub use crate::harness::{Harness, Outcome};

lazy_static! {
    static ref DEBUG_ENABLED: bool = std::env::var_os("FIB_BENCH_DEBUG").is_some();
}

fn debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// A function that is opaque to the optimizer, used to prevent the compiler from
/// optimizing away the benchmarked computation or folding its constant input.
///
/// This variant is stable-compatible, but it may cause some performance overhead
/// or fail to prevent code from being eliminated.
pub fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}
