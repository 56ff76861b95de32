//! This module defines the traits used to plug a clock into the harness, and the
//! [WallTime](struct.WallTime.html) struct which is the default wall-clock measurement.

use crate::format;
use std::time::{Duration, Instant};

/// Trait providing functions to format measured values so that they can be displayed on the
/// command line. Values are passed in seconds, the unit every
/// [Measurement](trait.Measurement.html) converts to.
pub trait ValueFormatter {
    /// Format the value (with appropriate unit) and return it as a string.
    fn format_value(&self, seconds: f64) -> String;

    /// Format the number of function calls made per second while the value was measured.
    fn format_call_rate(&self, calls: u64, seconds: f64) -> String;
}

/// Trait for all types which define something the harness can measure.
///
/// `start` is called immediately before the benchmarked call to produce some intermediate value
/// (for example, the wall-clock time at that moment) and `end` is called immediately after it
/// returns, with the value returned by `start`.
pub trait Measurement {
    /// An intermediate value produced by `start` and consumed by `end`, such as the wall-clock
    /// time as of the `start` call.
    type Intermediate;

    /// The measured value, such as the elapsed wall-clock time between `start` and `end`.
    type Value;

    /// Called right before the benchmarked call.
    fn start(&self) -> Self::Intermediate;

    /// Called right after the benchmarked call returns.
    fn end(&self, i: Self::Intermediate) -> Self::Value;

    /// Converts the measured value to seconds. Must never be negative.
    fn to_seconds(&self, value: &Self::Value) -> f64;

    /// Return a trait-object reference to the value formatter for this measurement.
    fn formatter(&self) -> &dyn ValueFormatter;
}

pub(crate) struct DurationFormatter;
impl ValueFormatter for DurationFormatter {
    fn format_value(&self, seconds: f64) -> String {
        format::time(seconds * 1e9)
    }

    fn format_call_rate(&self, calls: u64, seconds: f64) -> String {
        if seconds > 0.0 {
            format::calls_per_second(calls as f64 / seconds)
        } else {
            String::from("     - calls/s")
        }
    }
}

/// `WallTime` is the default measurement. It reads the monotonic clock before and after the
/// call and reports the difference.
pub struct WallTime;
impl Measurement for WallTime {
    type Intermediate = Instant;
    type Value = Duration;

    fn start(&self) -> Self::Intermediate {
        Instant::now()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        i.elapsed()
    }
    fn to_seconds(&self, val: &Self::Value) -> f64 {
        val.as_secs_f64()
    }
    fn formatter(&self) -> &dyn ValueFormatter {
        &DurationFormatter
    }
}
