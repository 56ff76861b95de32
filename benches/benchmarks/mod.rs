pub mod harness_overhead;
pub mod recursion;
