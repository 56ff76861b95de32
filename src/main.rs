use fib_bench::error::log_error;
use fib_bench::Harness;
use std::process;

fn main() {
    let harness = Harness::default().configure_from_args();
    if let Err(e) = harness.run_to_stdout() {
        log_error(&e);
        process::exit(1);
    }
}
