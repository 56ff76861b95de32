pub fn time(ns: f64) -> String {
    if ns < 1.0 {
        format!("{:>6} ps", short(ns * 1e3))
    } else if ns < 10f64.powi(3) {
        format!("{:>6} ns", short(ns))
    } else if ns < 10f64.powi(6) {
        format!("{:>6} µs", short(ns / 1e3))
    } else if ns < 10f64.powi(9) {
        format!("{:>6} ms", short(ns / 1e6))
    } else {
        format!("{:>6} s", short(ns / 1e9))
    }
}

pub fn short(n: f64) -> String {
    if n < 10.0 {
        format!("{:.4}", n)
    } else if n < 100.0 {
        format!("{:.3}", n)
    } else if n < 1000.0 {
        format!("{:.2}", n)
    } else if n < 10000.0 {
        format!("{:.1}", n)
    } else {
        format!("{:.0}", n)
    }
}

pub fn calls_per_second(calls_per_second: f64) -> String {
    if calls_per_second < 1000.0 {
        format!("{:>6}  calls/s", short(calls_per_second))
    } else if calls_per_second < 1000.0 * 1000.0 {
        format!("{:>6} Kcalls/s", short(calls_per_second / 1000.0))
    } else if calls_per_second < 1000.0 * 1000.0 * 1000.0 {
        format!(
            "{:>6} Mcalls/s",
            short(calls_per_second / (1000.0 * 1000.0))
        )
    } else {
        format!(
            "{:>6} Gcalls/s",
            short(calls_per_second / (1000.0 * 1000.0 * 1000.0))
        )
    }
}

/// Format a call count with thousands separators.
// Based on the corresponding libtest functionality, see
// https://github.com/rust-lang/rust/blob/557359f92512ca88b62a602ebda291f17a953002/library/test/src/bench.rs#L87-L109
pub fn calls(mut n: u64) -> String {
    let mut output = String::new();
    let mut trailing = false;
    for &pow in &[18, 15, 12, 9, 6, 3, 0] {
        let base = 10_u64.pow(pow);
        if pow == 0 || trailing || n / base != 0 {
            if !trailing {
                output.push_str(&(n / base).to_string());
            } else {
                output.push_str(&format!("{:03}", n / base));
            }
            if pow != 0 {
                output.push(',');
            }
            trailing = true;
        }
        n %= base;
    }

    output.push_str(" calls");
    output
}
