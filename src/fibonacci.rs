//! The benchmarked function.

/// The input the benchmark binary always runs with.
pub const INPUT: u32 = 25;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_INPUT: u32 = 93;

/// Computes the nth Fibonacci number, `fibonacci(0) == 0` and `fibonacci(1) == 1`.
///
/// This is deliberately the unmemoized double recursion: it makes on the order of φⁿ calls and
/// reaches a stack depth of `n`. Inputs above [MAX_INPUT](constant.MAX_INPUT.html) overflow.
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Number of invocations `fibonacci(n)` performs, including the outermost one.
///
/// Follows `c(0) = c(1) = 1`, `c(n) = 1 + c(n - 1) + c(n - 2)`, evaluated bottom-up so it can be
/// reported next to a measurement without repeating it. Saturates at `u64::MAX`.
pub fn call_count(n: u32) -> u64 {
    let (mut prev, mut curr) = (1u64, 1u64);
    for _ in 1..n {
        let next = curr.saturating_add(prev).saturating_add(1);
        prev = curr;
        curr = next;
    }
    curr
}

#[cfg(test)]
mod test {
    use super::{call_count, fibonacci, INPUT, MAX_INPUT};
    use quickcheck::{quickcheck, TestResult};
    use std::cell::Cell;

    // Keeps the property tests fast; the call count grows like φⁿ.
    const PROPERTY_LIMIT: u32 = 22;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn known_values() {
        let expected = [(2, 1), (3, 2), (4, 3), (5, 5), (10, 55), (20, 6765), (25, 75025)];
        for &(n, value) in expected.iter() {
            assert_eq!(fibonacci(n), value, "fibonacci({})", n);
        }
    }

    #[test]
    fn benchmark_input() {
        assert_eq!(INPUT, 25);
        assert_eq!(fibonacci(INPUT), 75025);
    }

    // Bottom-up reference, only to probe the u64 range.
    fn checked_reference(n: u32) -> Option<u64> {
        if n == 0 {
            return Some(0);
        }
        let (mut prev, mut curr) = (0u64, 1u64);
        for _ in 1..n {
            let next = prev.checked_add(curr)?;
            prev = curr;
            curr = next;
        }
        Some(curr)
    }

    #[test]
    fn max_input_fits() {
        assert_eq!(checked_reference(INPUT), Some(fibonacci(INPUT)));
        assert_eq!(checked_reference(MAX_INPUT), Some(12_200_160_415_121_876_738));
        assert_eq!(checked_reference(MAX_INPUT + 1), None);
    }

    quickcheck! {
        fn recurrence(n: u8) -> TestResult {
            let n = 2 + u32::from(n) % (PROPERTY_LIMIT - 1);

            TestResult::from_bool(fibonacci(n) == fibonacci(n - 1) + fibonacci(n - 2))
        }
    }

    quickcheck! {
        fn non_decreasing(n: u8) -> TestResult {
            let n = 1 + u32::from(n) % PROPERTY_LIMIT;

            TestResult::from_bool(fibonacci(n) >= fibonacci(n - 1))
        }
    }

    fn counted_fibonacci(n: u32, calls: &Cell<u64>) -> u64 {
        calls.set(calls.get() + 1);
        match n {
            0 => 0,
            1 => 1,
            n => counted_fibonacci(n - 1, calls) + counted_fibonacci(n - 2, calls),
        }
    }

    #[test]
    fn call_count_matches_recursion() {
        for n in 0..=20 {
            let calls = Cell::new(0);
            counted_fibonacci(n, &calls);
            assert_eq!(call_count(n), calls.get(), "call_count({})", n);
        }
    }

    #[test]
    fn call_count_of_input() {
        // 2 * fib(26) - 1
        assert_eq!(call_count(INPUT), 242_785);
    }

    #[test]
    fn call_count_saturates() {
        assert_eq!(call_count(200), u64::MAX);
    }
}
