/// Number of Fibonacci terms that fit in a `u64`.
pub const FIBONACCI_LEN: usize = 94;

/// The Fibonacci sequence `F0 = 0, F1 = 1, Fn = Fn-1 + Fn-2`, up to `F93`.
///
/// Built at compile time and shared read-only by every search.
pub const FIBONACCI: [u64; FIBONACCI_LEN] = build();

const fn build() -> [u64; FIBONACCI_LEN] {
    let mut table = [0u64; FIBONACCI_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < FIBONACCI_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// Returns `Fn`, or `None` if `n` is past the end of the table.
#[must_use]
pub fn fibonacci(n: usize) -> Option<u64> {
    FIBONACCI.get(n).copied()
}

/// Returns the smallest `n` such that `Fn >= ratio`.
///
/// Returns `None` if `ratio` is not finite or exceeds every tabulated term.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fibonacci_index_at_least(ratio: f64) -> Option<usize> {
    if ratio.is_nan() || ratio == f64::INFINITY {
        return None;
    }
    FIBONACCI.iter().position(|&term| term as f64 >= ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_starts_with_zero_one() {
        assert_eq!(&FIBONACCI[..10], &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn last_term_fits_in_u64() {
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
    }

    #[test]
    fn index_at_least_is_minimal() {
        assert_eq!(fibonacci_index_at_least(0.0), Some(0));
        assert_eq!(fibonacci_index_at_least(1.0), Some(1));
        assert_eq!(fibonacci_index_at_least(20.0), Some(8));
        assert_eq!(fibonacci_index_at_least(21.0), Some(8));
        assert_eq!(fibonacci_index_at_least(21.5), Some(9));
    }

    #[test]
    fn index_at_least_rejects_unreachable_ratios() {
        assert_eq!(fibonacci_index_at_least(f64::NAN), None);
        assert_eq!(fibonacci_index_at_least(f64::INFINITY), None);
        assert_eq!(fibonacci_index_at_least(1e30), None);
    }
}
