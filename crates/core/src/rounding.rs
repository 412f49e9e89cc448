//! Rounding helpers for presenting step traces.

/// Rounds `value` to `digits` decimal places.
///
/// ```
/// use optlab_core::rounding::round_to_fixed;
///
/// assert_eq!(round_to_fixed(1.23456, 2), 1.23);
/// ```
#[must_use]
pub fn round_to_fixed(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Rounds `value` to `figures` significant figures.
///
/// Zero and non-finite values are returned unchanged, and `figures` below one
/// is treated as one.
///
/// ```
/// use optlab_core::rounding::round_to_significant;
///
/// assert_eq!(round_to_significant(123.456789, 4), 123.5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn round_to_significant(value: f64, figures: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let figures = figures.max(1) as i32;
    let exponent = value.abs().log10().floor() as i32;
    let shift = figures - 1 - exponent;

    // Dividing by a power of ten is exact where multiplying by its reciprocal is not.
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (value / factor).round() * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fixed_rounding() {
        assert_relative_eq!(round_to_fixed(2.718_281_8, 0), 3.0);
        assert_relative_eq!(round_to_fixed(2.718_281_8, 3), 2.718);
        assert_relative_eq!(round_to_fixed(-0.126, 2), -0.13);
    }

    #[test]
    fn significant_figures_of_large_number() {
        let value = 123.456_789;
        assert_relative_eq!(round_to_significant(value, 1), 100.0);
        assert_relative_eq!(round_to_significant(value, 2), 120.0);
        assert_relative_eq!(round_to_significant(value, 3), 123.0);
        assert_relative_eq!(round_to_significant(value, 4), 123.5);
        assert_relative_eq!(round_to_significant(value, 5), 123.46);
    }

    #[test]
    fn significant_figures_of_small_number() {
        let value = 0.000_456_789;
        assert_relative_eq!(round_to_significant(value, 1), 0.0005);
        assert_relative_eq!(round_to_significant(value, 2), 0.000_46);
        assert_relative_eq!(round_to_significant(value, 3), 0.000_457);
        assert_relative_eq!(round_to_significant(value, 4), 0.000_456_8);
        assert_relative_eq!(round_to_significant(value, 5), 0.000_456_79);
        assert_relative_eq!(round_to_significant(value, 10), 0.000_456_789);
    }

    #[test]
    fn zero_and_non_finite_pass_through() {
        assert_eq!(round_to_significant(0.0, 3), 0.0);
        assert!(round_to_significant(f64::NAN, 3).is_nan());
        assert_eq!(round_to_significant(f64::INFINITY, 3), f64::INFINITY);
    }
}
