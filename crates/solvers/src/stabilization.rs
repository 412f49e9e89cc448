/// Tracks the two-consecutive-step stabilization rule.
///
/// A step is small when both `‖x(k+1) − xk‖` and `|f(x(k+1)) − f(xk)|` are
/// below `epsilon2`. The iteration has stabilized once two consecutive
/// steps are small.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Stabilization {
    previous_small: bool,
}

impl Stabilization {
    /// Returns true if a step of this size is small.
    pub(crate) fn is_small(diff_norm: f64, abs_f_diff: f64, epsilon2: f64) -> bool {
        diff_norm < epsilon2 && abs_f_diff < epsilon2
    }

    /// Records the current step and returns true if it and the previous
    /// step were both small.
    pub(crate) fn record(&mut self, small: bool) -> bool {
        let stabilized = small && self.previous_small;
        self.previous_small = small;
        stabilized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_two_consecutive_small_steps() {
        let mut rule = Stabilization::default();
        assert!(!rule.record(true));
        assert!(!rule.record(false));
        assert!(!rule.record(true));
        assert!(rule.record(true));
    }

    #[test]
    fn small_means_both_below_tolerance() {
        assert!(Stabilization::is_small(0.1, 0.1, 0.2));
        assert!(!Stabilization::is_small(0.1, 0.2, 0.2));
        assert!(!Stabilization::is_small(0.3, 0.1, 0.2));
    }
}
