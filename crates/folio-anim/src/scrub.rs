//! Scrub smoothing: the scrubbed playhead trails the raw scroll progress.

/// Time constants that fit inside one scrub lag; after `lag` seconds the
/// playhead has closed about 95% of the gap.
const TIME_CONSTANTS_PER_LAG: f32 = 3.0;

/// Gap below which the playhead snaps to the target.
const SNAP_EPSILON: f32 = 1e-4;

/// Exponential smoothing of a progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag: f32,
    current: Option<f32>,
}

impl Scrub {
    /// Smoothing that takes roughly `lag_seconds` to catch up. Zero or negative disables lag.
    pub fn new(lag_seconds: f32) -> Self {
        Self {
            lag: lag_seconds.max(0.0),
            current: None,
        }
    }

    /// No smoothing: the playhead follows scroll exactly.
    pub fn immediate() -> Self {
        Self::new(0.0)
    }

    /// Configured lag in seconds.
    pub fn lag(&self) -> f32 {
        self.lag
    }

    /// Smoothed value, `None` before the first step.
    pub fn current(&self) -> Option<f32> {
        self.current
    }

    /// Advance by `dt` seconds toward `target` and return the smoothed value.
    ///
    /// The first step snaps to the target so a freshly mounted view starts at
    /// the page's current scroll position.
    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        let next = match self.current {
            None => target,
            Some(_) if self.lag <= 0.0 => target,
            Some(current) => {
                let rate = TIME_CONSTANTS_PER_LAG / self.lag;
                let alpha = 1.0 - (-dt.max(0.0) * rate).exp();
                let value = current + (target - current) * alpha;
                if (target - value).abs() < SNAP_EPSILON {
                    target
                } else {
                    value
                }
            }
        };
        self.current = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_snaps() {
        let mut scrub = Scrub::new(1.5);
        assert_eq!(scrub.step(0.4, 1.0 / 60.0), 0.4);
    }

    #[test]
    fn test_trails_then_converges() {
        let mut scrub = Scrub::new(1.5);
        scrub.step(0.0, 0.0);
        let first = scrub.step(1.0, 1.0 / 60.0);
        assert!(first > 0.0 && first < 0.1, "should trail, got {first}");

        let mut value = first;
        let mut last = first;
        for _ in 0..(90 - 1) {
            value = scrub.step(1.0, 1.0 / 60.0);
            assert!(value >= last);
            last = value;
        }
        // 1.5 s elapsed: about 95% of the way there.
        assert!(value > 0.93 && value < 1.0, "after one lag: {value}");

        for _ in 0..600 {
            value = scrub.step(1.0, 1.0 / 60.0);
        }
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_zero_lag_follows_exactly() {
        let mut scrub = Scrub::immediate();
        scrub.step(0.0, 0.016);
        assert_eq!(scrub.step(0.75, 0.016), 0.75);
    }

    #[test]
    fn test_zero_dt_holds() {
        let mut scrub = Scrub::new(1.5);
        scrub.step(0.2, 0.016);
        assert_eq!(scrub.step(0.9, 0.0), 0.2);
    }
}
