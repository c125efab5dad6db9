use rand::Rng;

/// Default perturbation bound, in percentage points
pub const DEFAULT_JITTER_POINTS: f64 = 0.5;

/// Uniform perturbation applied to fallback change percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterPolicy {
    points: f64,
}

impl JitterPolicy {
    /// Jitter uniformly within `[-points, +points]`.
    ///
    /// Negative or non-finite bounds disable jitter.
    pub fn new(points: f64) -> Self {
        let points = if points.is_finite() && points > 0.0 {
            points
        } else {
            0.0
        };
        Self { points }
    }

    pub fn none() -> Self {
        Self { points: 0.0 }
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.points == 0.0 {
            return 0.0;
        }
        rng.gen_range(-self.points..=self.points)
    }
}

impl Default for JitterPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER_POINTS)
    }
}
