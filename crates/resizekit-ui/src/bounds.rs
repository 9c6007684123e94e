// ── restrict_to_bounds ────────────────────────────────────────────────────

/// Clamp `value` into `[min, max]`, where a missing bound is unbounded.
///
/// `min` is tested first and wins outright, so inverted bounds
/// (`min > max`) return `min` for anything below it. A `NaN` value fails
/// both comparisons and is returned unchanged.
#[inline]
pub fn restrict_to_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    if let Some(min) = min {
        if value < min {
            return min;
        }
    }

    if let Some(max) = max {
        if value > max {
            return max;
        }
    }

    value
}

// ── Bounds ────────────────────────────────────────────────────────────────

/// Optional lower/upper limits for one dragged or resized dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    #[inline]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// No limit on either side.
    #[inline]
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    #[inline]
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    #[inline]
    pub const fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    #[inline]
    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// See [`restrict_to_bounds`].
    #[inline]
    #[must_use]
    pub fn restrict(self, value: f64) -> f64 {
        restrict_to_bounds(value, self.min, self.max)
    }
}
