use resizekit_engine::coords::Size;

/// Width left inside a parent once `left` and `right` offsets are taken out.
///
/// Not clamped: offsets larger than the parent give a negative width.
#[inline]
pub fn compute_width(parent_width: f64, left: f64, right: f64) -> f64 {
    parent_width - left - right
}

/// Height left inside a parent once `top` and `bottom` offsets are taken out.
///
/// Not clamped, same as [`compute_width`].
#[inline]
pub fn compute_height(parent_height: f64, top: f64, bottom: f64) -> f64 {
    parent_height - top - bottom
}

// ── Insets ────────────────────────────────────────────────────────────────

/// Offsets of a box from its parent's edges, on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    #[inline]
    pub fn inner_width(self, parent_width: f64) -> f64 {
        compute_width(parent_width, self.left, self.right)
    }

    #[inline]
    pub fn inner_height(self, parent_height: f64) -> f64 {
        compute_height(parent_height, self.top, self.bottom)
    }

    /// Both axes at once; components may be negative.
    #[inline]
    pub fn inner_size(self, parent: Size) -> Size {
        Size::new(self.inner_width(parent.width), self.inner_height(parent.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── compute_width / compute_height ────────────────────────────────────

    #[test]
    fn width_subtracts_both_sides() {
        assert_eq!(compute_width(100.0, 10.0, 10.0), 80.0);
        assert_eq!(compute_width(100.0, 0.0, 25.5), 74.5);
    }

    #[test]
    fn width_may_go_negative() {
        assert_eq!(compute_width(100.0, 60.0, 60.0), -20.0);
    }

    #[test]
    fn height_subtracts_both_sides() {
        assert_eq!(compute_height(50.0, 5.0, 15.0), 30.0);
        assert_eq!(compute_height(10.0, 20.0, 0.0), -10.0);
    }

    // ── Insets ────────────────────────────────────────────────────────────

    #[test]
    fn inner_size_asymmetric() {
        let insets = Insets { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        let inner = insets.inner_size(Size::new(100.0, 60.0));
        assert_eq!(inner.width, 84.0);  // 100 - 6 - 10
        assert_eq!(inner.height, 48.0); // 60 - 4 - 8
    }

    #[test]
    fn inner_size_is_not_clamped() {
        let inner = Insets::all(20.0).inner_size(Size::new(10.0, 10.0));
        assert_eq!(inner, Size::new(-30.0, -30.0));
    }

    #[test]
    fn symmetric_axes() {
        let e = Insets::symmetric(4.0, 8.0);
        assert_eq!(e.inner_width(100.0), 84.0);
        assert_eq!(e.inner_height(100.0), 92.0);
    }
}
