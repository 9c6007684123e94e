/// Rendered width/height pair in logical pixels.
///
/// Values come from host measurements, so either component may be `NaN`
/// when the host reports something that is not a length (e.g. `"auto"`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.width, self.height]
    }
}

impl From<[f64; 2]> for Size {
    #[inline]
    fn from([width, height]: [f64; 2]) -> Self {
        Size::new(width, height)
    }
}

impl From<Size> for [f64; 2] {
    #[inline]
    fn from(s: Size) -> Self {
        s.to_array()
    }
}
