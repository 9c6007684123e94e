use resizekit_engine::coords::Vec2;

// ── Grid ──────────────────────────────────────────────────────────────────

/// Snap granularity: one cell is `cell_width` × `cell_height` logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Grid {
    #[inline]
    pub const fn new(cell_width: f64, cell_height: f64) -> Self {
        Self { cell_width, cell_height }
    }

    /// Square cells.
    #[inline]
    pub const fn square(cell: f64) -> Self {
        Self::new(cell, cell)
    }

    /// See [`snap_to_grid`].
    #[inline]
    #[must_use]
    pub fn snap(self, pending: Vec2, scale: Scale) -> Vec2 {
        snap_to_grid(self, pending.x, pending.y, scale)
    }
}

impl From<[f64; 2]> for Grid {
    #[inline]
    fn from([w, h]: [f64; 2]) -> Self {
        Grid::new(w, h)
    }
}

impl From<(f64, f64)> for Grid {
    #[inline]
    fn from((w, h): (f64, f64)) -> Self {
        Grid::new(w, h)
    }
}

// ── Scale ─────────────────────────────────────────────────────────────────

/// Zoom factor of the surface the pointer moves over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// One factor for both axes.
    Uniform(f64),
    /// Independent `(x, y)` factors.
    PerAxis(f64, f64),
}

impl Scale {
    /// Normalize to `(scale_x, scale_y)`.
    #[inline]
    pub fn axes(self) -> (f64, f64) {
        match self {
            Scale::Uniform(s) => (s, s),
            Scale::PerAxis(x, y) => (x, y),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Uniform(1.0)
    }
}

impl From<f64> for Scale {
    #[inline]
    fn from(s: f64) -> Self {
        Scale::Uniform(s)
    }
}

impl From<[f64; 2]> for Scale {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Scale::PerAxis(x, y)
    }
}

impl From<(f64, f64)> for Scale {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Scale::PerAxis(x, y)
    }
}

// ── rounding ──────────────────────────────────────────────────────────────

/// Round to the nearest integer, ties toward +∞ (`2.5 → 3`, `-2.5 → -2`).
///
/// This is not `f64::round`, which sends ties away from zero. `x - x.floor()`
/// is exact for every finite `f64`, so no `+ 0.5` precision loss near ties.
#[inline]
pub fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

// ── snap_to_grid ──────────────────────────────────────────────────────────

/// Snap a pending pointer position to the nearest grid intersection.
///
/// Each coordinate is divided by its axis scale, then by the cell size,
/// rounded with [`js_round`] and multiplied back by the cell size. The scale
/// is **not** reapplied: the result is in unscaled grid units, and callers
/// that need on-screen coordinates multiply by the scale themselves.
///
/// ```rust
/// use resizekit_ui::grid::{snap_to_grid, Scale};
///
/// let p = snap_to_grid([10.0, 10.0], 23.0, 47.0, Scale::default());
/// assert_eq!(p.to_array(), [20.0, 50.0]);
///
/// let p = snap_to_grid([10.0, 10.0], 23.0, 47.0, 2.0);
/// assert_eq!(p.to_array(), [10.0, 20.0]);
/// ```
pub fn snap_to_grid(
    grid: impl Into<Grid>,
    pending_x: f64,
    pending_y: f64,
    scale: impl Into<Scale>,
) -> Vec2 {
    let grid = grid.into();
    let (scale_x, scale_y) = scale.into().axes();

    let x = js_round(pending_x / scale_x / grid.cell_width) * grid.cell_width;
    let y = js_round(pending_y / scale_y / grid.cell_height) * grid.cell_height;

    Vec2::new(x, y)
}
