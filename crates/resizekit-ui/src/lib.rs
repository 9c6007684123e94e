//! Resizekit UI: the arithmetic behind dragging and resizing.
//!
//! Every function here is pure. Free functions mirror the call shapes a
//! component uses while tracking a pointer; the small wrapper types bundle
//! the same math for callers that keep the configuration around.
//!
//! ```rust
//! use resizekit_ui::prelude::*;
//!
//! let snapped = snap_to_grid(Grid::new(10.0, 10.0), 23.0, 47.0, 1.0);
//! assert_eq!(snapped, Vec2::new(20.0, 50.0));
//!
//! let width = restrict_to_bounds(compute_width(100.0, 10.0, 10.0), Some(0.0), Some(60.0));
//! assert_eq!(width, 60.0);
//! ```

pub mod bounds;
pub mod grid;
pub mod insets;

pub use bounds::{restrict_to_bounds, Bounds};
pub use grid::{js_round, snap_to_grid, Grid, Scale};
pub use insets::{compute_height, compute_width, Insets};

/// Everything a drag/resize handler needs in one import.
pub mod prelude {
    pub use crate::bounds::{restrict_to_bounds, Bounds};
    pub use crate::grid::{js_round, snap_to_grid, Grid, Scale};
    pub use crate::insets::{compute_height, compute_width, Insets};

    pub use resizekit_engine::coords::{Size, Vec2};
}
