//! Coordinate and size types shared across the interaction helpers.
//!
//! Canonical space:
//! - Logical (CSS) pixels, `f64` like the host's numbers
//! - Origin top-left
//! - +X right, +Y down

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
