//! Resizekit engine crate.
//!
//! This crate owns the pieces shared by the higher layers: coordinate types
//! and logger setup.

pub mod coords;
pub mod logging;
