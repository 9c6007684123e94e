//! Resizekit DOM helpers: the parts of drag/resize handling that have to
//! ask the host environment something.
//!
//! The host is reached through two traits, so any element tree can plug in:
//!
//! | Trait | Used by |
//! |-------|---------|
//! | [`Element`] | [`matches_selector_to_parent_elements`] |
//! | [`StyleHost`] | [`get_computed_size`] |
//!
//! [`headless::Document`] implements both in memory.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value`] | `HostValue`, `is_function` |
//! | [`element`] | `Element` |
//! | [`matching`] | `matches_selector_to_parent_elements`, lookup order |
//! | [`style`] | `StyleHost`, `ComputedStyle`, `get_computed_size` |
//! | [`number`] | `parse_float` |
//! | [`headless`] | in-memory `Document` |

pub mod element;
pub mod headless;
pub mod matching;
pub mod number;
pub mod style;
pub mod value;

pub use element::Element;
pub use matching::{
    find_matches_selector_method, matches_selector_to_parent_elements, MATCHES_SELECTOR_METHODS,
};
pub use number::parse_float;
pub use style::{get_computed_size, ComputedStyle, StyleHost};
pub use value::{is_function, HostObject, HostValue, SelectorPredicate};

pub use resizekit_engine::coords::Size;
