//! Reading rendered sizes from the host's computed style.

use std::borrow::Cow;
use std::collections::HashMap;

use resizekit_engine::coords::Size;

use crate::number::parse_float;

/// Resolved style of one element, as the host reports it.
pub trait ComputedStyle {
    /// Textual value of the CSS property `name` (e.g. `"123.5px"`).
    /// Properties the host does not know come back as `""`.
    fn property_value(&self, name: &str) -> Cow<'_, str>;
}

impl<T: ComputedStyle + ?Sized> ComputedStyle for &T {
    fn property_value(&self, name: &str) -> Cow<'_, str> {
        (**self).property_value(name)
    }
}

impl ComputedStyle for HashMap<String, String> {
    fn property_value(&self, name: &str) -> Cow<'_, str> {
        self.get(name).map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

/// The rendering environment that owns layout and the style cascade.
///
/// State behind it is external and mutable: two calls for the same element
/// may disagree if layout changed in between.
pub trait StyleHost<E: ?Sized> {
    type Style<'s>: ComputedStyle
    where
        Self: 's;
    type Error;

    /// Fully resolved (post-cascade, post-layout) style of `element`.
    fn computed_style<'s>(&'s self, element: &E) -> Result<Self::Style<'s>, Self::Error>;
}

/// Rendered `[width, height]` of `element`.
///
/// Fractional pixels are kept. A value that does not start with a number
/// (`"auto"`, `""`) becomes `NaN` in that component rather than an error,
/// so callers must be ready for `NaN`. Only a host that cannot compute
/// style for `element` at all produces `Err`, and its error is returned
/// as is.
pub fn get_computed_size<E, H>(host: &H, element: &E) -> Result<Size, H::Error>
where
    E: ?Sized,
    H: StyleHost<E> + ?Sized,
{
    let style = host.computed_style(element)?;

    let width = parse_float(&style.property_value("width"));
    let height = parse_float(&style.property_value("height"));

    if width.is_nan() || height.is_nan() {
        log::trace!("computed size is not numeric: {width} x {height}");
    }

    Ok(Size::new(width, height))
}
