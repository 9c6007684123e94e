//! Values read off host objects, and the callable check over them.
//!
//! A host exposes named properties whose shape is only known at runtime.
//! [`HostValue`] is that shape; [`is_function`] decides whether a looked-up
//! property can be invoked.

use std::fmt;

/// Class tag a host reports for callable objects that reached us as plain
/// objects (e.g. a function created in another realm).
pub const FUNCTION_CLASS_TAG: &str = "Function";

// ── callables ─────────────────────────────────────────────────────────────

/// A selector-matching method bound to the node it was read from.
pub trait SelectorPredicate {
    /// `true` if the bound node matches `selector`.
    fn matches(&self, selector: &str) -> bool;
}

impl<F> SelectorPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, selector: &str) -> bool {
        self(selector)
    }
}

/// An opaque host object.
pub trait HostObject {
    /// The object's internal class, as `Object.prototype.toString` would
    /// report it without the `[object …]` wrapper.
    fn class_tag(&self) -> &str;

    /// The invocable behind this object, for callables that are only
    /// recognizable by their class tag.
    fn as_predicate(&self) -> Option<&dyn SelectorPredicate> {
        None
    }
}

/// Plain object with a fixed class tag and nothing to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedObject<'a>(pub &'a str);

impl HostObject for TaggedObject<'_> {
    fn class_tag(&self) -> &str {
        self.0
    }
}

// ── HostValue ─────────────────────────────────────────────────────────────

/// A property value as seen through the host boundary.
pub enum HostValue<'a> {
    /// Property absent.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
    Object(Box<dyn HostObject + 'a>),
    /// Natively callable.
    Function(Box<dyn SelectorPredicate + 'a>),
}

impl<'a> HostValue<'a> {
    pub fn function(f: impl SelectorPredicate + 'a) -> Self {
        HostValue::Function(Box::new(f))
    }

    pub fn object(o: impl HostObject + 'a) -> Self {
        HostValue::Object(Box::new(o))
    }

    /// The invocable behind this value, whichever way it is exposed.
    pub fn as_predicate(&self) -> Option<&dyn SelectorPredicate> {
        match self {
            HostValue::Function(f) => Some(f.as_ref()),
            HostValue::Object(o) => o.as_predicate(),
            _ => None,
        }
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Object(_) => "object",
            HostValue::Function(_) => "function",
        }
    }
}

impl fmt::Debug for HostValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => f.write_str("Undefined"),
            HostValue::Null => f.write_str("Null"),
            HostValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            HostValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            HostValue::String(s) => f.debug_tuple("String").field(s).finish(),
            HostValue::Object(o) => write!(f, "Object([object {}])", o.class_tag()),
            HostValue::Function(_) => f.write_str("Function(..)"),
        }
    }
}

// ── is_function ───────────────────────────────────────────────────────────

/// `true` if `value` is callable.
///
/// Two checks: the value is a native callable, or it is an object whose
/// class tag is [`FUNCTION_CLASS_TAG`]. The second catches callables that
/// crossed a realm boundary and lost their native shape on the way.
pub fn is_function(value: &HostValue<'_>) -> bool {
    match value {
        HostValue::Function(_) => true,
        HostValue::Object(o) => o.class_tag() == FUNCTION_CLASS_TAG,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ForeignFn(fn(&str) -> bool);

    impl HostObject for ForeignFn {
        fn class_tag(&self) -> &str {
            FUNCTION_CLASS_TAG
        }
        fn as_predicate(&self) -> Option<&dyn SelectorPredicate> {
            Some(&self.0)
        }
    }

    fn is_handle(selector: &str) -> bool {
        selector == ".handle"
    }

    // ── is_function ───────────────────────────────────────────────────────

    #[test]
    fn native_callables_are_functions() {
        assert!(is_function(&HostValue::function(|_: &str| true)));

        let captured = String::from(".x");
        assert!(is_function(&HostValue::function(move |s: &str| s == captured)));
    }

    #[test]
    fn cross_realm_function_is_detected_by_tag() {
        assert!(is_function(&HostValue::object(ForeignFn(is_handle))));
        assert!(is_function(&HostValue::object(TaggedObject("Function"))));
    }

    #[test]
    fn non_callables_are_not_functions() {
        assert!(!is_function(&HostValue::Undefined));
        assert!(!is_function(&HostValue::Null));
        assert!(!is_function(&HostValue::Bool(true)));
        assert!(!is_function(&HostValue::Number(1.0)));
        assert!(!is_function(&HostValue::String("function")));
        assert!(!is_function(&HostValue::object(TaggedObject("Object"))));
    }

    #[test]
    fn tag_check_is_exact() {
        assert!(!is_function(&HostValue::object(TaggedObject("function"))));
        assert!(!is_function(&HostValue::object(TaggedObject("AsyncFunction"))));
    }

    // ── as_predicate ──────────────────────────────────────────────────────

    #[test]
    fn as_predicate_reaches_both_callable_shapes() {
        let native = HostValue::function(|s: &str| s == ".handle");
        assert!(native.as_predicate().is_some_and(|p| p.matches(".handle")));

        let foreign = HostValue::object(ForeignFn(is_handle));
        assert!(foreign.as_predicate().is_some_and(|p| p.matches(".handle")));
        assert!(foreign.as_predicate().is_some_and(|p| !p.matches(".other")));
    }

    #[test]
    fn tagged_function_without_body_has_no_predicate() {
        let v = HostValue::object(TaggedObject("Function"));
        assert!(is_function(&v));
        assert!(v.as_predicate().is_none());
        assert!(HostValue::Number(0.0).as_predicate().is_none());
    }

    #[test]
    fn debug_shows_class_tag() {
        let v = HostValue::object(TaggedObject("CSSStyleDeclaration"));
        assert_eq!(format!("{v:?}"), "Object([object CSSStyleDeclaration])");
        assert_eq!(v.type_name(), "object");
    }
}
