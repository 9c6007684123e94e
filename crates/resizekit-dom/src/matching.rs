//! Ancestor selector matching.
//!
//! Used by drag handles to decide whether a pointer-down landed on (or
//! inside) a handle or a cancel region of the dragged element.

use crate::element::Element;
use crate::value::is_function;

/// Selector-matching method names, in lookup order: the standard name first,
/// then the vendor-prefixed variants older hosts shipped instead.
pub const MATCHES_SELECTOR_METHODS: [&str; 5] = [
    "matches",
    "webkitMatchesSelector",
    "mozMatchesSelector",
    "msMatchesSelector",
    "oMatchesSelector",
];

/// First name in [`MATCHES_SELECTOR_METHODS`] that `element` exposes as a
/// callable.
pub fn find_matches_selector_method<E: Element>(element: &E) -> Option<&'static str> {
    MATCHES_SELECTOR_METHODS
        .iter()
        .copied()
        .find(|name| is_function(&element.property(name)))
}

/// Walks from `el` up through its ancestors and reports whether any node,
/// up to and including `base_node`, matches `selector`.
///
/// The matching method is looked up once, on `el`, and reused for every
/// ancestor. Each node is tested before the `base_node` check, so the base
/// node's own match always counts. Returns `false` when `el` exposes no
/// matching method, when `base_node` is reached without a match, and when
/// the walk leaves the tree without meeting `base_node`.
///
/// An ancestor that does not expose that method as an invocable is
/// treated as not matching and the walk continues.
pub fn matches_selector_to_parent_elements<E: Element>(
    el: &E,
    selector: &str,
    base_node: &E,
) -> bool {
    let Some(method) = find_matches_selector_method(el) else {
        log::debug!("element exposes no selector-matching method; treating as no match");
        return false;
    };
    log::trace!("matching {selector:?} via `{method}`");

    let mut node = el.clone();
    loop {
        let matched = {
            let value = node.property(method);
            match value.as_predicate() {
                Some(predicate) => predicate.matches(selector),
                None => {
                    log::trace!("`{method}` is {} on this ancestor; skipping it", value.type_name());
                    false
                }
            }
        };
        if matched {
            return true;
        }

        if node.is_same_node(base_node) {
            return false;
        }

        match node.parent_node() {
            Some(parent) => node = parent,
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{HostValue, TaggedObject};

    /// Nodes in a flat chain: node `i`'s parent is `i - 1`, node 0 is the root.
    #[derive(Clone)]
    struct Chain<'a> {
        classes: &'a [&'a str],
        exposes: &'a [&'a str],
        at: usize,
    }

    impl Element for Chain<'_> {
        fn parent_node(&self) -> Option<Self> {
            self.at.checked_sub(1).map(|at| Chain { at, ..self.clone() })
        }

        fn property(&self, name: &str) -> HostValue<'_> {
            if !self.exposes.iter().any(|exposed| *exposed == name) {
                return HostValue::Undefined;
            }
            let class = self.classes[self.at];
            HostValue::function(move |selector: &str| selector.strip_prefix('.') == Some(class))
        }

        fn is_same_node(&self, other: &Self) -> bool {
            self.at == other.at
        }
    }

    fn chain<'a>(classes: &'a [&'a str], exposes: &'a [&'a str], at: usize) -> Chain<'a> {
        Chain { classes, exposes, at }
    }

    #[test]
    fn lookup_order_prefers_standard_name() {
        let el = chain(&["a"], &["webkitMatchesSelector", "matches"], 0);
        assert_eq!(find_matches_selector_method(&el), Some("matches"));
    }

    #[test]
    fn lookup_falls_back_to_vendor_prefix() {
        let el = chain(&["a"], &["oMatchesSelector", "msMatchesSelector"], 0);
        assert_eq!(find_matches_selector_method(&el), Some("msMatchesSelector"));
    }

    #[test]
    fn no_method_means_no_match() {
        let el = chain(&["target"], &["querySelector"], 0);
        assert_eq!(find_matches_selector_method(&el), None);
        assert!(!matches_selector_to_parent_elements(&el, ".target", &el));
    }

    #[test]
    fn start_equal_to_base_is_still_tested() {
        let el = chain(&["target"], &["matches"], 0);
        assert!(matches_selector_to_parent_elements(&el, ".target", &el));
    }

    #[test]
    fn ancestor_between_start_and_base_matches() {
        let classes = ["base", "handle", "icon"];
        let el = chain(&classes, &["matches"], 2);
        let base = chain(&classes, &["matches"], 0);
        assert!(matches_selector_to_parent_elements(&el, ".handle", &base));
    }

    #[test]
    fn base_node_itself_matches() {
        let classes = ["base", "mid", "leaf"];
        let el = chain(&classes, &["matches"], 2);
        let base = chain(&classes, &["matches"], 0);
        assert!(matches_selector_to_parent_elements(&el, ".base", &base));
    }

    #[test]
    fn walk_stops_at_base() {
        let classes = ["outside", "base", "leaf"];
        let el = chain(&classes, &["matches"], 2);
        let base = chain(&classes, &["matches"], 1);
        assert!(!matches_selector_to_parent_elements(&el, ".outside", &base));
    }

    #[test]
    fn walk_off_the_top_without_base() {
        let classes = ["root", "leaf"];
        let el = chain(&classes, &["matches"], 1);
        // Base is not an ancestor of `el`.
        let base = chain(&classes, &["matches"], 5);
        assert!(!matches_selector_to_parent_elements(&el, ".nope", &base));
    }

    #[test]
    fn non_callable_shadow_is_skipped_during_lookup() {
        #[derive(Clone)]
        struct Shadowed;

        impl Element for Shadowed {
            fn parent_node(&self) -> Option<Self> {
                None
            }
            fn property(&self, name: &str) -> HostValue<'_> {
                match name {
                    "matches" => HostValue::Number(1.0),
                    "webkitMatchesSelector" => HostValue::object(TaggedObject("Object")),
                    "mozMatchesSelector" => HostValue::function(|s: &str| s == "div"),
                    _ => HostValue::Undefined,
                }
            }
            fn is_same_node(&self, _other: &Self) -> bool {
                true
            }
        }

        assert_eq!(find_matches_selector_method(&Shadowed), Some("mozMatchesSelector"));
        assert!(matches_selector_to_parent_elements(&Shadowed, "div", &Shadowed));
        assert!(!matches_selector_to_parent_elements(&Shadowed, "span", &Shadowed));
    }
}
