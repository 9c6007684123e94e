//! Compound simple selectors for the headless document.
//!
//! Supports `*`, `tag`, `.class`, `#id`, compounds of those (`div.a#b`) and
//! comma-separated lists. Combinators, attributes and pseudo-classes are
//! not supported; a list containing one never matches.

/// The parts of an element a simple selector can look at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    pub tag_name: &'a str,
    pub id: Option<&'a str>,
    pub classes: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Simple<'s> {
    Universal,
    Type(&'s str),
    Class(&'s str),
    Id(&'s str),
}

impl Simple<'_> {
    fn matches(self, subject: Subject<'_>) -> bool {
        match self {
            Simple::Universal => true,
            Simple::Type(t) => subject.tag_name.eq_ignore_ascii_case(t),
            Simple::Class(want) => subject.classes.iter().any(|c| c == want),
            Simple::Id(want) => subject.id == Some(want),
        }
    }
}

/// `true` if any selector in the comma-separated list matches `subject`.
/// Lists with an unsupported or malformed entry match nothing.
pub(crate) fn matches_selector_list(subject: Subject<'_>, selectors: &str) -> bool {
    let mut compounds = Vec::new();
    for part in selectors.split(',') {
        match parse_compound(part.trim()) {
            Some(compound) => compounds.push(compound),
            None => {
                log::trace!("unsupported selector {part:?}");
                return false;
            }
        }
    }

    compounds
        .iter()
        .any(|compound| compound.iter().all(|simple| simple.matches(subject)))
}

fn parse_compound<'s>(s: &'s str) -> Option<Vec<Simple<'s>>> {
    let mut parts = Vec::new();
    let mut rest = s;

    if let Some(after) = rest.strip_prefix('*') {
        parts.push(Simple::Universal);
        rest = after;
    } else {
        let (ident, after) = split_ident(rest);
        if !ident.is_empty() {
            parts.push(Simple::Type(ident));
            rest = after;
        }
    }

    while !rest.is_empty() {
        let (is_class, after) = if let Some(a) = rest.strip_prefix('.') {
            (true, a)
        } else if let Some(a) = rest.strip_prefix('#') {
            (false, a)
        } else {
            return None;
        };

        let (ident, after) = split_ident(after);
        if ident.is_empty() {
            return None;
        }
        parts.push(if is_class { Simple::Class(ident) } else { Simple::Id(ident) });
        rest = after;
    }

    if parts.is_empty() { None } else { Some(parts) }
}

fn split_ident(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()))
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn matches(tag: &str, id: Option<&str>, cls: &[&str], selector: &str) -> bool {
        let cls = classes(cls);
        let subject = Subject { tag_name: tag, id, classes: &cls };
        matches_selector_list(subject, selector)
    }

    #[test]
    fn single_simple_selectors() {
        assert!(matches("DIV", None, &[], "*"));
        assert!(matches("DIV", None, &[], "div"));
        assert!(matches("DIV", None, &["handle"], ".handle"));
        assert!(matches("DIV", Some("grip"), &[], "#grip"));
        assert!(!matches("DIV", None, &["handle"], ".grip"));
        assert!(!matches("SPAN", None, &[], "div"));
    }

    #[test]
    fn compound_requires_every_part() {
        assert!(matches("DIV", Some("x"), &["a", "b"], "div.a.b#x"));
        assert!(!matches("DIV", Some("x"), &["a"], "div.a.b"));
        assert!(!matches("SPAN", None, &["a"], "div.a"));
        assert!(matches("SPAN", None, &["a"], "*.a"));
    }

    #[test]
    fn list_matches_any_entry() {
        assert!(matches("DIV", None, &["cancel"], ".handle, .cancel"));
        assert!(!matches("DIV", None, &[], ".handle, .cancel"));
    }

    #[test]
    fn unsupported_syntax_never_matches() {
        assert!(!matches("DIV", None, &["a"], "div > .a"));
        assert!(!matches("DIV", None, &["a"], ".a:hover"));
        assert!(!matches("DIV", None, &["a"], "[data-x]"));
        assert!(!matches("DIV", None, &["a"], ""));
        assert!(!matches("DIV", None, &["a"], ".a,"));
        assert!(!matches("DIV", None, &["a"], "."));
    }

    #[test]
    fn class_and_id_borrow_from_the_selector_text() {
        let text = String::from("div.a#b");
        let parts = parse_compound(&text).unwrap();
        assert_eq!(parts, vec![Simple::Type("div"), Simple::Class("a"), Simple::Id("b")]);
        assert_eq!(parse_compound("#x.y"), Some(vec![Simple::Id("x"), Simple::Class("y")]));
    }

    #[test]
    fn idents_allow_dash_and_underscore() {
        assert!(matches("DIV", None, &["drag-handle_1"], ".drag-handle_1"));
        assert!(matches("MY-WIDGET", None, &[], "my-widget"));
    }
}
