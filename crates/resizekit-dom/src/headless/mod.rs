//! In-memory host: an element tree with computed styles and selector
//! matching, for driving the helpers without a rendering environment.
//!
//! ```rust
//! use resizekit_dom::headless::Document;
//! use resizekit_dom::{get_computed_size, matches_selector_to_parent_elements};
//!
//! let mut doc = Document::new();
//! let panel = doc.create_element("div");
//! let handle = doc.create_element("span");
//! doc.append_child(panel, handle).unwrap();
//! doc.add_class(handle, "handle");
//! doc.set_style(panel, "width", "240.5px");
//! doc.set_style(panel, "height", "120px");
//!
//! assert!(matches_selector_to_parent_elements(&doc.node(handle), ".handle", &doc.node(panel)));
//! assert_eq!(get_computed_size(&doc, &doc.node(panel)).unwrap().width, 240.5);
//! ```

mod error;
mod selector;

use std::collections::HashMap;
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::Element;
use crate::style::StyleHost;
use crate::value::{HostObject, HostValue, SelectorPredicate, TaggedObject, FUNCTION_CLASS_TAG};

use selector::{matches_selector_list, Subject};

pub use error::DomError;

// ── NodeId ────────────────────────────────────────────────────────────────

static NEXT_DOCUMENT: AtomicU64 = AtomicU64::new(1);

/// A node of one particular [`Document`].
///
/// Ids remember which document allocated them, so an id can never address
/// a node of another document.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId {
    document: u64,
    index: usize,
}

// ── Expando ───────────────────────────────────────────────────────────────

/// A script-assigned property that shadows the node's built-in ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Expando {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Plain object with the given class tag; `"Function"` makes it look
    /// callable without being invocable.
    Object(String),
}

// ── Document ──────────────────────────────────────────────────────────────

#[derive(Debug)]
struct NodeData {
    tag_name: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    style: HashMap<String, String>,
    rendered: bool,
    matcher_methods: Vec<String>,
    cross_realm_matcher: bool,
    expandos: HashMap<String, Expando>,
}

impl NodeData {
    fn subject(&self) -> Subject<'_> {
        Subject {
            tag_name: &self.tag_name,
            id: self.id.as_deref(),
            classes: &self.classes,
        }
    }
}

/// Arena-backed element tree.
///
/// New elements are detached, rendered (with an empty style) and expose the
/// standard `matches` method only.
///
/// # Panics
///
/// Every method taking a [`NodeId`] panics if the id was allocated by a
/// different document. Use [`Document::contains`] or [`Document::try_node`]
/// when the origin of an id is not known.
#[derive(Debug)]
pub struct Document {
    serial: u64,
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            serial: NEXT_DOCUMENT.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId { document: self.serial, index: self.nodes.len() };
        self.nodes.push(NodeData {
            tag_name: tag_name.to_ascii_uppercase(),
            id: None,
            classes: Vec::new(),
            parent: None,
            style: HashMap::new(),
            rendered: true,
            matcher_methods: vec!["matches".to_string()],
            cross_realm_matcher: false,
            expandos: HashMap::new(),
        });
        id
    }

    /// Moves `child` under `parent`. Fails if `child` is `parent` or one of
    /// its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(child);
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(DomError::HierarchyRequest { parent, child });
            }
            cursor = self.data(node).parent;
        }

        self.data_mut(child).parent = Some(parent);
        Ok(())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.data_mut(node).id = Some(id.to_string());
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.data_mut(node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    /// Sets the computed value of `property`, e.g. `("width", "100.5px")`.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        self.data_mut(node).style.insert(property.to_string(), value.into());
    }

    /// A node that is not rendered has no computed style.
    pub fn set_rendered(&mut self, node: NodeId, rendered: bool) {
        self.data_mut(node).rendered = rendered;
    }

    /// Which selector-matching method names the node exposes.
    pub fn set_matcher_methods(&mut self, node: NodeId, names: &[&str]) {
        self.data_mut(node).matcher_methods = names.iter().map(|n| n.to_string()).collect();
    }

    /// Expose the matching methods as tagged objects instead of native
    /// callables, as a callable from another realm appears.
    pub fn set_cross_realm_matcher(&mut self, node: NodeId, cross_realm: bool) {
        self.data_mut(node).cross_realm_matcher = cross_realm;
    }

    pub fn set_property(&mut self, node: NodeId, name: &str, value: Expando) {
        self.data_mut(node).expandos.insert(name.to_string(), value);
    }

    /// `true` if `id` was allocated by this document.
    pub fn contains(&self, id: NodeId) -> bool {
        id.document == self.serial && id.index < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        self.check(id);
        NodeRef { doc: self, id }
    }

    pub fn try_node(&self, id: NodeId) -> Result<NodeRef<'_>, DomError> {
        if self.contains(id) {
            Ok(NodeRef { doc: self, id })
        } else {
            Err(DomError::WrongDocument)
        }
    }

    fn check(&self, id: NodeId) {
        assert!(self.contains(id), "{id:?} belongs to another document");
    }

    fn data(&self, id: NodeId) -> &NodeData {
        self.check(id);
        &self.nodes[id.index]
    }

    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.check(id);
        &mut self.nodes[id.index]
    }
}

impl<'d> StyleHost<NodeRef<'d>> for Document {
    type Style<'s> = &'s HashMap<String, String>;
    type Error = DomError;

    fn computed_style<'s>(
        &'s self,
        element: &NodeRef<'d>,
    ) -> Result<Self::Style<'s>, DomError> {
        if !ptr::eq(self, element.doc) || !self.contains(element.id) {
            return Err(DomError::WrongDocument);
        }

        let data = self.data(element.id);
        if !data.rendered {
            return Err(DomError::NotRendered(element.id));
        }
        Ok(&data.style)
    }
}

// ── NodeRef ───────────────────────────────────────────────────────────────

/// Borrowed handle to one node of a [`Document`].
#[derive(Debug, Copy, Clone)]
pub struct NodeRef<'d> {
    doc: &'d Document,
    id: NodeId,
}

impl<'d> NodeRef<'d> {
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Upper-cased tag name.
    pub fn tag_name(self) -> &'d str {
        &self.data().tag_name
    }

    fn data(self) -> &'d NodeData {
        self.doc.data(self.id)
    }
}

impl SelectorPredicate for NodeRef<'_> {
    fn matches(&self, selector: &str) -> bool {
        matches_selector_list(self.data().subject(), selector)
    }
}

impl Element for NodeRef<'_> {
    fn parent_node(&self) -> Option<Self> {
        self.data().parent.map(|id| NodeRef { doc: self.doc, id })
    }

    fn property(&self, name: &str) -> HostValue<'_> {
        let data = self.data();

        if let Some(expando) = data.expandos.get(name) {
            return match expando {
                Expando::Null => HostValue::Null,
                Expando::Bool(b) => HostValue::Bool(*b),
                Expando::Number(n) => HostValue::Number(*n),
                Expando::String(s) => HostValue::String(s),
                Expando::Object(tag) => HostValue::object(TaggedObject(tag)),
            };
        }

        if data.matcher_methods.iter().any(|m| m == name) {
            return if data.cross_realm_matcher {
                HostValue::object(ForeignMatcher(*self))
            } else {
                HostValue::function(*self)
            };
        }

        match name {
            "tagName" => HostValue::String(&data.tag_name),
            "id" => HostValue::String(data.id.as_deref().unwrap_or("")),
            "parentNode" => match data.parent {
                Some(_) => HostValue::object(TaggedObject("HTMLElement")),
                None => HostValue::Null,
            },
            _ => HostValue::Undefined,
        }
    }

    fn is_same_node(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

/// A node's matching method as it looks when handed over from another realm.
struct ForeignMatcher<'d>(NodeRef<'d>);

impl HostObject for ForeignMatcher<'_> {
    fn class_tag(&self) -> &str {
        FUNCTION_CLASS_TAG
    }

    fn as_predicate(&self) -> Option<&dyn SelectorPredicate> {
        Some(&self.0)
    }
}
