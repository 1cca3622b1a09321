//! Page context abstraction.
//!
//! Controllers never touch a concrete DOM binding. They operate through the
//! [`Page`] trait, which bundles the element queries and mutations the three
//! interaction flows need together with the navigation function. The live
//! element tree behind the trait is the single source of truth for transient
//! UI state (for example, which link rows have an open confirmation prompt).
//!
//! [`memory::MemoryPage`] is the reference implementation, used by the test
//! suite and by host bindings that render into an in-process tree.

pub mod memory;

use crate::error::Result;

/// Declarative description of an element subtree to insert into a page.
///
/// Used by the delete-confirm flow to inject the confirmation prompt. The
/// builder methods consume and return `self` so a subtree reads as one
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        ElementSpec {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Handle to the rendered page: document queries, subtree mutation, and the
/// navigation function, as one explicit dependency.
///
/// The server-rendered contract requires every element the controllers are
/// wired to (delete affordances, tag input, search field) to carry a stable
/// id, so the trait addresses elements by id string throughout.
pub trait Page {
    /// Whether an element with this id is currently attached to the page.
    fn has_element(&self, id: &str) -> bool;

    /// Detach the element and its whole subtree. Returns `false` if no such
    /// element is attached (already-removed elements are not an error).
    fn remove(&mut self, id: &str) -> bool;

    /// Append a subtree under the element with id `parent`.
    fn append_child(&mut self, parent: &str, child: ElementSpec) -> Result<()>;

    /// Read an attribute (including `data-*` attributes) of an element.
    fn attr(&self, id: &str, name: &str) -> Option<String>;

    /// Ids of all attached elements carrying the given class.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// Current value of the form control with the given `name` attribute.
    fn input_value(&self, name: &str) -> Option<String>;

    /// Current value of the form control with the given id.
    fn value(&self, id: &str) -> Option<String>;

    /// Whether the checkbox with the given `name` attribute is checked.
    /// An absent checkbox reads as unchecked.
    fn checkbox_checked(&self, name: &str) -> bool;

    /// The `action` URL of the form with the given `name` attribute.
    fn form_action(&self, form: &str) -> Option<String>;

    /// Navigate the browser context to `url`.
    fn navigate(&mut self, url: &str);

    /// The URL last navigated to, if any.
    fn location(&self) -> Option<&str>;
}
