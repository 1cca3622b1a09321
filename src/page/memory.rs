//! Arena-backed in-memory element tree implementing [`Page`].
//!
//! Nodes live in a flat arena and link to each other by index; removal
//! detaches a subtree from its parent and drops its ids from the index
//! without compacting the arena. This is the page used by the test suite
//! and by in-process host bindings.

use std::collections::HashMap;

use crate::error::{LinkstashError, Result};
use crate::page::{ElementSpec, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: Option<String>,
    value: String,
    checked: bool,
}

impl Node {
    fn from_spec(spec: &ElementSpec, parent: Option<NodeId>) -> Self {
        let attrs: HashMap<String, String> = spec.attrs.iter().cloned().collect();
        let value = attrs.get("value").cloned().unwrap_or_default();
        let checked = attrs.contains_key("checked");
        Node {
            parent,
            children: Vec::new(),
            tag: spec.tag.clone(),
            id: spec.id.clone(),
            classes: spec.classes.clone(),
            attrs,
            text: spec.text.clone(),
            value,
            checked,
        }
    }
}

/// In-memory page: a document root, an id index, and a recorded location.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
    location: Option<String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            tag: "body".to_string(),
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: None,
            value: String::new(),
            checked: false,
        };
        MemoryPage {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
            location: None,
        }
    }

    /// Append a subtree directly under the document root.
    pub fn append_to_root(&mut self, spec: ElementSpec) -> Result<()> {
        self.insert(self.root, &spec)?;
        Ok(())
    }

    /// Simulate the user typing into the named form control.
    pub fn set_input_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(nid) = self.find_by_name(name) {
            self.nodes[nid.0].value = value.into();
        }
    }

    /// Simulate the user toggling the named checkbox.
    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if let Some(nid) = self.find_by_name(name) {
            self.nodes[nid.0].checked = checked;
        }
    }

    /// Simulate the user typing into the control with the given id.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(&nid) = self.id_index.get(id) {
            self.nodes[nid.0].value = value.into();
        }
    }

    /// Text content of an element, for assertions on injected prompts.
    pub fn text_of(&self, id: &str) -> Option<String> {
        let nid = self.id_index.get(id)?;
        self.nodes[nid.0].text.clone()
    }

    fn insert(&mut self, parent: NodeId, spec: &ElementSpec) -> Result<NodeId> {
        if let Some(id) = &spec.id
            && self.id_index.contains_key(id)
        {
            return Err(LinkstashError::DuplicateId(id.clone()));
        }

        let nid = NodeId(self.nodes.len());
        self.nodes.push(Node::from_spec(spec, Some(parent)));
        self.nodes[parent.0].children.push(nid);
        if let Some(id) = &spec.id {
            self.id_index.insert(id.clone(), nid);
        }

        for child in &spec.children {
            self.insert(nid, child)?;
        }
        Ok(nid)
    }

    /// Drop the subtree's ids from the index. The arena slots stay behind;
    /// nothing references a detached node again.
    fn unindex_subtree(&mut self, nid: NodeId) {
        if let Some(id) = self.nodes[nid.0].id.clone() {
            self.id_index.remove(&id);
        }
        let children = self.nodes[nid.0].children.clone();
        for child in children {
            self.unindex_subtree(child);
        }
    }

    fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.walk_attached()
            .into_iter()
            .find(|nid| self.nodes[nid.0].attrs.get("name").map(String::as_str) == Some(name))
    }

    /// All nodes still reachable from the root, in document order.
    fn walk_attached(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(nid) = stack.pop() {
            out.push(nid);
            for child in self.nodes[nid.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    fn remove(&mut self, id: &str) -> bool {
        let Some(&nid) = self.id_index.get(id) else {
            return false;
        };
        if let Some(parent) = self.nodes[nid.0].parent {
            self.nodes[parent.0].children.retain(|c| *c != nid);
        }
        self.unindex_subtree(nid);
        true
    }

    fn append_child(&mut self, parent: &str, child: ElementSpec) -> Result<()> {
        let Some(&pid) = self.id_index.get(parent) else {
            return Err(LinkstashError::ElementNotFound(parent.to_string()));
        };
        self.insert(pid, &child)?;
        Ok(())
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        let nid = self.id_index.get(id)?;
        self.nodes[nid.0].attrs.get(name).cloned()
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.walk_attached()
            .into_iter()
            .filter(|nid| self.nodes[nid.0].classes.iter().any(|c| c == class))
            .filter_map(|nid| self.nodes[nid.0].id.clone())
            .collect()
    }

    fn input_value(&self, name: &str) -> Option<String> {
        self.find_by_name(name).map(|nid| self.nodes[nid.0].value.clone())
    }

    fn value(&self, id: &str) -> Option<String> {
        let nid = self.id_index.get(id)?;
        Some(self.nodes[nid.0].value.clone())
    }

    fn checkbox_checked(&self, name: &str) -> bool {
        self.find_by_name(name)
            .map(|nid| self.nodes[nid.0].checked)
            .unwrap_or(false)
    }

    fn form_action(&self, form: &str) -> Option<String> {
        self.walk_attached()
            .into_iter()
            .find(|nid| {
                self.nodes[nid.0].tag == "form"
                    && self.nodes[nid.0].attrs.get("name").map(String::as_str) == Some(form)
            })
            .and_then(|nid| self.nodes[nid.0].attrs.get("action").cloned())
    }

    fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
