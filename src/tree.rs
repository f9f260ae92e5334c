//! Owned, mutable element tree built from a parsed reference page.
//!
//! `roxmltree` documents are read-only, but constant translation rewrites
//! element text before extraction. Nodes live in a flat arena in document
//! order, so sorting ids yields document order.

use crate::error::Result;

pub type NodeId = usize;

#[derive(Debug)]
enum NodeKind {
    Document,
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

#[derive(Debug)]
pub struct DocTree {
    nodes: Vec<Node>,
}

impl DocTree {
    /// Parse well-formed XML. Comments and processing instructions are
    /// dropped; CDATA sections become plain text.
    pub fn parse(text: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(text)?;
        let mut tree = DocTree {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
        };
        tree.append_children(0, doc.root());
        Ok(tree)
    }

    fn append_children(&mut self, parent: NodeId, source: roxmltree::Node) {
        for child in source.children() {
            let kind = if child.is_element() {
                NodeKind::Element {
                    name: child.tag_name().name().to_string(),
                    attributes: child
                        .attributes()
                        .map(|a| (a.name().to_string(), a.value().to_string()))
                        .collect(),
                }
            } else if child.is_text() {
                NodeKind::Text(child.text().unwrap_or_default().to_string())
            } else {
                continue;
            };
            let id = self.push(parent, kind);
            if child.is_element() {
                self.append_children(id, child);
            }
        }
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The document node; its element children are the top-level elements.
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id].kind, NodeKind::Element { .. })
    }

    /// Local element name; `None` for text and the document node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(move |&child| self.is_element(child))
    }

    /// Element descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            if self.is_element(next) {
                out.push(next);
                stack.extend(self.nodes[next].children.iter().rev().copied());
            }
        }
        out
    }

    /// Concatenated text of every descendant text node.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id].kind {
            NodeKind::Text(text) => out.push_str(text),
            _ => {
                for &child in &self.nodes[id].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Replace the content of element `id` with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        let old = std::mem::take(&mut self.nodes[id].children);
        for child in old {
            self.nodes[child].parent = None;
        }
        self.push(id, NodeKind::Text(text.into()));
    }
}
