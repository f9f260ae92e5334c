//! Minimal path queries over a [`DocTree`].
//!
//! Supports only the shapes the extractor needs:
//!
//! - `/a/b/c` — child steps from the document root
//! - `//name` — descendants at any depth
//! - `../../name` — parent steps relative to a context element
//! - `name[@attr='value']` — a single attribute-equality predicate

use crate::tree::{DocTree, NodeId};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,

    #[error("unsupported path step: {0}")]
    UnsupportedStep(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
    Parent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: Option<String>,
    predicate: Option<(String, String)>,
}

impl Step {
    fn matches(&self, tree: &DocTree, id: NodeId) -> bool {
        if let Some(ref name) = self.name {
            if tree.name(id) != Some(name.as_str()) {
                return false;
            }
        }
        match self.predicate {
            Some((ref attr, ref value)) => tree.attribute(id, attr) == Some(value.as_str()),
            None => true,
        }
    }
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    absolute: bool,
    steps: Vec<Step>,
}

impl TreePath {
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        if expr.is_empty() {
            return Err(PathError::Empty);
        }
        let absolute = expr.starts_with('/');
        let body = if absolute { &expr[1..] } else { expr };

        let mut steps = Vec::new();
        let mut descend = false;
        for segment in body.split('/') {
            if segment.is_empty() {
                // `//` separates a descendant step.
                if descend {
                    return Err(PathError::UnsupportedStep(expr.to_string()));
                }
                descend = true;
                continue;
            }
            let axis = if descend { Axis::Descendant } else { Axis::Child };
            descend = false;
            steps.push(parse_step(segment, axis)?);
        }
        if descend || steps.is_empty() {
            return Err(PathError::UnsupportedStep(expr.to_string()));
        }
        Ok(TreePath { absolute, steps })
    }

    /// Every element reached from `context`, in document order without
    /// duplicates. Absolute paths ignore `context`.
    pub fn select(&self, tree: &DocTree, context: NodeId) -> Vec<NodeId> {
        let mut current = vec![if self.absolute { tree.root() } else { context }];
        for step in &self.steps {
            let mut next: Vec<NodeId> = Vec::new();
            for &id in &current {
                match step.axis {
                    Axis::Child => next.extend(tree.element_children(id).filter(|&c| step.matches(tree, c))),
                    Axis::Descendant => next.extend(
                        tree.descendants(id)
                            .into_iter()
                            .filter(|&c| step.matches(tree, c)),
                    ),
                    Axis::Parent => next.extend(tree.parent(id)),
                }
            }
            next.sort_unstable();
            next.dedup();
            current = next;
        }
        current
    }

    pub fn select_first(&self, tree: &DocTree, context: NodeId) -> Option<NodeId> {
        self.select(tree, context).into_iter().next()
    }
}

fn parse_step(segment: &str, axis: Axis) -> Result<Step, PathError> {
    if segment == ".." {
        if axis == Axis::Descendant {
            return Err(PathError::UnsupportedStep(segment.to_string()));
        }
        return Ok(Step {
            axis: Axis::Parent,
            name: None,
            predicate: None,
        });
    }

    let (name, predicate) = match segment.split_once('[') {
        Some((name, rest)) => (name, Some(parse_predicate(rest, segment)?)),
        None => (segment, None),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')) {
        return Err(PathError::UnsupportedStep(segment.to_string()));
    }
    Ok(Step {
        axis,
        name: Some(name.to_string()),
        predicate,
    })
}

/// `@id='parameters']` → `("id", "parameters")`
fn parse_predicate(rest: &str, segment: &str) -> Result<(String, String), PathError> {
    let unsupported = || PathError::UnsupportedStep(segment.to_string());
    let inner = rest.strip_suffix(']').ok_or_else(unsupported)?;
    let inner = inner.strip_prefix('@').ok_or_else(unsupported)?;
    let (attr, value) = inner.split_once('=').ok_or_else(unsupported)?;
    let value = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .ok_or_else(unsupported)?;
    Ok((attr.trim().to_string(), value.to_string()))
}
