//! In-memory TGF graph model
//!
//! A [`TgfModel`] holds nodes keyed by id in insertion order and an
//! append-only edge list. The model is built once by the parser and is
//! read-only for every downstream consumer, so converters may share it
//! freely across threads.

use serde::Serialize;
use std::collections::HashMap;

/// A TGF node: an id and a free-text name (may be empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TgfNode {
    pub id: String,
    pub name: String,
}

impl TgfNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A TGF edge: two node ids and a free-text label (may be empty).
///
/// `from` and `to` are not validated against the node set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TgfEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

impl TgfEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }
}

/// The parsed graph: insertion-ordered nodes plus an edge list.
///
/// Node ids are unique within a model; the first occurrence of an id wins
/// and later inserts with the same id are silently ignored. Edges are never
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TgfModel {
    nodes: Vec<TgfNode>,
    edges: Vec<TgfEdge>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
}

impl TgfModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless a node with the same id already exists.
    pub fn add_node(&mut self, node: TgfNode) {
        if self.node_index.contains_key(&node.id) {
            return;
        }
        self.node_index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    /// Append an edge. Duplicates and dangling endpoints are kept as-is.
    pub fn add_edge(&mut self, edge: TgfEdge) {
        self.edges.push(edge);
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&TgfNode> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[TgfNode] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[TgfEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
