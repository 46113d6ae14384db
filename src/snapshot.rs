use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{GlyphToolsError, Node, Path};

/// A stable reference to a node: which path, and where in that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef {
    pub path: usize,
    pub index: usize,
}

impl NodeRef {
    pub fn new(path: usize, index: usize) -> Self {
        NodeRef { path, index }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path {} node {}", self.path, self.index)
    }
}

/// A frozen copy of the editor state an edit works from
///
/// Positions are read from here only; edits never mutate a snapshot while they
/// are being computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paths: Vec<Path>,
    /// Selected nodes, in the order the user (or host) supplied them
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub selection: IndexSet<NodeRef>,
}

impl Snapshot {
    pub fn new(paths: Vec<Path>) -> Self {
        Snapshot {
            paths,
            selection: IndexSet::new(),
        }
    }

    /// Add nodes to the selection, builder style
    pub fn with_selection(mut self, nodes: impl IntoIterator<Item = NodeRef>) -> Self {
        self.selection.extend(nodes);
        self
    }

    /// Select every node of every path
    pub fn select_all(&mut self) {
        for (p, path) in self.paths.iter().enumerate() {
            self.selection
                .extend((0..path.len()).map(|i| NodeRef::new(p, i)));
        }
    }

    pub fn path(&self, node: NodeRef) -> Result<&Path, GlyphToolsError> {
        self.paths
            .get(node.path)
            .ok_or(GlyphToolsError::NodeNotFound { node })
    }

    pub fn node(&self, node: NodeRef) -> Result<&Node, GlyphToolsError> {
        self.path(node)?
            .nodes
            .get(node.index)
            .ok_or(GlyphToolsError::NodeNotFound { node })
    }

    pub fn node_mut(&mut self, node: NodeRef) -> Result<&mut Node, GlyphToolsError> {
        self.paths
            .get_mut(node.path)
            .and_then(|p| p.nodes.get_mut(node.index))
            .ok_or(GlyphToolsError::NodeNotFound { node })
    }

    pub fn position(&self, node: NodeRef) -> Result<kurbo::Point, GlyphToolsError> {
        Ok(self.node(node)?.to_kurbo())
    }

    pub fn is_selected(&self, node: NodeRef) -> bool {
        self.selection.contains(&node)
    }

    /// Selected nodes in the order they were supplied, checked against the arena
    pub fn selected_nodes(&self) -> Result<Vec<(NodeRef, &Node)>, GlyphToolsError> {
        self.selection
            .iter()
            .map(|r| self.node(*r).map(|n| (*r, n)))
            .collect()
    }

    /// Selected nodes in path order, the way an editor walks a layer
    pub fn selected_nodes_in_path_order(&self) -> Result<Vec<(NodeRef, &Node)>, GlyphToolsError> {
        let mut nodes = self.selected_nodes()?;
        nodes.sort_by_key(|(r, _)| *r);
        Ok(nodes)
    }

    pub fn selected_on_curves(&self) -> Result<Vec<NodeRef>, GlyphToolsError> {
        Ok(self
            .selected_nodes()?
            .into_iter()
            .filter(|(_, n)| n.is_on_curve())
            .map(|(r, _)| r)
            .collect())
    }

    /// Write an edit straight into the snapshot
    pub fn apply(&mut self, edit: &NodeEdit) -> Result<(), GlyphToolsError> {
        self.node_mut(edit.node)?.set_position(edit.position());
        Ok(())
    }
}

/// A new position for one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeEdit {
    pub node: NodeRef,
    pub x: f64,
    pub y: f64,
}

impl NodeEdit {
    pub fn new(node: NodeRef, position: kurbo::Point) -> Self {
        NodeEdit {
            node,
            x: position.x,
            y: position.y,
        }
    }

    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}
