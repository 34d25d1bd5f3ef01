//! Arena-based exploration tree.
//!
//! Records every node one search iteration visits, with the move that led
//! there and the value it returned. Used for diagnostics only; the search
//! never reads it back.

use serde::{Deserialize, Serialize};

use super::node::{ExploredNode, NodeId, NodeKind};
use crate::core::{Move, Side};

/// Flat `Vec<ExploredNode>` referenced by `NodeId` indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationTree {
    nodes: Vec<ExploredNode>,
    root: NodeId,
}

impl ExplorationTree {
    /// Create a tree holding only a root.
    pub fn new(root_to_move: Side) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(ExploredNode::root(root_to_move));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &ExploredNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut ExploredNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Append a child of `parent` reached by `mv`.
    pub fn add_child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        let (to_move, ply) = {
            let p = self.get(parent);
            (p.to_move.opponent(), p.ply + 1)
        };
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(ExploredNode::new(parent, Some(mv), to_move, ply));
        self.get_mut(parent).children.push(id);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, root_to_move: Side) {
        self.nodes.clear();
        self.nodes.push(ExploredNode::root(root_to_move));
        self.root = NodeId::new(0);
    }

    #[must_use]
    pub fn root_node(&self) -> &ExploredNode {
        self.get(self.root)
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ExploredNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Moves from the root down to `id`.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut path = Vec::new();
        let mut current = id;
        while !current.is_none() {
            let node = self.get(current);
            if let Some(mv) = node.mv {
                path.push(mv);
            }
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Node ids in depth-first pre-order, children in search order.
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.get(id).children.iter().rev().copied());
        }
        order
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        for node in &self.nodes {
            stats.max_ply = stats.max_ply.max(node.ply);
            stats.total_children += node.children.len();
            if node.children.is_empty() {
                stats.leaf_count += 1;
            }
            if node.cut_off {
                stats.cutoff_count += 1;
            }
            match node.kind {
                NodeKind::Cached => stats.cached_count += 1,
                NodeKind::Timeout => stats.timeout_count += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Statistics about a recorded tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    pub max_ply: u16,
    pub leaf_count: usize,
    pub cutoff_count: usize,
    pub cached_count: usize,
    pub timeout_count: usize,
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let expanded = self.node_count - self.leaf_count;
        if expanded == 0 {
            0.0
        } else {
            self.total_children as f64 / expanded as f64
        }
    }
}
