//! Exploration tree nodes.
//!
//! Uses arena-based allocation with index references (NodeId) so a
//! recorded search can be walked and serialized after the fact.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, Side};
use crate::eval::Score;

/// Index into the ExplorationTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// How a visited node produced its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entered but not yet resolved.
    #[default]
    Open,
    /// Deadline passed on entry; static value.
    Timeout,
    /// Answered by the transposition table.
    Cached,
    /// Game already decided.
    Terminal,
    /// Depth exhausted; static value.
    Leaf,
    /// Value backed up from children.
    Interior,
}

/// A position visited by the search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExploredNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (None at the root).
    pub mv: Option<Move>,

    /// Side to move at this node.
    pub to_move: Side,

    /// Plies from the root.
    pub ply: u16,

    /// Value returned to the parent.
    pub score: Option<Score>,

    pub kind: NodeKind,

    /// The move loop stopped early on an alpha-beta cutoff.
    pub cut_off: bool,

    /// Children in the order they were searched.
    pub children: SmallVec<[NodeId; 8]>,
}

impl ExploredNode {
    pub fn new(parent: NodeId, mv: Option<Move>, to_move: Side, ply: u16) -> Self {
        Self {
            parent,
            mv,
            to_move,
            ply,
            score: None,
            kind: NodeKind::Open,
            cut_off: false,
            children: SmallVec::new(),
        }
    }

    pub fn root(to_move: Side) -> Self {
        Self::new(NodeId::NONE, None, to_move, 0)
    }

    /// Record how this node resolved.
    pub fn resolve(&mut self, score: Score, kind: NodeKind) {
        self.score = Some(score);
        self.kind = kind;
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
