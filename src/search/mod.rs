//! Game-tree search.
//!
//! ## Overview
//!
//! `AlphaBeta` picks moves by iterative-deepening minimax with alpha-beta
//! pruning under a wall-clock budget. Supporting pieces:
//!
//! - **Transposition table**: hash-keyed cache of `(value, depth)`, persisted
//!   across moves until cleared
//! - **Move ordering**: children are tried best-first by static evaluation
//! - **Exploration tree**: optional arena recording of the last iteration
//! - **Statistics**: node, cache and cutoff counters per call
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use breakthrough::board::Board;
//! use breakthrough::core::Side;
//! use breakthrough::eval::Heuristic;
//! use breakthrough::search::{AlphaBeta, SearchConfig};
//!
//! let mut board = Board::standard();
//! let config = SearchConfig::default()
//!     .with_max_depth(2)
//!     .with_time_budget(Duration::from_secs(30));
//! let mut search = AlphaBeta::new(Heuristic::default(), config);
//!
//! let mv = search.choose_move(&mut board, Side::White).unwrap();
//! assert!(mv.is_some());
//! println!("searched {} nodes", search.stats().nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod deadline;
pub mod node;
pub mod ordering;
pub mod stats;
pub mod transposition;
pub mod tree;

pub use alphabeta::{AlphaBeta, RootOutcome, SearchError};
pub use config::{LeafPerspective, ReplacementPolicy, SearchConfig};
pub use deadline::Deadline;
pub use node::{ExploredNode, NodeId, NodeKind};
pub use ordering::MoveOrderer;
pub use stats::SearchStats;
pub use transposition::{TranspositionTable, TtEntry};
pub use tree::{ExplorationTree, TreeStats};
