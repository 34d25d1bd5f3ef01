//! Board state: grid, piece lists, history and incremental hash.
//!
//! `Board` is the one mutable position shared by the whole search. It is
//! changed only through matched `make_move`/`undo_move` pairs (plus
//! `set_occupant` during setup), each of which updates the grid, the piece
//! lists and the Zobrist hash together.

pub mod display;
pub mod grid;
pub mod history;
pub mod piece_list;
pub mod state;

pub use grid::{DiagramError, Grid};
pub use history::HistoryEntry;
pub use piece_list::PieceList;
pub use state::Board;
