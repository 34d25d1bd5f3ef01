//! Core value types: sides, coordinates, moves, hashing keys, configuration.
//!
//! Everything here is a small `Copy` value or an immutable table. Mutable
//! game state lives in `board`.

pub mod config;
pub mod moves;
pub mod side;
pub mod square;
pub mod zobrist;

pub use config::{
    check_board_size, BoardConfig, BoardSizeError, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE,
};
pub use moves::{Move, MoveList};
pub use side::{Side, SideMap};
pub use square::{ParseSquareError, Square, MAX_BOARD_SIZE};
pub use zobrist::{PositionHasher, ZobristKeys, DEFAULT_ZOBRIST_SEED};
