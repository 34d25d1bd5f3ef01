//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two opposing sides. White starts on the first two ranks and moves
//! toward increasing row indices; Black starts on the last two ranks and
//! moves toward row 0. White moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// Moves toward the last rank.
    White,
    /// Moves toward the first rank.
    Black,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The opposing side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Dense index (White = 0, Black = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Row this side must reach to win on a board of `size` ranks.
    #[inline]
    #[must_use]
    pub const fn goal_row(self, size: usize) -> usize {
        match self {
            Side::White => size - 1,
            Side::Black => 0,
        }
    }

    /// Rows travelled from this side's home edge to `row`.
    #[inline]
    #[must_use]
    pub const fn advancement(self, row: usize, size: usize) -> usize {
        match self {
            Side::White => row,
            Side::Black => size - 1 - row,
        }
    }

    /// Single-character board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "WHITE"),
            Side::Black => write!(f, "BLACK"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use breakthrough::core::{Side, SideMap};
///
/// let mut pieces: SideMap<u32> = SideMap::with_value(16);
/// pieces[Side::Black] -= 1;
///
/// assert_eq!(pieces[Side::White], 16);
/// assert_eq!(pieces[Side::Black], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::White), factory(Side::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (Side, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(Side::White.opponent().opponent(), Side::White);
    }

    #[test]
    fn test_direction_and_goal() {
        assert_eq!(Side::White.direction(), 1);
        assert_eq!(Side::Black.direction(), -1);
        assert_eq!(Side::White.goal_row(8), 7);
        assert_eq!(Side::Black.goal_row(8), 0);
    }

    #[test]
    fn test_advancement_mirrors() {
        for row in 0..8 {
            assert_eq!(Side::White.advancement(row, 8), Side::Black.advancement(7 - row, 8));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::White), "WHITE");
        assert_eq!(format!("{}", Side::Black), "BLACK");
        assert_eq!(Side::Black.symbol(), 'B');
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::White], 0);
        assert_eq!(map[Side::Black], 10);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::with_value(3);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::White, &3), (Side::Black, &3)]);
    }

    #[test]
    fn test_side_serialization() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
