//! Text rendering of a board.
//!
//! ```text
//!    a b c d e f g h
//!   ----------------
//!  8 B B B B B B B B
//!  7 B B B B B B B B
//!  6 . . . . . . . .
//!  ...
//!  1 W W W W W W W W
//!
//!  To move: WHITE
//! ```

use std::fmt;

use super::state::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let files: Vec<String> = (0..size)
            .map(|col| ((b'a' + col as u8) as char).to_string())
            .collect();
        writeln!(f, "   {}", files.join(" "))?;
        writeln!(f, "  {}", "--".repeat(size))?;
        for row in (0..size).rev() {
            let cells: Vec<String> = (0..size)
                .map(|col| {
                    self.grid()
                        .at(row, col)
                        .map_or('.', |side| side.symbol())
                        .to_string()
                })
                .collect();
            writeln!(f, "{:2} {}", row + 1, cells.join(" "))?;
        }
        writeln!(f)?;
        write!(f, " To move: {}", self.to_move())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::Side;

    #[test]
    fn test_render_small_board() {
        let board = Board::from_diagram("B...\n....\n....\n...W", Side::Black, 1).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   a b c d");
        assert_eq!(lines[2], " 4 B . . .");
        assert_eq!(lines[5], " 1 . . . W");
        assert!(text.ends_with("To move: BLACK"));
    }

    #[test]
    fn test_render_standard_board() {
        let text = Board::standard().to_string();
        assert!(text.contains(" 8 B B B B B B B B"));
        assert!(text.contains(" 1 W W W W W W W W"));
        assert!(text.contains(" 5 . . . . . . . ."));
    }
}
