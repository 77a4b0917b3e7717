use std::fmt;

use super::{Board, Position, Square, BOARD_SIZE};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let ch = match self.piece_at(Square::at(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in b'a'..b'a' + BOARD_SIZE as u8 {
            write!(f, " {}", file as char)?;
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.current.board)?;
        write!(f, "{} to move", self.current.side_to_move)
    }
}
