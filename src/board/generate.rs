use arrayvec::ArrayVec;

use crate::prelude::*;

impl Board
{
    /// Generates the legal knight moves from `from`, in offset order.
    ///
    /// A move is legal when its destination is in bounds and not yet visited.
    pub fn legal_moves(&self, from: Square) -> ArrayVec<Square, 8>
    {
        let mut moves = ArrayVec::new();

        for (dr, dc) in OFFSETS
        {
            let row = from.row as i16 + dr as i16;
            let col = from.col as i16 + dc as i16;

            if !self.in_bounds(row, col)
            {
                continue;
            }

            let to = Square::new(row as u8, col as u8);
            if !self.is_visited(to)
            {
                moves.push(to);
            }
        }

        moves
    }

    /// Counts the legal moves from `from`.
    ///
    /// This is also the onward degree of an unvisited candidate: a square is never among
    /// its own knight moves, so marking the candidate first would not change the count.
    pub fn mobility(&self, from: Square) -> usize
    {
        self.legal_moves(from).len()
    }

    /// Whether any legal move exists from `from`.
    pub fn has_moves(&self, from: Square) -> bool
    {
        !self.legal_moves(from).is_empty()
    }
}
