use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Depth-first search for a full knight's tour, with candidate moves ordered by
/// Warnsdorff's rule: fewest onward moves first.
pub struct TourSearch
{
    board: Board,
    path:  TourPath,
}

impl TourSearch
{
    /// Creates a search over an empty board. The size must already be validated.
    pub fn new(size: u8) -> TourSearch
    {
        let board = Board::new(size);
        let path = TourPath::with_capacity(board.squares() as usize);
        TourSearch { board, path }
    }

    /// Runs the search from `start` and returns the first complete tour found.
    ///
    /// Warnsdorff's rule is a heuristic: some starts admit no tour at all, and
    /// exhausting the search is reported as [Kind::NoTourFound], not retried.
    pub fn run(mut self, start: Square) -> Result<TourPath>
    {
        if !self.board.in_bounds(start.row as i16, start.col as i16)
        {
            let msg = format!("Start square {} is not on a {n}x{n} board.", start, n = self.board.size());
            return Err(Error::new(Kind::InvalidOption, msg));
        }

        self.board.mark_visited(start);
        self.path.push(start);

        if self.extend(start)
        {
            log::info!("found a tour of length {}", self.path.len());
            Ok(self.path)
        }
        else
        {
            let msg = format!("No tour from {} on a {n}x{n} board under this search.", start, n = self.board.size());
            Err(Error::new(Kind::NoTourFound, msg))
        }
    }

    /// Tries to extend the path beyond `current`. Returns true as soon as any branch
    /// completes the tour; the first solution found wins.
    fn extend(&mut self, current: Square) -> bool
    {
        if self.path.len() == self.board.squares() as usize
        {
            return true;
        }

        for candidate in self.ordered_moves(current)
        {
            self.board.mark_visited(candidate);
            self.path.push(candidate);

            if self.extend(candidate)
            {
                return true;
            }

            // Dead end below this candidate; restore the prefix and try the next one.
            self.path.pop();
            self.board.unmark_visited(candidate);
        }

        false
    }

    /// The legal moves from `from`, fewest onward moves first. The sort is stable, so
    /// candidates of equal degree keep the fixed offset order.
    fn ordered_moves(&self, from: Square) -> Vec<Square>
    {
        let board = &self.board;
        board.legal_moves(from).into_iter().sorted_by_key(|candidate| board.mobility(*candidate)).collect()
    }
}
