use std::path::Path;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An ordered sequence of squares visited by the knight, built up by the tour search.
pub struct TourPath
{
    squares: Vec<Square>,
}

impl TourPath
{
    /// Creates an empty path with room for a full tour.
    pub fn with_capacity(squares: usize) -> TourPath
    {
        TourPath {
            squares: Vec::with_capacity(squares),
        }
    }

    /// Appends a square to the path.
    pub fn push(&mut self, square: Square)
    {
        self.squares.push(square);
    }

    /// Removes the most recent square. Called only when the search backtracks.
    pub fn pop(&mut self) -> Option<Square>
    {
        self.squares.pop()
    }

    /// The number of squares on the path.
    pub fn len(&self) -> usize
    {
        self.squares.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool
    {
        self.squares.is_empty()
    }

    /// The squares on the path, in visit order.
    pub fn squares(&self) -> &[Square]
    {
        &self.squares
    }

    /// Replays the path against a fresh board, verifying that it is a complete tour:
    /// full length, no revisits, and every consecutive pair one knight move apart.
    pub fn replay(&self, size: u8) -> Result<()>
    {
        let mut board = Board::new(size);

        if self.len() != board.squares() as usize
        {
            let msg = format!("Expected {} squares on the path, found {}.", board.squares(), self.len());
            return Err(Error::new(Kind::InvalidMove, msg));
        }

        let mut previous: Option<Square> = None;
        for square in &self.squares
        {
            if !board.in_bounds(square.row as i16, square.col as i16)
            {
                return Err(Error::new(Kind::InvalidMove, format!("Square {} is out of bounds.", square)));
            }

            if board.is_visited(*square)
            {
                return Err(Error::new(Kind::InvalidMove, format!("Square {} is visited twice.", square)));
            }

            if let Some(prev) = previous
            {
                if !prev.is_knight_move(square)
                {
                    return Err(Error::new(Kind::InvalidMove, format!("{} to {} is not a knight move.", prev, square)));
                }
            }

            board.mark_visited(*square);
            previous = Some(*square);
        }

        Ok(())
    }

    /// Serializes the path as one `row,col` pair per line, in visit order.
    pub fn serialize(&self) -> String
    {
        self.squares.iter().map(|square| square.to_string()).collect::<Vec<_>>().join("\n")
    }

    /// Writes the serialized path to a file.
    pub fn write_to(&self, path: &Path) -> Result<()>
    {
        std::fs::write(path, self.serialize())?;
        Ok(())
    }

    /// Renders the path as a grid of visit numbers, 1-indexed in visit order.
    pub fn render(&self, size: u8) -> String
    {
        let mut numbers = vec![vec![0usize; size as usize]; size as usize];
        for (i, square) in self.squares.iter().enumerate()
        {
            numbers[square.row as usize][square.col as usize] = i + 1;
        }

        let width = (size as usize * size as usize).to_string().len();
        let mut out = String::new();

        for row in numbers
        {
            let line = row
                .iter()
                .map(|n| match n
                {
                    | 0 => format!("{:>width$}", "."),
                    | _ => format!("{:>width$}", n),
                })
                .collect::<Vec<_>>()
                .join(" ");

            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}

impl std::fmt::Display for TourPath
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let line = self.squares.iter().map(|square| format!("({})", square)).collect::<Vec<_>>().join(" -> ");
        write!(f, "{}", line)
    }
}
