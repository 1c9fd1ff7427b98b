use crate::prelude::*;

/// The eight knight-move offsets, in their fixed generation order.
///
/// Every move ordering in the crate ties back to this order, so it must not change.
pub const OFFSETS: [(i8, i8); 8] = [(-1, -2), (1, -2), (-2, -1), (2, -1), (-2, 1), (2, 1), (-1, 2), (1, 2)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A 0-indexed (row, col) coordinate on a square board.
pub struct Square
{
    pub row: u8,
    pub col: u8,
}

impl Square
{
    /// Creates a new square.
    pub fn new(row: u8, col: u8) -> Square
    {
        Square { row, col }
    }

    /// Whether `other` is exactly one knight move away from this square.
    pub fn is_knight_move(&self, other: &Square) -> bool
    {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr.min(dc) == 1 && dr.max(dc) == 2
    }
}

impl std::fmt::Display for Square
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some((row, col)) = s.split_once(',')
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let Ok(row) = row.trim().parse::<u8>()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let Ok(col) = col.trim().parse::<u8>()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        Ok(Square { row, col })
    }
}
