use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Tracks the visited squares of an N×N board.
pub struct Board
{
    /// The side length of the board.
    size: u8,

    /// The visited set, packed 64 squares to a word.
    visited: Vec<u64>,

    /// The number of squares currently marked visited.
    count: u16,
}

impl Board
{
    /// The smallest playable board. Below this a knight barely has room to turn around.
    pub const MIN_SIZE: u8 = 5;

    /// The largest supported board. Keeps coordinates in a byte and the search depth bounded.
    pub const MAX_SIZE: u8 = 32;

    /// Creates an empty board. The size must already be validated against
    /// [Self::MIN_SIZE] and [Self::MAX_SIZE].
    pub fn new(size: u8) -> Board
    {
        let squares = size as usize * size as usize;
        let words = squares.div_ceil(64);

        Board {
            size,
            visited: vec![0; words],
            count: 0,
        }
    }

    /// Whether the coordinate pair lies on the board.
    pub fn in_bounds(&self, row: i16, col: i16) -> bool
    {
        0 <= row && row < self.size as i16 && 0 <= col && col < self.size as i16
    }

    /// Whether the square has been visited. The square must be in bounds.
    pub fn is_visited(&self, square: Square) -> bool
    {
        let index = self.index_into_list(square);
        let read = self.index_into_word(square);
        (self.visited[index] >> read) & 1 != 0
    }

    /// Marks the square visited.
    pub fn mark_visited(&mut self, square: Square)
    {
        let index = self.index_into_list(square);
        let write = 1u64 << self.index_into_word(square);

        if self.visited[index] & write == 0
        {
            self.count += 1;
        }
        self.visited[index] |= write;
    }

    /// Unmarks the square. Only the tour search backtracks; the game never unmarks.
    pub fn unmark_visited(&mut self, square: Square)
    {
        let index = self.index_into_list(square);
        let write = 1u64 << self.index_into_word(square);

        if self.visited[index] & write != 0
        {
            self.count -= 1;
        }
        self.visited[index] &= !write;
    }

    /// The side length of this board.
    pub fn size(&self) -> u8
    {
        self.size
    }

    /// The total number of squares on this board.
    pub fn squares(&self) -> u16
    {
        self.size as u16 * self.size as u16
    }

    /// The number of squares marked visited.
    pub fn visited_count(&self) -> u16
    {
        self.count
    }

    fn index_into_list(&self, square: Square) -> usize
    {
        self.offset(square) / 64
    }

    fn index_into_word(&self, square: Square) -> u64
    {
        (self.offset(square) % 64) as u64
    }

    fn offset(&self, square: Square) -> usize
    {
        square.row as usize * self.size as usize + square.col as usize
    }
}
