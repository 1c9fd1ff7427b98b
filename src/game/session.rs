use arrayvec::ArrayVec;

use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of isolation knights.
pub enum Player
{
    One = 0,
    Two = 1,
}

impl Player
{
    /// Gets the other player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::One => Self::Two,
            | Self::Two => Self::One,
        }
    }

    /// The index of this player's knight.
    pub fn index(&self) -> usize
    {
        *self as usize
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::One => "Knight 1",
            | Self::Two => "Knight 2",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The current state of a match.
pub enum GameState
{
    /// The given player must move next.
    AwaitingMove(Player),

    /// The given player has won; their opponent had no legal move.
    GameOver(Player),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A two-knight isolation match: the shared visited board, both knight positions, and
/// the turn flag.
pub struct Session
{
    board:   Board,
    knights: [Square; 2],
    to_move: Player,
}

impl Session
{
    /// Creates a session with both starting squares marked visited and knight one to move.
    pub fn new(size: u8, knight1: Square, knight2: Square) -> Result<Session>
    {
        let board = Board::new(size);
        Session::from_parts(board, [knight1, knight2], Player::One)
    }

    /// Assembles a session from a prepared board. The knight squares are marked visited
    /// if they are not already.
    pub fn from_parts(mut board: Board, knights: [Square; 2], to_move: Player) -> Result<Session>
    {
        for knight in knights
        {
            if !board.in_bounds(knight.row as i16, knight.col as i16)
            {
                let msg = format!("Knight start {} is not on a {n}x{n} board.", knight, n = board.size());
                return Err(Error::new(Kind::InvalidOption, msg));
            }
        }

        if knights[0] == knights[1]
        {
            let msg = format!("Both knights cannot start on {}.", knights[0]);
            return Err(Error::new(Kind::InvalidOption, msg));
        }

        board.mark_visited(knights[0]);
        board.mark_visited(knights[1]);

        Ok(Session { board, knights, to_move })
    }

    /// The shared visited board.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// The given player's knight.
    pub fn knight(&self, player: Player) -> Square
    {
        self.knights[player.index()]
    }

    /// The player that must move next.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// The legal moves for the active knight, in offset order.
    pub fn legal_moves(&self) -> ArrayVec<Square, 8>
    {
        self.board.legal_moves(self.knight(self.to_move))
    }

    /// The given player's mobility: how many legal moves their knight has right now.
    pub fn mobility(&self, player: Player) -> usize
    {
        self.board.mobility(self.knight(player))
    }

    /// Plays a move for the active knight, if it is legal.
    pub fn play(&mut self, to: Square) -> Result<()>
    {
        if !self.legal_moves().contains(&to)
        {
            let msg = format!("{} cannot move from {} to {}.", self.to_move, self.knight(self.to_move), to);
            return Err(Error::new(Kind::InvalidMove, msg));
        }

        self.play_unchecked(to);
        Ok(())
    }

    /// Plays a move without validation. Assumes [Self::play]'s check; the search uses
    /// this to step simulated positions.
    pub fn play_unchecked(&mut self, to: Square)
    {
        self.board.mark_visited(to);
        self.knights[self.to_move.index()] = to;
        self.to_move = self.to_move.flip();
    }

    /// The state of the match. The active player loses the moment they have no legal move.
    pub fn state(&self) -> GameState
    {
        if self.legal_moves().is_empty()
        {
            GameState::GameOver(self.to_move.flip())
        }
        else
        {
            GameState::AwaitingMove(self.to_move)
        }
    }
}

impl std::fmt::Display for Session
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let grid = self.board.render(|square| {
            if square == self.knights[0]
            {
                '1'
            }
            else if square == self.knights[1]
            {
                '2'
            }
            else if self.board.is_visited(square)
            {
                '#'
            }
            else
            {
                '.'
            }
        });

        write!(f, "{}", grid)
    }
}
