use crate::prelude::*;

/// Supplies moves for one of the knights: the seam between the turn loop and whoever is
/// choosing moves, human or machine.
pub trait MovePicker
{
    /// Picks a destination square for the active knight.
    fn pick(&mut self, session: &Session) -> Result<Square>;

    /// Whether an invalid pick can be recovered by asking again. A human mistyping is
    /// re-prompted; a search engine producing an illegal move is a programming error.
    fn recoverable(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
/// Reads moves from stdin as `row,col` lines.
pub struct Human;

impl MovePicker for Human
{
    fn pick(&mut self, session: &Session) -> Result<Square>
    {
        println!("{}, enter a move as row,col:", session.to_move());

        let mut line = String::new();
        let read = std::io::stdin().read_line(&mut line)?;
        if read == 0
        {
            return Err(Error::new(Kind::IoError, "Input closed before the game ended.".into()));
        }

        let square = line.trim().parse::<Square>()?;
        Ok(square)
    }

    fn recoverable(&self) -> bool
    {
        true
    }
}

/// Orchestrates a match: alternates turns, detects the end of the game, and delegates
/// move choice to each player's picker.
pub struct Controller
{
    session: Session,
    pickers: [Box<dyn MovePicker>; 2],
}

impl Controller
{
    /// Creates a controller over a fresh session.
    pub fn new(session: Session, pickers: [Box<dyn MovePicker>; 2]) -> Controller
    {
        Controller { session, pickers }
    }

    /// A read-only view of the session.
    pub fn session(&self) -> &Session
    {
        &self.session
    }

    /// Runs the match to completion and returns the winner.
    ///
    /// Every committed move shrinks the board by one square, so the loop ends within N²
    /// turns.
    pub fn run(&mut self) -> Result<Player>
    {
        println!("{}", self.session);

        loop
        {
            match self.session.state()
            {
                | GameState::GameOver(winner) =>
                {
                    log::info!("{} has no moves left; {} wins", winner.flip(), winner);
                    return Ok(winner);
                }
                | GameState::AwaitingMove(player) =>
                {
                    let picked = self.pickers[player.index()].pick(&self.session);
                    let committed = picked.and_then(|to| self.session.play(to).map(|_| to));

                    match committed
                    {
                        | Ok(to) =>
                        {
                            log::info!("{} moves to {}", player, to);
                            println!("{}", self.session);
                        }
                        | Err(err) if !err.fatal() && self.pickers[player.index()].recoverable() =>
                        {
                            log::warn!("encountered recoverable error:\n{err}");
                        }
                        | Err(err) if !err.fatal() =>
                        {
                            // A machine player proposed an illegal move. That is a bug, not bad input.
                            let base = Error::new(Kind::InternalError, format!("{} is machine-controlled and misplayed.", player));
                            return Err(err.chain(base));
                        }
                        | Err(err) => return Err(err),
                    }
                }
            }
        }
    }
}
