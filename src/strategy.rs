use minimax::{Evaluation, Evaluator, Game, Negamax, Strategy, Winner, BEST_EVAL, WORST_EVAL};

use crate::prelude::*;

#[derive(Clone, Copy, Debug)]
/// The isolation knights game, described to the minimax crate.
pub struct Isolation;

impl Game for Isolation
{
    type S = Session;
    type M = Square;

    fn generate_moves(state: &Self::S, moves: &mut Vec<Self::M>)
    {
        moves.extend(state.legal_moves());
    }

    fn get_winner(state: &Self::S) -> Option<Winner>
    {
        match state.state()
        {
            | GameState::AwaitingMove(_) => None,
            | GameState::GameOver(winner) => Some(match winner == state.to_move()
            {
                | true => Winner::PlayerToMove,
                | false => Winner::PlayerJustMoved,
            }),
        }
    }

    fn apply(state: &mut Self::S, m: Self::M) -> Option<Self::S>
    {
        let mut new_state = state.clone();
        new_state.play_unchecked(m);
        Some(new_state)
    }

    fn zobrist_hash(state: &Self::S) -> u64
    {
        use std::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    fn null_move(_state: &Self::S) -> Option<Self::M>
    {
        // There is no passing in isolation knights.
        None
    }

    fn notation(_state: &Self::S, m: Self::M) -> Option<String>
    {
        Some(m.to_string())
    }
}

/// Weight applied to each point of mobility difference.
const K_MOBILITY: i32 = 16;

#[derive(Clone, Copy, Debug, Default)]
/// Scores a position by mobility difference: the active knight's legal moves minus the
/// opponent's. Moves that crowd the opponent while keeping the knight's own options open
/// score best.
pub struct MobilityEval;

impl Evaluator for MobilityEval
{
    type G = Isolation;

    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation
    {
        let own = s.mobility(s.to_move()) as i32;
        let theirs = s.mobility(s.to_move().flip()) as i32;
        let score = K_MOBILITY * (own - theirs);

        // Heuristic scores stay strictly inside the terminal band.
        score.clamp(WORST_EVAL as i32 + 1, BEST_EVAL as i32 - 1) as Evaluation
    }
}

/// The machine opponent: a fixed-depth serial negamax over [MobilityEval].
///
/// Serial search keeps move selection deterministic. With the fixed generation order,
/// the first best-scoring candidate always wins ties.
pub struct Agent
{
    strategy: Negamax<MobilityEval>,
}

impl Agent
{
    /// Creates an agent that searches `depth` plies deep.
    pub fn new(depth: u8) -> Agent
    {
        Agent {
            strategy: Negamax::new(MobilityEval, depth),
        }
    }

    /// Chooses a move for the active knight, or reports the terminal state if it has none.
    pub fn choose(&mut self, session: &Session) -> Result<Square>
    {
        if session.legal_moves().is_empty()
        {
            return Err(Error::empty(Kind::NoLegalMove));
        }

        let Some(to) = self.strategy.choose_move(session)
        else
        {
            return Err(Error::empty(Kind::NoLegalMove));
        };

        Ok(to)
    }
}

impl MovePicker for Agent
{
    fn pick(&mut self, session: &Session) -> Result<Square>
    {
        let to = self.choose(session)?;
        log::debug!("agent picks {}", to);
        Ok(to)
    }

    fn recoverable(&self) -> bool
    {
        false
    }
}
