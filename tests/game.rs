mod common;
use common::*;

#[cfg(test)]
mod game
{
    use knightmind::prelude::*;

    use super::*;

    #[test]
    fn session_marks_both_starts()
    {
        let _setup = setup::setup();
        let session = Session::new(8, Square::new(0, 0), Square::new(7, 7)).expect("a valid session");

        assert!(session.board().is_visited(Square::new(0, 0)));
        assert!(session.board().is_visited(Square::new(7, 7)));
        assert_eq!(session.to_move(), Player::One);
        assert_eq!(session.state(), GameState::AwaitingMove(Player::One));
    }

    #[test]
    fn coincident_knights_are_rejected()
    {
        let _setup = setup::setup();

        let err = Session::new(8, Square::new(0, 0), Square::new(0, 0)).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidOption);
    }

    #[test]
    fn play_validates_and_alternates()
    {
        let _setup = setup::setup();
        let mut session = Session::new(8, Square::new(0, 0), Square::new(7, 7)).expect("a valid session");

        let err = session.play(Square::new(3, 3)).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidMove);
        assert_eq!(session.to_move(), Player::One);

        session.play(Square::new(1, 2)).expect("a legal knight move");
        assert_eq!(session.knight(Player::One), Square::new(1, 2));
        assert!(session.board().is_visited(Square::new(1, 2)));
        assert_eq!(session.to_move(), Player::Two);
    }

    #[test]
    fn knights_cannot_land_on_each_other()
    {
        let _setup = setup::setup();
        let mut session = Session::new(8, Square::new(0, 0), Square::new(1, 2)).expect("a valid session");

        let err = session.play(Square::new(1, 2)).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidMove);
    }

    #[test]
    fn agent_reply_is_legal()
    {
        let _setup = setup::setup();
        let mut session = Session::new(8, Square::new(0, 0), Square::new(7, 7)).expect("a valid session");
        session.play(Square::new(1, 2)).expect("a legal knight move");

        let mut agent = Agent::new(2);
        let reply = agent.choose(&session).expect("knight two has moves");
        assert!(session.legal_moves().contains(&reply));
    }

    #[test]
    fn agent_is_deterministic()
    {
        let _setup = setup::setup();
        let mut session = Session::new(8, Square::new(0, 0), Square::new(7, 7)).expect("a valid session");
        session.play(Square::new(1, 2)).expect("a legal knight move");

        let first = Agent::new(3).choose(&session).expect("knight two has moves");
        let second = Agent::new(3).choose(&session).expect("knight two has moves");
        assert_eq!(first, second);
    }

    #[test]
    fn isolated_corner_ends_the_game()
    {
        let _setup = setup::setup();

        // Knight one sits in the corner with both of its exits already visited.
        let mut board = Board::new(8);
        board.mark_visited(Square::new(1, 2));
        board.mark_visited(Square::new(2, 1));

        let session = Session::from_parts(board, [Square::new(0, 0), Square::new(7, 7)], Player::One).expect("a valid session");
        assert_eq!(session.state(), GameState::GameOver(Player::Two));
    }

    #[test]
    fn agent_with_no_moves_reports_the_terminal()
    {
        let _setup = setup::setup();

        let board = templates::drained_board(8, &[]);
        let session = Session::from_parts(board, [Square::new(0, 0), Square::new(7, 7)], Player::Two).expect("a valid session");

        let mut agent = Agent::new(2);
        let err = agent.choose(&session).unwrap_err();
        assert_eq!(err.kind, Kind::NoLegalMove);
    }

    #[test]
    fn machine_match_terminates_with_a_winner()
    {
        let _setup = setup::setup();

        let session = Session::new(6, Square::new(0, 0), Square::new(5, 5)).expect("a valid session");
        let pickers: [Box<dyn MovePicker>; 2] = [Box::new(Agent::new(2)), Box::new(Agent::new(2))];

        let mut controller = Controller::new(session, pickers);
        let winner = controller.run().expect("the match ends");

        assert_eq!(controller.session().state(), GameState::GameOver(winner));
        assert!(controller.session().board().visited_count() <= controller.session().board().squares());
    }
}
