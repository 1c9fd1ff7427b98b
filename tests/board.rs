mod common;
use common::*;

#[cfg(test)]
mod board
{
    use knightmind::prelude::*;

    use super::*;

    #[test]
    fn moves_from_centre()
    {
        let _setup = setup::setup();
        let board = Board::new(8);
        let from = Square::new(4, 4);
        let moves = board.legal_moves(from);

        assert_eq!(moves.len(), 8);
        for to in &moves
        {
            assert!(from.is_knight_move(to));
            assert!(board.in_bounds(to.row as i16, to.col as i16));
        }
    }

    #[test]
    fn moves_from_corner_keep_offset_order()
    {
        let _setup = setup::setup();
        let board = Board::new(8);
        let moves = board.legal_moves(Square::new(0, 0));

        assert_eq!(moves.as_slice(), &[Square::new(2, 1), Square::new(1, 2)]);
    }

    #[test]
    fn visited_squares_are_filtered()
    {
        let _setup = setup::setup();
        let mut board = Board::new(8);
        board.mark_visited(Square::new(2, 1));

        let moves = board.legal_moves(Square::new(0, 0));
        assert_eq!(moves.as_slice(), &[Square::new(1, 2)]);
    }

    #[test]
    fn mark_and_unmark_round_trip()
    {
        let _setup = setup::setup();
        let mut board = Board::new(5);
        let square = Square::new(3, 4);

        assert!(!board.is_visited(square));

        board.mark_visited(square);
        assert!(board.is_visited(square));
        assert_eq!(board.visited_count(), 1);

        board.unmark_visited(square);
        assert!(!board.is_visited(square));
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn bounds()
    {
        let _setup = setup::setup();
        let board = Board::new(5);

        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(4, 4));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 5));
    }

    #[test]
    fn mobility_matches_move_count()
    {
        let _setup = setup::setup();
        let board = Board::new(8);

        assert_eq!(board.mobility(Square::new(0, 0)), 2);
        assert_eq!(board.mobility(Square::new(4, 4)), 8);
        assert!(board.has_moves(Square::new(0, 0)));
    }

    #[test]
    fn no_moves_on_a_drained_board()
    {
        let _setup = setup::setup();
        let board = templates::drained_board(8, &[]);

        assert!(!board.has_moves(Square::new(4, 4)));
        assert_eq!(board.mobility(Square::new(0, 0)), 0);
    }

    #[test]
    fn square_parsing_round_trip()
    {
        let _setup = setup::setup();

        assert_eq!("3,7".parse::<Square>(), Ok(Square::new(3, 7)));
        assert_eq!(Square::new(3, 7).to_string(), "3,7");
        assert!("x,y".parse::<Square>().is_err());
        assert!("3".parse::<Square>().is_err());
    }

    #[test]
    fn knight_move_relation()
    {
        let _setup = setup::setup();
        let from = Square::new(4, 4);

        assert!(from.is_knight_move(&Square::new(6, 5)));
        assert!(from.is_knight_move(&Square::new(3, 2)));
        assert!(!from.is_knight_move(&Square::new(4, 4)));
        assert!(!from.is_knight_move(&Square::new(5, 5)));
        assert!(!from.is_knight_move(&Square::new(6, 6)));
    }
}
