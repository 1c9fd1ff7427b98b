use knightmind::prelude::*;

/// Checks that a path is a complete, legal knight's tour of the given board.
pub fn verify_tour(path: &TourPath, size: u8)
{
    assert_eq!(path.len(), size as usize * size as usize);

    let replayed = path.replay(size);
    assert!(replayed.is_ok(), "\tdue to {}", replayed.unwrap_err());
}

/// Builds a board with every square marked visited except the given ones.
pub fn drained_board(size: u8, except: &[Square]) -> Board
{
    let mut board = Board::new(size);

    for row in 0..size
    {
        for col in 0..size
        {
            let square = Square::new(row, col);
            if !except.contains(&square)
            {
                board.mark_visited(square);
            }
        }
    }

    board
}
