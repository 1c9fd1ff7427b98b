use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Options
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Subcommand, Debug)]
pub enum Command
{
    /// search for a full knight's tour
    Tour(TourOptions),

    /// play a game of isolation knights
    Game(GameOptions),
}

#[derive(Clone, Args, Debug)]
pub struct TourOptions
{
    #[arg(short, long, default_value_t = 8)]
    /// side length of the board
    pub board_size: u8,

    #[arg(short, long, default_value = "0,0")]
    /// starting square as row,col
    pub start: Square,

    #[arg(short, long)]
    /// file to write the finished tour to, one row,col pair per line
    pub output: Option<PathBuf>,
}

impl TourOptions
{
    /// Ensures the options describe a searchable board. Fails before any search begins.
    pub fn validate(&self) -> Result<()>
    {
        check_board_size(self.board_size)?;
        check_on_board(self.board_size, self.start, "start")
    }
}

#[derive(Clone, Args, Debug)]
pub struct GameOptions
{
    #[arg(short, long, default_value_t = 8)]
    /// side length of the board
    pub board_size: u8,

    #[arg(long, default_value = "0,0")]
    /// starting square for knight one as row,col
    pub knight1: Square,

    #[arg(long, default_value = "7,7")]
    /// starting square for knight two as row,col
    pub knight2: Square,

    #[arg(short, long, default_value_t = false)]
    /// let the computer play knight two
    pub agent: bool,

    #[arg(short, long, default_value_t = 2)]
    /// agent lookahead depth in plies
    pub depth: u8,
}

impl GameOptions
{
    /// Ensures the options describe a playable match. Fails before the game begins.
    pub fn validate(&self) -> Result<()>
    {
        check_board_size(self.board_size)?;
        check_on_board(self.board_size, self.knight1, "knight1")?;
        check_on_board(self.board_size, self.knight2, "knight2")?;

        if self.knight1 == self.knight2
        {
            let msg = format!("Both knights cannot start on {}.", self.knight1);
            return Err(Error::new(Kind::InvalidOption, msg));
        }

        if !(1..=8).contains(&self.depth)
        {
            let msg = format!("Lookahead depth must be between 1 and 8, got {}.", self.depth);
            return Err(Error::new(Kind::InvalidOption, msg));
        }

        Ok(())
    }
}

/// Ensures the board is big enough for a knight to move freely and small enough to search.
fn check_board_size(size: u8) -> Result<()>
{
    if !(Board::MIN_SIZE..=Board::MAX_SIZE).contains(&size)
    {
        let msg = format!("Board size must be between {} and {}, got {}.", Board::MIN_SIZE, Board::MAX_SIZE, size);
        return Err(Error::new(Kind::InvalidOption, msg));
    }

    Ok(())
}

/// Ensures a named start square lies on the board.
fn check_on_board(size: u8, square: Square, name: &str) -> Result<()>
{
    if square.row >= size || square.col >= size
    {
        let msg = format!("The {} square {} is not on a {n}x{n} board.", name, square, n = size);
        return Err(Error::new(Kind::InvalidOption, msg));
    }

    Ok(())
}

/// Runs the tour subcommand.
pub fn tour(options: TourOptions) -> Result<()>
{
    options.validate()?;

    let n = options.board_size;
    log::info!("searching for a knight's tour on a {n}x{n} board from {}", options.start);

    let path = TourSearch::new(n).run(options.start)?;

    println!("{}", path.render(n));
    println!("{}", path);

    if let Some(output) = &options.output
    {
        path.write_to(output)?;
        log::info!("wrote tour to {}", output.display());
    }

    Ok(())
}

/// Runs the game subcommand.
pub fn game(options: GameOptions) -> Result<()>
{
    options.validate()?;

    let session = Session::new(options.board_size, options.knight1, options.knight2)?;

    let pickers: [Box<dyn MovePicker>; 2] = match options.agent
    {
        | true => [Box::new(Human), Box::new(Agent::new(options.depth))],
        | false => [Box::new(Human), Box::new(Human)],
    };

    let winner = Controller::new(session, pickers).run()?;
    println!("{} wins!", winner);

    Ok(())
}
