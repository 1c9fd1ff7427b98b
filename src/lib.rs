pub mod board;
pub mod cli;
pub(crate) mod error;
pub(crate) mod game;
pub(crate) mod strategy;
pub(crate) mod tour;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        board::*,
        cli::{self, Command, GameOptions, Options, TourOptions},
        error::{Error, Kind, Result},
        game::*,
        strategy::{Agent, Isolation, MobilityEval},
        tour::*,
    };
}
