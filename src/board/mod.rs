mod generate;
mod printers;
mod square;
mod state;

pub use square::{Square, OFFSETS};
pub use state::Board;
