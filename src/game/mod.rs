mod controller;
mod session;

pub use controller::{Controller, Human, MovePicker};
pub use session::{GameState, Player, Session};
