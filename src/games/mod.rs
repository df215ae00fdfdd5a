pub mod popper;

use std::fmt;

use crate::input::Input;
use crate::surface::Surface;

/// The final state of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub round: u32,
    pub score: u64,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game over, man (round {}, score {})", self.round, self.score)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver(GameOver),
}

/// What the host loop drives once per frame.
pub trait Game {
    fn update(&mut self, input: &dyn Input) -> TickOutcome;
    /// Repaint the whole frame.
    fn draw(&mut self, surface: &mut Surface);
    fn reset(&mut self);
    fn get_score(&self) -> u64;
    fn get_round(&self) -> u32;
    fn is_game_over(&self) -> bool;
}
