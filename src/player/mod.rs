mod human;
mod random;

use crate::board::{Board, Entry};
use crate::console::Terminal;
use crate::error::Result;

/// A source of moves for one side of the game.
pub trait Player {
    fn name(&self) -> &str;

    fn entry(&self) -> Entry;

    /// Picks a column that is on the board and not full.
    fn choose(&mut self, b: &Board, term: &mut dyn Terminal) -> Result<usize>;

    /// Chooses a column and drops this player's token into it.
    fn make_move(&mut self, b: &mut Board, term: &mut dyn Terminal) -> Result<usize> {
        let col = self.choose(b, term)?;
        b.place_token(col, self.entry())?;
        Ok(col)
    }
}

pub use self::human::HumanPlayer;
pub use self::random::RandomPlayer;
