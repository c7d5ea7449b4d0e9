use tracing::debug;

use crate::board::{Board, Entry, COLS};
use crate::console::Terminal;
use crate::error::{Error, Result};
use crate::player::Player;

pub struct HumanPlayer {
    name: String,
    entry: Entry,
}

impl HumanPlayer {
    pub fn new<S: Into<String>>(name: S, entry: Entry) -> Self {
        HumanPlayer { name: name.into(), entry }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str { &self.name }

    fn entry(&self) -> Entry { self.entry }

    fn choose(&mut self, b: &Board, term: &mut dyn Terminal) -> Result<usize> {
        let prompt = format!("{}, enter the column number to place your token (0-{}): ",
                             self.name, COLS - 1);
        loop {
            let line = term.prompt(&prompt)?.ok_or(Error::InputClosed)?;
            match line.trim().parse::<usize>() {
                Ok(col) if col >= COLS => {
                    debug!(col, "column out of range");
                    term.say(&format!("Invalid column! Enter a number from 0 to {}.", COLS - 1))?;
                },
                Ok(col) if b.is_column_full(col) => {
                    debug!(col, "column full");
                    term.say(&format!("Column {} is full!", col))?;
                },
                Ok(col) => return Ok(col),
                Err(..) => {
                    debug!(input = %line.trim(), "not a column number");
                    term.say(&format!("Invalid column! Enter a number from 0 to {}.", COLS - 1))?;
                },
            }
        }
    }
}
