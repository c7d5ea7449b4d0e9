use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Entry, COLS};
use crate::console::Terminal;
use crate::error::{Error, Result};
use crate::player::Player;

/// The computer: plays a uniformly random column that still has room.
pub struct RandomPlayer<R = StdRng> {
    name: String,
    entry: Entry,
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new<S: Into<String>>(name: S, entry: Entry) -> Self {
        RandomPlayer::with_rng(name, entry, StdRng::from_entropy())
    }

    pub fn seeded<S: Into<String>>(name: S, entry: Entry, seed: u64) -> Self {
        RandomPlayer::with_rng(name, entry, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng<S: Into<String>>(name: S, entry: Entry, rng: R) -> Self {
        RandomPlayer { name: name.into(), entry, rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str { &self.name }

    fn entry(&self) -> Entry { self.entry }

    fn choose(&mut self, b: &Board, term: &mut dyn Terminal) -> Result<usize> {
        if b.open_columns().next().is_none() { return Err(Error::NoLegalMove); }
        let col = loop {
            let col = self.rng.gen_range(0..COLS);
            if !b.is_column_full(col) { break col; }
            debug!(col, "drew a full column");
        };
        term.say(&format!("{} chooses column {}", self.name, col))?;
        Ok(col)
    }
}
