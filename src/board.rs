use std::fmt;
use std::ops::Range;

use itertools::{iproduct, Itertools};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

const RUN: usize = 4;
const EMPTY_SYMBOL: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Empty,
    Player1,
    Player2,
}

impl Entry {
    pub fn is_empty(self) -> bool { self == Entry::Empty }
}

/// Characters the two player entries render as. Empty cells are always `-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    player1: char,
    player2: char,
}

impl Symbols {
    pub fn new(player1: char, player2: char) -> Result<Symbols> {
        for &c in &[player1, player2] {
            if c == EMPTY_SYMBOL || c.is_whitespace() {
                return Err(Error::InvalidSymbols(format!("{:?} is reserved", c)));
            }
        }
        if player1 == player2 {
            return Err(Error::InvalidSymbols(format!("both players use {:?}", player1)));
        }
        Ok(Symbols { player1, player2 })
    }

    pub fn symbol(&self, entry: Entry) -> char {
        match entry {
            Entry::Empty => EMPTY_SYMBOL,
            Entry::Player1 => self.player1,
            Entry::Player2 => self.player2,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols { player1: 'X', player2: 'O' }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
}

static DIRECTIONS: [Direction; 4] =
    [Direction::Right, Direction::Down, Direction::DownRight, Direction::UpRight];

impl Direction {
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }

    // Starting indices along one axis from which a full run stays on the grid.
    fn starts(delta: isize, len: usize) -> Range<usize> {
        match delta {
            1 => 0..(len - RUN + 1),
            -1 => (RUN - 1)..len,
            _ => 0..len,
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the top row; tokens fall towards row 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    data: [Entry; ROWS * COLS],
}

impl Board {
    pub fn new() -> Board {
        Board { data: [Entry::Empty; ROWS * COLS] }
    }

    fn index_for(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Entry> {
        if row >= ROWS || col >= COLS { return None; }
        Some(self.data[Board::index_for(row, col)])
    }

    /// Whether `col` has no room left. Columns outside the grid never have room.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col).map_or(true, |e| !e.is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells in `col`, counted from the bottom.
    pub fn column_fill(&self, col: usize) -> usize {
        (0..ROWS).rev().take_while(|&row| self.get(row, col).map_or(false, |e| !e.is_empty()))
            .count()
    }

    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Drops `entry` into `col`, returning the row it lands in.
    ///
    /// Callers are expected to check `is_column_full` first; placing into a
    /// full or nonexistent column is an error rather than a no-op.
    pub fn place_token(&mut self, col: usize, entry: Entry) -> Result<usize> {
        if entry.is_empty() {
            warn!(col, "attempted to place an empty entry");
            return Err(Error::EmptyEntry);
        }
        if col >= COLS {
            warn!(col, "attempted to place outside the board");
            return Err(Error::ColumnOutOfRange { column: col });
        }
        let row = match (0..ROWS).rev().find(|&row| self.data[Board::index_for(row, col)].is_empty()) {
            Some(row) => row,
            None => {
                warn!(col, "attempted to place into a full column");
                return Err(Error::ColumnFull { column: col });
            }
        };
        self.data[Board::index_for(row, col)] = entry;
        debug!(col, row, ?entry, "placed token");
        Ok(row)
    }

    fn is_run(&self, entry: Entry, row: usize, col: usize, dir: Direction) -> bool {
        let (drow, dcol) = dir.step();
        (0..RUN as isize).all(|i| {
            let row1 = (row as isize + drow * i) as usize;
            let col1 = (col as isize + dcol * i) as usize;
            self.data[Board::index_for(row1, col1)] == entry
        })
    }

    /// Whether four `entry` cells line up horizontally, vertically or diagonally.
    pub fn check_win(&self, entry: Entry) -> bool {
        if entry.is_empty() { return false; }
        DIRECTIONS.iter().any(|&dir| {
            let (drow, dcol) = dir.step();
            iproduct!(Direction::starts(drow, ROWS), Direction::starts(dcol, COLS))
                .any(|(row, col)| self.is_run(entry, row, col, dir))
        })
    }

    pub fn pretty(&self, symbols: &Symbols) -> String {
        self.data.iter().chunks(COLS).into_iter().map(|entries| {
            entries.map(|&e| symbols.symbol(e)).join(" ")
        }).join("\n")
    }

    #[cfg(test)]
    pub fn set(&mut self, row: usize, col: usize, entry: Entry) {
        self.data[Board::index_for(row, col)] = entry;
    }

    #[cfg(test)]
    pub fn from_rows(rows: &[&str; ROWS]) -> Board {
        let mut b = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let entry = match c {
                    'X' => Entry::Player1,
                    'O' => Entry::Player2,
                    _ => Entry::Empty,
                };
                b.set(row, col, entry);
            }
        }
        b
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty(&Symbols::default()))
    }
}
