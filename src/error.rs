use std::io;

use crate::board::COLS;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("column {column} is out of range (0-{max})", max = COLS - 1)]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cannot place an empty entry")]
    EmptyEntry,

    #[error("no legal move left on the board")]
    NoLegalMove,

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("invalid player symbols: {0}")]
    InvalidSymbols(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;
