//! Console Connect Four: a 6x7 board, human and random computer players,
//! and the turn loop that alternates between them.

#[macro_use] extern crate enum_primitive;

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod player;
pub mod setup;

pub use crate::error::{Error, Result};
