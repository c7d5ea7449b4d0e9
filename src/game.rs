use tracing::{debug, info};

use crate::board::{Board, Symbols};
use crate::console::Terminal;
use crate::error::Result;
use crate::player::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won { seat: usize, name: String },
    Drawn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingMove,
    CheckWin,
    CheckDraw,
    PlayerSwitch,
    GameOver(Outcome),
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    symbols: Symbols,
    current: usize,
    state: State,
}

impl Game {
    pub fn new(players: [Box<dyn Player>; 2], symbols: Symbols) -> Game {
        Game { board: Board::new(), players, symbols, current: 0, state: State::AwaitingMove }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn state(&self) -> &State { &self.state }

    pub fn current(&self) -> &dyn Player { self.players[self.current].as_ref() }

    fn display(&self, term: &mut dyn Terminal) -> Result<()> {
        term.say("Connect Four")?;
        term.say("")?;
        term.say(&self.board.pretty(&self.symbols))?;
        term.say("")
    }

    /// Performs a single transition of the turn loop and returns the new state.
    pub fn step(&mut self, term: &mut dyn Terminal) -> Result<&State> {
        let next = match self.state {
            State::AwaitingMove => {
                let player = &mut self.players[self.current];
                let col = player.make_move(&mut self.board, term)?;
                debug!(seat = self.current, col, fill = self.board.column_fill(col), "move made");
                self.display(term)?;
                State::CheckWin
            },
            State::CheckWin => {
                let player = &self.players[self.current];
                if self.board.check_win(player.entry()) {
                    State::GameOver(Outcome::Won { seat: self.current, name: player.name().to_string() })
                } else {
                    State::CheckDraw
                }
            },
            State::CheckDraw => {
                if self.board.is_full() { State::GameOver(Outcome::Drawn) } else { State::PlayerSwitch }
            },
            State::PlayerSwitch => {
                self.current = 1 - self.current;
                State::AwaitingMove
            },
            State::GameOver(..) => return Ok(&self.state),
        };
        self.state = next;
        Ok(&self.state)
    }

    /// Plays until someone wins or the board fills up, then announces the result.
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<Outcome> {
        loop {
            if let State::GameOver(outcome) = self.step(term)? {
                let outcome = outcome.clone();
                match outcome {
                    Outcome::Won { ref name, seat } => {
                        info!(seat, %name, "game won");
                        term.say(&format!("{} wins!", name))?;
                    },
                    Outcome::Drawn => {
                        info!("game drawn");
                        term.say("It's a draw!")?;
                    },
                }
                return Ok(outcome);
            }
        }
    }
}
