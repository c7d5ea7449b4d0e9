use num_traits::FromPrimitive;
use tracing::info;

use crate::board::Entry;
use crate::config::{Config, Mode};
use crate::console::Terminal;
use crate::error::{Error, Result};
use crate::game::Game;
use crate::player::{HumanPlayer, Player, RandomPlayer};

const COMPUTER: &str = "Computer";

pub fn choose_mode(term: &mut dyn Terminal) -> Result<Mode> {
    term.say("Choose game mode:")?;
    term.say("1. Play against the computer")?;
    term.say("2. Play with two human players")?;
    loop {
        let line = term.prompt("Enter your choice (1 or 2): ")?.ok_or(Error::InputClosed)?;
        match line.trim().parse::<u32>().ok().and_then(Mode::from_u32) {
            Some(mode) => return Ok(mode),
            None => term.say("Invalid input. Please enter 1 or 2.")?,
        }
    }
}

// A preset name wins; otherwise ask, keeping `label` when the answer is blank.
fn player_name(term: &mut dyn Terminal, label: &str, preset: Option<&str>) -> Result<String> {
    if let Some(name) = preset {
        return Ok(name.to_string());
    }
    let line = term.prompt(&format!("{}, enter your name: ", label))?.ok_or(Error::InputClosed)?;
    let name = line.trim();
    Ok(if name.is_empty() { label.to_string() } else { name.to_string() })
}

pub fn players(config: &Config, term: &mut dyn Terminal) -> Result<[Box<dyn Player>; 2]> {
    let mode = match config.mode {
        Some(mode) => mode,
        None => choose_mode(term)?,
    };
    info!(?mode, "game mode selected");
    let players: [Box<dyn Player>; 2] = match mode {
        Mode::Computer => {
            let human = config.player1.clone().unwrap_or_else(|| "Player 1".to_string());
            let name = config.player2.clone().unwrap_or_else(|| COMPUTER.to_string());
            let computer = match config.seed {
                Some(seed) => RandomPlayer::seeded(name, Entry::Player2, seed),
                None => RandomPlayer::new(name, Entry::Player2),
            };
            [Box::new(HumanPlayer::new(human, Entry::Player1)), Box::new(computer)]
        },
        Mode::Humans => {
            let name1 = player_name(term, "Player 1", config.player1.as_deref())?;
            let name2 = player_name(term, "Player 2", config.player2.as_deref())?;
            [Box::new(HumanPlayer::new(name1, Entry::Player1)),
             Box::new(HumanPlayer::new(name2, Entry::Player2))]
        },
    };
    Ok(players)
}

/// Greets the players and builds a game from the configuration and their answers.
pub fn start(config: &Config, term: &mut dyn Terminal) -> Result<Game> {
    let symbols = config.symbols()?;
    term.say("Connect Four")?;
    term.say("")?;
    let players = players(config, term)?;
    Ok(Game::new(players, symbols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::console::{scripted, transcript};
    use crate::game::Outcome;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(["connect4"].iter().chain(args).copied()).unwrap()
    }

    #[test]
    fn setup_reprompts_for_mode() {
        let mut term = scripted("0\nthree\n2\n");
        assert_eq!(Mode::Humans, choose_mode(&mut term).unwrap());
        let out = transcript(&term);
        assert!(out.starts_with("Choose game mode:\n1. Play against the computer\n2. Play with two human players\n"));
        assert_eq!(3, out.matches("Enter your choice (1 or 2): ").count());
        assert_eq!(2, out.matches("Invalid input. Please enter 1 or 2.").count());
    }

    #[test]
    fn setup_two_humans_with_names() {
        let mut term = scripted("2\nAnn\n\n");
        let players = players(&config(&[]), &mut term).unwrap();
        assert_eq!("Ann", players[0].name());
        assert_eq!(Entry::Player1, players[0].entry());
        assert_eq!("Player 2", players[1].name());
        assert_eq!(Entry::Player2, players[1].entry());
        assert!(transcript(&term).ends_with("Player 1, enter your name: Player 2, enter your name: "));
    }

    #[test]
    fn setup_vs_computer() {
        let mut term = scripted("1\n");
        let players = players(&config(&[]), &mut term).unwrap();
        assert_eq!("Player 1", players[0].name());
        assert_eq!(COMPUTER, players[1].name());
        assert!(!transcript(&term).contains("enter your name"));
    }

    #[test]
    fn setup_uses_preset_mode_and_names() {
        let mut term = scripted("");
        let players = players(&config(&["--mode", "humans", "--player1", "Ann", "--player2", "Bob"]),
                              &mut term).unwrap();
        assert_eq!("Ann", players[0].name());
        assert_eq!("Bob", players[1].name());
        assert_eq!("", transcript(&term));
    }

    #[test]
    fn setup_input_closed() {
        let mut term = scripted("");
        assert!(matches!(players(&config(&[]), &mut term), Err(Error::InputClosed)));
    }

    #[test]
    fn setup_rejects_symbols_before_prompting() {
        let mut term = scripted("1\n");
        assert!(matches!(start(&config(&["--symbols", "XX"]), &mut term), Err(Error::InvalidSymbols(..))));
        assert_eq!("", transcript(&term));
    }

    #[test]
    fn setup_then_play_against_seeded_computer() {
        let mut input = String::from("1\n");
        for _ in 0..21 {
            input.push_str("0\n1\n2\n3\n4\n5\n6\n");
        }
        let mut term = scripted(&input);
        let mut game = start(&config(&["--seed", "11", "--player1", "Ann"]), &mut term).unwrap();
        let outcome = game.run(&mut term).unwrap();
        let out = transcript(&term);
        assert!(out.starts_with("Connect Four\n\nChoose game mode:\n"));
        assert!(out.contains("Computer chooses column "));
        match outcome {
            Outcome::Won { name, .. } => assert!(out.ends_with(&format!("{} wins!\n", name))),
            Outcome::Drawn => assert!(out.ends_with("It's a draw!\n")),
        }
    }
}
