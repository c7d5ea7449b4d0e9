use clap::{Parser, ValueEnum};

use crate::board::Symbols;
use crate::error::{Error, Result};

enum_from_primitive! {
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Computer = 1,
    Humans = 2
}
}

/// Play Connect Four on the console.
#[derive(Parser, Debug)]
#[command(name = "connect4", version)]
pub struct Config {
    /// Play against the computer or another human (asked interactively if omitted)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Name of the first player (asked interactively in two-player mode if omitted)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player or of the computer
    #[arg(long)]
    pub player2: Option<String>,

    /// Two characters used to draw the first and second player's tokens
    #[arg(long, default_value = "XO")]
    pub symbols: String,

    /// Seed for the computer's moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn symbols(&self) -> Result<Symbols> {
        let chars = self.symbols.chars().collect::<Vec<_>>();
        match chars[..] {
            [player1, player2] => Symbols::new(player1, player2),
            _ => Err(Error::InvalidSymbols(
                format!("expected two characters, got {:?}", self.symbols))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn mode_from_menu_number() {
        assert_eq!(Some(Mode::Computer), Mode::from_u32(1));
        assert_eq!(Some(Mode::Humans), Mode::from_u32(2));
        assert_eq!(None, Mode::from_u32(0));
        assert_eq!(None, Mode::from_u32(3));
    }

    #[test]
    fn config_defaults() {
        let config = Config::try_parse_from(["connect4"]).unwrap();
        assert_eq!(None, config.mode);
        assert_eq!(None, config.seed);
        assert_eq!(Symbols::default(), config.symbols().unwrap());
    }

    #[test]
    fn config_parses_flags() {
        let config = Config::try_parse_from([
            "connect4", "--mode", "humans", "--player1", "Ann", "--symbols", "@#", "--seed", "9",
        ]).unwrap();
        assert_eq!(Some(Mode::Humans), config.mode);
        assert_eq!(Some("Ann".to_string()), config.player1);
        assert_eq!(Some(9), config.seed);
        assert_eq!(Symbols::new('@', '#').unwrap(), config.symbols().unwrap());
        assert!(Config::try_parse_from(["connect4", "--mode", "solo"]).is_err());
    }

    #[test]
    fn config_rejects_bad_symbols() {
        for symbols in ["X", "XOX", "XX", "X-"] {
            let config = Config::try_parse_from(["connect4", "--symbols", symbols]).unwrap();
            assert!(matches!(config.symbols(), Err(Error::InvalidSymbols(..))));
        }
    }
}
